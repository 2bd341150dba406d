//! Discord bot integration.
//!
//! The bot exposes the template catalog through global slash commands: listing and
//! previewing templates, applying one to the invoking guild, backing a guild up and
//! submitting it as a community template. Guild mutations go through
//! `SerenityGuildApi`, the Serenity implementation of the `GuildApi` capability
//! surface used by the applier and the backup serializer.
//!
//! The bot runs in a separate tokio task so that it never blocks the HTTP server.
//!
//! # Gateway Intents
//!
//! Only `GUILDS` is requested. Interactions are delivered regardless of intents, and
//! roles and channels are read through the HTTP API, so no privileged intent is needed.

pub mod command;
pub mod guild_api;
pub mod handler;
pub mod start;
