//! Serializable types shared by the bot, the HTTP API and the template store.

pub mod api;
pub mod preview;
pub mod template;
