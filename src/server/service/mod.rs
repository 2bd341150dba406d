//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! bot/controller layer and the data layer. Services are responsible for:
//!
//! - **Template Application**: Reconciling a template against a guild (`apply`)
//! - **Backup**: Serializing a guild into a template document (`backup`)
//! - **Catalog**: Built-in templates and community submissions (`catalog`)
//! - **Preview**: Read-only template summaries (`preview`)
//! - **Usage Tracking**: Apply and view analytics (`usage`)
//! - **Metrics**: Uptime and ping counters for the status endpoints (`metrics`)
//!
//! Services talk to guilds only through the `GuildApi` trait, so every operation can
//! be exercised against an in-memory guild in tests.

pub mod apply;
pub mod backup;
pub mod catalog;
pub mod guild_api;
pub mod metrics;
pub mod overwrite;
pub mod preview;
pub mod usage;

#[cfg(test)]
mod test;
