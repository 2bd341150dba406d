//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating Serenity structs (Role,
//! GuildChannel) for testing purposes. These factories create valid Serenity objects by
//! deserializing JSON, simulating what Discord's API would return.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{channel::create_test_channel, role::create_test_role};
//!
//! let role = create_test_role(111111111, "Admin", 0xFF0000, 10);
//! let category = create_test_channel(222222222, 1, "General", ChannelType::Category);
//! ```
//!
//! # Available Factories
//!
//! - `role::create_test_role` - Create Serenity Role objects
//! - `channel::create_test_channel` - Create Serenity GuildChannel objects

pub mod channel;
pub mod role;

pub use channel::create_test_channel;
pub use role::create_test_role;
