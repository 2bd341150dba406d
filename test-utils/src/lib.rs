//! ServerSetup Test Utils
//!
//! Provides shared testing utilities for the serversetup bot. This crate offers a builder
//! pattern for creating test contexts with in-memory SQLite databases, row factories for
//! the analytics tables and factories for Serenity models.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Analytics rows with sensible defaults
//! - **serenity**: Serenity `Role` and `GuildChannel` values deserialized from JSON
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_usage_tracking() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_usage_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
