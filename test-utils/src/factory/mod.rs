//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating analytics rows with sensible
//! defaults, reducing boilerplate in tests.
//!
//! # Overview
//!
//! Each table has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let usage = factory::create_template_usage(&db, "Gaming").await?;
//!
//! // Using builder pattern for customization
//! let stats = factory::template_analytics::TemplateAnalyticsFactory::new(&db)
//!     .template_name("Gaming")
//!     .total_uses(10)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `template_usage` - Create template usage rows
//! - `template_analytics` - Create template analytics counter rows
//! - `template_view` - Create template view rows
//! - `helpers` - Shared id generation

pub mod helpers;
pub mod template_analytics;
pub mod template_usage;
pub mod template_view;

pub use template_analytics::create_template_analytics;
pub use template_usage::create_template_usage;
pub use template_view::create_template_view;
