//! SeaORM entity models for template analytics.

pub mod prelude;

pub mod template_analytics;
pub mod template_usage;
pub mod template_view;
