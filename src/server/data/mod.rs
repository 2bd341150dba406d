//! Data access layer.
//!
//! Repository structs for the analytics tables and the template document store.
//! Repositories use SeaORM entity models internally and return domain models where the
//! service layer consumes them.

pub mod template_analytics;
pub mod template_store;
pub mod template_usage;
pub mod template_view;

#[cfg(test)]
mod test;
