//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the HTTP server. The state is initialized once during
//! startup and then cloned for each request handler through Axum's state extraction.
//! The catalog, tracker and metrics are the same instances the bot uses.

use std::sync::Arc;

use crate::server::service::{
    catalog::TemplateCatalog, metrics::ServiceMetrics, usage::DatabaseUsageTracker,
};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `Arc<TemplateCatalog>` and `Arc<ServiceMetrics>` are reference-counted pointers
/// - `DatabaseUsageTracker` wraps a connection pool (clones share the pool)
/// - `String` is cloned when needed
#[derive(Clone)]
pub struct AppState {
    /// Built-in templates and community submissions.
    pub catalog: Arc<TemplateCatalog>,

    /// Usage analytics backed by the database.
    ///
    /// Read by the popularity and stats endpoints.
    pub tracker: DatabaseUsageTracker,

    /// Uptime, ping counter and bot connection state.
    pub metrics: Arc<ServiceMetrics>,

    /// Discord application id used for the invite link; empty when unset.
    pub client_id: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `catalog` - Template catalog shared with the bot
    /// - `tracker` - Usage tracker shared with the bot
    /// - `metrics` - Service metrics shared with the bot
    /// - `client_id` - Discord application id
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        catalog: Arc<TemplateCatalog>,
        tracker: DatabaseUsageTracker,
        metrics: Arc<ServiceMetrics>,
        client_id: String,
    ) -> Self {
        Self {
            catalog,
            tracker,
            metrics,
            client_id,
        }
    }
}
