//! Gateway event handlers.
//!
//! `Handler` owns the shared services and delegates each event to the function of
//! the matching submodule.

use serenity::all::{Context, EventHandler, Interaction, Ready, ResumedEvent};
use serenity::async_trait;
use std::sync::Arc;

use crate::server::service::{
    catalog::TemplateCatalog, metrics::ServiceMetrics, usage::UsageTracker,
};

pub mod interaction;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub catalog: Arc<TemplateCatalog>,
    pub tracker: Arc<dyn UsageTracker>,
    pub metrics: Arc<ServiceMetrics>,
    /// User allowed to review template submissions.
    pub reviewer_id: Option<u64>,
}

impl Handler {
    pub fn new(
        catalog: Arc<TemplateCatalog>,
        tracker: Arc<dyn UsageTracker>,
        metrics: Arc<ServiceMetrics>,
        reviewer_id: Option<u64>,
    ) -> Self {
        Self {
            catalog,
            tracker,
            metrics,
            reviewer_id,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.metrics, ctx, ready).await;
    }

    /// Called when the gateway connection is resumed after a drop
    async fn resume(&self, _ctx: Context, _event: ResumedEvent) {
        ready::handle_resume(&self.metrics);
    }

    /// Called for slash command invocations and option autocompletion
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction(
            &self.catalog,
            self.tracker.as_ref(),
            self.reviewer_id,
            ctx,
            interaction,
        )
        .await;
    }
}
