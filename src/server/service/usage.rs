//! Template usage tracking.
//!
//! The applier and the preview generator report events through `UsageTracker`.
//! Recording is fire-and-forget: implementations log their own failures and never
//! return them to the caller.

use sea_orm::{DatabaseConnection, DbErr};
use serenity::async_trait;

use crate::server::{
    data::{
        template_analytics::TemplateAnalyticsRepository,
        template_usage::TemplateUsageRepository, template_view::TemplateViewRepository,
    },
    model::usage::{ApplyEvent, TemplateStats, ViewEvent},
};

#[async_trait]
pub trait UsageTracker: Send + Sync {
    async fn record_apply(&self, event: ApplyEvent);

    async fn record_view(&self, event: ViewEvent);
}

/// Tracker persisting events to the analytics tables.
#[derive(Clone)]
pub struct DatabaseUsageTracker {
    db: DatabaseConnection,
}

impl DatabaseUsageTracker {
    /// Creates a new tracker.
    ///
    /// # Arguments
    /// - `db` - Database connection with the analytics tables migrated
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the most applied templates.
    ///
    /// # Arguments
    /// - `limit` - Maximum number of templates to return
    ///
    /// # Returns
    /// - `Ok(Vec<TemplateStats>)` - Templates ordered by total uses, highest first
    /// - `Err(DbErr)` - Database error during query
    pub async fn popular(&self, limit: u64) -> Result<Vec<TemplateStats>, DbErr> {
        TemplateAnalyticsRepository::new(&self.db)
            .get_popular(limit)
            .await
    }

    /// Gets usage counters for one template.
    ///
    /// # Returns
    /// - `Ok(Some(TemplateStats))` - Counters of the template
    /// - `Ok(None)` - The template was never applied
    /// - `Err(DbErr)` - Database error during query
    pub async fn stats(&self, template_name: &str) -> Result<Option<TemplateStats>, DbErr> {
        TemplateAnalyticsRepository::new(&self.db)
            .get_by_template_name(template_name)
            .await
    }

    async fn persist_apply(&self, event: &ApplyEvent) -> Result<(), DbErr> {
        TemplateUsageRepository::new(&self.db).create(event).await?;
        TemplateAnalyticsRepository::new(&self.db)
            .increment(event)
            .await
    }
}

#[async_trait]
impl UsageTracker for DatabaseUsageTracker {
    async fn record_apply(&self, event: ApplyEvent) {
        match self.persist_apply(&event).await {
            Ok(()) => tracing::debug!(
                "Tracked usage of template '{}' in guild {} (success: {})",
                event.template_name,
                event.guild_id,
                event.success
            ),
            Err(e) => tracing::error!(
                "Failed to track usage of template '{}': {:?}",
                event.template_name,
                e
            ),
        }
    }

    async fn record_view(&self, event: ViewEvent) {
        if let Err(e) = TemplateViewRepository::new(&self.db).create(&event).await {
            tracing::error!(
                "Failed to track view of template '{}': {:?}",
                event.template_name,
                e
            );
        }
    }
}
