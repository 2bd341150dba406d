//! Per-template aggregated usage counters.
//!
//! One row per template name. Counters are incremented atomically with an upsert so
//! concurrent applies of the same template never lose a count.

use chrono::Utc;
use migration::{Expr, ExprTrait, OnConflict};
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::server::model::usage::{ApplyEvent, TemplateStats};

/// Repository for template analytics counters.
pub struct TemplateAnalyticsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TemplateAnalyticsRepository<'a> {
    /// Creates a new repository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection for executing queries
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Increments the counters of the event's template.
    ///
    /// Creates the row on first use. `total_uses` always increases by one; exactly one
    /// of `successful_uses`/`failed_uses` increases depending on the event outcome, and
    /// `ai_generated_uses` increases for AI-generated templates.
    ///
    /// # Arguments
    /// - `event` - The apply event to count
    ///
    /// # Returns
    /// - `Ok(())` - Counters updated
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn increment(&self, event: &ApplyEvent) -> Result<(), DbErr> {
        use entity::template_analytics::Column;

        let success = i32::from(event.success);
        let failure = i32::from(!event.success);
        let ai_generated = i32::from(event.is_ai_generated);
        let now = Utc::now();

        entity::prelude::TemplateAnalytics::insert(entity::template_analytics::ActiveModel {
            template_name: ActiveValue::Set(event.template_name.clone()),
            total_uses: ActiveValue::Set(1),
            successful_uses: ActiveValue::Set(success),
            failed_uses: ActiveValue::Set(failure),
            ai_generated_uses: ActiveValue::Set(ai_generated),
            last_updated: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(Column::TemplateName)
                .value(Column::TotalUses, Expr::col(Column::TotalUses).add(1))
                .value(
                    Column::SuccessfulUses,
                    Expr::col(Column::SuccessfulUses).add(success),
                )
                .value(Column::FailedUses, Expr::col(Column::FailedUses).add(failure))
                .value(
                    Column::AiGeneratedUses,
                    Expr::col(Column::AiGeneratedUses).add(ai_generated),
                )
                .update_column(Column::LastUpdated)
                .to_owned(),
        )
        .exec(self.db)
        .await?;

        Ok(())
    }

    /// Gets the counters of one template.
    ///
    /// # Returns
    /// - `Ok(Some(TemplateStats))` - The template has been applied at least once
    /// - `Ok(None)` - No usage recorded for the template
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_template_name(
        &self,
        template_name: &str,
    ) -> Result<Option<TemplateStats>, DbErr> {
        let entity = entity::prelude::TemplateAnalytics::find()
            .filter(entity::template_analytics::Column::TemplateName.eq(template_name))
            .one(self.db)
            .await?;

        Ok(entity.map(TemplateStats::from_entity))
    }

    /// Gets the most applied templates.
    ///
    /// Ordered by `total_uses` descending, then by name for a stable order among ties.
    ///
    /// # Arguments
    /// - `limit` - Maximum number of templates to return
    pub async fn get_popular(&self, limit: u64) -> Result<Vec<TemplateStats>, DbErr> {
        let entities = entity::prelude::TemplateAnalytics::find()
            .order_by_desc(entity::template_analytics::Column::TotalUses)
            .order_by_asc(entity::template_analytics::Column::TemplateName)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(TemplateStats::from_entity).collect())
    }
}
