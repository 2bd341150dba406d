//! Template analytics factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating template analytics counter rows.
///
/// `successful_uses` defaults to `total_uses` unless set explicitly.
pub struct TemplateAnalyticsFactory<'a> {
    db: &'a DatabaseConnection,
    template_name: String,
    total_uses: i32,
    successful_uses: Option<i32>,
    failed_uses: i32,
    ai_generated_uses: i32,
    last_updated: DateTime<Utc>,
}

impl<'a> TemplateAnalyticsFactory<'a> {
    /// Creates a new factory with default values.
    ///
    /// Defaults:
    /// - template_name: `"Template {id}"`
    /// - total_uses: `1`, all successful
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            template_name: format!("Template {}", next_id()),
            total_uses: 1,
            successful_uses: None,
            failed_uses: 0,
            ai_generated_uses: 0,
            last_updated: Utc::now(),
        }
    }

    pub fn template_name(mut self, template_name: impl Into<String>) -> Self {
        self.template_name = template_name.into();
        self
    }

    pub fn total_uses(mut self, total_uses: i32) -> Self {
        self.total_uses = total_uses;
        self
    }

    pub fn successful_uses(mut self, successful_uses: i32) -> Self {
        self.successful_uses = Some(successful_uses);
        self
    }

    pub fn failed_uses(mut self, failed_uses: i32) -> Self {
        self.failed_uses = failed_uses;
        self
    }

    pub fn ai_generated_uses(mut self, ai_generated_uses: i32) -> Self {
        self.ai_generated_uses = ai_generated_uses;
        self
    }

    /// Builds and inserts the counter row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::template_analytics::Model)` - Created row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::template_analytics::Model, DbErr> {
        entity::template_analytics::ActiveModel {
            template_name: ActiveValue::Set(self.template_name),
            total_uses: ActiveValue::Set(self.total_uses),
            successful_uses: ActiveValue::Set(self.successful_uses.unwrap_or(self.total_uses)),
            failed_uses: ActiveValue::Set(self.failed_uses),
            ai_generated_uses: ActiveValue::Set(self.ai_generated_uses),
            last_updated: ActiveValue::Set(self.last_updated),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a counter row for a template with the given total uses.
pub async fn create_template_analytics(
    db: &DatabaseConnection,
    template_name: &str,
    total_uses: i32,
) -> Result<entity::template_analytics::Model, DbErr> {
    TemplateAnalyticsFactory::new(db)
        .template_name(template_name)
        .total_uses(total_uses)
        .build()
        .await
}
