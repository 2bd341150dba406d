//! Template usage factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating template usage rows.
///
/// # Example
///
/// ```rust,ignore
/// let usage = TemplateUsageFactory::new(&db, "Gaming")
///     .success(false)
///     .build()
///     .await?;
/// ```
pub struct TemplateUsageFactory<'a> {
    db: &'a DatabaseConnection,
    template_name: String,
    guild_id: String,
    user_id: String,
    is_ai_generated: bool,
    success: bool,
    created_at: DateTime<Utc>,
}

impl<'a> TemplateUsageFactory<'a> {
    /// Creates a new factory with default values.
    ///
    /// Defaults:
    /// - guild_id / user_id: auto-incremented ids
    /// - is_ai_generated: `false`
    /// - success: `true`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection, template_name: impl Into<String>) -> Self {
        Self {
            db,
            template_name: template_name.into(),
            guild_id: next_id().to_string(),
            user_id: next_id().to_string(),
            is_ai_generated: false,
            success: true,
            created_at: Utc::now(),
        }
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn is_ai_generated(mut self, is_ai_generated: bool) -> Self {
        self.is_ai_generated = is_ai_generated;
        self
    }

    pub fn success(mut self, success: bool) -> Self {
        self.success = success;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the usage row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::template_usage::Model)` - Created row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::template_usage::Model, DbErr> {
        entity::template_usage::ActiveModel {
            template_name: ActiveValue::Set(self.template_name),
            guild_id: ActiveValue::Set(self.guild_id),
            guild_name: ActiveValue::Set(None),
            user_id: ActiveValue::Set(self.user_id),
            is_ai_generated: ActiveValue::Set(self.is_ai_generated),
            customization_options: ActiveValue::Set(None),
            success: ActiveValue::Set(self.success),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a successful usage row for a template.
///
/// Shorthand for `TemplateUsageFactory::new(db, template_name).build().await`.
pub async fn create_template_usage(
    db: &DatabaseConnection,
    template_name: &str,
) -> Result<entity::template_usage::Model, DbErr> {
    TemplateUsageFactory::new(db, template_name).build().await
}
