//! Template usage repository.
//!
//! Stores one row per template application, successful or not, including the
//! customization options the user selected.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::server::model::usage::ApplyEvent;

pub struct TemplateUsageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TemplateUsageRepository<'a> {
    /// Creates a new repository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection for executing queries
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a usage row for an apply event.
    ///
    /// Options are stored as JSON text. A guild name that is empty is stored as `NULL`.
    ///
    /// # Arguments
    /// - `event` - The apply event to record
    ///
    /// # Returns
    /// - `Ok(Model)` - The inserted usage row
    /// - `Err(DbErr)` - Database error during insert, or options could not be serialized
    pub async fn create(
        &self,
        event: &ApplyEvent,
    ) -> Result<entity::template_usage::Model, DbErr> {
        let options = serde_json::to_string(&event.options)
            .map_err(|e| DbErr::Custom(format!("Failed to serialize apply options: {}", e)))?;

        entity::template_usage::ActiveModel {
            template_name: ActiveValue::Set(event.template_name.clone()),
            guild_id: ActiveValue::Set(event.guild_id.to_string()),
            guild_name: ActiveValue::Set(
                Some(event.guild_name.clone()).filter(|name| !name.is_empty()),
            ),
            user_id: ActiveValue::Set(event.user_id.to_string()),
            is_ai_generated: ActiveValue::Set(event.is_ai_generated),
            customization_options: ActiveValue::Set(Some(options)),
            success: ActiveValue::Set(event.success),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

#[cfg(test)]
impl TemplateUsageRepository<'_> {
    /// Gets all usage rows for a template, newest first.
    pub async fn get_by_template_name(
        &self,
        template_name: &str,
    ) -> Result<Vec<entity::template_usage::Model>, DbErr> {
        use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

        entity::prelude::TemplateUsage::find()
            .filter(entity::template_usage::Column::TemplateName.eq(template_name))
            .order_by_desc(entity::template_usage::Column::CreatedAt)
            .order_by_desc(entity::template_usage::Column::Id)
            .all(self.db)
            .await
    }
}
