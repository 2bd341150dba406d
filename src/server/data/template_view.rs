//! Template preview views.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::server::model::usage::ViewEvent;

pub struct TemplateViewRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TemplateViewRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts one view row.
    ///
    /// # Returns
    /// - `Ok(Model)` - The inserted view row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, event: &ViewEvent) -> Result<entity::template_view::Model, DbErr> {
        entity::template_view::ActiveModel {
            template_name: ActiveValue::Set(event.template_name.clone()),
            user_id: ActiveValue::Set(event.user_id.to_string()),
            guild_id: ActiveValue::Set(event.guild_id.map(|id| id.to_string())),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

#[cfg(test)]
impl TemplateViewRepository<'_> {
    /// Counts views of a template.
    pub async fn count_by_template_name(&self, template_name: &str) -> Result<u64, DbErr> {
        use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

        entity::prelude::TemplateView::find()
            .filter(entity::template_view::Column::TemplateName.eq(template_name))
            .count(self.db)
            .await
    }
}
