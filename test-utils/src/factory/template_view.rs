//! Template view factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a view row for a template by a fresh user without a guild.
///
/// # Returns
/// - `Ok(entity::template_view::Model)` - Created row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_template_view(
    db: &DatabaseConnection,
    template_name: &str,
) -> Result<entity::template_view::Model, DbErr> {
    entity::template_view::ActiveModel {
        template_name: ActiveValue::Set(template_name.to_string()),
        user_id: ActiveValue::Set(next_id().to_string()),
        guild_id: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
