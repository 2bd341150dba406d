use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "template_usage")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub template_name: String,
    pub guild_id: String,
    pub guild_name: Option<String>,
    pub user_id: String,
    pub is_ai_generated: bool,
    #[sea_orm(column_type = "Text", nullable)]
    pub customization_options: Option<String>,
    pub success: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
