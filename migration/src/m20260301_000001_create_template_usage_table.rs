use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TemplateUsage::Table)
                    .if_not_exists()
                    .col(pk_auto(TemplateUsage::Id))
                    .col(string(TemplateUsage::TemplateName))
                    .col(string(TemplateUsage::GuildId))
                    .col(string_null(TemplateUsage::GuildName))
                    .col(string(TemplateUsage::UserId))
                    .col(boolean(TemplateUsage::IsAiGenerated).default(false))
                    .col(text_null(TemplateUsage::CustomizationOptions))
                    .col(boolean(TemplateUsage::Success).default(true))
                    .col(
                        timestamp(TemplateUsage::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_template_usage_template_name")
                    .table(TemplateUsage::Table)
                    .col(TemplateUsage::TemplateName)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TemplateUsage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TemplateUsage {
    Table,
    Id,
    TemplateName,
    GuildId,
    GuildName,
    UserId,
    IsAiGenerated,
    CustomizationOptions,
    Success,
    CreatedAt,
}
