use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TemplateAnalytics::Table)
                    .if_not_exists()
                    .col(pk_auto(TemplateAnalytics::Id))
                    .col(string_uniq(TemplateAnalytics::TemplateName))
                    .col(integer(TemplateAnalytics::TotalUses).default(0))
                    .col(integer(TemplateAnalytics::SuccessfulUses).default(0))
                    .col(integer(TemplateAnalytics::FailedUses).default(0))
                    .col(integer(TemplateAnalytics::AiGeneratedUses).default(0))
                    .col(
                        timestamp(TemplateAnalytics::LastUpdated)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TemplateAnalytics::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TemplateAnalytics {
    Table,
    Id,
    TemplateName,
    TotalUses,
    SuccessfulUses,
    FailedUses,
    AiGeneratedUses,
    LastUpdated,
}
