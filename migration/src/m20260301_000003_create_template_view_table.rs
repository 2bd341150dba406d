use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TemplateView::Table)
                    .if_not_exists()
                    .col(pk_auto(TemplateView::Id))
                    .col(string(TemplateView::TemplateName))
                    .col(string(TemplateView::UserId))
                    .col(string_null(TemplateView::GuildId))
                    .col(
                        timestamp(TemplateView::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_template_view_template_name")
                    .table(TemplateView::Table)
                    .col(TemplateView::TemplateName)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TemplateView::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TemplateView {
    Table,
    Id,
    TemplateName,
    UserId,
    GuildId,
    CreatedAt,
}
