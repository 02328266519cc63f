use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StaticPage::Table)
                    .if_not_exists()
                    .col(string(StaticPage::Id).primary_key())
                    .col(string(StaticPage::Kind))
                    .col(string(StaticPage::Content))
                    .col(
                        timestamp_with_time_zone(StaticPage::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(StaticPage::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // One row per page kind; writes upsert on this index
        manager
            .create_index(
                Index::create()
                    .name("idx_static_page_kind_unique")
                    .table(StaticPage::Table)
                    .col(StaticPage::Kind)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_static_page_kind_unique")
                    .table(StaticPage::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(StaticPage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StaticPage {
    Table,
    Id,
    Kind,
    Content,
    CreatedAt,
    UpdatedAt,
}
