use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Blog::Table)
                    .if_not_exists()
                    .col(string(Blog::Id).primary_key())
                    .col(string(Blog::Title))
                    .col(string(Blog::Content))
                    .col(string(Blog::Category))
                    .col(string_null(Blog::Image))
                    .col(
                        timestamp_with_time_zone(Blog::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Blog::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Blog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Blog {
    Table,
    Id,
    Title,
    Content,
    Category,
    Image,
    CreatedAt,
    UpdatedAt,
}
