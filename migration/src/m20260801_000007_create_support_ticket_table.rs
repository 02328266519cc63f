use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SupportTicket::Table)
                    .if_not_exists()
                    .col(string(SupportTicket::Id).primary_key())
                    .col(string(SupportTicket::FullName))
                    .col(string(SupportTicket::Email))
                    .col(string_null(SupportTicket::ContactNumber))
                    .col(string(SupportTicket::Subject))
                    .col(string(SupportTicket::Description))
                    .col(string(SupportTicket::Status))
                    .col(
                        timestamp_with_time_zone(SupportTicket::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(SupportTicket::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Create index for the pending-only admin listing
        manager
            .create_index(
                Index::create()
                    .name("idx_support_ticket_status")
                    .table(SupportTicket::Table)
                    .col(SupportTicket::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_support_ticket_status")
                    .table(SupportTicket::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SupportTicket::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SupportTicket {
    Table,
    Id,
    FullName,
    Email,
    ContactNumber,
    Subject,
    Description,
    Status,
    CreatedAt,
    UpdatedAt,
}
