use sea_orm_migration::{prelude::*, schema::*};

use super::m20260801_000002_create_channel_table::Channel;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Message::Table)
                    .if_not_exists()
                    .col(string(Message::Id).primary_key())
                    .col(string(Message::ChannelName))
                    .col(string(Message::SenderId))
                    .col(string_null(Message::Body))
                    .col(json(Message::Files))
                    .col(
                        timestamp_with_time_zone(Message::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_message_channel_name")
                            .from(Message::Table, Message::ChannelName)
                            .to(Channel::Table, Channel::ChannelName)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create index for channel history lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_message_channel_name")
                    .table(Message::Table)
                    .col(Message::ChannelName)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_message_channel_name")
                    .table(Message::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Message::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Message {
    Table,
    Id,
    ChannelName,
    SenderId,
    Body,
    Files,
    CreatedAt,
}
