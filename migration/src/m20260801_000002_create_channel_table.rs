use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Channel::Table)
                    .if_not_exists()
                    .col(string(Channel::Id).primary_key())
                    .col(string(Channel::ChannelName))
                    .col(string(Channel::Person1Id))
                    .col(string(Channel::Person2Id))
                    .col(
                        timestamp_with_time_zone(Channel::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Channel::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Unique index on the derived channel key. Concurrent first-contact
        // sends both race through find-or-create; the loser's insert hits this
        // index instead of producing a duplicate row.
        manager
            .create_index(
                Index::create()
                    .name("idx_channel_name_unique")
                    .table(Channel::Table)
                    .col(Channel::ChannelName)
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
                    .name("idx_channel_name_unique")
                    .table(Channel::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Channel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Channel {
    Table,
    Id,
    ChannelName,
    Person1Id,
    Person2Id,
    CreatedAt,
    UpdatedAt,
}
