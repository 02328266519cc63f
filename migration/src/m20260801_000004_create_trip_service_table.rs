use sea_orm_migration::{prelude::*, schema::*};

use super::m20260801_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TripService::Table)
                    .if_not_exists()
                    .col(string(TripService::Id).primary_key())
                    .col(string(TripService::UserId))
                    .col(string(TripService::FromLocation))
                    .col(string(TripService::ToLocation))
                    .col(string_null(TripService::Description))
                    .col(double(TripService::Price))
                    .col(string_null(TripService::RouteType))
                    .col(string(TripService::ServiceType))
                    .col(boolean(TripService::IsPopular).default(false))
                    .col(string(TripService::Status))
                    .col(
                        timestamp_with_time_zone(TripService::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(TripService::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trip_service_user_id")
                            .from(TripService::Table, TripService::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create index for owner lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_trip_service_user_id")
                    .table(TripService::Table)
                    .col(TripService::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_trip_service_user_id")
                    .table(TripService::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TripService::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TripService {
    Table,
    Id,
    UserId,
    FromLocation,
    ToLocation,
    Description,
    Price,
    RouteType,
    ServiceType,
    IsPopular,
    Status,
    CreatedAt,
    UpdatedAt,
}
