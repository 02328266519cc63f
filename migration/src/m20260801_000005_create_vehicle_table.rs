use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicle::Table)
                    .if_not_exists()
                    .col(string(Vehicle::Id).primary_key())
                    .col(string(Vehicle::Name))
                    .col(string(Vehicle::PlateNumber))
                    .col(integer(Vehicle::SeatCount))
                    .col(double(Vehicle::BasePrice))
                    .col(string_null(Vehicle::Image))
                    .col(boolean(Vehicle::IsActive).default(true))
                    .col(
                        timestamp_with_time_zone(Vehicle::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Vehicle::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vehicle::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Vehicle {
    Table,
    Id,
    Name,
    PlateNumber,
    SeatCount,
    BasePrice,
    Image,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
