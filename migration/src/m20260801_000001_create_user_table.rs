use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(string(User::Id).primary_key())
                    .col(string(User::FullName))
                    .col(string_uniq(User::Email))
                    .col(string(User::Password))
                    .col(string(User::Role))
                    .col(string(User::Status))
                    .col(string_null(User::ProfileImage))
                    .col(string_null(User::ContactNumber))
                    .col(string_null(User::Address))
                    .col(string_null(User::Country))
                    .col(string_null(User::FcmToken))
                    .col(boolean(User::IsEmailVerified).default(false))
                    .col(string_null(User::Otp))
                    .col(timestamp_with_time_zone_null(User::OtpExpiry))
                    .col(string_null(User::StripeAccountId))
                    .col(boolean(User::IsStripeConnected).default(false))
                    .col(boolean(User::SupportNotification).default(true))
                    .col(boolean(User::PaymentNotification).default(true))
                    .col(boolean(User::EmailNotification).default(true))
                    .col(
                        timestamp_with_time_zone(User::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(User::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Create index for email lookups on login and registration
        manager
            .create_index(
                Index::create()
                    .name("idx_user_email")
                    .table(User::Table)
                    .col(User::Email)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_user_email").table(User::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    FullName,
    Email,
    Password,
    Role,
    Status,
    ProfileImage,
    ContactNumber,
    Address,
    Country,
    FcmToken,
    IsEmailVerified,
    Otp,
    OtpExpiry,
    StripeAccountId,
    IsStripeConnected,
    SupportNotification,
    PaymentNotification,
    EmailNotification,
    CreatedAt,
    UpdatedAt,
}
