//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles account creation, credential and OTP updates, profile changes, and the
//! filtered admin listing.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QuerySelect,
};
use uuid::Uuid;

use crate::server::{
    model::{otp::OtpChallenge, user::UpdateProfileParam},
    query::Pagination,
};

/// Parameters for inserting a new account row.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: entity::user::UserRole,
    pub contact_number: Option<String>,
    pub country: Option<String>,
    pub otp: OtpChallenge,
}

/// Repository providing database operations for user management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, and querying user records.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new account in INACTIVE status with a pending email OTP.
    ///
    /// The account stays unusable until the OTP is confirmed and the status
    /// flips to ACTIVE.
    ///
    /// # Arguments
    /// - `param` - Account fields and the issued verification challenge
    ///
    /// # Returns
    /// - `Ok(Model)` - The created user row
    /// - `Err(DbErr)` - Database error during insert, including unique email violations
    pub async fn create(&self, param: CreateUserParam) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();
        entity::user::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            full_name: ActiveValue::Set(param.full_name),
            email: ActiveValue::Set(param.email),
            password: ActiveValue::Set(param.password_hash),
            role: ActiveValue::Set(param.role),
            status: ActiveValue::Set(entity::user::UserStatus::Inactive),
            profile_image: ActiveValue::Set(None),
            contact_number: ActiveValue::Set(param.contact_number),
            address: ActiveValue::Set(None),
            country: ActiveValue::Set(param.country),
            fcm_token: ActiveValue::Set(None),
            is_email_verified: ActiveValue::Set(false),
            otp: ActiveValue::Set(Some(param.otp.code)),
            otp_expiry: ActiveValue::Set(Some(param.otp.expiry)),
            stripe_account_id: ActiveValue::Set(None),
            is_stripe_connected: ActiveValue::Set(false),
            support_notification: ActiveValue::Set(true),
            payment_notification: ActiveValue::Set(true),
            email_notification: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }

    /// Finds a user by id.
    ///
    /// # Arguments
    /// - `user_id` - Id of the user to look up
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    /// Finds a user by email address.
    ///
    /// # Arguments
    /// - `email` - Email address to look up
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - User found
    /// - `Ok(None)` - No user with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Applies a partial profile update and returns the refreshed row.
    ///
    /// Absent fields are left untouched. Returns `None` when the user does
    /// not exist.
    ///
    /// # Arguments
    /// - `param` - Profile fields to change
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Updated user row
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_profile(
        &self,
        param: UpdateProfileParam,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let Some(user) = self.find_by_id(&param.user_id).await? else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = user.into();
        if let Some(full_name) = param.full_name {
            active.full_name = ActiveValue::Set(full_name);
        }
        if let Some(contact_number) = param.contact_number {
            active.contact_number = ActiveValue::Set(Some(contact_number));
        }
        if let Some(address) = param.address {
            active.address = ActiveValue::Set(Some(address));
        }
        if let Some(country) = param.country {
            active.country = ActiveValue::Set(Some(country));
        }
        if let Some(profile_image) = param.profile_image {
            active.profile_image = ActiveValue::Set(Some(profile_image));
        }
        if let Some(fcm_token) = param.fcm_token {
            active.fcm_token = ActiveValue::Set(Some(fcm_token));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active.update(self.db).await?))
    }

    /// Replaces the stored password hash and clears any pending OTP.
    ///
    /// # Arguments
    /// - `user_id` - Id of the user to update
    /// - `password_hash` - New bcrypt hash to store
    ///
    /// # Returns
    /// - `Ok(())` - Password updated
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_password(&self, user_id: &str, password_hash: &str) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::Password,
                sea_orm::sea_query::Expr::value(password_hash),
            )
            .col_expr(
                entity::user::Column::Otp,
                sea_orm::sea_query::Expr::value(Option::<String>::None),
            )
            .col_expr(
                entity::user::Column::OtpExpiry,
                sea_orm::sea_query::Expr::value(Option::<chrono::DateTime<Utc>>::None),
            )
            .col_expr(
                entity::user::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Stores a fresh OTP challenge on the user row.
    ///
    /// Code and expiry are written together; a later verification clears
    /// them together.
    ///
    /// # Arguments
    /// - `user_id` - Id of the user to update
    /// - `otp` - Challenge to store
    ///
    /// # Returns
    /// - `Ok(())` - Challenge stored
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_otp(&self, user_id: &str, otp: &OtpChallenge) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::Otp,
                sea_orm::sea_query::Expr::value(Some(otp.code.clone())),
            )
            .col_expr(
                entity::user::Column::OtpExpiry,
                sea_orm::sea_query::Expr::value(Some(otp.expiry)),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Marks an account as verified and active, clearing the pending OTP.
    ///
    /// Called when the registration OTP is confirmed.
    ///
    /// # Arguments
    /// - `user_id` - Id of the user to activate
    ///
    /// # Returns
    /// - `Ok(())` - Account activated
    /// - `Err(DbErr)` - Database error during update
    pub async fn activate(&self, user_id: &str) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::Status,
                sea_orm::sea_query::Expr::value(entity::user::UserStatus::Active),
            )
            .col_expr(
                entity::user::Column::IsEmailVerified,
                sea_orm::sea_query::Expr::value(true),
            )
            .col_expr(
                entity::user::Column::Otp,
                sea_orm::sea_query::Expr::value(Option::<String>::None),
            )
            .col_expr(
                entity::user::Column::OtpExpiry,
                sea_orm::sea_query::Expr::value(Option::<chrono::DateTime<Utc>>::None),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Stores the device push token reported at login.
    ///
    /// # Arguments
    /// - `user_id` - Id of the user to update
    /// - `fcm_token` - Push token to store
    ///
    /// # Returns
    /// - `Ok(())` - Token stored
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_fcm_token(&self, user_id: &str, fcm_token: &str) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::FcmToken,
                sea_orm::sea_query::Expr::value(Some(fcm_token.to_string())),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Marks an account as inactive without removing the row.
    ///
    /// Inactive accounts fail the auth guard's status check, so this is
    /// how a user retires their own account.
    ///
    /// # Arguments
    /// - `user_id` - Id of the user to deactivate
    ///
    /// # Returns
    /// - `Ok(())` - Account deactivated
    /// - `Err(DbErr)` - Database error during update
    pub async fn deactivate(&self, user_id: &str) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::Status,
                sea_orm::sea_query::Expr::value(entity::user::UserStatus::Inactive),
            )
            .col_expr(
                entity::user::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Deletes a user row.
    ///
    /// Used both for admin account removal and for discarding unverified
    /// registrations whose OTP expired.
    ///
    /// # Arguments
    /// - `user_id` - Id of the user to delete
    ///
    /// # Returns
    /// - `Ok(true)` - A row was deleted
    /// - `Ok(false)` - No user with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, user_id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(user_id).exec(self.db).await?;
        Ok(result.rows_affected > 0)
    }

    /// Gets users matching a filter condition with pagination.
    ///
    /// # Arguments
    /// - `condition` - Composed filter condition
    /// - `pagination` - Resolved page, limit, and sort parameters
    ///
    /// # Returns
    /// - `Ok((users, total))` - Page of users and the total match count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all_filtered(
        &self,
        condition: Condition,
        pagination: &Pagination,
    ) -> Result<(Vec<entity::user::Model>, u64), DbErr> {
        let total = entity::prelude::User::find()
            .filter(condition.clone())
            .count(self.db)
            .await?;

        let users = pagination
            .apply(entity::prelude::User::find().filter(condition))
            .all(self.db)
            .await?;

        Ok((users, total))
    }

    /// Finds ids of users whose name or email contains the term.
    ///
    /// Used by the conversation list search to pre-resolve matching
    /// counterpart ids before filtering channels.
    ///
    /// # Arguments
    /// - `term` - Substring to match against name and email
    ///
    /// # Returns
    /// - `Ok(Vec<String>)` - Matching user ids (possibly empty)
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_ids_matching(&self, term: &str) -> Result<Vec<String>, DbErr> {
        let ids = entity::prelude::User::find()
            .select_only()
            .column(entity::user::Column::Id)
            .filter(
                Condition::any()
                    .add(entity::user::Column::FullName.contains(term))
                    .add(entity::user::Column::Email.contains(term)),
            )
            .into_tuple::<String>()
            .all(self.db)
            .await?;
        Ok(ids)
    }

    /// Stores the connected Stripe account id and its verification state.
    ///
    /// # Arguments
    /// - `user_id` - Id of the user to update
    /// - `account_id` - Stripe Connect account id
    /// - `connected` - Whether Stripe reports the account as payout-ready
    ///
    /// # Returns
    /// - `Ok(())` - Stripe state stored
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_stripe_account(
        &self,
        user_id: &str,
        account_id: &str,
        connected: bool,
    ) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::StripeAccountId,
                sea_orm::sea_query::Expr::value(Some(account_id.to_string())),
            )
            .col_expr(
                entity::user::Column::IsStripeConnected,
                sea_orm::sea_query::Expr::value(connected),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Replaces the user's notification preferences.
    ///
    /// # Arguments
    /// - `user_id` - Id of the user to update
    /// - `support` - Receive support notifications
    /// - `payment` - Receive payment notifications
    /// - `email` - Receive email notifications
    ///
    /// # Returns
    /// - `Ok(())` - Preferences stored
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_notification_settings(
        &self,
        user_id: &str,
        support: bool,
        payment: bool,
        email: bool,
    ) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::SupportNotification,
                sea_orm::sea_query::Expr::value(support),
            )
            .col_expr(
                entity::user::Column::PaymentNotification,
                sea_orm::sea_query::Expr::value(payment),
            )
            .col_expr(
                entity::user::Column::EmailNotification,
                sea_orm::sea_query::Expr::value(email),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }
}
