//! User factory for creating test user entities.
//!
//! This module provides factory methods for creating user entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::user::{UserRole, UserStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test users with customizable fields.
///
/// Provides a builder pattern for creating user entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .email("agent@example.com")
///     .role(UserRole::Agent)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    full_name: String,
    email: String,
    password: String,
    role: UserRole,
    status: UserStatus,
    is_email_verified: bool,
    otp: Option<String>,
    otp_expiry: Option<chrono::DateTime<Utc>>,
    stripe_account_id: Option<String>,
    is_stripe_connected: bool,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - full_name: `"User {id}"` where id is auto-incremented
    /// - email: `"user{id}@example.com"`
    /// - password: a fixed placeholder hash
    /// - role: `UserRole::User`
    /// - status: `UserStatus::Active`
    /// - is_email_verified: `true`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `UserFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id: Uuid::new_v4().to_string(),
            full_name: format!("User {}", id),
            email: format!("user{}@example.com", id),
            password: "$2b$12$test.hash.placeholder".to_string(),
            role: UserRole::User,
            status: UserStatus::Active,
            is_email_verified: true,
            otp: None,
            otp_expiry: None,
            stripe_account_id: None,
            is_stripe_connected: false,
        }
    }

    /// Sets the full name for the user.
    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }

    /// Sets the email for the user.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the stored password hash for the user.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Sets the role for the user.
    pub fn role(mut self, role: UserRole) -> Self {
        self.role = role;
        self
    }

    /// Sets the account status for the user.
    pub fn status(mut self, status: UserStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets whether the user's email is verified.
    pub fn email_verified(mut self, verified: bool) -> Self {
        self.is_email_verified = verified;
        self
    }

    /// Sets a pending OTP and its expiry on the user.
    pub fn otp(mut self, code: impl Into<String>, expiry: chrono::DateTime<Utc>) -> Self {
        self.otp = Some(code.into());
        self.otp_expiry = Some(expiry);
        self
    }

    /// Sets the connected Stripe account id.
    pub fn stripe_account(mut self, account_id: impl Into<String>, connected: bool) -> Self {
        self.stripe_account_id = Some(account_id.into());
        self.is_stripe_connected = connected;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();
        entity::user::ActiveModel {
            id: ActiveValue::Set(self.id),
            full_name: ActiveValue::Set(self.full_name),
            email: ActiveValue::Set(self.email),
            password: ActiveValue::Set(self.password),
            role: ActiveValue::Set(self.role),
            status: ActiveValue::Set(self.status),
            profile_image: ActiveValue::Set(None),
            contact_number: ActiveValue::Set(None),
            address: ActiveValue::Set(None),
            country: ActiveValue::Set(None),
            fcm_token: ActiveValue::Set(None),
            is_email_verified: ActiveValue::Set(self.is_email_verified),
            otp: ActiveValue::Set(self.otp),
            otp_expiry: ActiveValue::Set(self.otp_expiry),
            stripe_account_id: ActiveValue::Set(self.stripe_account_id),
            is_stripe_connected: ActiveValue::Set(self.is_stripe_connected),
            support_notification: ActiveValue::Set(true),
            payment_notification: ActiveValue::Set(true),
            email_notification: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::user::Model)` - Created user entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let user = create_user(&db).await?;
/// ```
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user with a specific email address.
///
/// Shorthand for `UserFactory::new(db).email(email).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `email` - Email address for the user
///
/// # Returns
/// - `Ok(entity::user::Model)` - Created user entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_user_with_email(
    db: &DatabaseConnection,
    email: impl Into<String>,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).email(email).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_user_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(User).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = create_user(db).await?;

        assert!(!user.id.is_empty());
        assert!(!user.full_name.is_empty());
        assert_eq!(user.role, UserRole::User);
        assert_eq!(user.status, UserStatus::Active);
        assert!(user.is_email_verified);

        Ok(())
    }

    #[tokio::test]
    async fn creates_user_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(User).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = UserFactory::new(db)
            .full_name("Custom Agent")
            .email("agent@example.com")
            .role(UserRole::Agent)
            .status(UserStatus::Inactive)
            .build()
            .await?;

        assert_eq!(user.full_name, "Custom Agent");
        assert_eq!(user.email, "agent@example.com");
        assert_eq!(user.role, UserRole::Agent);
        assert_eq!(user.status, UserStatus::Inactive);

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_users() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(User).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user1 = create_user(db).await?;
        let user2 = create_user(db).await?;

        assert_ne!(user1.id, user2.id);
        assert_ne!(user1.email, user2.email);

        Ok(())
    }
}
