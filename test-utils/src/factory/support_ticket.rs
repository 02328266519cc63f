//! Support ticket factory for creating test support entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::support_ticket::SupportStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test support tickets with customizable fields.
pub struct SupportTicketFactory<'a> {
    db: &'a DatabaseConnection,
    full_name: String,
    email: String,
    subject: String,
    description: String,
    status: SupportStatus,
}

impl<'a> SupportTicketFactory<'a> {
    /// Creates a new SupportTicketFactory with default values.
    ///
    /// Defaults:
    /// - full_name: `"Reporter {id}"` where id is auto-incremented
    /// - email: `"reporter{id}@example.com"`
    /// - subject: `"Support request {id}"`
    /// - status: `SupportStatus::Pending`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `SupportTicketFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            full_name: format!("Reporter {}", id),
            email: format!("reporter{}@example.com", id),
            subject: format!("Support request {}", id),
            description: "Test support request".to_string(),
            status: SupportStatus::Pending,
        }
    }

    /// Sets the reporter name.
    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }

    /// Sets the reporter email.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the ticket subject.
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    /// Sets the ticket status.
    pub fn status(mut self, status: SupportStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the support ticket entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::support_ticket::Model)` - Created support ticket entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::support_ticket::Model, DbErr> {
        let now = Utc::now();
        entity::support_ticket::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            full_name: ActiveValue::Set(self.full_name),
            email: ActiveValue::Set(self.email),
            contact_number: ActiveValue::Set(None),
            subject: ActiveValue::Set(self.subject),
            description: ActiveValue::Set(self.description),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a support ticket with default values.
///
/// Shorthand for `SupportTicketFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::support_ticket::Model)` - Created support ticket entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_support_ticket(
    db: &DatabaseConnection,
) -> Result<entity::support_ticket::Model, DbErr> {
    SupportTicketFactory::new(db).build().await
}
