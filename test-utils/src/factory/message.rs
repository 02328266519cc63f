//! Message factory for creating test message entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test messages with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::message::MessageFactory;
///
/// let message = MessageFactory::new(&db, &channel.channel_name, &sender.id)
///     .body(Some("hello".to_string()))
///     .files(vec!["uploads/a.png".to_string()])
///     .build()
///     .await?;
/// ```
pub struct MessageFactory<'a> {
    db: &'a DatabaseConnection,
    channel_name: String,
    sender_id: String,
    body: Option<String>,
    files: Vec<String>,
    created_at: chrono::DateTime<Utc>,
}

impl<'a> MessageFactory<'a> {
    /// Creates a new MessageFactory with default values.
    ///
    /// Defaults:
    /// - body: `Some("Message {id}")` where id is auto-incremented
    /// - files: empty
    /// - created_at: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `channel_name` - Channel key the message belongs to
    /// - `sender_id` - Id of the sending user
    ///
    /// # Returns
    /// - `MessageFactory` - New factory instance with defaults
    pub fn new(
        db: &'a DatabaseConnection,
        channel_name: impl Into<String>,
        sender_id: impl Into<String>,
    ) -> Self {
        let id = next_id();
        Self {
            db,
            channel_name: channel_name.into(),
            sender_id: sender_id.into(),
            body: Some(format!("Message {}", id)),
            files: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Sets the message body.
    pub fn body(mut self, body: Option<String>) -> Self {
        self.body = body;
        self
    }

    /// Sets the attachment URIs.
    pub fn files(mut self, files: Vec<String>) -> Self {
        self.files = files;
        self
    }

    /// Sets the creation timestamp. Useful for asserting history ordering.
    pub fn created_at(mut self, created_at: chrono::DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the message entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::message::Model)` - Created message entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::message::Model, DbErr> {
        entity::message::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            channel_name: ActiveValue::Set(self.channel_name),
            sender_id: ActiveValue::Set(self.sender_id),
            body: ActiveValue::Set(self.body),
            files: ActiveValue::Set(serde_json::json!(self.files)),
            created_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a message with default values in the specified channel.
///
/// Shorthand for `MessageFactory::new(db, channel_name, sender_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `channel_name` - Channel key the message belongs to
/// - `sender_id` - Id of the sending user
///
/// # Returns
/// - `Ok(entity::message::Model)` - Created message entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_message(
    db: &DatabaseConnection,
    channel_name: impl Into<String>,
    sender_id: impl Into<String>,
) -> Result<entity::message::Model, DbErr> {
    MessageFactory::new(db, channel_name, sender_id)
        .build()
        .await
}
