//! Message data repository for database operations.
//!
//! Generic over the connection type so message creation can share the
//! transaction that resolves the channel.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::server::query::Pagination;

/// Parameters for appending a message to a channel.
#[derive(Debug, Clone)]
pub struct CreateMessageParam {
    pub channel_name: String,
    pub sender_id: String,
    pub body: Option<String>,
    pub files: Vec<String>,
}

/// Repository providing database operations for channel messages.
pub struct MessageRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MessageRepository<'a, C> {
    /// Creates a new MessageRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or open transaction
    ///
    /// # Returns
    /// - `MessageRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Appends a message to its channel.
    ///
    /// # Arguments
    /// - `param` - Channel key, sender, body, and attachment URIs
    ///
    /// # Returns
    /// - `Ok(Model)` - The created message row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateMessageParam) -> Result<entity::message::Model, DbErr> {
        entity::message::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            channel_name: ActiveValue::Set(param.channel_name),
            sender_id: ActiveValue::Set(param.sender_id),
            body: ActiveValue::Set(param.body),
            files: ActiveValue::Set(serde_json::json!(param.files)),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    /// Gets a channel's complete message history, newest first.
    ///
    /// Used by the send flow, whose response carries the whole thread so
    /// clients re-render it rather than splice in the new message.
    ///
    /// # Arguments
    /// - `channel_name` - The derived channel key
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Every message in the channel
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_full_history(
        &self,
        channel_name: &str,
    ) -> Result<Vec<entity::message::Model>, DbErr> {
        entity::prelude::Message::find()
            .filter(entity::message::Column::ChannelName.eq(channel_name))
            .order_by_desc(entity::message::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Gets a channel's complete message history in conversation order.
    ///
    /// Oldest first, the order a thread view renders top to bottom.
    ///
    /// # Arguments
    /// - `channel_name` - The derived channel key
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Every message in the channel, oldest first
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_thread(
        &self,
        channel_name: &str,
    ) -> Result<Vec<entity::message::Model>, DbErr> {
        entity::prelude::Message::find()
            .filter(entity::message::Column::ChannelName.eq(channel_name))
            .order_by_asc(entity::message::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Gets a channel's messages, newest first, with pagination.
    ///
    /// # Arguments
    /// - `channel_name` - The derived channel key
    /// - `pagination` - Resolved page and limit parameters
    ///
    /// # Returns
    /// - `Ok((messages, total))` - Page of messages and the total count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_history(
        &self,
        channel_name: &str,
        pagination: &Pagination,
    ) -> Result<(Vec<entity::message::Model>, u64), DbErr> {
        let total = entity::prelude::Message::find()
            .filter(entity::message::Column::ChannelName.eq(channel_name))
            .count(self.db)
            .await?;

        let messages = entity::prelude::Message::find()
            .filter(entity::message::Column::ChannelName.eq(channel_name))
            .order_by_desc(entity::message::Column::CreatedAt)
            .offset(pagination.offset())
            .limit(pagination.limit)
            .all(self.db)
            .await?;

        Ok((messages, total))
    }
}
