//! Channel data repository for database operations.
//!
//! This module provides the `ChannelRepository` for managing 1:1 conversation
//! rows. The repository is generic over the connection type so its write path
//! can run inside the transaction opened by the message service.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::server::{model::channel::derive_channel_key, query::Pagination};

/// Repository providing database operations for conversation channels.
///
/// Generic over the connection so callers can pass either the shared pool or
/// an open transaction.
pub struct ChannelRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ChannelRepository<'a, C> {
    /// Creates a new ChannelRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or open transaction
    ///
    /// # Returns
    /// - `ChannelRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds the channel for a participant pair, creating it on first contact.
    ///
    /// The channel key is derived from the sorted participant ids, so both
    /// orderings resolve the same row. The insert uses ON CONFLICT DO NOTHING
    /// against the unique key index: when two first-contact sends race, the
    /// loser's insert is a no-op and the follow-up fetch returns the winner's
    /// row.
    ///
    /// # Arguments
    /// - `person1_id` - Initiating participant id
    /// - `person2_id` - Receiving participant id
    ///
    /// # Returns
    /// - `Ok(Model)` - The existing or newly created channel
    /// - `Err(DbErr)` - Database error during insert or fetch
    pub async fn find_or_create(
        &self,
        person1_id: &str,
        person2_id: &str,
    ) -> Result<entity::channel::Model, DbErr> {
        let channel_name = derive_channel_key(person1_id, person2_id);
        let now = Utc::now();

        entity::prelude::Channel::insert(entity::channel::ActiveModel {
            id: sea_orm::ActiveValue::Set(Uuid::new_v4().to_string()),
            channel_name: sea_orm::ActiveValue::Set(channel_name.clone()),
            person1_id: sea_orm::ActiveValue::Set(person1_id.to_string()),
            person2_id: sea_orm::ActiveValue::Set(person2_id.to_string()),
            created_at: sea_orm::ActiveValue::Set(now),
            updated_at: sea_orm::ActiveValue::Set(now),
        })
        .on_conflict(
            OnConflict::column(entity::channel::Column::ChannelName)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        self.find_by_name(&channel_name)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Channel {} after upsert", channel_name)))
    }

    /// Finds a channel by its row id.
    ///
    /// # Arguments
    /// - `id` - Id of the channel row
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Channel found
    /// - `Ok(None)` - No channel with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: &str) -> Result<Option<entity::channel::Model>, DbErr> {
        entity::prelude::Channel::find_by_id(id).one(self.db).await
    }

    /// Finds a channel by its derived key.
    ///
    /// # Arguments
    /// - `channel_name` - The derived channel key
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Channel found
    /// - `Ok(None)` - No channel with that key
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_name(
        &self,
        channel_name: &str,
    ) -> Result<Option<entity::channel::Model>, DbErr> {
        entity::prelude::Channel::find()
            .filter(entity::channel::Column::ChannelName.eq(channel_name))
            .one(self.db)
            .await
    }

    /// Bumps a channel's `updated_at` to now.
    ///
    /// Called on every send so the conversation list orders by recency.
    ///
    /// # Arguments
    /// - `channel_name` - The derived channel key
    ///
    /// # Returns
    /// - `Ok(())` - Timestamp updated
    /// - `Err(DbErr)` - Database error during update
    pub async fn touch(&self, channel_name: &str) -> Result<(), DbErr> {
        entity::prelude::Channel::update_many()
            .filter(entity::channel::Column::ChannelName.eq(channel_name))
            .col_expr(
                entity::channel::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Gets a user's conversations, most recently active first.
    ///
    /// When `counterpart_ids` is present the result is narrowed to channels
    /// whose other participant is in the set; the caller resolves that set
    /// from the search term before calling.
    ///
    /// # Arguments
    /// - `user_id` - Participant whose conversations are listed
    /// - `counterpart_ids` - Optional counterpart filter from a name/email search
    /// - `pagination` - Resolved page and limit parameters
    ///
    /// # Returns
    /// - `Ok((channels, total))` - Page of channels and the total match count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_for_user(
        &self,
        user_id: &str,
        counterpart_ids: Option<&[String]>,
        pagination: &Pagination,
    ) -> Result<(Vec<entity::channel::Model>, u64), DbErr> {
        let mut condition = Condition::all().add(
            Condition::any()
                .add(entity::channel::Column::Person1Id.eq(user_id))
                .add(entity::channel::Column::Person2Id.eq(user_id)),
        );

        if let Some(ids) = counterpart_ids {
            condition = condition.add(
                Condition::any()
                    .add(entity::channel::Column::Person1Id.is_in(ids.iter().cloned()))
                    .add(entity::channel::Column::Person2Id.is_in(ids.iter().cloned())),
            );
        }

        let total = entity::prelude::Channel::find()
            .filter(condition.clone())
            .count(self.db)
            .await?;

        let channels = entity::prelude::Channel::find()
            .filter(condition)
            .order_by_desc(entity::channel::Column::UpdatedAt)
            .offset(pagination.offset())
            .limit(pagination.limit)
            .all(self.db)
            .await?;

        Ok((channels, total))
    }
}
