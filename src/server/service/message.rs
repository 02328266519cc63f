//! Direct messaging flows: sending, conversation lists, and history.

use std::collections::HashMap;

use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, TransactionError,
    TransactionTrait,
};

use crate::server::{
    data::{
        channel::ChannelRepository,
        message::{CreateMessageParam, MessageRepository},
        user::UserRepository,
    },
    error::AppError,
    model::{
        channel::{
            counterpart_id, derive_channel_key, derive_display_counterpart, ChannelDto,
            ChannelHistoryDto, ChannelListQuery, CounterpartDto,
        },
        message::{HistoryQuery, MessageDto, SendMessageDto, SendMessageParam},
    },
    query::{Paginated, Pagination},
};

pub struct MessageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sends a message, creating the conversation on first contact.
    ///
    /// Channel resolution, the message insert, and the recency bump run in
    /// one transaction so a failed send never leaves an empty conversation
    /// behind.
    ///
    /// # Arguments
    /// - `sender_id` - Id of the authenticated sender
    /// - `dto` - Recipient, body, and attachment URIs
    ///
    /// # Returns
    /// - `Ok(Vec<MessageDto>)` - The channel's full history, newest first
    /// - `Err(AppError)` - Empty message, self-send, unknown recipient, or database error
    pub async fn send(
        &self,
        sender_id: &str,
        dto: SendMessageDto,
    ) -> Result<Vec<MessageDto>, AppError> {
        let param = SendMessageParam::from_dto(sender_id.to_string(), dto);

        if !param.has_content() {
            return Err(AppError::BadRequest(
                "A message needs a body or at least one attachment".to_string(),
            ));
        }

        if param.receiver_id == param.sender_id {
            return Err(AppError::BadRequest(
                "You cannot message yourself".to_string(),
            ));
        }

        UserRepository::new(self.db)
            .find_by_id(&param.receiver_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Recipient not found".to_string()))?;

        let message = self
            .db
            .transaction::<_, entity::message::Model, DbErr>(|txn| {
                Box::pin(async move {
                    let channels = ChannelRepository::new(txn);
                    let channel = channels
                        .find_or_create(&param.sender_id, &param.receiver_id)
                        .await?;

                    let message = MessageRepository::new(txn)
                        .create(CreateMessageParam {
                            channel_name: channel.channel_name.clone(),
                            sender_id: param.sender_id,
                            body: param.body,
                            files: param.files,
                        })
                        .await?;

                    channels.touch(&channel.channel_name).await?;
                    Ok(message)
                })
            })
            .await
            .map_err(|err| match err {
                TransactionError::Connection(e) => AppError::DbErr(e),
                TransactionError::Transaction(e) => AppError::DbErr(e),
            })?;

        // Clients re-render the whole thread, so the response is the full
        // history rather than the new message alone.
        let history = MessageRepository::new(self.db)
            .get_full_history(&message.channel_name)
            .await?;

        Ok(history.into_iter().map(MessageDto::from_entity).collect())
    }

    /// Gets the caller's conversations, most recently active first.
    ///
    /// A search term narrows the list to conversations whose counterpart
    /// matches by name or email.
    ///
    /// # Arguments
    /// - `user_id` - Id of the authenticated user
    /// - `query` - Optional search term and pagination
    ///
    /// # Returns
    /// - `Ok(Paginated<ChannelDto>)` - Page of conversations with counterpart details
    /// - `Err(AppError)` - Database error
    pub async fn my_channels(
        &self,
        user_id: &str,
        query: ChannelListQuery,
    ) -> Result<Paginated<ChannelDto>, AppError> {
        let pagination =
            Pagination::from_query(query.page.as_deref(), query.limit.as_deref(), None, None);

        let counterpart_ids = match query.search_term.as_deref().filter(|t| !t.trim().is_empty()) {
            Some(term) => {
                let mut ids = UserRepository::new(self.db).find_ids_matching(term).await?;
                // The viewer matching their own search would select every
                // conversation, so they are excluded from the set.
                ids.retain(|id| id != user_id);
                Some(ids)
            }
            None => None,
        };

        let (channels, total) = ChannelRepository::new(self.db)
            .get_for_user(user_id, counterpart_ids.as_deref(), &pagination)
            .await?;

        // Resolve all counterparts in one query.
        let ids: Vec<String> = channels
            .iter()
            .map(|channel| counterpart_id(channel, user_id).to_string())
            .collect();

        let mut users: HashMap<String, entity::user::Model> = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|user| (user.id.clone(), user))
            .collect();

        let data = channels
            .into_iter()
            .map(|channel| {
                let counterpart = users.remove(counterpart_id(&channel, user_id));
                ChannelDto::from_entity(channel, counterpart)
            })
            .collect();

        Ok(Paginated::new(pagination.meta(total), data))
    }

    /// Gets one conversation with its full thread, oldest first.
    ///
    /// Only participants can read a channel; everyone else sees the same
    /// not-found response as for a channel that does not exist.
    ///
    /// # Arguments
    /// - `user_id` - Id of the authenticated user
    /// - `channel_id` - Id of the channel row
    ///
    /// # Returns
    /// - `Ok(ChannelHistoryDto)` - Channel, derived receiver, and thread
    /// - `Err(AppError)` - Unknown channel or the caller is not a participant
    pub async fn get_channel(
        &self,
        user_id: &str,
        channel_id: &str,
    ) -> Result<ChannelHistoryDto, AppError> {
        let channel = ChannelRepository::new(self.db)
            .find_by_id(channel_id)
            .await?
            .filter(|channel| channel.person1_id == user_id || channel.person2_id == user_id)
            .ok_or_else(|| AppError::NotFound("Conversation not found".to_string()))?;

        let messages = MessageRepository::new(self.db)
            .get_thread(&channel.channel_name)
            .await?;

        let receiver_id = derive_display_counterpart(
            &channel,
            messages.first().map(|message| message.sender_id.as_str()),
            user_id,
        )
        .to_string();

        let receiver = UserRepository::new(self.db)
            .find_by_id(&receiver_id)
            .await?
            .map(CounterpartDto::from_entity);

        Ok(ChannelHistoryDto {
            id: channel.id,
            channel_name: channel.channel_name,
            receiver,
            messages: messages.into_iter().map(MessageDto::from_entity).collect(),
            created_at: channel.created_at,
            updated_at: channel.updated_at,
        })
    }

    /// Gets the message history shared with one counterpart, newest first.
    ///
    /// The channel key is derived from the caller's own id, so a caller can
    /// only ever read conversations they participate in.
    ///
    /// # Arguments
    /// - `user_id` - Id of the authenticated user
    /// - `counterpart_id` - The other participant
    /// - `query` - Pagination
    ///
    /// # Returns
    /// - `Ok(Paginated<MessageDto>)` - Page of messages with the total count
    /// - `Err(AppError)` - No conversation with that user, or database error
    pub async fn get_history(
        &self,
        user_id: &str,
        counterpart_id: &str,
        query: HistoryQuery,
    ) -> Result<Paginated<MessageDto>, AppError> {
        let pagination =
            Pagination::from_query(query.page.as_deref(), query.limit.as_deref(), None, None);

        let channel_name = derive_channel_key(user_id, counterpart_id);

        let channels = ChannelRepository::new(self.db);
        channels
            .find_by_name(&channel_name)
            .await?
            .ok_or_else(|| AppError::NotFound("No conversation with that user".to_string()))?;

        let (messages, total) = MessageRepository::new(self.db)
            .get_history(&channel_name, &pagination)
            .await?;

        Ok(Paginated::new(
            pagination.meta(total),
            messages.into_iter().map(MessageDto::from_entity).collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::PaginatorTrait;
    use test_utils::{builder::TestBuilder, factory::create_user};

    fn dto(receiver_id: &str, body: Option<&str>, files: Vec<&str>) -> SendMessageDto {
        SendMessageDto {
            receiver_id: receiver_id.to_string(),
            body: body.map(String::from),
            files: files.into_iter().map(String::from).collect(),
        }
    }

    /// Tests that sending to an unknown recipient mutates nothing.
    ///
    /// Expected: NotFound, with no channel or message rows created
    #[tokio::test]
    async fn unknown_recipient_creates_nothing() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .with_table(entity::prelude::Channel)
            .with_table(entity::prelude::Message)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let sender = create_user(db).await.unwrap();

        let result = MessageService::new(db)
            .send(&sender.id, dto("missing", Some("hello"), vec![]))
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert_eq!(entity::prelude::Channel::find().count(db).await.unwrap(), 0);
        assert_eq!(entity::prelude::Message::find().count(db).await.unwrap(), 0);
    }

    /// Tests that an attachment carries a message without a body.
    ///
    /// Expected: send succeeds, history holds the attachment-only message
    #[tokio::test]
    async fn attachment_alone_is_enough() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .with_table(entity::prelude::Channel)
            .with_table(entity::prelude::Message)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let sender = create_user(db).await.unwrap();
        let receiver = create_user(db).await.unwrap();

        let history = MessageService::new(db)
            .send(&sender.id, dto(&receiver.id, None, vec!["uploads/a.png"]))
            .await
            .unwrap();

        assert_eq!(history.len(), 1);
        assert_eq!(history[0].body, None);
        assert_eq!(history[0].files, vec!["uploads/a.png".to_string()]);
    }

    /// Tests the channel-by-id read: thread order, receiver derivation, scope.
    ///
    /// Expected: messages oldest first, receiver is the first sender's
    /// counterpart, non-participants get NotFound
    #[tokio::test]
    async fn channel_by_id_returns_thread_and_receiver() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .with_table(entity::prelude::Channel)
            .with_table(entity::prelude::Message)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let sender = create_user(db).await.unwrap();
        let receiver = create_user(db).await.unwrap();
        let outsider = create_user(db).await.unwrap();

        let service = MessageService::new(db);
        service
            .send(&sender.id, dto(&receiver.id, Some("first"), vec![]))
            .await
            .unwrap();
        service
            .send(&receiver.id, dto(&sender.id, Some("second"), vec![]))
            .await
            .unwrap();

        let channel = entity::prelude::Channel::find().one(db).await.unwrap().unwrap();

        let view = service.get_channel(&sender.id, &channel.id).await.unwrap();
        assert_eq!(view.messages.len(), 2);
        assert_eq!(view.messages[0].body.as_deref(), Some("first"));
        assert_eq!(view.receiver.as_ref().map(|r| r.id.as_str()), Some(receiver.id.as_str()));

        let denied = service.get_channel(&outsider.id, &channel.id).await;
        assert!(matches!(denied, Err(AppError::NotFound(_))));
    }

    /// Tests that the send response is the whole thread, newest first.
    ///
    /// Expected: both messages returned, latest at the front
    #[tokio::test]
    async fn send_returns_full_history_newest_first() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .with_table(entity::prelude::Channel)
            .with_table(entity::prelude::Message)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let sender = create_user(db).await.unwrap();
        let receiver = create_user(db).await.unwrap();

        let service = MessageService::new(db);
        service
            .send(&sender.id, dto(&receiver.id, Some("first"), vec![]))
            .await
            .unwrap();
        let history = service
            .send(&receiver.id, dto(&sender.id, Some("second"), vec![]))
            .await
            .unwrap();

        assert_eq!(history.len(), 2);
        assert_eq!(history[0].body.as_deref(), Some("second"));
        assert_eq!(history[1].body.as_deref(), Some("first"));
    }
}
