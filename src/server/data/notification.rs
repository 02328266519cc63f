//! Notification data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::server::query::Pagination;

/// Parameters for recording an admin notification.
#[derive(Debug, Clone)]
pub struct CreateNotificationParam {
    pub title: String,
    pub body: String,
    pub message: Option<String>,
}

/// Repository providing database operations for admin notifications.
pub struct NotificationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a new unread notification.
    pub async fn create(
        &self,
        param: CreateNotificationParam,
    ) -> Result<entity::notification::Model, DbErr> {
        entity::notification::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            title: ActiveValue::Set(param.title),
            body: ActiveValue::Set(param.body),
            message: ActiveValue::Set(param.message),
            read: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    /// Gets notifications, newest first, with pagination.
    pub async fn get_all(
        &self,
        pagination: &Pagination,
    ) -> Result<(Vec<entity::notification::Model>, u64), DbErr> {
        let total = entity::prelude::Notification::find().count(self.db).await?;

        let notifications = entity::prelude::Notification::find()
            .order_by_desc(entity::notification::Column::CreatedAt)
            .offset(pagination.offset())
            .limit(pagination.limit)
            .all(self.db)
            .await?;

        Ok((notifications, total))
    }

    /// Marks a notification read and returns the refreshed row, or `None`
    /// when it does not exist.
    pub async fn mark_read(
        &self,
        id: &str,
    ) -> Result<Option<entity::notification::Model>, DbErr> {
        let Some(notification) =
            entity::prelude::Notification::find_by_id(id).one(self.db).await?
        else {
            return Ok(None);
        };

        let mut active: entity::notification::ActiveModel = notification.into();
        active.read = ActiveValue::Set(true);

        Ok(Some(active.update(self.db).await?))
    }
}
