//! FAQ data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::content::{CreateFaqDto, UpdateFaqDto};

/// Repository providing database operations for FAQ entries.
pub struct FaqRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FaqRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, dto: CreateFaqDto) -> Result<entity::faq::Model, DbErr> {
        let now = Utc::now();
        entity::faq::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            question: ActiveValue::Set(dto.question),
            answer: ActiveValue::Set(dto.answer),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<entity::faq::Model>, DbErr> {
        entity::prelude::Faq::find_by_id(id).one(self.db).await
    }

    /// Applies a partial update and returns the refreshed row, or `None`
    /// when the entry does not exist.
    pub async fn update(
        &self,
        id: &str,
        dto: UpdateFaqDto,
    ) -> Result<Option<entity::faq::Model>, DbErr> {
        let Some(faq) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::faq::ActiveModel = faq.into();
        if let Some(question) = dto.question {
            active.question = ActiveValue::Set(question);
        }
        if let Some(answer) = dto.answer {
            active.answer = ActiveValue::Set(answer);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Faq::delete_by_id(id).exec(self.db).await?;
        Ok(result.rows_affected > 0)
    }

    /// Gets every FAQ entry, oldest first. The list is small enough that it
    /// is served unpaginated.
    pub async fn get_all(&self) -> Result<Vec<entity::faq::Model>, DbErr> {
        entity::prelude::Faq::find()
            .order_by_asc(entity::faq::Column::CreatedAt)
            .all(self.db)
            .await
    }
}
