//! Blog data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};
use uuid::Uuid;

use crate::server::{
    model::blog::{CreateBlogDto, UpdateBlogDto},
    query::Pagination,
};

/// Repository providing database operations for blog posts.
pub struct BlogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BlogRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, dto: CreateBlogDto) -> Result<entity::blog::Model, DbErr> {
        let now = Utc::now();
        entity::blog::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            title: ActiveValue::Set(dto.title),
            content: ActiveValue::Set(dto.content),
            category: ActiveValue::Set(dto.category),
            image: ActiveValue::Set(dto.image),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<entity::blog::Model>, DbErr> {
        entity::prelude::Blog::find_by_id(id).one(self.db).await
    }

    /// Applies a partial update and returns the refreshed row, or `None`
    /// when the post does not exist.
    pub async fn update(
        &self,
        id: &str,
        dto: UpdateBlogDto,
    ) -> Result<Option<entity::blog::Model>, DbErr> {
        let Some(blog) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::blog::ActiveModel = blog.into();
        if let Some(title) = dto.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(content) = dto.content {
            active.content = ActiveValue::Set(content);
        }
        if let Some(category) = dto.category {
            active.category = ActiveValue::Set(category);
        }
        if let Some(image) = dto.image {
            active.image = ActiveValue::Set(Some(image));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Blog::delete_by_id(id).exec(self.db).await?;
        Ok(result.rows_affected > 0)
    }

    /// Gets blog posts matching a filter condition with pagination.
    pub async fn get_all_filtered(
        &self,
        condition: Condition,
        pagination: &Pagination,
    ) -> Result<(Vec<entity::blog::Model>, u64), DbErr> {
        let total = entity::prelude::Blog::find()
            .filter(condition.clone())
            .count(self.db)
            .await?;

        let blogs = pagination
            .apply(entity::prelude::Blog::find().filter(condition))
            .all(self.db)
            .await?;

        Ok((blogs, total))
    }
}
