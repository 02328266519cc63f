//! Blog factory for creating test blog entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test blog posts with customizable fields.
pub struct BlogFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    content: String,
    category: String,
}

impl<'a> BlogFactory<'a> {
    /// Creates a new BlogFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Blog {id}"` where id is auto-incremented
    /// - content: `"Test blog content"`
    /// - category: `"travel"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `BlogFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Blog {}", id),
            content: "Test blog content".to_string(),
            category: "travel".to_string(),
        }
    }

    /// Sets the blog title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the blog content.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets the blog category.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Builds and inserts the blog entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::blog::Model)` - Created blog entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::blog::Model, DbErr> {
        let now = Utc::now();
        entity::blog::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            title: ActiveValue::Set(self.title),
            content: ActiveValue::Set(self.content),
            category: ActiveValue::Set(self.category),
            image: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a blog post with default values.
///
/// Shorthand for `BlogFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::blog::Model)` - Created blog entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_blog(db: &DatabaseConnection) -> Result<entity::blog::Model, DbErr> {
    BlogFactory::new(db).build().await
}
