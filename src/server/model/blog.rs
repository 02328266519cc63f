//! Blog content models and parameters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request body for publishing a blog post.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogDto {
    pub title: String,
    pub content: String,
    pub category: String,
    pub image: Option<String>,
}

/// Request body for a partial blog post update.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBlogDto {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
}

/// A blog post as returned by the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogDto {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: String,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BlogDto {
    pub fn from_entity(entity: entity::blog::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            content: entity.content,
            category: entity.category,
            image: entity.image,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Query parameters for the blog listing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogListQuery {
    /// Matches against the title and content.
    pub search_term: Option<String>,
    pub category: Option<String>,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}
