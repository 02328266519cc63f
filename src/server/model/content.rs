//! FAQ and static page models.

use chrono::{DateTime, Utc};
use entity::static_page::StaticPageKind;
use serde::{Deserialize, Serialize};

/// Request body for creating an FAQ entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFaqDto {
    pub question: String,
    pub answer: String,
}

/// Request body for a partial FAQ update.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFaqDto {
    pub question: Option<String>,
    pub answer: Option<String>,
}

/// An FAQ entry as returned by the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqDto {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FaqDto {
    pub fn from_entity(entity: entity::faq::Model) -> Self {
        Self {
            id: entity.id,
            question: entity.question,
            answer: entity.answer,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Resolves a URL path segment to a static page kind.
///
/// # Arguments
/// - `raw` - The path segment, matched case-insensitively
///
/// # Returns
/// - `Some(StaticPageKind)` - Recognized page name
/// - `None` - Unknown page name
pub fn parse_page_kind(raw: &str) -> Option<StaticPageKind> {
    match raw.to_lowercase().as_str() {
        "terms" => Some(StaticPageKind::Terms),
        "privacy" => Some(StaticPageKind::Privacy),
        "refund" => Some(StaticPageKind::Refund),
        "about" => Some(StaticPageKind::About),
        _ => None,
    }
}

/// Request body for replacing a static page's content.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertStaticPageDto {
    pub content: String,
}

/// A static content page (terms, privacy, refund policy, about) as returned
/// by the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticPageDto {
    pub kind: StaticPageKind,
    pub content: String,
    pub updated_at: DateTime<Utc>,
}

impl StaticPageDto {
    pub fn from_entity(entity: entity::static_page::Model) -> Self {
        Self {
            kind: entity.kind,
            content: entity.content,
            updated_at: entity.updated_at,
        }
    }
}
