//! Support ticket and notification models.

use chrono::{DateTime, Utc};
use entity::support_ticket::SupportStatus;
use serde::{Deserialize, Serialize};

/// Request body for submitting a support request.
///
/// Support requests are accepted without authentication so visitors can
/// reach out before creating an account.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSupportTicketDto {
    pub full_name: String,
    pub email: String,
    pub contact_number: Option<String>,
    pub subject: String,
    pub description: String,
}

/// A support ticket as returned by the admin API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportTicketDto {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub contact_number: Option<String>,
    pub subject: String,
    pub description: String,
    pub status: SupportStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SupportTicketDto {
    pub fn from_entity(entity: entity::support_ticket::Model) -> Self {
        Self {
            id: entity.id,
            full_name: entity.full_name,
            email: entity.email,
            contact_number: entity.contact_number,
            subject: entity.subject,
            description: entity.description,
            status: entity.status,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Query parameters for the admin support ticket listing.
///
/// The listing is an open-work queue: it only ever shows PENDING tickets,
/// so there is no status filter to pass.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportListQuery {
    /// Matches against the reporter name, email, and subject.
    pub search_term: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

/// Query parameters for the admin notification listing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationListQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// An admin notification as returned by the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDto {
    pub id: String,
    pub title: String,
    pub body: String,
    pub message: Option<String>,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl NotificationDto {
    pub fn from_entity(entity: entity::notification::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            body: entity.body,
            message: entity.message,
            read: entity.read,
            created_at: entity.created_at,
        }
    }
}
