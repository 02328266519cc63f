//! Message models and parameters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request body for sending a message to another user.
///
/// The channel is addressed by receiver, not by channel id: the backend
/// derives the channel key from the sender/receiver pair and creates the
/// conversation on first contact.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageDto {
    pub receiver_id: String,
    pub body: Option<String>,
    /// Attachment URIs already uploaded by the client, in display order.
    #[serde(default)]
    pub files: Vec<String>,
}

/// Parameters for sending a message.
#[derive(Debug, Clone)]
pub struct SendMessageParam {
    pub sender_id: String,
    pub receiver_id: String,
    pub body: Option<String>,
    pub files: Vec<String>,
}

impl SendMessageParam {
    pub fn from_dto(sender_id: String, dto: SendMessageDto) -> Self {
        Self {
            sender_id,
            receiver_id: dto.receiver_id,
            body: dto.body,
            files: dto.files,
        }
    }

    /// Whether the message carries any content at all.
    ///
    /// A message needs a non-empty body or at least one attachment.
    pub fn has_content(&self) -> bool {
        self.body.as_deref().is_some_and(|body| !body.trim().is_empty())
            || !self.files.is_empty()
    }
}

/// A single message as returned in conversation history.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageDto {
    pub id: String,
    pub channel_name: String,
    pub sender_id: String,
    pub body: Option<String>,
    pub files: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl MessageDto {
    /// Converts a message entity into its DTO.
    ///
    /// The stored attachment JSON is expected to be an array of strings;
    /// anything else deserializes to an empty list rather than failing the
    /// whole history request.
    pub fn from_entity(entity: entity::message::Model) -> Self {
        let files = serde_json::from_value(entity.files).unwrap_or_default();
        Self {
            id: entity.id,
            channel_name: entity.channel_name,
            sender_id: entity.sender_id,
            body: entity.body,
            files,
            created_at: entity.created_at,
        }
    }
}

/// Query parameters for conversation history.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param(body: Option<&str>, files: Vec<&str>) -> SendMessageParam {
        SendMessageParam {
            sender_id: "s".to_string(),
            receiver_id: "r".to_string(),
            body: body.map(String::from),
            files: files.into_iter().map(String::from).collect(),
        }
    }

    #[test]
    fn body_alone_is_content() {
        assert!(param(Some("hello"), vec![]).has_content());
    }

    #[test]
    fn attachments_alone_are_content() {
        assert!(param(None, vec!["uploads/a.png"]).has_content());
    }

    #[test]
    fn blank_body_without_attachments_is_not_content() {
        assert!(!param(None, vec![]).has_content());
        assert!(!param(Some(""), vec![]).has_content());
        assert!(!param(Some("   "), vec![]).has_content());
    }
}
