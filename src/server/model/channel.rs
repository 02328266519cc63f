//! Channel identity and conversation models.
//!
//! A channel is the single conversation between two participants. Its
//! identity is the *channel key*: the two participant ids sorted
//! lexicographically and concatenated. Because the key is commutative, both
//! participants resolve the same channel no matter who messages first, and
//! the unique index on the key makes concurrent first-contact sends converge
//! on one row.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Derives the commutative channel key for a participant pair.
///
/// The two ids are sorted lexicographically and concatenated, so
/// `derive_channel_key(a, b) == derive_channel_key(b, a)` for every pair.
///
/// # Arguments
/// - `person1_id` - One participant id
/// - `person2_id` - The other participant id
///
/// # Returns
/// - `String` - The derived channel key
pub fn derive_channel_key(person1_id: &str, person2_id: &str) -> String {
    let mut pair = [person1_id, person2_id];
    pair.sort_unstable();
    format!("{}{}", pair[0], pair[1])
}

/// Resolves the other participant of a channel from the viewer's perspective.
///
/// Channels store participants in send order (`person1_id` is whoever
/// initiated first contact), so the counterpart depends on who is looking.
/// When the viewer is not a participant at all, `person2_id` is returned;
/// access control happens before display derivation.
///
/// # Arguments
/// - `channel` - Channel entity holding the participant pair
/// - `viewer_id` - Id of the user viewing the channel
///
/// # Returns
/// - `&str` - Id of the participant that is not the viewer
pub fn counterpart_id<'a>(channel: &'a entity::channel::Model, viewer_id: &str) -> &'a str {
    if channel.person1_id == viewer_id {
        &channel.person2_id
    } else {
        &channel.person1_id
    }
}

/// Derives the participant a channel view should label as the receiver.
///
/// The receiver is the counterpart of whoever sent the first message; for a
/// conversation with no messages yet it falls back to the viewer's own
/// counterpart. Purely a display concern, never stored.
///
/// # Arguments
/// - `channel` - Channel entity holding the participant pair
/// - `first_sender_id` - Sender of the oldest message, when one exists
/// - `viewer_id` - Id of the user viewing the channel
///
/// # Returns
/// - `&str` - Id of the participant shown as the receiver
pub fn derive_display_counterpart<'a>(
    channel: &'a entity::channel::Model,
    first_sender_id: Option<&str>,
    viewer_id: &str,
) -> &'a str {
    counterpart_id(channel, first_sender_id.unwrap_or(viewer_id))
}

/// The other participant of a channel, as shown in conversation lists.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterpartDto {
    pub id: String,
    pub full_name: String,
    pub profile_image: Option<String>,
}

impl CounterpartDto {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            full_name: entity.full_name,
            profile_image: entity.profile_image,
        }
    }
}

/// A conversation as listed for one of its participants.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelDto {
    pub id: String,
    pub channel_name: String,
    /// The participant that is not the viewer.
    pub counterpart: Option<CounterpartDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ChannelDto {
    /// Builds the DTO from a channel entity and its resolved counterpart.
    ///
    /// The counterpart is `None` when the other participant's account has
    /// been deleted since the conversation started.
    pub fn from_entity(
        entity: entity::channel::Model,
        counterpart: Option<entity::user::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            channel_name: entity.channel_name,
            counterpart: counterpart.map(CounterpartDto::from_entity),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// A single conversation with its full thread, as returned by the
/// channel-by-id read.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelHistoryDto {
    pub id: String,
    pub channel_name: String,
    /// The participant the thread view labels as the receiver.
    pub receiver: Option<CounterpartDto>,
    /// The thread in conversation order, oldest first.
    pub messages: Vec<super::message::MessageDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Query parameters for the caller's conversation list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelListQuery {
    /// Matches against the counterpart's name or email.
    pub search_term: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_key_is_commutative() {
        assert_eq!(derive_channel_key("alice", "bob"), derive_channel_key("bob", "alice"));
    }

    #[test]
    fn channel_key_sorts_lexicographically() {
        assert_eq!(derive_channel_key("bob", "alice"), "alicebob");
        assert_eq!(derive_channel_key("alice", "bob"), "alicebob");
    }

    #[test]
    fn channel_key_is_deterministic_for_same_pair() {
        let first = derive_channel_key("u-42", "u-7");
        let second = derive_channel_key("u-42", "u-7");

        assert_eq!(first, second);
    }

    #[test]
    fn distinct_pairs_produce_distinct_keys() {
        assert_ne!(
            derive_channel_key("alice", "bob"),
            derive_channel_key("alice", "carol")
        );
    }

    #[test]
    fn display_counterpart_follows_first_sender_then_viewer() {
        let now = Utc::now();
        let channel = entity::channel::Model {
            id: "c1".to_string(),
            channel_name: derive_channel_key("alice", "bob"),
            person1_id: "alice".to_string(),
            person2_id: "bob".to_string(),
            created_at: now,
            updated_at: now,
        };

        assert_eq!(derive_display_counterpart(&channel, Some("bob"), "alice"), "alice");
        assert_eq!(derive_display_counterpart(&channel, None, "alice"), "bob");
    }

    #[test]
    fn counterpart_is_the_other_participant() {
        let now = Utc::now();
        let channel = entity::channel::Model {
            id: "c1".to_string(),
            channel_name: derive_channel_key("alice", "bob"),
            person1_id: "alice".to_string(),
            person2_id: "bob".to_string(),
            created_at: now,
            updated_at: now,
        };

        assert_eq!(counterpart_id(&channel, "alice"), "bob");
        assert_eq!(counterpart_id(&channel, "bob"), "alice");
    }
}
