use super::*;

use chrono::{Duration, Utc};
use crate::server::query::Pagination;
use test_utils::factory::{create_channel_with_participants, MessageFactory};

/// Tests that history is returned newest first.
///
/// Expected: descending created_at order, total covers all rows
#[tokio::test]
async fn returns_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_messaging_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (sender, _, channel) = create_channel_with_participants(db).await?;
    let base = Utc::now();

    for offset in 0..3 {
        MessageFactory::new(db, &channel.channel_name, &sender.id)
            .body(Some(format!("message {}", offset)))
            .created_at(base + Duration::seconds(offset))
            .build()
            .await?;
    }

    let (messages, total) = MessageRepository::new(db)
        .get_history(&channel.channel_name, &Pagination::default())
        .await?;

    assert_eq!(total, 3);
    assert_eq!(messages[0].body.as_deref(), Some("message 2"));
    assert_eq!(messages[2].body.as_deref(), Some("message 0"));

    Ok(())
}

/// Tests that history is scoped to its channel and paginates.
///
/// Expected: other conversations never leak in, page 2 gets the remainder
#[tokio::test]
async fn scopes_and_paginates() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_messaging_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (sender, _, channel) = create_channel_with_participants(db).await?;
    let (other_sender, _, other_channel) = create_channel_with_participants(db).await?;

    for offset in 0..3 {
        MessageFactory::new(db, &channel.channel_name, &sender.id)
            .created_at(Utc::now() + Duration::seconds(offset))
            .build()
            .await?;
    }
    MessageFactory::new(db, &other_channel.channel_name, &other_sender.id)
        .build()
        .await?;

    let pagination = Pagination {
        page: 2,
        limit: 2,
        ..Pagination::default()
    };

    let (messages, total) = MessageRepository::new(db)
        .get_history(&channel.channel_name, &pagination)
        .await?;

    assert_eq!(total, 3);
    assert_eq!(messages.len(), 1);

    Ok(())
}
