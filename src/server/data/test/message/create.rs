use super::*;

use test_utils::factory::create_channel_with_participants;

/// Tests appending a message with attachments.
///
/// Expected: body and attachment URIs stored and readable back
#[tokio::test]
async fn stores_body_and_files() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_messaging_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (sender, _, channel) = create_channel_with_participants(db).await?;

    let message = MessageRepository::new(db)
        .create(CreateMessageParam {
            channel_name: channel.channel_name.clone(),
            sender_id: sender.id.clone(),
            body: Some("See attached".to_string()),
            files: vec!["uploads/itinerary.pdf".to_string()],
        })
        .await?;

    assert_eq!(message.channel_name, channel.channel_name);
    assert_eq!(message.sender_id, sender.id);
    assert_eq!(message.body.as_deref(), Some("See attached"));

    let files: Vec<String> = serde_json::from_value(message.files).unwrap();
    assert_eq!(files, vec!["uploads/itinerary.pdf".to_string()]);

    Ok(())
}

/// Tests an attachment-only message.
///
/// Expected: body NULL, files populated
#[tokio::test]
async fn allows_missing_body() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_messaging_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (sender, _, channel) = create_channel_with_participants(db).await?;

    let message = MessageRepository::new(db)
        .create(CreateMessageParam {
            channel_name: channel.channel_name,
            sender_id: sender.id,
            body: None,
            files: vec!["uploads/photo.jpg".to_string()],
        })
        .await?;

    assert!(message.body.is_none());

    Ok(())
}
