use super::*;

use sea_orm::EntityTrait;
use test_utils::factory::create_user;

/// Tests first-contact channel creation.
///
/// Expected: a channel whose key is the sorted concatenation of both ids
#[tokio::test]
async fn creates_channel_on_first_contact() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_messaging_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = create_user(db).await?;
    let bob = create_user(db).await?;

    let channel = ChannelRepository::new(db)
        .find_or_create(&alice.id, &bob.id)
        .await?;

    let mut sorted = [alice.id.as_str(), bob.id.as_str()];
    sorted.sort_unstable();
    assert_eq!(channel.channel_name, format!("{}{}", sorted[0], sorted[1]));

    Ok(())
}

/// Tests that both orderings of the pair resolve the same channel.
///
/// Expected: the second call returns the existing row, no duplicate created
#[tokio::test]
async fn reuses_channel_for_swapped_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_messaging_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = create_user(db).await?;
    let bob = create_user(db).await?;

    let repo = ChannelRepository::new(db);
    let first = repo.find_or_create(&alice.id, &bob.id).await?;
    let second = repo.find_or_create(&bob.id, &alice.id).await?;

    assert_eq!(first.id, second.id);

    let all = entity::prelude::Channel::find().all(db).await?;
    assert_eq!(all.len(), 1);

    Ok(())
}

/// Tests that distinct pairs get distinct channels.
///
/// Expected: two rows with different keys
#[tokio::test]
async fn separates_distinct_pairs() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_messaging_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = create_user(db).await?;
    let bob = create_user(db).await?;
    let carol = create_user(db).await?;

    let repo = ChannelRepository::new(db);
    let ab = repo.find_or_create(&alice.id, &bob.id).await?;
    let ac = repo.find_or_create(&alice.id, &carol.id).await?;

    assert_ne!(ab.channel_name, ac.channel_name);

    Ok(())
}
