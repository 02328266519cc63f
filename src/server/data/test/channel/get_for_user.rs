use super::*;

use crate::server::query::Pagination;
use test_utils::factory::create_user;

/// Tests listing a participant's conversations.
///
/// Expected: each user only sees channels they participate in
#[tokio::test]
async fn lists_only_own_channels() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_messaging_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = create_user(db).await?;
    let bob = create_user(db).await?;
    let carol = create_user(db).await?;

    let repo = ChannelRepository::new(db);
    repo.find_or_create(&alice.id, &bob.id).await?;
    repo.find_or_create(&alice.id, &carol.id).await?;

    let (channels, total) = repo
        .get_for_user(&alice.id, None, &Pagination::default())
        .await?;
    assert_eq!(total, 2);
    assert_eq!(channels.len(), 2);

    let (_, bob_total) = repo
        .get_for_user(&bob.id, None, &Pagination::default())
        .await?;
    assert_eq!(bob_total, 1);

    Ok(())
}

/// Tests narrowing the listing to a set of counterparts.
///
/// Expected: only the channel with the named counterpart survives
#[tokio::test]
async fn filters_by_counterpart_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_messaging_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = create_user(db).await?;
    let bob = create_user(db).await?;
    let carol = create_user(db).await?;

    let repo = ChannelRepository::new(db);
    repo.find_or_create(&alice.id, &bob.id).await?;
    let ac = repo.find_or_create(&alice.id, &carol.id).await?;

    let ids = vec![carol.id.clone()];
    let (channels, total) = repo
        .get_for_user(&alice.id, Some(&ids), &Pagination::default())
        .await?;

    assert_eq!(total, 1);
    assert_eq!(channels[0].id, ac.id);

    Ok(())
}

/// Tests that the listing orders by recent activity.
///
/// Expected: the touched channel moves to the front
#[tokio::test]
async fn orders_by_recency() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_messaging_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = create_user(db).await?;
    let bob = create_user(db).await?;
    let carol = create_user(db).await?;

    let repo = ChannelRepository::new(db);
    let ab = repo.find_or_create(&alice.id, &bob.id).await?;
    repo.find_or_create(&alice.id, &carol.id).await?;

    repo.touch(&ab.channel_name).await?;

    let (channels, _) = repo
        .get_for_user(&alice.id, None, &Pagination::default())
        .await?;

    assert_eq!(channels[0].id, ab.id);

    Ok(())
}
