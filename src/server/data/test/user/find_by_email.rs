use super::*;

use test_utils::factory::create_user_with_email;

/// Tests finding an existing user by email.
///
/// Expected: Ok(Some(Model)) with matching email
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = create_user_with_email(db, "known@example.com").await?;

    let found = UserRepository::new(db)
        .find_by_email("known@example.com")
        .await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().id, created.id);

    Ok(())
}

/// Tests querying an email with no account.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let found = UserRepository::new(db)
        .find_by_email("nobody@example.com")
        .await?;

    assert!(found.is_none());

    Ok(())
}
