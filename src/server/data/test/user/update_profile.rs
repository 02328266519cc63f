use super::*;

use crate::server::model::user::UpdateProfileParam;
use test_utils::factory::create_user;

fn empty_update(user_id: String) -> UpdateProfileParam {
    UpdateProfileParam {
        user_id,
        full_name: None,
        contact_number: None,
        address: None,
        country: None,
        profile_image: None,
        fcm_token: None,
    }
}

/// Tests that a partial update only touches the provided fields.
///
/// Expected: name and address changed, email untouched
#[tokio::test]
async fn applies_partial_update() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let email = user.email.clone();

    let updated = UserRepository::new(db)
        .update_profile(UpdateProfileParam {
            full_name: Some("Renamed Traveler".to_string()),
            address: Some("1 Lakeside".to_string()),
            ..empty_update(user.id.clone())
        })
        .await?
        .unwrap();

    assert_eq!(updated.full_name, "Renamed Traveler");
    assert_eq!(updated.address.as_deref(), Some("1 Lakeside"));
    assert_eq!(updated.email, email);

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db)
        .update_profile(empty_update("missing".to_string()))
        .await?;

    assert!(result.is_none());

    Ok(())
}
