use super::*;

use crate::server::query::{FilterBuilder, Pagination};
use entity::user::UserRole;
use test_utils::factory::UserFactory;

/// Tests the role filter on the admin user listing.
///
/// Expected: only agents returned, total reflects the filtered count
#[tokio::test]
async fn filters_by_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).role(UserRole::Agent).build().await?;
    UserFactory::new(db).role(UserRole::Agent).build().await?;
    UserFactory::new(db).role(UserRole::User).build().await?;

    let condition = FilterBuilder::new()
        .equals(entity::user::Column::Role, Some(UserRole::Agent))
        .build();

    let (users, total) = UserRepository::new(db)
        .get_all_filtered(condition, &Pagination::default())
        .await?;

    assert_eq!(total, 2);
    assert!(users.iter().all(|user| user.role == UserRole::Agent));

    Ok(())
}

/// Tests the free-text search across name and email.
///
/// Expected: matches on either column, case preserved by LIKE
#[tokio::test]
async fn searches_name_and_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db)
        .full_name("Greta Alpine")
        .email("greta@example.com")
        .build()
        .await?;
    UserFactory::new(db)
        .full_name("Someone Else")
        .email("contact-alpine@example.com")
        .build()
        .await?;
    UserFactory::new(db)
        .full_name("No Match")
        .email("other@example.com")
        .build()
        .await?;

    let condition = FilterBuilder::new()
        .search(
            Some("alpine"),
            &[
                entity::user::Column::FullName,
                entity::user::Column::Email,
            ],
        )
        .build();

    let (_, total) = UserRepository::new(db)
        .get_all_filtered(condition, &Pagination::default())
        .await?;

    assert_eq!(total, 2);

    Ok(())
}

/// Tests that pagination slices the result set.
///
/// Expected: page 2 with limit 2 returns the remaining row, total unchanged
#[tokio::test]
async fn paginates_results() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        UserFactory::new(db).build().await?;
    }

    let pagination = Pagination {
        page: 2,
        limit: 2,
        ..Pagination::default()
    };

    let (users, total) = UserRepository::new(db)
        .get_all_filtered(FilterBuilder::new().build(), &pagination)
        .await?;

    assert_eq!(total, 3);
    assert_eq!(users.len(), 1);

    Ok(())
}
