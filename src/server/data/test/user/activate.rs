use super::*;

use chrono::{Duration, Utc};
use entity::user::UserStatus;
use test_utils::factory::UserFactory;

/// Tests activating a pending account after OTP confirmation.
///
/// Verifies that activation flips the account to ACTIVE, marks the email
/// verified, and consumes the pending code.
///
/// Expected: ACTIVE, verified, and no OTP columns remaining
#[tokio::test]
async fn activates_and_clears_otp() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pending = UserFactory::new(db)
        .status(UserStatus::Inactive)
        .email_verified(false)
        .otp("1234", Utc::now() + Duration::minutes(5))
        .build()
        .await?;

    let repo = UserRepository::new(db);
    repo.activate(&pending.id).await?;

    let user = repo.find_by_id(&pending.id).await?.unwrap();
    assert_eq!(user.status, UserStatus::Active);
    assert!(user.is_email_verified);
    assert!(user.otp.is_none());
    assert!(user.otp_expiry.is_none());

    Ok(())
}
