use super::*;

use chrono::Utc;
use entity::user::{UserRole, UserStatus};

/// Tests creating a user through registration.
///
/// Verifies that the row is created inactive and unverified with the
/// pending verification code stored.
///
/// Expected: Ok(Model) with INACTIVE status and OTP columns set
#[tokio::test]
async fn creates_inactive_user_with_pending_otp() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let otp = OtpChallenge::issue(Utc::now());

    let user = repo
        .create(CreateUserParam {
            full_name: "Ada Traveler".to_string(),
            email: "ada@example.com".to_string(),
            password_hash: "$2b$12$test.hash".to_string(),
            role: UserRole::User,
            contact_number: Some("+4112345678".to_string()),
            country: Some("Switzerland".to_string()),
            otp: otp.clone(),
        })
        .await?;

    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.status, UserStatus::Inactive);
    assert!(!user.is_email_verified);
    assert_eq!(user.otp.as_deref(), Some(otp.code.as_str()));
    assert!(user.otp_expiry.is_some());

    Ok(())
}
