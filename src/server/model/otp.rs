//! One-time codes for email verification and password reset.
//!
//! An OTP challenge is a 4-digit code with a 5-minute expiry. The code and
//! expiry are always stored and cleared together on the user row; a row with
//! only one of the two set indicates corrupted state and is treated as having
//! no pending challenge.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

/// Minutes a freshly issued code stays valid.
const OTP_TTL_MINUTES: i64 = 5;

/// A pending one-time code challenge.
#[derive(Debug, Clone, PartialEq)]
pub struct OtpChallenge {
    /// The 4-digit code, stored as its decimal string.
    pub code: String,
    /// Instant after which the code is no longer accepted.
    pub expiry: DateTime<Utc>,
}

impl OtpChallenge {
    /// Issues a fresh challenge valid for five minutes from `now`.
    ///
    /// # Arguments
    /// - `now` - Current instant, injected for testability
    ///
    /// # Returns
    /// - `OtpChallenge` - New challenge with a random 4-digit code
    pub fn issue(now: DateTime<Utc>) -> Self {
        let code = rand::rng().random_range(1000..=9999);
        Self {
            code: code.to_string(),
            expiry: now + Duration::minutes(OTP_TTL_MINUTES),
        }
    }

    /// Reconstructs the pending challenge from a stored user row.
    ///
    /// Returns `None` when the row has no pending challenge, including the
    /// corrupted case where only one of code and expiry is set.
    ///
    /// # Arguments
    /// - `user` - User entity holding the stored otp columns
    pub fn from_user(user: &entity::user::Model) -> Option<Self> {
        match (&user.otp, &user.otp_expiry) {
            (Some(code), Some(expiry)) => Some(Self {
                code: code.clone(),
                expiry: *expiry,
            }),
            _ => None,
        }
    }

    /// Whether the challenge has expired as of `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expiry
    }

    /// Whether the submitted code matches this challenge.
    pub fn matches(&self, submitted: &str) -> bool {
        self.code == submitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issues_four_digit_code_with_five_minute_expiry() {
        let now = Utc::now();
        let challenge = OtpChallenge::issue(now);

        assert_eq!(challenge.code.len(), 4);
        assert!(challenge.code.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(challenge.expiry, now + Duration::minutes(5));
    }

    #[test]
    fn expires_after_ttl() {
        let now = Utc::now();
        let challenge = OtpChallenge::issue(now);

        assert!(!challenge.is_expired(now));
        assert!(!challenge.is_expired(now + Duration::minutes(5)));
        assert!(challenge.is_expired(now + Duration::minutes(5) + Duration::seconds(1)));
    }

    #[test]
    fn matches_only_the_issued_code() {
        let challenge = OtpChallenge {
            code: "1234".to_string(),
            expiry: Utc::now(),
        };

        assert!(challenge.matches("1234"));
        assert!(!challenge.matches("4321"));
        assert!(!challenge.matches(""));
    }

    #[test]
    fn from_user_requires_both_code_and_expiry() {
        let now = Utc::now();
        let base = entity::user::Model {
            id: "u1".to_string(),
            full_name: "Test".to_string(),
            email: "t@example.com".to_string(),
            password: "hash".to_string(),
            role: entity::user::UserRole::User,
            status: entity::user::UserStatus::Active,
            profile_image: None,
            contact_number: None,
            address: None,
            country: None,
            fcm_token: None,
            is_email_verified: false,
            otp: None,
            otp_expiry: None,
            stripe_account_id: None,
            is_stripe_connected: false,
            support_notification: true,
            payment_notification: true,
            email_notification: true,
            created_at: now,
            updated_at: now,
        };

        assert_eq!(OtpChallenge::from_user(&base), None);

        let code_only = entity::user::Model {
            otp: Some("1234".to_string()),
            ..base.clone()
        };
        assert_eq!(OtpChallenge::from_user(&code_only), None);

        let complete = entity::user::Model {
            otp: Some("1234".to_string()),
            otp_expiry: Some(now),
            ..base
        };
        assert_eq!(
            OtpChallenge::from_user(&complete),
            Some(OtpChallenge {
                code: "1234".to_string(),
                expiry: now
            })
        );
    }
}
