//! JWT issuing and verification.
//!
//! Access and refresh tokens are signed with separate HS256 secrets so a
//! leaked refresh secret cannot mint access tokens and vice versa. Claims
//! carry the user id, email, and role; handlers re-fetch the user row on
//! every request, so a token only proves identity, never current state.

use chrono::Utc;
use entity::user::UserRole;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::{error::auth::AuthError, error::AppError, model::auth::TokenPairDto};

/// Claims embedded in both access and refresh tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: String,
    pub email: String,
    pub role: UserRole,
    /// Expiry as a unix timestamp.
    pub exp: i64,
}

/// Issues and verifies the access/refresh token pair.
#[derive(Clone)]
pub struct TokenService {
    access_encoding: EncodingKey,
    access_decoding: DecodingKey,
    refresh_encoding: EncodingKey,
    refresh_decoding: DecodingKey,
    access_ttl_secs: i64,
    refresh_ttl_secs: i64,
}

impl TokenService {
    /// Creates a new TokenService instance.
    ///
    /// # Arguments
    /// - `access_secret` - HS256 secret for access tokens
    /// - `refresh_secret` - HS256 secret for refresh tokens
    /// - `access_ttl_secs` - Access token lifetime in seconds
    /// - `refresh_ttl_secs` - Refresh token lifetime in seconds
    ///
    /// # Returns
    /// - `TokenService` - New service instance
    pub fn new(
        access_secret: &str,
        refresh_secret: &str,
        access_ttl_secs: i64,
        refresh_ttl_secs: i64,
    ) -> Self {
        Self {
            access_encoding: EncodingKey::from_secret(access_secret.as_bytes()),
            access_decoding: DecodingKey::from_secret(access_secret.as_bytes()),
            refresh_encoding: EncodingKey::from_secret(refresh_secret.as_bytes()),
            refresh_decoding: DecodingKey::from_secret(refresh_secret.as_bytes()),
            access_ttl_secs,
            refresh_ttl_secs,
        }
    }

    /// Issues a fresh access/refresh pair for a user.
    ///
    /// # Arguments
    /// - `user` - The authenticated user row
    ///
    /// # Returns
    /// - `Ok(TokenPairDto)` - Signed token pair
    /// - `Err(AppError)` - Signing failure
    pub fn issue_pair(&self, user: &entity::user::Model) -> Result<TokenPairDto, AppError> {
        let now = Utc::now().timestamp();

        let access_token = self.sign(user, now + self.access_ttl_secs, &self.access_encoding)?;
        let refresh_token = self.sign(user, now + self.refresh_ttl_secs, &self.refresh_encoding)?;

        Ok(TokenPairDto {
            access_token,
            refresh_token,
        })
    }

    /// Verifies an access token and returns its claims.
    ///
    /// # Arguments
    /// - `token` - The bearer token string
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is valid and unexpired
    /// - `Err(AuthError)` - Token is malformed, forged, or expired
    pub fn verify_access(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.access_decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| AuthError::InvalidToken)
    }

    /// Verifies a refresh token and returns its claims.
    ///
    /// # Arguments
    /// - `token` - The refresh token string
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is valid and unexpired
    /// - `Err(AuthError)` - Token is malformed, forged, or expired
    pub fn verify_refresh(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.refresh_decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| AuthError::InvalidToken)
    }

    fn sign(
        &self,
        user: &entity::user::Model,
        exp: i64,
        key: &EncodingKey,
    ) -> Result<String, AppError> {
        let claims = Claims {
            sub: user.id.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
            exp,
        };

        encode(&Header::default(), &claims, key)
            .map_err(|err| AppError::InternalError(format!("Failed to sign token: {}", err)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity::user::{UserRole, UserStatus};

    fn test_user() -> entity::user::Model {
        entity::user::Model {
            id: "user-1".to_string(),
            full_name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            password: "hash".to_string(),
            role: UserRole::User,
            status: UserStatus::Active,
            profile_image: None,
            contact_number: None,
            address: None,
            country: None,
            fcm_token: None,
            is_email_verified: true,
            otp: None,
            otp_expiry: None,
            stripe_account_id: None,
            is_stripe_connected: false,
            support_notification: true,
            payment_notification: true,
            email_notification: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn issued_access_token_verifies() {
        let tokens = TokenService::new("access-secret", "refresh-secret", 3600, 86400);
        let pair = tokens.issue_pair(&test_user()).unwrap();

        let claims = tokens.verify_access(&pair.access_token).unwrap();
        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.email, "test@example.com");
    }

    #[test]
    fn access_token_rejected_by_refresh_verifier() {
        let tokens = TokenService::new("access-secret", "refresh-secret", 3600, 86400);
        let pair = tokens.issue_pair(&test_user()).unwrap();

        assert!(tokens.verify_refresh(&pair.access_token).is_err());
        assert!(tokens.verify_access(&pair.refresh_token).is_err());
    }

    #[test]
    fn garbage_token_rejected() {
        let tokens = TokenService::new("access-secret", "refresh-secret", 3600, 86400);
        assert!(tokens.verify_access("not-a-token").is_err());
    }

    #[test]
    fn expired_token_rejected() {
        let tokens = TokenService::new("access-secret", "refresh-secret", -3600, 86400);
        let pair = tokens.issue_pair(&test_user()).unwrap();

        assert!(tokens.verify_access(&pair.access_token).is_err());
    }
}
