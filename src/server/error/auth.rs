use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::debug;

use crate::server::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No bearer token was present on the request.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Missing authorization bearer token")]
    MissingToken,

    /// The bearer token failed signature or claim validation.
    ///
    /// Covers malformed, tampered, and expired tokens. Results in a
    /// 401 Unauthorized response.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The token's subject no longer exists in the database.
    ///
    /// Results in a 401 Unauthorized response so stale tokens cannot be
    /// distinguished from invalid ones.
    #[error("User {0} from token not found in database")]
    UserNotInDatabase(String),

    /// Email and password did not match a usable account.
    ///
    /// Covers both unknown emails and wrong passwords so the response does
    /// not reveal which was incorrect. Results in a 401 Unauthorized response.
    #[error("Invalid email or password")]
    WrongCredentials,

    /// The account exists but is not in ACTIVE status.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Account for user {0} is inactive")]
    AccountInactive(String),

    /// The authenticated user lacks the role required for this operation.
    ///
    /// Results in a 403 Forbidden response.
    ///
    /// # Fields
    /// - User id of the authenticated user
    /// - Description of the attempted operation for server-side logging
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(String, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-facing error
/// messages:
/// - `MissingToken` / `InvalidToken` / `UserNotInDatabase` → 401 Unauthorized
/// - `WrongCredentials` → 401 Unauthorized with "Invalid email or password"
/// - `AccountInactive` → 403 Forbidden
/// - `AccessDenied` → 403 Forbidden
///
/// All errors are logged at debug level for diagnostics while keeping client-facing
/// messages generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        debug!("{}", self);

        match self {
            Self::MissingToken | Self::InvalidToken | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "You are not authorized".to_string(),
                }),
            )
                .into_response(),
            Self::WrongCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid email or password".to_string(),
                }),
            )
                .into_response(),
            Self::AccountInactive(_) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Your account is not active".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "You do not have permission to perform this action".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
