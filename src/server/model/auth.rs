//! Authentication request and response types.

use entity::user::UserRole;
use serde::{Deserialize, Serialize};

use super::user::UserDto;

/// Request body for account registration.
///
/// Registration creates an INACTIVE account and emails a verification OTP;
/// the account becomes usable once the code is confirmed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDto {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub contact_number: Option<String>,
    pub country: Option<String>,
    /// Requested role; only USER and AGENT are accepted at registration.
    pub role: Option<UserRole>,
}

/// Request body for confirming an emailed OTP.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpDto {
    pub email: String,
    pub otp: String,
}

/// Request body for credential login.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginDto {
    pub email: String,
    pub password: String,
    /// Role context the client is signing in under. When supplied it must
    /// match the account's role; a mismatch fails like wrong credentials.
    pub role: Option<UserRole>,
    /// Push token to associate with the device, stored best-effort.
    pub fcm_token: Option<String>,
}

/// Request body for exchanging a refresh token for a new token pair.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshDto {
    pub refresh_token: String,
}

/// Request body for changing the caller's password.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordDto {
    pub old_password: String,
    pub new_password: String,
}

/// Request body for starting a password reset.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForgotPasswordDto {
    pub email: String,
}

/// Request body for completing a password reset with an emailed OTP.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordDto {
    pub email: String,
    pub otp: String,
    pub new_password: String,
}

/// Access and refresh token pair issued on login, verification, and refresh.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPairDto {
    pub access_token: String,
    pub refresh_token: String,
}

/// Login response: the authenticated user plus their token pair.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponseDto {
    pub user: UserDto,
    pub access_token: String,
    pub refresh_token: String,
}
