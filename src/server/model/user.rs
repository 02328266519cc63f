//! User domain models, parameters, and DTOs.
//!
//! Provides the public representation of platform accounts and the parameter
//! types used by profile and admin user-management operations. The DTO never
//! exposes the password hash or pending OTP state.

use chrono::{DateTime, Utc};
use entity::user::{UserRole, UserStatus};
use serde::{Deserialize, Serialize};

/// Public representation of a platform account.
///
/// Credential and OTP columns are deliberately absent.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub profile_image: Option<String>,
    pub contact_number: Option<String>,
    pub address: Option<String>,
    pub country: Option<String>,
    pub is_email_verified: bool,
    pub is_stripe_connected: bool,
    pub created_at: DateTime<Utc>,
}

impl UserDto {
    /// Converts a user entity into its public DTO.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            full_name: entity.full_name,
            email: entity.email,
            role: entity.role,
            status: entity.status,
            profile_image: entity.profile_image,
            contact_number: entity.contact_number,
            address: entity.address,
            country: entity.country,
            is_email_verified: entity.is_email_verified,
            is_stripe_connected: entity.is_stripe_connected,
            created_at: entity.created_at,
        }
    }
}

/// Request body for updating the caller's own profile.
///
/// Absent fields are left untouched.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileDto {
    pub full_name: Option<String>,
    pub contact_number: Option<String>,
    pub address: Option<String>,
    pub country: Option<String>,
    pub profile_image: Option<String>,
    pub fcm_token: Option<String>,
}

/// Parameters for a partial profile update.
#[derive(Debug, Clone)]
pub struct UpdateProfileParam {
    pub user_id: String,
    pub full_name: Option<String>,
    pub contact_number: Option<String>,
    pub address: Option<String>,
    pub country: Option<String>,
    pub profile_image: Option<String>,
    pub fcm_token: Option<String>,
}

impl UpdateProfileParam {
    pub fn from_dto(user_id: String, dto: UpdateProfileDto) -> Self {
        Self {
            user_id,
            full_name: dto.full_name,
            contact_number: dto.contact_number,
            address: dto.address,
            country: dto.country,
            profile_image: dto.profile_image,
            fcm_token: dto.fcm_token,
        }
    }
}

/// Query parameters for the admin user listing.
///
/// All values arrive as raw strings and are parsed leniently; malformed
/// values are dropped rather than rejected.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListQuery {
    /// Matches against the name, email, and contact number.
    pub search_term: Option<String>,
    /// Defaults to USER when absent.
    pub role: Option<UserRole>,
    /// Defaults to ACTIVE when absent.
    pub status: Option<UserStatus>,
    pub country: Option<String>,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

/// Request body and response payload for notification preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettingsDto {
    pub support_notification: bool,
    pub payment_notification: bool,
    pub email_notification: bool,
}

impl NotificationSettingsDto {
    pub fn from_entity(entity: &entity::user::Model) -> Self {
        Self {
            support_notification: entity.support_notification,
            payment_notification: entity.payment_notification,
            email_notification: entity.email_notification,
        }
    }
}
