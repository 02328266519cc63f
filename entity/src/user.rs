use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Role assigned to a platform account.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum UserRole {
    #[sea_orm(string_value = "USER")]
    #[serde(rename = "USER")]
    User,
    #[sea_orm(string_value = "AGENT")]
    #[serde(rename = "AGENT")]
    Agent,
    #[sea_orm(string_value = "ADMIN")]
    #[serde(rename = "ADMIN")]
    Admin,
    #[sea_orm(string_value = "SUPER_ADMIN")]
    #[serde(rename = "SUPER_ADMIN")]
    SuperAdmin,
}

/// Account lifecycle status. New registrations start INACTIVE until their
/// email OTP is verified.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum UserStatus {
    #[sea_orm(string_value = "ACTIVE")]
    #[serde(rename = "ACTIVE")]
    Active,
    #[sea_orm(string_value = "INACTIVE")]
    #[serde(rename = "INACTIVE")]
    Inactive,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub full_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub profile_image: Option<String>,
    pub contact_number: Option<String>,
    pub address: Option<String>,
    pub country: Option<String>,
    pub fcm_token: Option<String>,
    pub is_email_verified: bool,
    /// One-time code for email verification or password reset. Always set
    /// together with `otp_expiry`, cleared together once consumed.
    pub otp: Option<String>,
    pub otp_expiry: Option<DateTimeUtc>,
    pub stripe_account_id: Option<String>,
    pub is_stripe_connected: bool,
    pub support_notification: bool,
    pub payment_notification: bool,
    pub email_notification: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::trip_service::Entity")]
    TripService,
    #[sea_orm(has_many = "super::payment::Entity")]
    Payment,
}

impl Related<super::trip_service::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TripService.def()
    }
}

impl Related<super::payment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
