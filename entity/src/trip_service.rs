use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// How a trip service is booked.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum ServiceType {
    #[sea_orm(string_value = "BY_THE_HOUR")]
    #[serde(rename = "BY_THE_HOUR")]
    ByTheHour,
    #[sea_orm(string_value = "DAY_TRIP")]
    #[serde(rename = "DAY_TRIP")]
    DayTrip,
}

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum ServiceStatus {
    #[sea_orm(string_value = "ACTIVE")]
    #[serde(rename = "ACTIVE")]
    Active,
    #[sea_orm(string_value = "INACTIVE")]
    #[serde(rename = "INACTIVE")]
    Inactive,
}

/// A bookable transfer offering in the catalog, owned by the agent who
/// listed it.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "trip_service")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_id: String,
    pub from_location: String,
    pub to_location: String,
    pub description: Option<String>,
    pub price: f64,
    pub route_type: Option<String>,
    pub service_type: ServiceType,
    pub is_popular: bool,
    pub status: ServiceStatus,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
