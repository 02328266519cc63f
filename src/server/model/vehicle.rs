//! Vehicle fleet models and parameters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request body for registering a vehicle.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicleDto {
    pub name: String,
    pub plate_number: String,
    pub seat_count: i32,
    pub base_price: f64,
    pub image: Option<String>,
}

/// Request body for a partial vehicle update.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVehicleDto {
    pub name: Option<String>,
    pub plate_number: Option<String>,
    pub seat_count: Option<i32>,
    pub base_price: Option<f64>,
    pub image: Option<String>,
    pub is_active: Option<bool>,
}

/// A fleet vehicle as returned by the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDto {
    pub id: String,
    pub name: String,
    pub plate_number: String,
    pub seat_count: i32,
    pub base_price: f64,
    pub image: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl VehicleDto {
    pub fn from_entity(entity: entity::vehicle::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            plate_number: entity.plate_number,
            seat_count: entity.seat_count,
            base_price: entity.base_price,
            image: entity.image,
            is_active: entity.is_active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Query parameters for the vehicle listing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleListQuery {
    /// Matches against the vehicle name and plate number.
    pub search_term: Option<String>,
    pub is_active: Option<String>,
    pub min_seats: Option<String>,
    pub max_seats: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}
