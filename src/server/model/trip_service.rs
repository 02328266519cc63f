//! Trip service catalog models and parameters.

use chrono::{DateTime, Utc};
use entity::trip_service::{ServiceStatus, ServiceType};
use serde::{Deserialize, Serialize};

/// Request body for listing a new trip service.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTripServiceDto {
    pub from_location: String,
    pub to_location: String,
    pub description: Option<String>,
    pub price: f64,
    pub route_type: Option<String>,
    pub service_type: ServiceType,
}

/// Parameters for creating a trip service on behalf of its owner.
#[derive(Debug, Clone)]
pub struct CreateTripServiceParam {
    pub user_id: String,
    pub from_location: String,
    pub to_location: String,
    pub description: Option<String>,
    pub price: f64,
    pub route_type: Option<String>,
    pub service_type: ServiceType,
}

impl CreateTripServiceParam {
    pub fn from_dto(user_id: String, dto: CreateTripServiceDto) -> Self {
        Self {
            user_id,
            from_location: dto.from_location,
            to_location: dto.to_location,
            description: dto.description,
            price: dto.price,
            route_type: dto.route_type,
            service_type: dto.service_type,
        }
    }
}

/// Request body for a partial trip service update.
///
/// Absent fields are left untouched.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTripServiceDto {
    pub from_location: Option<String>,
    pub to_location: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub route_type: Option<String>,
    pub service_type: Option<ServiceType>,
    pub is_popular: Option<bool>,
    pub status: Option<ServiceStatus>,
}

/// A catalog entry as returned by the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripServiceDto {
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
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TripServiceDto {
    pub fn from_entity(entity: entity::trip_service::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            from_location: entity.from_location,
            to_location: entity.to_location,
            description: entity.description,
            price: entity.price,
            route_type: entity.route_type,
            service_type: entity.service_type,
            is_popular: entity.is_popular,
            status: entity.status,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Query parameters for the catalog listing.
///
/// Numeric and date bounds arrive as raw strings and are parsed leniently;
/// malformed values are dropped rather than rejected.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripServiceListQuery {
    /// Matches against from/to locations and the description.
    pub search_term: Option<String>,
    /// Substring filter on the origin alone.
    pub from_location: Option<String>,
    /// Substring filter on the destination alone.
    pub to_location: Option<String>,
    pub service_type: Option<ServiceType>,
    pub route_type: Option<String>,
    pub status: Option<ServiceStatus>,
    pub is_popular: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}
