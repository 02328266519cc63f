use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use entity::user::UserRole;

use crate::server::{
    error::AppError,
    middleware::auth::AuthGuard,
    model::vehicle::{CreateVehicleDto, UpdateVehicleDto, VehicleListQuery},
    service::vehicle::VehicleService,
    state::AppState,
};

/// POST /api/vehicles
/// Admin: add a vehicle to the fleet
pub async fn create_vehicle(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<CreateVehicleDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens)
        .require(&headers, &[UserRole::Admin])
        .await?;

    let vehicle = VehicleService::new(&state.db).create(dto).await?;

    Ok((StatusCode::CREATED, Json(vehicle)))
}

/// GET /api/vehicles
/// Browse the fleet with search, filters, and pagination
pub async fn get_vehicles(
    State(state): State<AppState>,
    Query(query): Query<VehicleListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = VehicleService::new(&state.db).get_all(query).await?;

    Ok((StatusCode::OK, Json(page)))
}

/// GET /api/vehicles/{id}
/// Get one vehicle by id
pub async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let vehicle = VehicleService::new(&state.db).get_by_id(&id).await?;

    Ok((StatusCode::OK, Json(vehicle)))
}

/// PUT /api/vehicles/{id}
/// Admin: update a vehicle
pub async fn update_vehicle(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(dto): Json<UpdateVehicleDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens)
        .require(&headers, &[UserRole::Admin])
        .await?;

    let vehicle = VehicleService::new(&state.db).update(&id, dto).await?;

    Ok((StatusCode::OK, Json(vehicle)))
}

/// DELETE /api/vehicles/{id}
/// Admin: remove a vehicle from the fleet
pub async fn delete_vehicle(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens)
        .require(&headers, &[UserRole::Admin])
        .await?;

    let ack = VehicleService::new(&state.db).delete(&id).await?;

    Ok((StatusCode::OK, Json(ack)))
}
