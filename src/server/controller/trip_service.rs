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
    model::trip_service::{CreateTripServiceDto, TripServiceListQuery, UpdateTripServiceDto},
    service::trip_service::CatalogService,
    state::AppState,
};

/// POST /api/trip-services
/// Agent: list a new trip service
pub async fn create_trip_service(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<CreateTripServiceDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers, &[UserRole::Agent])
        .await?;

    let service = CatalogService::new(&state.db).create(&user, dto).await?;

    Ok((StatusCode::CREATED, Json(service)))
}

/// GET /api/trip-services
/// Browse the catalog with search, filters, ranges, and pagination
pub async fn get_trip_services(
    State(state): State<AppState>,
    Query(query): Query<TripServiceListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = CatalogService::new(&state.db).get_all(query).await?;

    Ok((StatusCode::OK, Json(page)))
}

/// GET /api/trip-services/mine
/// Agent: list the caller's own trip services
pub async fn get_my_trip_services(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<TripServiceListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers, &[UserRole::Agent])
        .await?;

    let page = CatalogService::new(&state.db).get_mine(&user.id, query).await?;

    Ok((StatusCode::OK, Json(page)))
}

/// GET /api/trip-services/{id}
/// Get one trip service by id
pub async fn get_trip_service(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = CatalogService::new(&state.db).get_by_id(&id).await?;

    Ok((StatusCode::OK, Json(service)))
}

/// PUT /api/trip-services/{id}
/// Update a trip service as its owner or an admin
pub async fn update_trip_service(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(dto): Json<UpdateTripServiceDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers, &[UserRole::Agent, UserRole::Admin])
        .await?;

    let service = CatalogService::new(&state.db).update(&user, &id, dto).await?;

    Ok((StatusCode::OK, Json(service)))
}

/// DELETE /api/trip-services/{id}
/// Delete a trip service as its owner or an admin
pub async fn delete_trip_service(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers, &[UserRole::Agent, UserRole::Admin])
        .await?;

    let ack = CatalogService::new(&state.db).delete(&user, &id).await?;

    Ok((StatusCode::OK, Json(ack)))
}
