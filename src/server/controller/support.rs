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
    model::support::{CreateSupportTicketDto, NotificationListQuery, SupportListQuery},
    service::support::SupportService,
    state::AppState,
};

/// POST /api/support
/// Submit a support request (no authentication required)
pub async fn create_ticket(
    State(state): State<AppState>,
    Json(dto): Json<CreateSupportTicketDto>,
) -> Result<impl IntoResponse, AppError> {
    let ticket = SupportService::new(&state.db).create_ticket(dto).await?;

    Ok((StatusCode::CREATED, Json(ticket)))
}

/// GET /api/support
/// Admin: list open support tickets with search and pagination
pub async fn get_tickets(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<SupportListQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens)
        .require(&headers, &[UserRole::Admin])
        .await?;

    let page = SupportService::new(&state.db).get_all(query).await?;

    Ok((StatusCode::OK, Json(page)))
}

/// GET /api/support/{id}
/// Admin: get one support ticket by id
pub async fn get_ticket(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens)
        .require(&headers, &[UserRole::Admin])
        .await?;

    let ticket = SupportService::new(&state.db).get_by_id(&id).await?;

    Ok((StatusCode::OK, Json(ticket)))
}

/// PUT /api/support/{id}/close
/// Admin: close a support ticket
pub async fn close_ticket(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens)
        .require(&headers, &[UserRole::Admin])
        .await?;

    let ticket = SupportService::new(&state.db).close_ticket(&id).await?;

    Ok((StatusCode::OK, Json(ticket)))
}

/// GET /api/notifications
/// Admin: list notifications, newest first
pub async fn get_notifications(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<NotificationListQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens)
        .require(&headers, &[UserRole::Admin])
        .await?;

    let page = SupportService::new(&state.db).get_notifications(query).await?;

    Ok((StatusCode::OK, Json(page)))
}

/// PUT /api/notifications/{id}/read
/// Admin: mark a notification read
pub async fn mark_notification_read(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens)
        .require(&headers, &[UserRole::Admin])
        .await?;

    let notification = SupportService::new(&state.db)
        .mark_notification_read(&id)
        .await?;

    Ok((StatusCode::OK, Json(notification)))
}
