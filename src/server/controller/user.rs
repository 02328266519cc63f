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
    model::user::{NotificationSettingsDto, UpdateProfileDto, UserDto, UserListQuery},
    service::user::UserService,
    state::AppState,
};

/// GET /api/users/me
/// Get the caller's own profile
pub async fn get_me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers, &[])
        .await?;

    Ok((StatusCode::OK, Json(UserDto::from_entity(user))))
}

/// PUT /api/users/me
/// Apply a partial update to the caller's own profile
pub async fn update_me(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers, &[])
        .await?;

    let updated = UserService::new(&state.db).update_profile(&user.id, dto).await?;

    Ok((StatusCode::OK, Json(updated)))
}

/// GET /api/users/me/notification-settings
/// Get the caller's notification preferences
pub async fn get_notification_settings(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers, &[])
        .await?;

    Ok((
        StatusCode::OK,
        Json(NotificationSettingsDto::from_entity(&user)),
    ))
}

/// PUT /api/users/me/notification-settings
/// Replace the caller's notification preferences
pub async fn update_notification_settings(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<NotificationSettingsDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers, &[])
        .await?;

    let settings = UserService::new(&state.db)
        .update_notification_settings(&user.id, dto)
        .await?;

    Ok((StatusCode::OK, Json(settings)))
}

/// GET /api/users
/// Admin: list users with search, role/status filters, and pagination
pub async fn get_users(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<UserListQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens)
        .require(&headers, &[UserRole::Admin])
        .await?;

    let page = UserService::new(&state.db).get_all(query).await?;

    Ok((StatusCode::OK, Json(page)))
}

/// GET /api/users/{id}
/// Admin: get one user by id
pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens)
        .require(&headers, &[UserRole::Admin])
        .await?;

    let user = UserService::new(&state.db).get_by_id(&id).await?;

    Ok((StatusCode::OK, Json(user)))
}

/// DELETE /api/users/me
/// Deactivate the caller's own account
pub async fn deactivate_me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers, &[])
        .await?;

    let ack = UserService::new(&state.db).deactivate(&user.id).await?;

    Ok((StatusCode::OK, Json(ack)))
}

/// DELETE /api/users/{id}
/// Admin: delete a user account
pub async fn delete_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers, &[UserRole::Admin])
        .await?;

    let ack = UserService::new(&state.db).delete(&actor.id, &id).await?;

    Ok((StatusCode::OK, Json(ack)))
}
