use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use entity::user::UserRole;

use crate::server::{
    error::AppError,
    middleware::auth::AuthGuard,
    model::content::{parse_page_kind, CreateFaqDto, UpdateFaqDto, UpsertStaticPageDto},
    service::content::ContentService,
    state::AppState,
};

/// GET /api/faqs
/// List every FAQ entry
pub async fn get_faqs(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let faqs = ContentService::new(&state.db).get_faqs().await?;

    Ok((StatusCode::OK, Json(faqs)))
}

/// POST /api/faqs
/// Admin: create an FAQ entry
pub async fn create_faq(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<CreateFaqDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens)
        .require(&headers, &[UserRole::Admin])
        .await?;

    let faq = ContentService::new(&state.db).create_faq(dto).await?;

    Ok((StatusCode::CREATED, Json(faq)))
}

/// PUT /api/faqs/{id}
/// Admin: update an FAQ entry
pub async fn update_faq(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(dto): Json<UpdateFaqDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens)
        .require(&headers, &[UserRole::Admin])
        .await?;

    let faq = ContentService::new(&state.db).update_faq(&id, dto).await?;

    Ok((StatusCode::OK, Json(faq)))
}

/// DELETE /api/faqs/{id}
/// Admin: delete an FAQ entry
pub async fn delete_faq(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens)
        .require(&headers, &[UserRole::Admin])
        .await?;

    let ack = ContentService::new(&state.db).delete_faq(&id).await?;

    Ok((StatusCode::OK, Json(ack)))
}

/// GET /api/pages/{kind}
/// Get a static page (terms, privacy, refund, about)
pub async fn get_page(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let kind = parse_page_kind(&kind)
        .ok_or_else(|| AppError::NotFound(format!("Unknown page: {}", kind)))?;

    let page = ContentService::new(&state.db).get_page(kind).await?;

    Ok((StatusCode::OK, Json(page)))
}

/// PUT /api/pages/{kind}
/// Admin: replace a static page's content
pub async fn upsert_page(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(kind): Path<String>,
    Json(dto): Json<UpsertStaticPageDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens)
        .require(&headers, &[UserRole::Admin])
        .await?;

    let kind = parse_page_kind(&kind)
        .ok_or_else(|| AppError::NotFound(format!("Unknown page: {}", kind)))?;

    let page = ContentService::new(&state.db).upsert_page(kind, dto).await?;

    Ok((StatusCode::OK, Json(page)))
}
