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
    model::blog::{BlogListQuery, CreateBlogDto, UpdateBlogDto},
    service::blog::BlogService,
    state::AppState,
};

/// POST /api/blogs
/// Admin: publish a blog post
pub async fn create_blog(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<CreateBlogDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens)
        .require(&headers, &[UserRole::Admin])
        .await?;

    let blog = BlogService::new(&state.db).create(dto).await?;

    Ok((StatusCode::CREATED, Json(blog)))
}

/// GET /api/blogs
/// Browse blog posts with search, category filter, and pagination
pub async fn get_blogs(
    State(state): State<AppState>,
    Query(query): Query<BlogListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = BlogService::new(&state.db).get_all(query).await?;

    Ok((StatusCode::OK, Json(page)))
}

/// GET /api/blogs/{id}
/// Get one blog post by id
pub async fn get_blog(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let blog = BlogService::new(&state.db).get_by_id(&id).await?;

    Ok((StatusCode::OK, Json(blog)))
}

/// PUT /api/blogs/{id}
/// Admin: update a blog post
pub async fn update_blog(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(dto): Json<UpdateBlogDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens)
        .require(&headers, &[UserRole::Admin])
        .await?;

    let blog = BlogService::new(&state.db).update(&id, dto).await?;

    Ok((StatusCode::OK, Json(blog)))
}

/// DELETE /api/blogs/{id}
/// Admin: delete a blog post
pub async fn delete_blog(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens)
        .require(&headers, &[UserRole::Admin])
        .await?;

    let ack = BlogService::new(&state.db).delete(&id).await?;

    Ok((StatusCode::OK, Json(ack)))
}
