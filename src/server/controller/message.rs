use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::server::{
    error::AppError,
    middleware::auth::AuthGuard,
    model::{
        channel::ChannelListQuery,
        message::{HistoryQuery, SendMessageDto},
    },
    service::message::MessageService,
    state::AppState,
};

/// POST /api/messages
/// Send a message and return the conversation's full history, newest first
pub async fn send_message(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<SendMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers, &[])
        .await?;

    let history = MessageService::new(&state.db).send(&user.id, dto).await?;

    Ok((StatusCode::CREATED, Json(history)))
}

/// GET /api/channels
/// List the caller's conversations, most recently active first
pub async fn get_channels(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ChannelListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers, &[])
        .await?;

    let page = MessageService::new(&state.db).my_channels(&user.id, query).await?;

    Ok((StatusCode::OK, Json(page)))
}

/// GET /api/channels/{id}
/// Get one conversation with its full thread, oldest first
pub async fn get_channel(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers, &[])
        .await?;

    let channel = MessageService::new(&state.db).get_channel(&user.id, &id).await?;

    Ok((StatusCode::OK, Json(channel)))
}

/// GET /api/messages/{counterpart_id}
/// Get the message history shared with one counterpart, newest first
pub async fn get_history(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(counterpart_id): Path<String>,
    Query(query): Query<HistoryQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers, &[])
        .await?;

    let page = MessageService::new(&state.db)
        .get_history(&user.id, &counterpart_id, query)
        .await?;

    Ok((StatusCode::OK, Json(page)))
}
