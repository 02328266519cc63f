use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::server::{
    error::AppError,
    middleware::auth::AuthGuard,
    model::auth::{
        ChangePasswordDto, ForgotPasswordDto, LoginDto, RefreshDto, RegisterDto, ResetPasswordDto,
        VerifyOtpDto,
    },
    service::auth::AuthService,
    state::AppState,
};

/// POST /api/auth/register
/// Create an inactive account and email a verification code
pub async fn register(
    State(state): State<AppState>,
    Json(dto): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let ack = AuthService::new(&state.db, &state.tokens, &state.mailer)
        .register(dto)
        .await?;

    Ok((StatusCode::CREATED, Json(ack)))
}

/// POST /api/auth/verify-otp
/// Confirm the emailed code, activate the account, and issue tokens
pub async fn verify_otp(
    State(state): State<AppState>,
    Json(dto): Json<VerifyOtpDto>,
) -> Result<impl IntoResponse, AppError> {
    let response = AuthService::new(&state.db, &state.tokens, &state.mailer)
        .verify_otp(dto)
        .await?;

    Ok((StatusCode::OK, Json(response)))
}

/// POST /api/auth/login
/// Authenticate credentials and issue a token pair
pub async fn login(
    State(state): State<AppState>,
    Json(dto): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let response = AuthService::new(&state.db, &state.tokens, &state.mailer)
        .login(dto)
        .await?;

    Ok((StatusCode::OK, Json(response)))
}

/// POST /api/auth/refresh
/// Exchange a refresh token for a fresh token pair
pub async fn refresh(
    State(state): State<AppState>,
    Json(dto): Json<RefreshDto>,
) -> Result<impl IntoResponse, AppError> {
    let pair = AuthService::new(&state.db, &state.tokens, &state.mailer)
        .refresh(dto)
        .await?;

    Ok((StatusCode::OK, Json(pair)))
}

/// POST /api/auth/change-password
/// Change the caller's password after confirming the current one
pub async fn change_password(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<ChangePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers, &[])
        .await?;

    let ack = AuthService::new(&state.db, &state.tokens, &state.mailer)
        .change_password(&user, dto)
        .await?;

    Ok((StatusCode::OK, Json(ack)))
}

/// POST /api/auth/forgot-password
/// Email a password reset code
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(dto): Json<ForgotPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let ack = AuthService::new(&state.db, &state.tokens, &state.mailer)
        .forgot_password(dto)
        .await?;

    Ok((StatusCode::OK, Json(ack)))
}

/// POST /api/auth/reset-password
/// Complete a password reset with the emailed code
pub async fn reset_password(
    State(state): State<AppState>,
    Json(dto): Json<ResetPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let ack = AuthService::new(&state.db, &state.tokens, &state.mailer)
        .reset_password(dto)
        .await?;

    Ok((StatusCode::OK, Json(ack)))
}
