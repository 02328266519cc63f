use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use entity::user::UserRole;

use crate::server::{
    error::AppError,
    middleware::auth::AuthGuard,
    model::payment::{OnboardingDto, PaymentListQuery},
    service::payment::PaymentService,
    state::AppState,
};

/// POST /api/payments/onboard
/// Agent: start or resume Stripe Connect onboarding
pub async fn onboard(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers, &[UserRole::Agent])
        .await?;

    let outcome = PaymentService::new(&state.db, &state.stripe, &state.app_url)
        .onboard(&user)
        .await?;

    Ok((StatusCode::OK, Json(OnboardingDto::from_state(outcome))))
}

/// GET /api/payments/my-transactions
/// Get the caller's own payment history
pub async fn get_my_transactions(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<PaymentListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers, &[])
        .await?;

    let page = PaymentService::new(&state.db, &state.stripe, &state.app_url)
        .my_transactions(&user.id, query)
        .await?;

    Ok((StatusCode::OK, Json(page)))
}

/// GET /api/payments
/// Admin: list payments with status filter and pagination
pub async fn get_payments(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<PaymentListQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens)
        .require(&headers, &[UserRole::Admin])
        .await?;

    let page = PaymentService::new(&state.db, &state.stripe, &state.app_url)
        .get_all(query)
        .await?;

    Ok((StatusCode::OK, Json(page)))
}
