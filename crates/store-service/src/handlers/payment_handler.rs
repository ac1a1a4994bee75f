use super::AppState;
use crate::auth::identity::Identity;
use crate::errors::StoreError;
use crate::models::{ApiResponse, PaymentInformation, PaymentRequest};
use crate::services::{payment_service, user_service};
use axum::{extract::State, Json};
use std::sync::Arc;

/// Store payment information for the caller
///
/// POST /api/payments/add
pub async fn handle_add_payment_information(
    State(state): State<Arc<AppState>>,
    identity: Identity,
    Json(payload): Json<PaymentRequest>,
) -> Result<Json<ApiResponse>, StoreError> {
    let user = user_service::find_by_identity(&state.pool, &identity).await?;
    payment_service::add_payment_information(&state.pool, user.user_id, &payload).await?;

    Ok(Json(ApiResponse::ok("Payment information added successfully")))
}

/// List the caller's stored payment information
///
/// GET /api/payments/user
pub async fn handle_get_user_payment_information(
    State(state): State<Arc<AppState>>,
    identity: Identity,
) -> Result<Json<Vec<PaymentInformation>>, StoreError> {
    let user = user_service::find_by_identity(&state.pool, &identity).await?;
    let payments = payment_service::get_user_payment_information(&state.pool, user.user_id).await?;

    Ok(Json(payments))
}
