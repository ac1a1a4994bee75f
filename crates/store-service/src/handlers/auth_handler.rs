use super::AppState;
use crate::errors::StoreError;
use crate::models::{SigninRequest, SignupRequest, TokenResponse};
use crate::services::auth_service;
use axum::{extract::State, Json};
use std::sync::Arc;

/// Handle user registration
///
/// POST /api/auth/signup
pub async fn handle_signup(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SignupRequest>,
) -> Result<Json<TokenResponse>, StoreError> {
    let token = auth_service::signup(
        &state.pool,
        &state.keys,
        state.config.session_ttl_ms,
        &payload.email,
        &payload.password,
        &payload.full_name,
    )
    .await?;

    Ok(Json(token))
}

/// Handle user login
///
/// POST /api/auth/signin
pub async fn handle_signin(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SigninRequest>,
) -> Result<Json<TokenResponse>, StoreError> {
    let token = auth_service::signin(
        &state.pool,
        &state.keys,
        state.config.session_ttl_ms,
        &payload.email,
        &payload.password,
    )
    .await?;

    Ok(Json(token))
}
