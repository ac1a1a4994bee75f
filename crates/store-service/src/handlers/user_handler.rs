use super::AppState;
use crate::errors::StoreError;
use crate::models::UserProfile;
use crate::services::user_service;
use axum::{extract::State, http::HeaderMap, Json};
use std::sync::Arc;

/// Fetch the caller's profile from the raw Authorization header
///
/// GET /api/users/profile
///
/// Resolves the user from the presented token itself rather than from the
/// middleware-bound identity, so an invalid token surfaces as INVALID_TOKEN
/// here instead of the generic missing-identity rejection.
pub async fn handle_get_user_profile(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<UserProfile>, StoreError> {
    let bearer = headers
        .get("authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or(StoreError::Unauthorized)?;

    let user = user_service::find_by_token(&state.pool, &state.keys, bearer).await?;

    Ok(Json(UserProfile::from(user)))
}
