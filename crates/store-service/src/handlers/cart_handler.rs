use super::AppState;
use crate::auth::identity::Identity;
use crate::errors::StoreError;
use crate::models::{AddItemRequest, ApiResponse, CartView};
use crate::services::{cart_service, user_service};
use axum::{extract::State, Json};
use std::sync::Arc;

/// Fetch the caller's cart with items and totals
///
/// GET /api/cart
pub async fn handle_find_user_cart(
    State(state): State<Arc<AppState>>,
    identity: Identity,
) -> Result<Json<CartView>, StoreError> {
    let user = user_service::find_by_identity(&state.pool, &identity).await?;
    let cart = cart_service::find_user_cart(&state.pool, user.user_id).await?;

    Ok(Json(cart))
}

/// Add an item to the caller's cart
///
/// PUT /api/cart/add
pub async fn handle_add_item_to_cart(
    State(state): State<Arc<AppState>>,
    identity: Identity,
    Json(payload): Json<AddItemRequest>,
) -> Result<Json<ApiResponse>, StoreError> {
    let user = user_service::find_by_identity(&state.pool, &identity).await?;
    cart_service::add_cart_item(&state.pool, user.user_id, &payload).await?;

    Ok(Json(ApiResponse::ok("Item added to cart")))
}
