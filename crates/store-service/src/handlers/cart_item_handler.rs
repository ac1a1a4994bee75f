use super::AppState;
use crate::auth::identity::Identity;
use crate::errors::StoreError;
use crate::models::{ApiResponse, CartItem, UpdateCartItemRequest};
use crate::services::{cart_item_service, user_service};
use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

/// Update the quantity of a cart item owned by the caller
///
/// PUT /api/cart_items/{cart_item_id}
pub async fn handle_update_cart_item(
    State(state): State<Arc<AppState>>,
    identity: Identity,
    Path(cart_item_id): Path<Uuid>,
    Json(payload): Json<UpdateCartItemRequest>,
) -> Result<Json<CartItem>, StoreError> {
    let user = user_service::find_by_identity(&state.pool, &identity).await?;
    let updated =
        cart_item_service::update_cart_item(&state.pool, user.user_id, cart_item_id, payload.quantity)
            .await?;

    Ok(Json(updated))
}

/// Remove a cart item owned by the caller
///
/// DELETE /api/cart_items/{cart_item_id}
pub async fn handle_delete_cart_item(
    State(state): State<Arc<AppState>>,
    identity: Identity,
    Path(cart_item_id): Path<Uuid>,
) -> Result<Json<ApiResponse>, StoreError> {
    let user = user_service::find_by_identity(&state.pool, &identity).await?;
    cart_item_service::remove_cart_item(&state.pool, user.user_id, cart_item_id).await?;

    Ok(Json(ApiResponse::ok("Item removed from cart")))
}
