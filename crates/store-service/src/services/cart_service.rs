//! Cart business logic.

use crate::errors::StoreError;
use crate::models::{AddItemRequest, CartView};
use crate::repositories::{cart_items, carts};
use sqlx::PgPool;
use uuid::Uuid;

/// Fetch a user's cart with its items and computed totals.
///
/// Users registered before carts existed get one created lazily.
pub async fn find_user_cart(pool: &PgPool, user_id: Uuid) -> Result<CartView, StoreError> {
    let cart = match carts::get_by_user(pool, user_id).await? {
        Some(cart) => cart,
        None => carts::create_for_user(pool, user_id).await?,
    };

    let items = cart_items::list_by_cart(pool, cart.cart_id).await?;
    Ok(CartView::new(cart, items))
}

/// Add an item to a user's cart.
///
/// Adding the same product and size again increments the quantity rather
/// than creating a second line.
pub async fn add_cart_item(
    pool: &PgPool,
    user_id: Uuid,
    req: &AddItemRequest,
) -> Result<(), StoreError> {
    if req.quantity <= 0 {
        return Err(StoreError::BadRequest(
            "Quantity must be positive".to_string(),
        ));
    }

    let cart = match carts::get_by_user(pool, user_id).await? {
        Some(cart) => cart,
        None => carts::create_for_user(pool, user_id).await?,
    };

    cart_items::upsert_item(
        pool,
        cart.cart_id,
        user_id,
        req.product_id,
        &req.size,
        req.quantity,
        req.unit_price,
    )
    .await?;

    Ok(())
}
