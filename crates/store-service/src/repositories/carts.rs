//! Cart repository. Each user has at most one cart.

use crate::errors::StoreError;
use crate::models::Cart;
use sqlx::PgPool;
use uuid::Uuid;

/// Get a user's cart, if one exists.
pub async fn get_by_user(pool: &PgPool, user_id: Uuid) -> Result<Option<Cart>, StoreError> {
    let cart = sqlx::query_as::<_, Cart>(
        "SELECT cart_id, user_id FROM carts WHERE user_id = $1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
    .map_err(|e| StoreError::Database(format!("Failed to fetch cart: {}", e)))?;

    Ok(cart)
}

/// Create a cart for a user. The unique constraint on user_id makes this a
/// no-op returning the existing row when one is already present.
pub async fn create_for_user(pool: &PgPool, user_id: Uuid) -> Result<Cart, StoreError> {
    let cart = sqlx::query_as::<_, Cart>(
        r#"
        INSERT INTO carts (user_id)
        VALUES ($1)
        ON CONFLICT (user_id) DO UPDATE SET user_id = EXCLUDED.user_id
        RETURNING cart_id, user_id
        "#,
    )
    .bind(user_id)
    .fetch_one(pool)
    .await
    .map_err(|e| StoreError::Database(format!("Failed to create cart: {}", e)))?;

    Ok(cart)
}
