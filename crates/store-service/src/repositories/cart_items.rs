//! Cart item repository.

use crate::errors::StoreError;
use crate::models::CartItem;
use sqlx::PgPool;
use uuid::Uuid;

/// List the items in a cart, oldest first.
pub async fn list_by_cart(pool: &PgPool, cart_id: Uuid) -> Result<Vec<CartItem>, StoreError> {
    let items = sqlx::query_as::<_, CartItem>(
        r#"
        SELECT cart_item_id, cart_id, user_id, product_id, size, quantity, unit_price, created_at
        FROM cart_items
        WHERE cart_id = $1
        ORDER BY created_at
        "#,
    )
    .bind(cart_id)
    .fetch_all(pool)
    .await
    .map_err(|e| StoreError::Database(format!("Failed to list cart items: {}", e)))?;

    Ok(items)
}

/// Get a single cart item by id.
pub async fn get_by_id(pool: &PgPool, cart_item_id: Uuid) -> Result<Option<CartItem>, StoreError> {
    let item = sqlx::query_as::<_, CartItem>(
        r#"
        SELECT cart_item_id, cart_id, user_id, product_id, size, quantity, unit_price, created_at
        FROM cart_items
        WHERE cart_item_id = $1
        "#,
    )
    .bind(cart_item_id)
    .fetch_optional(pool)
    .await
    .map_err(|e| StoreError::Database(format!("Failed to fetch cart item: {}", e)))?;

    Ok(item)
}

/// Insert a cart line, or bump the quantity when the same product and size
/// is already in the cart.
pub async fn upsert_item(
    pool: &PgPool,
    cart_id: Uuid,
    user_id: Uuid,
    product_id: Uuid,
    size: &str,
    quantity: i32,
    unit_price: i64,
) -> Result<CartItem, StoreError> {
    let item = sqlx::query_as::<_, CartItem>(
        r#"
        INSERT INTO cart_items (cart_id, user_id, product_id, size, quantity, unit_price)
        VALUES ($1, $2, $3, $4, $5, $6)
        ON CONFLICT (cart_id, product_id, size)
        DO UPDATE SET quantity = cart_items.quantity + EXCLUDED.quantity,
                      unit_price = EXCLUDED.unit_price
        RETURNING cart_item_id, cart_id, user_id, product_id, size, quantity, unit_price, created_at
        "#,
    )
    .bind(cart_id)
    .bind(user_id)
    .bind(product_id)
    .bind(size)
    .bind(quantity)
    .bind(unit_price)
    .fetch_one(pool)
    .await
    .map_err(|e| StoreError::Database(format!("Failed to upsert cart item: {}", e)))?;

    Ok(item)
}

/// Set the quantity of a cart item. Returns the updated row.
pub async fn update_quantity(
    pool: &PgPool,
    cart_item_id: Uuid,
    quantity: i32,
) -> Result<CartItem, StoreError> {
    let item = sqlx::query_as::<_, CartItem>(
        r#"
        UPDATE cart_items SET quantity = $2
        WHERE cart_item_id = $1
        RETURNING cart_item_id, cart_id, user_id, product_id, size, quantity, unit_price, created_at
        "#,
    )
    .bind(cart_item_id)
    .bind(quantity)
    .fetch_one(pool)
    .await
    .map_err(|e| StoreError::Database(format!("Failed to update cart item: {}", e)))?;

    Ok(item)
}

/// Delete a cart item by id.
pub async fn delete_by_id(pool: &PgPool, cart_item_id: Uuid) -> Result<(), StoreError> {
    sqlx::query("DELETE FROM cart_items WHERE cart_item_id = $1")
        .bind(cart_item_id)
        .execute(pool)
        .await
        .map_err(|e| StoreError::Database(format!("Failed to delete cart item: {}", e)))?;

    Ok(())
}
