//! Cart item business logic: updates and removals with ownership checks.

use crate::errors::StoreError;
use crate::models::CartItem;
use crate::repositories::cart_items;
use sqlx::PgPool;
use uuid::Uuid;

/// Update the quantity of a cart item owned by `user_id`.
pub async fn update_cart_item(
    pool: &PgPool,
    user_id: Uuid,
    cart_item_id: Uuid,
    quantity: i32,
) -> Result<CartItem, StoreError> {
    if quantity <= 0 {
        return Err(StoreError::BadRequest(
            "Quantity must be positive".to_string(),
        ));
    }

    owned_item(pool, user_id, cart_item_id).await?;
    cart_items::update_quantity(pool, cart_item_id, quantity).await
}

/// Remove a cart item owned by `user_id`.
pub async fn remove_cart_item(
    pool: &PgPool,
    user_id: Uuid,
    cart_item_id: Uuid,
) -> Result<(), StoreError> {
    owned_item(pool, user_id, cart_item_id).await?;
    cart_items::delete_by_id(pool, cart_item_id).await
}

/// Fetch an item and verify it belongs to the requesting user.
async fn owned_item(
    pool: &PgPool,
    user_id: Uuid,
    cart_item_id: Uuid,
) -> Result<CartItem, StoreError> {
    let item = cart_items::get_by_id(pool, cart_item_id)
        .await?
        .ok_or_else(|| StoreError::NotFound("Cart item".to_string()))?;

    if item.user_id != user_id {
        return Err(StoreError::Forbidden(
            "Cart item belongs to another user".to_string(),
        ));
    }

    Ok(item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AddItemRequest;
    use crate::repositories::users;
    use crate::services::cart_service;

    async fn seed_user_with_item(
        pool: &PgPool,
        email: &str,
    ) -> Result<(Uuid, Uuid), StoreError> {
        let user =
            users::create_user(pool, email, "not-a-real-hash", "Test User", "ROLE_USER").await?;

        let req = AddItemRequest {
            product_id: Uuid::new_v4(),
            size: "M".to_string(),
            quantity: 2,
            unit_price: 999,
        };
        cart_service::add_cart_item(pool, user.user_id, &req).await?;

        let view = cart_service::find_user_cart(pool, user.user_id).await?;
        let item_id = view.items[0].cart_item_id;

        Ok((user.user_id, item_id))
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_owner_can_update_quantity(pool: PgPool) -> Result<(), StoreError> {
        let (user_id, item_id) = seed_user_with_item(&pool, "owner@example.com").await?;

        let updated = update_cart_item(&pool, user_id, item_id, 7).await?;
        assert_eq!(updated.quantity, 7);

        Ok(())
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_update_by_non_owner_is_forbidden(pool: PgPool) -> Result<(), StoreError> {
        let (_owner, item_id) = seed_user_with_item(&pool, "victim@example.com").await?;
        let intruder =
            users::create_user(&pool, "intruder@example.com", "hash", "Intruder", "ROLE_USER")
                .await?;

        let result = update_cart_item(&pool, intruder.user_id, item_id, 1).await;
        assert!(matches!(result, Err(StoreError::Forbidden(_))));

        Ok(())
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_remove_by_non_owner_is_forbidden(pool: PgPool) -> Result<(), StoreError> {
        let (_owner, item_id) = seed_user_with_item(&pool, "victim2@example.com").await?;
        let intruder =
            users::create_user(&pool, "intruder2@example.com", "hash", "Intruder", "ROLE_USER")
                .await?;

        let result = remove_cart_item(&pool, intruder.user_id, item_id).await;
        assert!(matches!(result, Err(StoreError::Forbidden(_))));

        Ok(())
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_owner_can_remove_item(pool: PgPool) -> Result<(), StoreError> {
        let (user_id, item_id) = seed_user_with_item(&pool, "remover@example.com").await?;

        remove_cart_item(&pool, user_id, item_id).await?;
        assert!(cart_items::get_by_id(&pool, item_id).await?.is_none());

        Ok(())
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_missing_item_is_not_found(pool: PgPool) -> Result<(), StoreError> {
        let (user_id, _item) = seed_user_with_item(&pool, "ghost@example.com").await?;

        let result = remove_cart_item(&pool, user_id, Uuid::new_v4()).await;
        assert!(matches!(result, Err(StoreError::NotFound(_))));

        Ok(())
    }
}
