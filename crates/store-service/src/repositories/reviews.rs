//! Review repository.

use crate::errors::StoreError;
use crate::models::Review;
use sqlx::PgPool;
use uuid::Uuid;

/// Insert a review for a product.
pub async fn create(
    pool: &PgPool,
    user_id: Uuid,
    product_id: Uuid,
    review: &str,
) -> Result<Review, StoreError> {
    let row = sqlx::query_as::<_, Review>(
        r#"
        INSERT INTO reviews (user_id, product_id, review)
        VALUES ($1, $2, $3)
        RETURNING review_id, user_id, product_id, review, created_at
        "#,
    )
    .bind(user_id)
    .bind(product_id)
    .bind(review)
    .fetch_one(pool)
    .await
    .map_err(|e| StoreError::Database(format!("Failed to create review: {}", e)))?;

    Ok(row)
}

/// List all reviews for a product, newest first.
pub async fn list_by_product(pool: &PgPool, product_id: Uuid) -> Result<Vec<Review>, StoreError> {
    let rows = sqlx::query_as::<_, Review>(
        r#"
        SELECT review_id, user_id, product_id, review, created_at
        FROM reviews
        WHERE product_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(product_id)
    .fetch_all(pool)
    .await
    .map_err(|e| StoreError::Database(format!("Failed to list reviews: {}", e)))?;

    Ok(rows)
}
