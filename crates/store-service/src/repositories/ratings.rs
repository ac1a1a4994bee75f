//! Rating repository.

use crate::errors::StoreError;
use crate::models::Rating;
use sqlx::PgPool;
use uuid::Uuid;

/// Insert a rating for a product.
pub async fn create(
    pool: &PgPool,
    user_id: Uuid,
    product_id: Uuid,
    rating: f64,
) -> Result<Rating, StoreError> {
    let row = sqlx::query_as::<_, Rating>(
        r#"
        INSERT INTO ratings (user_id, product_id, rating)
        VALUES ($1, $2, $3)
        RETURNING rating_id, user_id, product_id, rating, created_at
        "#,
    )
    .bind(user_id)
    .bind(product_id)
    .bind(rating)
    .fetch_one(pool)
    .await
    .map_err(|e| StoreError::Database(format!("Failed to create rating: {}", e)))?;

    Ok(row)
}

/// List all ratings for a product, newest first.
pub async fn list_by_product(pool: &PgPool, product_id: Uuid) -> Result<Vec<Rating>, StoreError> {
    let rows = sqlx::query_as::<_, Rating>(
        r#"
        SELECT rating_id, user_id, product_id, rating, created_at
        FROM ratings
        WHERE product_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(product_id)
    .fetch_all(pool)
    .await
    .map_err(|e| StoreError::Database(format!("Failed to list ratings: {}", e)))?;

    Ok(rows)
}
