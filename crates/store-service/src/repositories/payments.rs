//! Payment information repository.

use crate::errors::StoreError;
use crate::models::PaymentInformation;
use sqlx::PgPool;
use uuid::Uuid;

/// Store payment information for a user.
pub async fn create(
    pool: &PgPool,
    user_id: Uuid,
    cardholder_name: &str,
    card_number: &str,
    expiration_date: &str,
) -> Result<PaymentInformation, StoreError> {
    let row = sqlx::query_as::<_, PaymentInformation>(
        r#"
        INSERT INTO payment_information (user_id, cardholder_name, card_number, expiration_date)
        VALUES ($1, $2, $3, $4)
        RETURNING payment_id, user_id, cardholder_name, card_number, expiration_date, created_at
        "#,
    )
    .bind(user_id)
    .bind(cardholder_name)
    .bind(card_number)
    .bind(expiration_date)
    .fetch_one(pool)
    .await
    .map_err(|e| StoreError::Database(format!("Failed to store payment information: {}", e)))?;

    Ok(row)
}

/// List a user's stored payment information, oldest first.
pub async fn list_by_user(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<PaymentInformation>, StoreError> {
    let rows = sqlx::query_as::<_, PaymentInformation>(
        r#"
        SELECT payment_id, user_id, cardholder_name, card_number, expiration_date, created_at
        FROM payment_information
        WHERE user_id = $1
        ORDER BY created_at
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
    .map_err(|e| StoreError::Database(format!("Failed to list payment information: {}", e)))?;

    Ok(rows)
}
