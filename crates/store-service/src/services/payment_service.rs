//! Payment information business logic.

use crate::errors::StoreError;
use crate::models::{PaymentInformation, PaymentRequest};
use crate::repositories::payments;
use sqlx::PgPool;
use uuid::Uuid;

/// Store payment information for a user.
pub async fn add_payment_information(
    pool: &PgPool,
    user_id: Uuid,
    req: &PaymentRequest,
) -> Result<PaymentInformation, StoreError> {
    if req.card_number.trim().is_empty() || req.cardholder_name.trim().is_empty() {
        return Err(StoreError::BadRequest(
            "Cardholder name and card number are required".to_string(),
        ));
    }

    payments::create(
        pool,
        user_id,
        &req.cardholder_name,
        &req.card_number,
        &req.expiration_date,
    )
    .await
}

/// A user's stored payment information.
pub async fn get_user_payment_information(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<PaymentInformation>, StoreError> {
    payments::list_by_user(pool, user_id).await
}
