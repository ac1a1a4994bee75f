//! Review business logic.

use crate::errors::StoreError;
use crate::models::{Review, ReviewRequest};
use crate::repositories::reviews;
use sqlx::PgPool;
use uuid::Uuid;

/// Create a review for a product on behalf of a user.
pub async fn create_review(
    pool: &PgPool,
    user_id: Uuid,
    req: &ReviewRequest,
) -> Result<Review, StoreError> {
    if req.review.trim().is_empty() {
        return Err(StoreError::BadRequest(
            "Review text must not be empty".to_string(),
        ));
    }

    reviews::create(pool, user_id, req.product_id, &req.review).await
}

/// All reviews for a product.
pub async fn get_product_reviews(
    pool: &PgPool,
    product_id: Uuid,
) -> Result<Vec<Review>, StoreError> {
    reviews::list_by_product(pool, product_id).await
}
