//! Rating business logic.

use crate::errors::StoreError;
use crate::models::{Rating, RatingRequest};
use crate::repositories::ratings;
use sqlx::PgPool;
use uuid::Uuid;

/// Create a rating for a product on behalf of a user.
pub async fn create_rating(
    pool: &PgPool,
    user_id: Uuid,
    req: &RatingRequest,
) -> Result<Rating, StoreError> {
    if !(0.0..=5.0).contains(&req.rating) {
        return Err(StoreError::BadRequest(
            "Rating must be between 0 and 5".to_string(),
        ));
    }

    ratings::create(pool, user_id, req.product_id, req.rating).await
}

/// All ratings for a product.
pub async fn get_product_ratings(
    pool: &PgPool,
    product_id: Uuid,
) -> Result<Vec<Rating>, StoreError> {
    ratings::list_by_product(pool, product_id).await
}
