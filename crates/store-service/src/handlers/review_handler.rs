use super::AppState;
use crate::auth::identity::Identity;
use crate::errors::StoreError;
use crate::models::{Review, ReviewRequest};
use crate::services::{review_service, user_service};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

/// Create a review for a product
///
/// POST /api/reviews/create
pub async fn handle_create_review(
    State(state): State<Arc<AppState>>,
    identity: Identity,
    Json(payload): Json<ReviewRequest>,
) -> Result<(StatusCode, Json<Review>), StoreError> {
    let user = user_service::find_by_identity(&state.pool, &identity).await?;
    let review = review_service::create_review(&state.pool, user.user_id, &payload).await?;

    Ok((StatusCode::CREATED, Json(review)))
}

/// List reviews for a product (public)
///
/// GET /api/reviews/product/{product_id}
pub async fn handle_get_product_reviews(
    State(state): State<Arc<AppState>>,
    Path(product_id): Path<Uuid>,
) -> Result<Json<Vec<Review>>, StoreError> {
    let reviews = review_service::get_product_reviews(&state.pool, product_id).await?;

    Ok(Json(reviews))
}
