use super::AppState;
use crate::auth::identity::Identity;
use crate::errors::StoreError;
use crate::models::{Rating, RatingRequest};
use crate::services::{rating_service, user_service};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

/// Create a rating for a product
///
/// POST /api/ratings/create
pub async fn handle_create_rating(
    State(state): State<Arc<AppState>>,
    identity: Identity,
    Json(payload): Json<RatingRequest>,
) -> Result<(StatusCode, Json<Rating>), StoreError> {
    let user = user_service::find_by_identity(&state.pool, &identity).await?;
    let rating = rating_service::create_rating(&state.pool, user.user_id, &payload).await?;

    Ok((StatusCode::CREATED, Json(rating)))
}

/// List ratings for a product (public)
///
/// GET /api/ratings/product/{product_id}
pub async fn handle_get_product_ratings(
    State(state): State<Arc<AppState>>,
    Path(product_id): Path<Uuid>,
) -> Result<Json<Vec<Rating>>, StoreError> {
    let ratings = rating_service::get_product_ratings(&state.pool, product_id).await?;

    Ok(Json(ratings))
}
