use crate::handlers::{
    auth_handler, cart_handler, cart_item_handler, payment_handler, rating_handler,
    review_handler, user_handler, AppState,
};
use crate::middleware::auth::{authenticate, AuthState};
use axum::{
    middleware::from_fn_with_state,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Build the application router.
///
/// The authentication middleware wraps every route. It only binds identity,
/// never rejects; routes that need a caller extract `Identity` themselves,
/// which is what keeps the auth endpoints and the public product listings
/// reachable without a token.
pub fn build_routes(state: Arc<AppState>) -> Router {
    let auth_state = AuthState {
        keys: state.keys.clone(),
    };

    Router::new()
        // Public authentication endpoints
        .route("/api/auth/signup", post(auth_handler::handle_signup))
        .route("/api/auth/signin", post(auth_handler::handle_signin))
        // User profile
        .route(
            "/api/users/profile",
            get(user_handler::handle_get_user_profile),
        )
        // Cart
        .route("/api/cart", get(cart_handler::handle_find_user_cart))
        .route("/api/cart/add", put(cart_handler::handle_add_item_to_cart))
        // Cart items
        .route(
            "/api/cart_items/:cart_item_id",
            put(cart_item_handler::handle_update_cart_item)
                .delete(cart_item_handler::handle_delete_cart_item),
        )
        // Payments
        .route(
            "/api/payments/add",
            post(payment_handler::handle_add_payment_information),
        )
        .route(
            "/api/payments/user",
            get(payment_handler::handle_get_user_payment_information),
        )
        // Ratings
        .route("/api/ratings/create", post(rating_handler::handle_create_rating))
        .route(
            "/api/ratings/product/:product_id",
            get(rating_handler::handle_get_product_ratings),
        )
        // Reviews
        .route("/api/reviews/create", post(review_handler::handle_create_review))
        .route(
            "/api/reviews/product/:product_id",
            get(review_handler::handle_get_product_reviews),
        )
        // Health check
        .route("/health", get(health_check))
        // Bearer token authentication (binds identity, never rejects)
        .layer(from_fn_with_state(auth_state, authenticate))
        // Request tracing
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
