pub mod auth_handler;
pub mod cart_handler;
pub mod cart_item_handler;
pub mod payment_handler;
pub mod rating_handler;
pub mod review_handler;
pub mod user_handler;

use crate::auth::tokens::JwtKeys;
use crate::config::Config;
use sqlx::PgPool;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Config,
    pub keys: Arc<JwtKeys>,
}
