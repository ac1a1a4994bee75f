//! Resolving the request identity to a user row.

use crate::auth::identity::Identity;
use crate::auth::tokens::{self, JwtKeys};
use crate::errors::StoreError;
use crate::models::User;
use crate::repositories::users;
use sqlx::PgPool;

/// Look up the user record behind a verified request identity.
///
/// An identity whose subject no longer maps to a user row (deleted account
/// with a still-valid token) is a 401, not a 500.
pub async fn find_by_identity(pool: &PgPool, identity: &Identity) -> Result<User, StoreError> {
    users::get_by_email(pool, &identity.email)
        .await?
        .ok_or(StoreError::Unauthorized)
}

/// Look up the user profile behind a raw Authorization header value.
///
/// Verifies the token (with or without its `Bearer ` prefix) and resolves
/// the embedded email.
pub async fn find_by_token(
    pool: &PgPool,
    keys: &JwtKeys,
    token: &str,
) -> Result<User, StoreError> {
    let email = tokens::email_from_token(keys, token)?;
    users::get_by_email(pool, &email)
        .await?
        .ok_or(StoreError::Unauthorized)
}
