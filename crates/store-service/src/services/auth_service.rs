//! Signup and signin: the only paths that issue session tokens.

use crate::auth::tokens::{self, JwtKeys};
use crate::errors::StoreError;
use crate::models::TokenResponse;
use crate::repositories::{carts, users};
use chrono::Duration;
use sqlx::PgPool;

/// Role granted to self-registered users.
const DEFAULT_ROLE: &str = "ROLE_USER";

/// Bcrypt cost factor for password hashing (~200ms per hash).
const BCRYPT_COST: u32 = 12;

/// Register a new user and issue a session token.
///
/// Creates the user with the default role and an empty cart. A duplicate
/// email is a conflict, reported before the expensive hash.
pub async fn signup(
    pool: &PgPool,
    keys: &JwtKeys,
    session_ttl_ms: i64,
    email: &str,
    password: &str,
    full_name: &str,
) -> Result<TokenResponse, StoreError> {
    if users::email_exists(pool, email).await? {
        return Err(StoreError::Conflict(
            "An account with this email already exists".to_string(),
        ));
    }

    let password_hash = bcrypt::hash(password, BCRYPT_COST)
        .map_err(|e| StoreError::Crypto(format!("Password hashing failed: {}", e)))?;

    let user = users::create_user(pool, email, &password_hash, full_name, DEFAULT_ROLE).await?;
    carts::create_for_user(pool, user.user_id).await?;

    tracing::info!(user_id = %user.user_id, "User registered");

    issue_session(keys, session_ttl_ms, &user.email, &user.role)
}

/// Authenticate with email and password and issue a session token.
///
/// Unknown email and wrong password are indistinguishable to the caller.
pub async fn signin(
    pool: &PgPool,
    keys: &JwtKeys,
    session_ttl_ms: i64,
    email: &str,
    password: &str,
) -> Result<TokenResponse, StoreError> {
    // Dummy hash keeps the bcrypt cost constant when the email is unknown.
    const DUMMY_HASH: &str = "$2b$12$LQv3c1yqBWVHxkd0LHAkCOYz6TtxMQJqhN8/LewY5GyYqExt7YD3a";

    let user = users::get_by_email(pool, email).await?;

    let hash_to_verify = match &user {
        Some(u) => u.password_hash.as_str(),
        None => DUMMY_HASH,
    };

    let is_valid = bcrypt::verify(password, hash_to_verify)
        .map_err(|e| StoreError::Crypto(format!("Password verification failed: {}", e)))?;

    let user = user.ok_or(StoreError::InvalidCredentials)?;
    if !is_valid {
        return Err(StoreError::InvalidCredentials);
    }

    issue_session(keys, session_ttl_ms, &user.email, &user.role)
}

fn issue_session(
    keys: &JwtKeys,
    session_ttl_ms: i64,
    email: &str,
    role: &str,
) -> Result<TokenResponse, StoreError> {
    let authorities = vec![role.to_string()];
    let ttl = Duration::milliseconds(session_ttl_ms);
    let access_token = tokens::issue_token(keys, email, &authorities, ttl)?;

    Ok(TokenResponse {
        access_token,
        token_type: "Bearer".to_string(),
        expires_in: (session_ttl_ms / 1000).max(0) as u64,
    })
}
