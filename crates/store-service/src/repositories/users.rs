//! User repository: lookup and creation against the users table.

use crate::errors::StoreError;
use crate::models::User;
use sqlx::PgPool;

/// Get user by email. Emails are unique.
pub async fn get_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, StoreError> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT user_id, email, password_hash, full_name, role, created_at
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await
    .map_err(|e| StoreError::Database(format!("Failed to fetch user by email: {}", e)))?;

    Ok(user)
}

/// Create a new user. Returns the created row.
pub async fn create_user(
    pool: &PgPool,
    email: &str,
    password_hash: &str,
    full_name: &str,
    role: &str,
) -> Result<User, StoreError> {
    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (email, password_hash, full_name, role)
        VALUES ($1, $2, $3, $4)
        RETURNING user_id, email, password_hash, full_name, role, created_at
        "#,
    )
    .bind(email)
    .bind(password_hash)
    .bind(full_name)
    .bind(role)
    .fetch_one(pool)
    .await
    .map_err(|e| StoreError::Database(format!("Failed to create user: {}", e)))?;

    Ok(user)
}

/// Whether a user with this email already exists.
pub async fn email_exists(pool: &PgPool, email: &str) -> Result<bool, StoreError> {
    let exists = sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS (SELECT 1 FROM users WHERE email = $1)",
    )
    .bind(email)
    .fetch_one(pool)
    .await
    .map_err(|e| StoreError::Database(format!("Failed to check email existence: {}", e)))?;

    Ok(exists)
}
