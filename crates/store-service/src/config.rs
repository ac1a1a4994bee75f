use secrecy::SecretString;
use std::collections::HashMap;
use std::env;
use thiserror::Error;

/// Default session token lifetime in milliseconds (~9.79 days).
///
/// Expiry is the only invalidation mechanism; there is no revocation list,
/// so the TTL bounds how long a stolen token stays usable.
pub const DEFAULT_SESSION_TTL_MS: i64 = 846_000_000;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    /// Symmetric signing secret for session tokens. Held in memory only.
    pub jwt_secret: SecretString,
    /// Session token lifetime in milliseconds.
    pub session_ttl_ms: i64,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&env::vars().collect())
    }

    /// Load configuration from a HashMap (for testing)
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let database_url = vars
            .get("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?
            .clone();

        let bind_address = vars
            .get("BIND_ADDRESS")
            .cloned()
            .unwrap_or_else(|| "0.0.0.0:8080".to_string());

        let jwt_secret = vars
            .get("JWT_SECRET")
            .ok_or_else(|| ConfigError::MissingEnvVar("JWT_SECRET".to_string()))?;

        if jwt_secret.len() < 32 {
            return Err(ConfigError::InvalidValue(
                "JWT_SECRET".to_string(),
                format!("expected at least 32 bytes, got {}", jwt_secret.len()),
            ));
        }

        let session_ttl_ms = match vars.get("SESSION_TTL_MS") {
            Some(raw) => raw.parse::<i64>().ok().filter(|ms| *ms > 0).ok_or_else(|| {
                ConfigError::InvalidValue(
                    "SESSION_TTL_MS".to_string(),
                    format!("expected a positive integer, got {:?}", raw),
                )
            })?,
            None => DEFAULT_SESSION_TTL_MS,
        };

        Ok(Config {
            database_url,
            bind_address,
            jwt_secret: SecretString::from(jwt_secret.clone()),
            session_ttl_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    fn test_secret() -> String {
        "an-integration-test-secret-of-sufficient-length".to_string()
    }

    #[test]
    fn test_from_vars_success() {
        let vars = HashMap::from([
            (
                "DATABASE_URL".to_string(),
                "postgresql://localhost/store".to_string(),
            ),
            ("BIND_ADDRESS".to_string(), "127.0.0.1:9000".to_string()),
            ("JWT_SECRET".to_string(), test_secret()),
            ("SESSION_TTL_MS".to_string(), "3600000".to_string()),
        ]);

        let config = Config::from_vars(&vars).expect("Config should load successfully");

        assert_eq!(config.database_url, "postgresql://localhost/store");
        assert_eq!(config.bind_address, "127.0.0.1:9000");
        assert_eq!(config.jwt_secret.expose_secret(), test_secret());
        assert_eq!(config.session_ttl_ms, 3_600_000);
    }

    #[test]
    fn test_from_vars_missing_database_url() {
        let vars = HashMap::from([("JWT_SECRET".to_string(), test_secret())]);

        let result = Config::from_vars(&vars);
        assert!(matches!(result, Err(ConfigError::MissingEnvVar(v)) if v == "DATABASE_URL"));
    }

    #[test]
    fn test_from_vars_missing_jwt_secret() {
        let vars = HashMap::from([(
            "DATABASE_URL".to_string(),
            "postgresql://localhost/store".to_string(),
        )]);

        let result = Config::from_vars(&vars);
        assert!(matches!(result, Err(ConfigError::MissingEnvVar(v)) if v == "JWT_SECRET"));
    }

    #[test]
    fn test_from_vars_jwt_secret_too_short() {
        let vars = HashMap::from([
            (
                "DATABASE_URL".to_string(),
                "postgresql://localhost/store".to_string(),
            ),
            ("JWT_SECRET".to_string(), "short".to_string()),
        ]);

        let result = Config::from_vars(&vars);
        assert!(matches!(result, Err(ConfigError::InvalidValue(v, _)) if v == "JWT_SECRET"));
    }

    #[test]
    fn test_from_vars_default_bind_address_and_ttl() {
        let vars = HashMap::from([
            (
                "DATABASE_URL".to_string(),
                "postgresql://localhost/store".to_string(),
            ),
            ("JWT_SECRET".to_string(), test_secret()),
        ]);

        let config = Config::from_vars(&vars).expect("Config should load successfully");
        assert_eq!(config.bind_address, "0.0.0.0:8080");
        assert_eq!(config.session_ttl_ms, DEFAULT_SESSION_TTL_MS);
    }

    #[test]
    fn test_from_vars_invalid_ttl() {
        let vars = HashMap::from([
            (
                "DATABASE_URL".to_string(),
                "postgresql://localhost/store".to_string(),
            ),
            ("JWT_SECRET".to_string(), test_secret()),
            ("SESSION_TTL_MS".to_string(), "-5".to_string()),
        ]);

        let result = Config::from_vars(&vars);
        assert!(matches!(result, Err(ConfigError::InvalidValue(v, _)) if v == "SESSION_TTL_MS"));
    }
}
