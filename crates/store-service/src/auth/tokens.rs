use crate::errors::StoreError;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum allowed JWT size in bytes (4KB).
///
/// Oversized tokens are rejected before any base64 decoding or signature
/// verification. Typical session tokens are 200-500 bytes.
const MAX_JWT_SIZE_BYTES: usize = 4096;

/// Session token claims.
///
/// Wire format contract: `email` and `authorities` are the claim names any
/// independent verifier must use, and `authorities` is a comma-joined list.
/// The `email` field identifies a user and is redacted in Debug output.
#[derive(Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject email address
    pub email: String,
    /// Comma-joined authority labels, order preserved
    pub authorities: String,
    /// Issued-at timestamp (seconds since epoch)
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch)
    pub exp: i64,
}

impl fmt::Debug for Claims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Claims")
            .field("email", &"[REDACTED]")
            .field("authorities", &self.authorities)
            .field("iat", &self.iat)
            .field("exp", &self.exp)
            .finish()
    }
}

/// Process-wide signing key material, derived once from the configured
/// secret at startup and shared read-only afterwards.
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl JwtKeys {
    pub fn from_secret(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }
}

/// Issue a signed session token for `email` with the given authority labels.
///
/// Authorities are joined with `,` in the order given; duplicates are kept.
/// `exp` is `iat` plus the configured session TTL.
pub fn issue_token(
    keys: &JwtKeys,
    email: &str,
    authorities: &[String],
    ttl: Duration,
) -> Result<String, StoreError> {
    issue_token_at(keys, email, authorities, ttl, Utc::now())
}

fn issue_token_at(
    keys: &JwtKeys,
    email: &str,
    authorities: &[String],
    ttl: Duration,
    issued_at: DateTime<Utc>,
) -> Result<String, StoreError> {
    let claims = Claims {
        email: email.to_string(),
        authorities: authorities.join(","),
        iat: issued_at.timestamp(),
        exp: (issued_at + ttl).timestamp(),
    };

    encode(&Header::new(Algorithm::HS256), &claims, &keys.encoding)
        .map_err(|e| StoreError::Crypto(format!("Token signing failed: {}", e)))
}

/// Verify a token and return its claims.
///
/// Accepts the token with or without a leading `Bearer ` prefix; the prefix
/// is stripped when present. Bad signature, expiry, and malformed payloads
/// all collapse into `StoreError::InvalidToken` with a generic message;
/// the underlying reason is logged at debug level.
pub fn decode_claims(keys: &JwtKeys, token: &str) -> Result<Claims, StoreError> {
    let token = token.strip_prefix("Bearer ").unwrap_or(token);

    if token.len() > MAX_JWT_SIZE_BYTES {
        tracing::debug!(
            token_size = token.len(),
            max_size = MAX_JWT_SIZE_BYTES,
            "Token rejected: size exceeds maximum allowed"
        );
        return Err(StoreError::InvalidToken(
            "The session token is invalid or expired".to_string(),
        ));
    }

    let validation = Validation::new(Algorithm::HS256);

    let token_data = decode::<Claims>(token, &keys.decoding, &validation).map_err(|e| {
        tracing::debug!(error = %e, "Token verification failed");
        StoreError::InvalidToken("The session token is invalid or expired".to_string())
    })?;

    Ok(token_data.claims)
}

/// Extract the subject email from a verified token.
///
/// Used by handlers that resolve a user profile from the raw Authorization
/// header value rather than from middleware-bound identity.
pub fn email_from_token(keys: &JwtKeys, token: &str) -> Result<String, StoreError> {
    Ok(decode_claims(keys, token)?.email)
}

/// Split a comma-joined authorities claim back into ordered labels.
///
/// The empty string yields an empty list; blank segments are skipped.
pub fn split_authorities(joined: &str) -> Vec<String> {
    joined
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};

    const TEST_SECRET: &[u8] = b"test-secret-0123456789-0123456789";

    fn keys() -> JwtKeys {
        JwtKeys::from_secret(TEST_SECRET)
    }

    fn roles(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_issue_then_decode_round_trips_subject_and_authorities() {
        let keys = keys();
        let authorities = roles(&["ROLE_USER", "ROLE_ADMIN"]);

        let token = issue_token(&keys, "alice@example.com", &authorities, Duration::hours(1))
            .expect("issuance should succeed");
        let claims = decode_claims(&keys, &token).expect("verification should succeed");

        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.authorities, "ROLE_USER,ROLE_ADMIN");
        assert_eq!(split_authorities(&claims.authorities), authorities);
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_authorities_preserve_order_and_duplicates() {
        let keys = keys();
        let authorities = roles(&["ROLE_ADMIN", "ROLE_USER", "ROLE_ADMIN"]);

        let token = issue_token(&keys, "bob@example.com", &authorities, Duration::hours(1))
            .expect("issuance should succeed");
        let claims = decode_claims(&keys, &token).expect("verification should succeed");

        assert_eq!(claims.authorities, "ROLE_ADMIN,ROLE_USER,ROLE_ADMIN");
        assert_eq!(split_authorities(&claims.authorities), authorities);
    }

    #[test]
    fn test_empty_authorities_round_trip_to_empty_list() {
        let keys = keys();

        let token = issue_token(&keys, "carol@example.com", &[], Duration::hours(1))
            .expect("issuance should succeed");
        let claims = decode_claims(&keys, &token).expect("verification should succeed");

        assert_eq!(claims.authorities, "");
        assert!(split_authorities(&claims.authorities).is_empty());
    }

    #[test]
    fn test_expired_token_fails_verification() {
        let keys = keys();

        // Issued two hours ago with a one-hour lifetime, well past the
        // verifier's default leeway.
        let token = issue_token_at(
            &keys,
            "dave@example.com",
            &roles(&["ROLE_USER"]),
            Duration::hours(1),
            Utc::now() - Duration::hours(2),
        )
        .expect("issuance should succeed");

        let result = decode_claims(&keys, &token);
        assert!(matches!(result, Err(StoreError::InvalidToken(_))));
    }

    #[test]
    fn test_wrong_secret_fails_verification() {
        let keys = keys();
        let other = JwtKeys::from_secret(b"a-completely-different-secret-value");

        let token = issue_token(&keys, "eve@example.com", &roles(&["ROLE_USER"]), Duration::hours(1))
            .expect("issuance should succeed");

        let result = decode_claims(&other, &token);
        assert!(matches!(result, Err(StoreError::InvalidToken(_))));
    }

    #[test]
    fn test_bearer_prefix_is_stripped() {
        let keys = keys();

        let token = issue_token(&keys, "frank@example.com", &roles(&["ROLE_USER"]), Duration::hours(1))
            .expect("issuance should succeed");

        let claims =
            decode_claims(&keys, &format!("Bearer {}", token)).expect("prefix should be stripped");
        assert_eq!(claims.email, "frank@example.com");
    }

    #[test]
    fn test_garbage_token_is_invalid_not_a_panic() {
        let keys = keys();

        for garbage in ["", "not-a-jwt", "a.b", "a.b.c.d", "\u{0}\u{1}\u{2}"] {
            let result = decode_claims(&keys, garbage);
            assert!(matches!(result, Err(StoreError::InvalidToken(_))));
        }
    }

    #[test]
    fn test_oversized_token_rejected_before_parsing() {
        let keys = keys();
        let oversized = "a".repeat(MAX_JWT_SIZE_BYTES + 1);

        let result = decode_claims(&keys, &oversized);
        assert!(matches!(result, Err(StoreError::InvalidToken(_))));
    }

    #[test]
    fn test_email_from_token() {
        let keys = keys();
        let token = issue_token(&keys, "grace@example.com", &roles(&["ROLE_USER"]), Duration::hours(1))
            .expect("issuance should succeed");

        let email = email_from_token(&keys, &format!("Bearer {}", token))
            .expect("extraction should succeed");
        assert_eq!(email, "grace@example.com");
    }

    #[test]
    fn test_wire_format_claim_names() {
        let keys = keys();
        let token = issue_token(&keys, "heidi@example.com", &roles(&["ROLE_USER"]), Duration::hours(1))
            .expect("issuance should succeed");

        // Decode the payload segment directly to pin the claim schema that
        // independent verifiers rely on.
        let parts: Vec<&str> = token.split('.').collect();
        assert_eq!(parts.len(), 3, "JWT should have 3 parts");

        let payload_bytes = URL_SAFE_NO_PAD
            .decode(parts[1])
            .expect("payload should be base64url");
        let payload: serde_json::Value =
            serde_json::from_slice(&payload_bytes).expect("payload should be JSON");

        assert_eq!(payload["email"].as_str(), Some("heidi@example.com"));
        assert_eq!(payload["authorities"].as_str(), Some("ROLE_USER"));
        assert!(payload.get("iat").is_some());
        assert!(payload.get("exp").is_some());
    }

    #[test]
    fn test_split_authorities_skips_blank_segments() {
        assert_eq!(
            split_authorities("ROLE_USER,,ROLE_ADMIN, "),
            roles(&["ROLE_USER", "ROLE_ADMIN"])
        );
    }
}
