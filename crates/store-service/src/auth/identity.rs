use crate::errors::StoreError;
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

/// The authenticated principal for one request.
///
/// Bound into request extensions by the authentication middleware when the
/// bearer token verifies; absent otherwise. Request-scoped by construction,
/// so concurrent requests can never observe each other's identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Subject email address
    pub email: String,
    /// Granted authority labels, order preserved
    pub authorities: Vec<String>,
}

impl Identity {
    pub fn new(email: impl Into<String>, authorities: Vec<String>) -> Self {
        Self {
            email: email.into(),
            authorities,
        }
    }

    pub fn has_authority(&self, label: &str) -> bool {
        self.authorities.iter().any(|a| a == label)
    }
}

/// Extracting `Identity` is the explicit presence check for protected
/// handlers: the middleware never rejects a request, so a handler that
/// requires authentication takes `Identity` as an argument and gets a 401
/// rejection when no identity was bound.
#[async_trait]
impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = StoreError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .ok_or(StoreError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_authority() {
        let identity = Identity::new(
            "alice@example.com",
            vec!["ROLE_USER".to_string(), "ROLE_ADMIN".to_string()],
        );

        assert!(identity.has_authority("ROLE_ADMIN"));
        assert!(!identity.has_authority("ROLE_SUPPORT"));
    }
}
