use crate::auth::identity::Identity;
use crate::auth::tokens::{self, JwtKeys};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// Shared state for the authentication middleware.
#[derive(Clone)]
pub struct AuthState {
    pub keys: Arc<JwtKeys>,
}

/// Bearer-token authentication middleware.
///
/// Extracts the Authorization header, verifies the token, and binds an
/// `Identity` into request extensions on success. This middleware never
/// rejects a request: a missing, malformed, or invalid token leaves the
/// request unauthenticated and hands it to the next service unchanged, so
/// public routes stay reachable. Enforcement belongs to the `Identity`
/// extractor on protected handlers.
pub async fn authenticate(
    State(state): State<AuthState>,
    mut req: Request,
    next: Next,
) -> Response {
    // Extensions are server-side state; drop anything a previous layer may
    // have bound so authentication outcome depends only on this header.
    req.extensions_mut().remove::<Identity>();

    let bearer = req
        .headers()
        .get("authorization")
        .and_then(|h| h.to_str().ok());

    match bearer {
        // No header, or a value that is not bearer-shaped: continue
        // unauthenticated without logging. This is the normal case for
        // public routes.
        None => {}
        Some(value) if !value.starts_with("Bearer ") || value.len() <= 7 => {}
        Some(value) => match tokens::decode_claims(&state.keys, value) {
            Ok(claims) => {
                let identity = Identity::new(
                    claims.email.clone(),
                    tokens::split_authorities(&claims.authorities),
                );
                req.extensions_mut().insert(identity);
            }
            Err(e) => {
                // Invalid token behaves exactly like no token. The reason is
                // logged for diagnosis; the token itself never is.
                tracing::warn!(error = %e, "Bearer token verification failed");
            }
        },
    }

    next.run(req).await
}
