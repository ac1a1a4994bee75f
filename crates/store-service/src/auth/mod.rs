//! Session token issuance and verification.
//!
//! The token core is deliberately small: HS256-signed JWTs carrying the
//! subject email and a comma-joined authority list, verified statelessly on
//! every request. Expiry is the only invalidation mechanism.

pub mod identity;
pub mod tokens;
