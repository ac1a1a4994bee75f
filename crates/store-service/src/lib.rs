//! Storefront backend service library.
//!
//! A conventional e-commerce backend: cart, cart item, payment, rating, and
//! review endpoints over Postgres, behind a stateless JWT authentication
//! filter.
//!
//! # Modules
//!
//! - `auth` - Session token issuance/verification and request identity
//! - `config` - Service configuration
//! - `errors` - Error types
//! - `handlers` - HTTP request handlers
//! - `middleware` - Bearer token authentication filter
//! - `models` - Data models and DTOs
//! - `repositories` - Database access layer
//! - `routes` - Router construction
//! - `services` - Business logic layer

pub mod auth;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
