//! Authentication
//!
//! The credential hasher, the token issuer/verifier, the account
//! service that orchestrates them, and the HTTP handlers for the
//! `/auth/*` routes. The auth gate itself lives in
//! [`crate::middleware::auth`].

pub mod handlers;
pub mod password;
pub mod service;
pub mod tokens;
