//! Error Module
//!
//! Defines the error types used across the HTTP handlers, the account
//! service, and the persistence stores, together with the conversions
//! that turn them into HTTP responses.
//!
//! # Architecture
//!
//! - **`types`** - Error type definitions and constructors
//! - **`conversion`** - `IntoResponse` implementation for handler errors
//!
//! # HTTP Response Conversion
//!
//! `ApiError` implements `IntoResponse`, so handlers return
//! `Result<_, ApiError>` directly. The error is rendered as a JSON body of
//! the shape `{"error": "<message>"}` with the matching status code.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::{ApiError, StoreError};
