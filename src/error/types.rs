/**
 * API and Store Error Types
 *
 * This module defines the error taxonomy of the service:
 *
 * - `ApiError` - errors returned from HTTP handlers; each variant maps to
 *   one status code bucket (400 validation, 401 authentication,
 *   404 not-found, 409 conflict, 500 internal).
 * - `StoreError` - errors surfaced by the persistence ports. Stores never
 *   speak HTTP; the service and handler layers translate `StoreError`
 *   into the matching `ApiError` at each call site.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Handler-facing error type.
///
/// The `Display` string of each variant is exactly the message written to
/// the `{"error": ...}` response body, so variants carry their wire
/// message in the `#[error]` attribute.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Request payload failed validation
    #[error("{0}")]
    Validation(String),

    /// No `Authorization` header on a protected route
    #[error("Authorization header required")]
    MissingAuthHeader,

    /// `Authorization` header present but not `Bearer <token>`
    #[error("Invalid token format")]
    MalformedAuthHeader,

    /// Bearer token failed verification (signature, expiry, shape)
    #[error("Invalid token")]
    InvalidToken,

    /// Login failed. One message for unknown email and wrong password,
    /// so responses cannot be used to enumerate accounts.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Authenticated identity missing where the auth gate should have
    /// provided one
    #[error("Unauthorized")]
    Unauthorized,

    /// Resource lookup by id came up empty
    #[error("Record not found!")]
    RecordNotFound,

    /// The authenticated account no longer exists
    #[error("User not found")]
    UserNotFound,

    /// Signup with an already-registered email
    #[error("Email already exists")]
    EmailTaken,

    /// Anything the caller cannot repair; details stay in the logs
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Create a validation error with the given message
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create an internal error with the given public message
    ///
    /// The message is what the client sees; the underlying cause should
    /// be logged at the call site before constructing this.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::MissingAuthHeader
            | Self::MalformedAuthHeader
            | Self::InvalidToken
            | Self::InvalidCredentials
            | Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::RecordNotFound | Self::UserNotFound => StatusCode::NOT_FOUND,
            Self::EmailTaken => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Errors produced by the persistence ports (`UserStore`, `MicropostStore`).
#[derive(Debug, Error)]
pub enum StoreError {
    /// No row matched the lookup
    #[error("record not found")]
    NotFound,

    /// A unique constraint rejected the write (duplicate email)
    #[error("unique constraint violation")]
    Conflict,

    /// Anything else the database reported
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            ApiError::validation("bad input").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::MissingAuthHeader.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::RecordNotFound.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(ApiError::EmailTaken.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            ApiError::internal("boom").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_wire_messages() {
        assert_eq!(
            ApiError::MissingAuthHeader.to_string(),
            "Authorization header required"
        );
        assert_eq!(
            ApiError::MalformedAuthHeader.to_string(),
            "Invalid token format"
        );
        assert_eq!(ApiError::InvalidToken.to_string(), "Invalid token");
        assert_eq!(
            ApiError::InvalidCredentials.to_string(),
            "Invalid email or password"
        );
        assert_eq!(ApiError::RecordNotFound.to_string(), "Record not found!");
        assert_eq!(ApiError::EmailTaken.to_string(), "Email already exists");
    }

    #[test]
    fn test_validation_carries_message() {
        let error = ApiError::validation("Password must be at least 6 characters");
        assert_eq!(error.to_string(), "Password must be at least 6 characters");
    }
}
