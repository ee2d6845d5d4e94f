/**
 * Signup Handler
 *
 * POST /auth/signup
 *
 * 1. Validate email shape and password length
 * 2. Hand off to the account service (hash + atomic insert)
 * 3. Return the created account as `UserResponse` - no token, no
 *    password field
 *
 * # Errors
 *
 * * `400 Bad Request` - invalid email or password shorter than 6 chars
 * * `409 Conflict` - email already registered
 * * `500 Internal Server Error` - hashing or persistence failure
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::auth::handlers::types::{SignupRequest, UserResponse};
use crate::auth::service::{AccountService, NewAccount};
use crate::error::ApiError;

/// Minimum accepted password length
const MIN_PASSWORD_LEN: usize = 6;

/// Cheap email-shape check: one `@` with something on both sides.
/// Real deliverability is the mail system's problem, not ours.
fn is_email_shaped(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty(),
        None => false,
    }
}

pub async fn signup(
    State(accounts): State<AccountService>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    if !is_email_shaped(&request.email) {
        tracing::warn!("signup with invalid email shape");
        return Err(ApiError::validation("Invalid email format"));
    }

    if request.password.len() < MIN_PASSWORD_LEN {
        tracing::warn!("signup with too-short password");
        return Err(ApiError::validation(
            "Password must be at least 6 characters",
        ));
    }

    let user = accounts
        .sign_up(NewAccount {
            email: request.email,
            password: request.password,
            role: request.role,
            avatar_path: request.avatar_path,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}
