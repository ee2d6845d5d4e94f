/**
 * Login Handler
 *
 * POST /auth/login
 *
 * Verifies the credentials through the account service and returns a
 * bearer token together with the public profile fields.
 *
 * # Security
 *
 * Unknown email and wrong password produce the identical
 * `401 {"error":"Invalid email or password"}` response, so login cannot
 * be used to probe which emails are registered.
 */

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::{LoginRequest, LoginResponse};
use crate::auth::service::AccountService;
use crate::error::ApiError;

pub async fn login(
    State(accounts): State<AccountService>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let (token, user) = accounts.login(&request.email, &request.password).await?;

    Ok(Json(LoginResponse {
        token,
        user: user.into(),
    }))
}
