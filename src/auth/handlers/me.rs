/**
 * Current User Handler
 *
 * GET /auth/me
 *
 * Runs behind the auth gate. The gate trusts the token claims and does
 * not consult the store, so this handler is the place that re-fetches
 * the account - a token can outlive its user.
 */

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::UserResponse;
use crate::auth::service::AccountService;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;

pub async fn me(
    State(accounts): State<AccountService>,
    AuthUser(user): AuthUser,
) -> Result<Json<UserResponse>, ApiError> {
    let account = accounts.get_by_id(user.user_id).await?;
    Ok(Json(account.into()))
}
