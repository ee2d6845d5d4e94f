/**
 * Authentication Middleware
 *
 * The auth gate for protected routes. Per request it either attaches an
 * authenticated identity to the request extensions or rejects with 401:
 *
 * 1. No `Authorization` header -> "Authorization header required"
 * 2. Header without the exact `Bearer ` prefix (case-sensitive, single
 *    space) -> "Invalid token format"
 * 3. Token fails verification for any reason -> "Invalid token"
 *
 * The gate never touches the persistence layer: identity is trusted from
 * the verified claims. Handlers that need fresh account state re-query
 * explicitly.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::auth::tokens::TokenKeys;
use crate::error::ApiError;

/// Identity attached to the request after the gate passes
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
}

/// Auth gate middleware
///
/// Registered with `middleware::from_fn_with_state` on the protected
/// route group; the only state it needs is the token verification keys.
pub async fn authenticate(
    State(keys): State<TokenKeys>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = match request.headers().get(AUTHORIZATION) {
        Some(value) => value.to_str().map_err(|_| {
            tracing::warn!("authorization header is not valid ASCII");
            ApiError::MalformedAuthHeader
        })?,
        None => {
            tracing::warn!("missing authorization header");
            return Err(ApiError::MissingAuthHeader);
        }
    };

    let token = header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("authorization header without Bearer prefix");
        ApiError::MalformedAuthHeader
    })?;

    let claims = keys.verify(token).map_err(|_| {
        tracing::warn!("rejected invalid bearer token");
        ApiError::InvalidToken
    })?;

    // Typed claims guarantee the fields exist; a sub that is not a UUID
    // is still a malformed token, not a server error.
    let user_id = Uuid::parse_str(&claims.sub).map_err(|_| {
        tracing::warn!("token sub claim is not a UUID");
        ApiError::InvalidToken
    })?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id,
        email: claims.email,
    });

    Ok(next.run(request).await)
}

/// Extractor for the identity the gate attached
///
/// Usable as a handler parameter on any route behind `authenticate`.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser missing from request extensions");
                ApiError::Unauthorized
            })
    }
}
