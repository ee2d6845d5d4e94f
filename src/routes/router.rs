/**
 * Router Configuration
 *
 * Assembles the full route table. Routes come in two groups:
 *
 * - **Public**: `POST /auth/signup`, `POST /auth/login`
 * - **Protected** (behind the auth gate): `GET /auth/me`, the `/users`
 *   routes, and the `/microposts` routes
 *
 * Uploaded avatars are served as static files under `/uploads/avatars`.
 */

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::services::ServeDir;

use crate::auth::handlers::{login, me, signup};
use crate::microposts::handlers::{create_micropost, get_micropost, list_microposts};
use crate::middleware::auth::authenticate;
use crate::server::state::AppState;
use crate::users::handlers::{get_user, list_users, update_avatar};

/// Create the router with all routes configured
pub fn create_router(state: AppState) -> Router {
    let public = Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login));

    let protected = Router::new()
        .route("/auth/me", get(me))
        .route("/users", get(list_users))
        .route("/users/avatar", put(update_avatar))
        .route("/users/{id}", get(get_user))
        .route("/microposts", post(create_micropost).get(list_microposts))
        .route("/microposts/{id}", get(get_micropost))
        .layer(middleware::from_fn_with_state(
            state.tokens.clone(),
            authenticate,
        ));

    public
        .merge(protected)
        .nest_service(
            "/uploads/avatars",
            ServeDir::new(&state.upload_dir),
        )
        .with_state(state)
}
