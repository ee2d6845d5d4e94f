//! Shared test helpers
//!
//! Builds the full application router over the in-memory stores, so the
//! API tests exercise every layer except PostgreSQL itself.

use std::path::PathBuf;
use std::sync::Arc;

use axum_test::TestServer;
use serde_json::{json, Value};

use microblog::auth::tokens::TokenKeys;
use microblog::microposts::store::{MemoryMicropostStore, MicropostStore};
use microblog::routes::create_router;
use microblog::server::state::AppState;
use microblog::users::store::{MemoryUserStore, UserStore};

pub const TEST_SECRET: &[u8] = b"test-secret";

/// Build an application state over fresh in-memory stores
pub fn test_state(upload_dir: PathBuf) -> AppState {
    let users: Arc<dyn UserStore> = Arc::new(MemoryUserStore::default());
    let microposts: Arc<dyn MicropostStore> = Arc::new(MemoryMicropostStore::default());
    AppState::new(
        users,
        microposts,
        TokenKeys::from_secret(TEST_SECRET),
        upload_dir,
    )
}

/// Start a test server over fresh in-memory stores
pub fn test_server() -> TestServer {
    // Avatar tests that touch the disk build their own state with a
    // tempdir; everything else never writes here.
    TestServer::new(create_router(test_state(std::env::temp_dir()))).unwrap()
}

/// Sign up a user and return the response body
pub async fn signup(server: &TestServer, email: &str, password: &str) -> Value {
    let response = server
        .post("/auth/signup")
        .json(&json!({ "email": email, "password": password }))
        .await;
    assert_eq!(response.status_code(), 201, "signup failed: {}", response.text());
    response.json::<Value>()
}

/// Sign up and log in, returning the bearer token
pub async fn signup_and_login(server: &TestServer, email: &str, password: &str) -> String {
    signup(server, email, password).await;
    let response = server
        .post("/auth/login")
        .json(&json!({ "email": email, "password": password }))
        .await;
    assert_eq!(response.status_code(), 200, "login failed: {}", response.text());
    response.json::<Value>()["token"]
        .as_str()
        .expect("login response has token")
        .to_string()
}

/// Authorization header value for a token
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Attach a bearer token to a request
pub fn with_token(request: axum_test::TestRequest, token: &str) -> axum_test::TestRequest {
    request.add_header(
        axum::http::header::AUTHORIZATION,
        axum::http::HeaderValue::from_str(&bearer(token)).unwrap(),
    )
}
