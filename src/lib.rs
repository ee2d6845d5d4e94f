//! Microblog REST API
//!
//! A minimal CRUD backend: users, microposts, and bearer-token
//! authentication over axum and sqlx.
//!
//! # Module Structure
//!
//! - **`auth`** - password hashing, token issue/verify, the account
//!   service, and the `/auth/*` handlers
//! - **`users`** / **`microposts`** - models, persistence ports, handlers
//! - **`middleware`** - the auth gate for protected routes
//! - **`error`** - error taxonomy and its HTTP conversion
//! - **`routes`** - route table assembly
//! - **`server`** - configuration, shared state, initialization

pub mod auth;
pub mod error;
pub mod microposts;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod users;
