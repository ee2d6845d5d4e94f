/**
 * Server Initialization
 *
 * Wires configuration, database, stores, and routes into a runnable app.
 */

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use crate::auth::tokens::TokenKeys;
use crate::microposts::store::{MicropostStore, PgMicropostStore};
use crate::routes::create_router;
use crate::server::config::Config;
use crate::server::state::AppState;
use crate::users::store::{PgUserStore, UserStore};

/// Connect to PostgreSQL and run pending migrations
///
/// An unreachable database or a failed migration is a startup error;
/// the caller should stop the process.
pub async fn init_database(database_url: &str) -> Result<PgPool, sqlx::Error> {
    tracing::info!("connecting to database");
    let pool = PgPool::connect(database_url).await?;

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("database migrations applied");

    Ok(pool)
}

/// Build the application router over the Postgres-backed stores
pub fn create_app(config: &Config, pool: PgPool) -> Router {
    let users: Arc<dyn UserStore> = Arc::new(PgUserStore::new(pool.clone()));
    let microposts: Arc<dyn MicropostStore> = Arc::new(PgMicropostStore::new(pool));
    let tokens = TokenKeys::from_secret(config.jwt_secret.as_bytes());

    let state = AppState::new(users, microposts, tokens, config.upload_dir.clone());
    create_router(state)
}
