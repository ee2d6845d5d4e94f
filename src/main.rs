/**
 * Microblog Server Entry Point
 *
 * Loads configuration, connects to the database, and serves the API.
 * Startup is strict: a missing secret or an unreachable database stops
 * the process instead of serving degraded traffic.
 */

use std::net::SocketAddr;

use microblog::server::config::Config;
use microblog::server::init::{create_app, init_database};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = Config::from_env()?;
    let pool = init_database(&config.database_url).await?;

    let app = create_app(&config, pool);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
