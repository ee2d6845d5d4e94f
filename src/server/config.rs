/**
 * Server Configuration
 *
 * Loads configuration from the environment once at startup.
 *
 * # Error Handling
 *
 * Missing `DATABASE_URL` or `JWT_SECRET` is a startup error: the process
 * must stop rather than serve with a broken store or an absent signing
 * secret. There are no insecure fallbacks.
 */

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    MissingVar(&'static str),

    #[error("invalid SERVER_PORT: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection string (required)
    pub database_url: String,
    /// Symmetric token signing secret (required)
    pub jwt_secret: String,
    /// Listen port, default 8080
    pub port: u16,
    /// Avatar upload directory, default `uploads/avatars`
    pub upload_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = require_var("DATABASE_URL")?;
        let jwt_secret = require_var("JWT_SECRET")?;

        let port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => 8080,
        };

        let upload_dir = std::env::var("UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("uploads/avatars"));

        Ok(Self {
            database_url,
            jwt_secret,
            port,
            upload_dir,
        })
    }
}

fn require_var(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the env mutations cannot race each other under the
    // parallel test runner.
    #[test]
    fn test_from_env() {
        std::env::remove_var("DATABASE_URL");
        std::env::remove_var("JWT_SECRET");
        std::env::remove_var("SERVER_PORT");
        std::env::remove_var("UPLOAD_DIR");

        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::MissingVar("DATABASE_URL"))
        ));

        std::env::set_var("DATABASE_URL", "postgres://localhost/microblog");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::MissingVar("JWT_SECRET"))
        ));

        std::env::set_var("JWT_SECRET", "secret");
        let config = Config::from_env().unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.upload_dir, PathBuf::from("uploads/avatars"));

        std::env::set_var("SERVER_PORT", "not-a-port");
        assert!(matches!(Config::from_env(), Err(ConfigError::InvalidPort(_))));

        std::env::set_var("SERVER_PORT", "3000");
        std::env::set_var("UPLOAD_DIR", "/tmp/avatars");
        let config = Config::from_env().unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.upload_dir, PathBuf::from("/tmp/avatars"));
    }
}
