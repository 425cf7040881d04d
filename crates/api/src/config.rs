//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;

/// API server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// SQLite database URL.
    pub database_url: String,
    /// Secret used to sign session tokens.
    pub jwt_secret: String,
    /// Deployment environment name ("development" or "production").
    pub environment: String,
    /// Origins allowed to call the API with credentials.
    pub cors_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `SAGE_ADDR` | Server bind address | `127.0.0.1:3000` |
    /// | `SQLITE_PATH` | SQLite database URL | `sqlite:sage.db?mode=rwc` |
    /// | `JWT_SECRET` | Session token signing secret | (required) |
    /// | `SAGE_ENV` | Deployment environment | `development` |
    /// | `CORS_ORIGINS` | Comma-separated allowed origins | localhost dev origins |
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = env::var("SAGE_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        let database_url =
            env::var("SQLITE_PATH").unwrap_or_else(|_| "sqlite:sage.db?mode=rwc".to_string());

        let jwt_secret = env::var("JWT_SECRET").map_err(|_| ConfigError::MissingJwtSecret)?;
        if jwt_secret.trim().is_empty() {
            return Err(ConfigError::MissingJwtSecret);
        }

        let environment = env::var("SAGE_ENV").unwrap_or_else(|_| "development".to_string());

        let cors_origins = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173,http://localhost:3000".to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Ok(Self {
            addr,
            database_url,
            jwt_secret,
            environment,
            cors_origins,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid SAGE_ADDR format")]
    InvalidAddr,

    #[error("JWT_SECRET environment variable is required")]
    MissingJwtSecret,
}
