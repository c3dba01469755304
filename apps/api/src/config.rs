//! Server configuration, loaded from environment variables with fallback
//! to defaults.

use std::env;
use std::path::PathBuf;

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listen port (`PORT`, default 3001).
    pub port: u16,

    /// SQLite database file path (`DATABASE_PATH`,
    /// default `./data/inventario.db`). Created on first boot.
    pub database_path: PathBuf,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let config = ServerConfig {
            port: env::var("PORT")
                .unwrap_or_else(|_| "3001".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("PORT"))?,

            database_path: env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "./data/inventario.db".to_string())
                .into(),
        };

        Ok(config)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {0}")]
    InvalidValue(&'static str),
}
