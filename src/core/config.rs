//! Server configuration
//!
//! All settings come from environment variables with sensible defaults:
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | WORK_DIR | ./data | working directory (database, logs) |
//! | HTTP_PORT | 5001 | HTTP API port |
//! | ENVIRONMENT | development | development \| staging \| production |
//! | JWT_SECRET | generated in dev | token signing secret |
//! | JWT_EXPIRATION_MINUTES | 1440 | token lifetime |

use std::path::PathBuf;

use crate::auth::JwtConfig;

#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory holding the database and log files.
    pub work_dir: String,
    /// HTTP API port.
    pub http_port: u16,
    /// JWT configuration.
    pub jwt: JwtConfig,
    /// Runtime environment: development | staging | production.
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5001),
            jwt: JwtConfig::default(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Override work dir and port; used by tests.
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Directory holding the embedded database files.
    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    /// Path of the embedded database.
    pub fn database_path(&self) -> PathBuf {
        self.database_dir().join("inventory.db")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
