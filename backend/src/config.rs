//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults. Variables may also come from a `db.env` or `.env`
//! file in the working directory.

use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Path prefix for the SWIFT code routes
    pub api_prefix: String,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind the server to
    pub port: u16,
    /// Host address to bind to
    pub host: String,
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// SQLite path or `sqlite:` connection string
    pub url: String,
    /// Maximum pooled connections
    pub max_connections: u32,
}

/// Env files read by [`Config::load`], first match wins per variable
pub const ENV_FILES: [&str; 2] = ["db.env", ".env"];

impl Config {
    /// Read env files if present, then load from the environment
    pub fn load() -> Self {
        for file in ENV_FILES {
            if dotenvy::from_filename(file).is_ok() {
                tracing::debug!("Loaded environment from {}", file);
            }
        }
        Self::from_env()
    }

    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8080),
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL")
                    .unwrap_or_else(|_| "sqlite:data/swift_codes.db".to_string()),
                max_connections: env::var("DB_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|n| n.parse().ok())
                    .filter(|n| *n > 0)
                    .unwrap_or(5),
            },
            api_prefix: env::var("API_PREFIX").unwrap_or_else(|_| "/v1/swift-codes".to_string()),
        }
    }

    /// Get the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
