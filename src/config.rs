//! Configuration loader for the `sensor-series` backend service.
//!
//! This module centralizes all runtime configuration values and their defaults,
//! loading from environment variables (with optional `.env` file support
//! provided by the caller). By consolidating configuration logic here, we
//! avoid scattering `env::var` calls throughout the codebase.
use std::env;

use anyhow::{anyhow, Result};

/// Parse an optional integer environment variable with a default value.
macro_rules! parse_env {
    ($var_name:expr, $default:expr, $ty:ty) => {
        env::var($var_name)
            .ok()
            .map(|v| v.parse::<$ty>())
            .transpose()
            .map_err(|e| anyhow!("Invalid {}: {}", $var_name, e))?
            .unwrap_or($default)
    };
}

/// Parse a required string environment variable.
macro_rules! require_env {
    ($var_name:expr) => {
        env::var($var_name)
            .map_err(|_| anyhow!("{} must be set in .env or environment", $var_name))?
    };
}

/// Strongly typed application configuration.
///
/// All fields are immutable after loading, ensuring a consistent configuration
/// snapshot for the lifetime of the application.
#[derive(Debug, Clone)]
pub struct Config {
    // ---
    /// Database server hostname.
    pub db_host: String,

    /// Database user name.
    pub db_user: String,

    /// Database password.
    pub db_pass: String,

    /// Database name.
    pub db_name: String,

    /// Database server port.
    pub db_port: u16,

    /// Maximum number of database connections in the pool.
    pub db_pool_max: u32,

    /// Upper bound, in seconds, on waiting for a pooled connection.
    pub db_acquire_timeout_secs: u64,

    /// Port the HTTP server binds on.
    pub server_port: u16,
}

/// Load configuration from environment variables with defaults.
///
/// Required:
/// - `DB_HOST`, `DB_USER`, `DB_PASS`, `DB_NAME`, `DB_PORT` – store connection
///   parameters
///
/// Optional:
/// - `DB_POOL_MAX` – max DB connections (default: 5)
/// - `DB_ACQUIRE_TIMEOUT_SECS` – max wait for a pooled connection (default: 30)
/// - `SERVER_PORT` – HTTP listen port (default: 8080)
///
/// Returns an error if any required variable is missing or invalid.
pub fn load_from_env() -> Result<Config> {
    // ---
    let db_host = require_env!("DB_HOST");
    let db_user = require_env!("DB_USER");
    let db_pass = require_env!("DB_PASS");
    let db_name = require_env!("DB_NAME");
    let db_port = env::var("DB_PORT")
        .map_err(|_| anyhow!("DB_PORT must be set in .env or environment"))?
        .parse::<u16>()
        .map_err(|e| anyhow!("Invalid DB_PORT: {}", e))?;
    let db_pool_max = parse_env!("DB_POOL_MAX", 5, u32);
    let db_acquire_timeout_secs = parse_env!("DB_ACQUIRE_TIMEOUT_SECS", 30, u64);
    let server_port = parse_env!("SERVER_PORT", 8080, u16);

    Ok(Config {
        db_host,
        db_user,
        db_pass,
        db_name,
        db_port,
        db_pool_max,
        db_acquire_timeout_secs,
        server_port,
    })
}

impl Config {
    /// Log the loaded configuration for debugging purposes.
    ///
    /// The database password is never written to the log.
    pub fn log_config(&self) {
        // ---
        tracing::info!("Configuration loaded:");
        tracing::info!("  DB_HOST                 : {}", self.db_host);
        tracing::info!("  DB_PORT                 : {}", self.db_port);
        tracing::info!("  DB_USER                 : {}", self.db_user);
        tracing::info!("  DB_PASS                 : ****");
        tracing::info!("  DB_NAME                 : {}", self.db_name);
        tracing::info!("  DB_POOL_MAX             : {}", self.db_pool_max);
        tracing::info!("  DB_ACQUIRE_TIMEOUT_SECS : {}", self.db_acquire_timeout_secs);
        tracing::info!("  SERVER_PORT             : {}", self.server_port);
    }
}
