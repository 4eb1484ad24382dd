//! Application configuration loaded from a `KEY=value` file and the environment.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Config file
//!
//! ```text
//! SERVER_HOST=127.0.0.1
//! SERVER_PORT=5000
//! DB_HOST=localhost
//! DB_PORT=5432
//! DB_USER=music
//! DB_USER_PASS=secret
//! DB_NAME=music_app
//! REBUILD_DB=false
//! ```
//!
//! Pass it with `--config <path>`. Environment variables with the same names
//! take precedence over the file. Without `--config`, a `.env` file is loaded
//! (if present) and only the environment is read.
//!
//! ## Required Variables
//!
//! `DB_USER`, `DB_USER_PASS`, `DB_NAME`
//!
//! ## Optional Variables
//!
//! - `SERVER_HOST` / `SERVER_PORT` - Bind address (default: `127.0.0.1:5000`)
//! - `DB_HOST` / `DB_PORT` - Database server (default: `localhost:5432`)
//! - `REBUILD_DB` - Drop and recreate the database on start (default: `false`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DB_MAX_CONNECTIONS`, `DB_CONNECT_TIMEOUT`, `DB_IDLE_TIMEOUT`,
//!   `DB_MAX_LIFETIME` - Pool tuning

use anyhow::{Context, Result};
use sqlx::postgres::PgConnectOptions;
use std::collections::HashMap;
use std::env;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use crate::infrastructure::persistence::schema::is_plain_identifier;

/// Database used for `DROP/CREATE DATABASE` during a rebuild.
const MAINTENANCE_DATABASE: &str = "postgres";

/// Service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub db_host: String,
    pub db_port: u16,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
    /// Drop and recreate the database before serving. Destroys all data.
    pub rebuild_db: bool,
    pub log_level: String,
    pub log_format: String,

    // ── PgPool settings ─────────────────────────────────────────────────────
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 10).
    pub db_max_connections: u32,
    /// Timeout for acquiring a connection from the pool in seconds
    /// (`DB_CONNECT_TIMEOUT`, default: 30).
    pub db_connect_timeout: u64,
    /// Idle connection lifetime in seconds before it is closed
    /// (`DB_IDLE_TIMEOUT`, default: 600).
    pub db_idle_timeout: u64,
    /// Maximum connection lifetime in seconds (`DB_MAX_LIFETIME`, default: 1800).
    pub db_max_lifetime: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a required key is missing or a value does not parse.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration from a `KEY=value` file, with environment
    /// variables overriding file entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if a
    /// required key is missing.
    pub fn from_file(path: &Path) -> Result<Self> {
        let mut entries = HashMap::new();
        let iter = dotenvy::from_path_iter(path)
            .with_context(|| format!("Failed to open config file {}", path.display()))?;
        for item in iter {
            let (key, value) =
                item.with_context(|| format!("Failed to parse config file {}", path.display()))?;
            entries.insert(key, value);
        }

        Self::from_lookup(|key| env::var(key).ok().or_else(|| entries.get(key).cloned()))
    }

    /// Builds the configuration from any key lookup.
    pub fn from_lookup<F>(get: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| get(key).with_context(|| format!("{key} must be set"));

        Ok(Self {
            server_host: get("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            server_port: parse_or(&get, "SERVER_PORT", 5000)?,
            db_host: get("DB_HOST").unwrap_or_else(|| "localhost".to_string()),
            db_port: parse_or(&get, "DB_PORT", 5432)?,
            db_user: required("DB_USER")?,
            db_password: required("DB_USER_PASS")?,
            db_name: required("DB_NAME")?,
            rebuild_db: get("REBUILD_DB").is_some_and(|v| parse_flag(&v)),
            log_level: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            log_format: get("LOG_FORMAT").unwrap_or_else(|| "text".to_string()),
            db_max_connections: parse_or(&get, "DB_MAX_CONNECTIONS", 10)?,
            db_connect_timeout: parse_or(&get, "DB_CONNECT_TIMEOUT", 30)?,
            db_idle_timeout: parse_or(&get, "DB_IDLE_TIMEOUT", 600)?,
            db_max_lifetime: parse_or(&get, "DB_MAX_LIFETIME", 1800)?,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `server_host` or `db_host` is empty
    /// - a port is 0
    /// - `log_format` is not `text` or `json`
    /// - `db_name` is not a plain identifier
    /// - pool size or any pool timeout is 0
    pub fn validate(&self) -> Result<()> {
        if self.server_host.is_empty() {
            anyhow::bail!("SERVER_HOST must not be empty");
        }
        if self.server_port == 0 {
            anyhow::bail!("SERVER_PORT must be between 1 and 65535");
        }
        if self.db_host.is_empty() {
            anyhow::bail!("DB_HOST must not be empty");
        }
        if self.db_port == 0 {
            anyhow::bail!("DB_PORT must be between 1 and 65535");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !is_plain_identifier(&self.db_name) {
            anyhow::bail!(
                "DB_NAME may only contain letters, digits and underscores, got '{}'",
                self.db_name
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.db_connect_timeout == 0 {
            anyhow::bail!("DB_CONNECT_TIMEOUT must be greater than 0");
        }
        if self.db_idle_timeout == 0 || self.db_max_lifetime == 0 {
            anyhow::bail!("DB_IDLE_TIMEOUT and DB_MAX_LIFETIME must be greater than 0");
        }

        Ok(())
    }

    /// Address the HTTP server binds to.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Connection options for the application database.
    pub fn connect_options(&self) -> PgConnectOptions {
        self.server_options().database(&self.db_name)
    }

    /// Connection options for the maintenance database used by rebuilds.
    pub fn maintenance_options(&self) -> PgConnectOptions {
        self.server_options().database(MAINTENANCE_DATABASE)
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.db_connect_timeout)
    }

    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.db_idle_timeout)
    }

    pub fn max_lifetime(&self) -> Duration {
        Duration::from_secs(self.db_max_lifetime)
    }

    fn server_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port)
            .username(&self.db_user)
            .password(&self.db_password)
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr());
        tracing::info!(
            "  Database: postgres://{}:***@{}:{}/{}",
            self.db_user,
            self.db_host,
            self.db_port,
            self.db_name
        );
        tracing::info!("  Rebuild database: {}", self.rebuild_db);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn parse_or<F, T>(get: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match get(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("{key} has an invalid value '{raw}'")),
        None => Ok(default),
    }
}

fn parse_flag(value: &str) -> bool {
    let value = value.trim();
    value.eq_ignore_ascii_case("true") || value == "1"
}

/// Loads and validates configuration.
///
/// Reads `path` when given; otherwise loads `.env` (if present) and reads the
/// environment.
///
/// # Errors
///
/// Returns an error if required keys are missing or validation fails.
pub fn load(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::from_file(path)?,
        None => {
            dotenvy::dotenv().ok();
            Config::from_env()?
        }
    };
    config.validate()?;
    Ok(config)
}
