// src/config/env.rs
// DOCUMENTATION: Environment variable management
// PURPOSE: Load and validate configuration from .env files

use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

/// Subdirectory of the static root that receives uploaded photos.
/// Photo references in API responses resolve against it as `images/assets/<file>`.
pub const UPLOAD_SUBDIR: &str = "images/assets";

/// Application configuration loaded from environment variables
/// DOCUMENTATION: Centralizes all configuration in one struct
/// Load with Config::from_env() at application startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0")
    pub server_address: String,

    /// Server listen port (default 3000)
    pub server_port: u16,

    /// SQLite database file holding the Team and Cards tables
    pub database_path: PathBuf,

    /// Static root served at "/" (pages, scripts, styles, uploaded images)
    pub static_dir: PathBuf,

    /// Maximum size in bytes of a single multipart part
    pub max_upload_bytes: usize,

    /// Environment: development, staging, production
    pub environment: String,

    /// Log level: debug, info, warn, error
    pub log_level: String,

    /// Maximum connections in database pool
    pub db_max_connections: u32,

    /// Connection timeout in seconds
    pub db_connection_timeout: u64,
}

impl Config {
    /// Load configuration from environment variables
    /// DOCUMENTATION: Reads from .env or process environment
    /// Called once at application startup
    pub fn from_env() -> Self {
        dotenv().ok();

        Config {
            server_address: env::var("SERVER_ADDRESS").unwrap_or_else(|_| "0.0.0.0".to_string()),

            server_port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),

            database_path: env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "data/showcase.db".to_string())
                .into(),

            static_dir: env::var("STATIC_DIR")
                .unwrap_or_else(|_| "views".to_string())
                .into(),

            max_upload_bytes: env::var("MAX_UPLOAD_BYTES")
                .unwrap_or_else(|_| "5242880".to_string())
                .parse()
                .unwrap_or(5 * 1024 * 1024),

            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),

            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),

            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .unwrap_or(5),

            db_connection_timeout: env::var("DB_CONNECTION_TIMEOUT")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .unwrap_or(30),
        }
    }

    /// Directory uploaded photos are written to
    pub fn upload_dir(&self) -> PathBuf {
        self.static_dir.join(UPLOAD_SUBDIR)
    }

    /// Validate critical configuration
    /// DOCUMENTATION: Ensures application can start safely
    pub fn validate(&self) -> Result<(), String> {
        if self.database_path.as_os_str().is_empty() {
            return Err("DATABASE_PATH is required".to_string());
        }

        if self.static_dir.as_os_str().is_empty() {
            return Err("STATIC_DIR is required".to_string());
        }

        if self.max_upload_bytes == 0 {
            return Err("MAX_UPLOAD_BYTES must be greater than zero".to_string());
        }

        if !self.static_dir.is_dir() {
            log::warn!(
                "Static directory {} does not exist - pages will not be served",
                self.static_dir.display()
            );
        }

        Ok(())
    }
}
