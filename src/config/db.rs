// src/config/db.rs
// DOCUMENTATION: Database connection pool initialization
// PURPOSE: Setup and manage the SQLite connection pool

use crate::config::Config;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::time::Duration;

/// Initialize SQLite connection pool
/// DOCUMENTATION: Creates the database file (and its parent directories) when
/// absent. Called once during application startup in main.rs
pub async fn init_db_pool(config: &Config) -> Result<SqlitePool, sqlx::Error> {
    log::info!(
        "Initializing database pool: {}",
        config.database_path.display()
    );

    let pool = connect(
        &config.database_path,
        config.db_max_connections,
        config.db_connection_timeout,
    )
    .await?;

    log::info!("Database pool initialized successfully");
    Ok(pool)
}

/// Open a pool on a database file, creating the file if needed
pub async fn connect(
    path: &Path,
    max_connections: u32,
    timeout_secs: u64,
) -> Result<SqlitePool, sqlx::Error> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .busy_timeout(Duration::from_secs(timeout_secs));

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(timeout_secs))
        .connect_with(options)
        .await?;

    // Verify connection works
    sqlx::query("SELECT 1").execute(&pool).await?;

    Ok(pool)
}
