// src/db/schema.rs
// DOCUMENTATION: Table definitions
// PURPOSE: Create the Team and Cards tables idempotently at startup (no migrations)

use crate::errors::AdminError;
use sqlx::SqlitePool;

// AUTOINCREMENT keeps SQLite from handing out the id of a deleted row again
const CREATE_TEAM: &str = r#"
    CREATE TABLE IF NOT EXISTS Team (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        role TEXT NOT NULL,
        photo TEXT
    )
"#;

const CREATE_CARDS: &str = r#"
    CREATE TABLE IF NOT EXISTS Cards (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        description TEXT NOT NULL,
        photo TEXT
    )
"#;

/// Create both tables if they do not exist yet
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), AdminError> {
    for statement in [CREATE_TEAM, CREATE_CARDS] {
        sqlx::query(statement).execute(pool).await.map_err(|e| {
            log::error!("Failed to create schema: {}", e);
            AdminError::StorageError(e.to_string())
        })?;
    }

    log::info!("Database schema ready (Team, Cards)");
    Ok(())
}
