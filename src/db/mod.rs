// src/db/mod.rs
// DOCUMENTATION: Database module organization
// PURPOSE: Re-export database components

pub mod card_repository;
pub mod schema;
pub mod team_repository;

pub use card_repository::*;
pub use schema::*;
pub use team_repository::*;

/// Fresh database file with both tables, removed when the TempDir drops
#[cfg(test)]
pub async fn test_pool() -> (tempfile::TempDir, sqlx::SqlitePool) {
    let dir = tempfile::tempdir().unwrap();
    let pool = crate::config::db::connect(&dir.path().join("test.db"), 1, 5)
        .await
        .unwrap();
    ensure_schema(&pool).await.unwrap();
    (dir, pool)
}
