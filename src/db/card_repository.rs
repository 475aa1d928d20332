// src/db/card_repository.rs
// DOCUMENTATION: Cards table operations
// PURPOSE: Same shape as TeamRepository over independent data

use crate::errors::AdminError;
use crate::models::{Card, CardField, NewCard};
use sqlx::{Executor, Sqlite, SqlitePool};

pub struct CardRepository;

impl CardRepository {
    /// Fetch every card in storage order
    pub async fn list_all<'e, E>(executor: E) -> Result<Vec<Card>, AdminError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        sqlx::query_as::<_, Card>("SELECT id, title, description, photo FROM Cards")
            .fetch_all(executor)
            .await
            .map_err(|e| {
                log::error!("Failed to list cards: {}", e);
                AdminError::StorageError(e.to_string())
            })
    }

    /// Insert a card and return its new identity
    pub async fn create(pool: &SqlitePool, card: &NewCard, photo: &str) -> Result<i64, AdminError> {
        let result = sqlx::query("INSERT INTO Cards (title, description, photo) VALUES (?, ?, ?)")
            .bind(&card.title)
            .bind(&card.description)
            .bind(photo)
            .execute(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to create card: {}", e);
                AdminError::StorageError(e.to_string())
            })?;

        let id = result.last_insert_rowid();
        log::info!("Created card with id: {}", id);
        Ok(id)
    }

    pub async fn update_field(
        pool: &SqlitePool,
        id: i64,
        field: CardField,
        value: &str,
    ) -> Result<u64, AdminError> {
        let sql = format!("UPDATE Cards SET {} = ? WHERE id = ?", field.column());

        let result = sqlx::query(&sql)
            .bind(value)
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to update card {} {}: {}", id, field, e);
                AdminError::StorageError(e.to_string())
            })?;

        Ok(result.rows_affected())
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<u64, AdminError> {
        let result = sqlx::query("DELETE FROM Cards WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to delete card {}: {}", id, e);
                AdminError::StorageError(e.to_string())
            })?;

        if result.rows_affected() > 0 {
            log::info!("Deleted card with id: {}", id);
        }
        Ok(result.rows_affected())
    }
}
