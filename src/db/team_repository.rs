// src/db/team_repository.rs
// DOCUMENTATION: Team table operations
// PURPOSE: One parameterized statement per operation

use crate::errors::AdminError;
use crate::models::{NewTeamMember, TeamField, TeamMember};
use sqlx::{Executor, Sqlite, SqlitePool};

pub struct TeamRepository;

impl TeamRepository {
    /// Fetch every team member in storage order
    /// DOCUMENTATION: Generic over the executor so GET /admin/allData can run it
    /// inside a read transaction
    pub async fn list_all<'e, E>(executor: E) -> Result<Vec<TeamMember>, AdminError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        sqlx::query_as::<_, TeamMember>("SELECT id, name, role, photo FROM Team")
            .fetch_all(executor)
            .await
            .map_err(|e| {
                log::error!("Failed to list team members: {}", e);
                AdminError::StorageError(e.to_string())
            })
    }

    /// Insert a team member and return its new identity
    pub async fn create(
        pool: &SqlitePool,
        member: &NewTeamMember,
        photo: &str,
    ) -> Result<i64, AdminError> {
        let result = sqlx::query("INSERT INTO Team (name, role, photo) VALUES (?, ?, ?)")
            .bind(&member.name)
            .bind(&member.role)
            .bind(photo)
            .execute(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to create team member: {}", e);
                AdminError::StorageError(e.to_string())
            })?;

        let id = result.last_insert_rowid();
        log::info!("Created team member with id: {}", id);
        Ok(id)
    }

    /// Set a single column of one row
    /// DOCUMENTATION: Returns the number of rows affected (0 when the id is absent)
    pub async fn update_field(
        pool: &SqlitePool,
        id: i64,
        field: TeamField,
        value: &str,
    ) -> Result<u64, AdminError> {
        // column() only yields fixed column names
        let sql = format!("UPDATE Team SET {} = ? WHERE id = ?", field.column());

        let result = sqlx::query(&sql)
            .bind(value)
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to update team member {} {}: {}", id, field, e);
                AdminError::StorageError(e.to_string())
            })?;

        Ok(result.rows_affected())
    }

    /// Remove a row; deleting an absent id affects nothing and is not an error
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<u64, AdminError> {
        let result = sqlx::query("DELETE FROM Team WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to delete team member {}: {}", id, e);
                AdminError::StorageError(e.to_string())
            })?;

        if result.rows_affected() > 0 {
            log::info!("Deleted team member with id: {}", id);
        }
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;

    fn ada() -> NewTeamMember {
        NewTeamMember {
            name: "Ada".to_string(),
            role: "Engineer".to_string(),
        }
    }

    #[tokio::test]
    async fn test_created_id_appears_once() {
        let (_dir, pool) = test_pool().await;

        let id = TeamRepository::create(&pool, &ada(), "a.png").await.unwrap();
        let rows = TeamRepository::list_all(&pool).await.unwrap();

        assert_eq!(rows.iter().filter(|m| m.id == id).count(), 1);
        assert_eq!(rows[0].photo.as_deref(), Some("a.png"));
    }

    #[tokio::test]
    async fn test_update_changes_only_that_field() {
        let (_dir, pool) = test_pool().await;
        let id = TeamRepository::create(&pool, &ada(), "a.png").await.unwrap();

        let affected = TeamRepository::update_field(&pool, id, TeamField::Role, "Lead")
            .await
            .unwrap();
        assert_eq!(affected, 1);

        let rows = TeamRepository::list_all(&pool).await.unwrap();
        assert_eq!(
            rows,
            vec![TeamMember {
                id,
                name: "Ada".to_string(),
                role: "Lead".to_string(),
                photo: Some("a.png".to_string()),
            }]
        );
    }

    #[tokio::test]
    async fn test_update_missing_row_affects_nothing() {
        let (_dir, pool) = test_pool().await;
        let affected = TeamRepository::update_field(&pool, 42, TeamField::Name, "Grace")
            .await
            .unwrap();
        assert_eq!(affected, 0);
    }

    #[tokio::test]
    async fn test_delete_twice_is_noop() {
        let (_dir, pool) = test_pool().await;
        let id = TeamRepository::create(&pool, &ada(), "a.png").await.unwrap();

        assert_eq!(TeamRepository::delete(&pool, id).await.unwrap(), 1);
        assert_eq!(TeamRepository::delete(&pool, id).await.unwrap(), 0);
        assert!(TeamRepository::list_all(&pool).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_ids_are_not_reused() {
        let (_dir, pool) = test_pool().await;
        let first = TeamRepository::create(&pool, &ada(), "a.png").await.unwrap();
        TeamRepository::delete(&pool, first).await.unwrap();

        let second = TeamRepository::create(&pool, &ada(), "b.png").await.unwrap();
        assert!(second > first);
    }
}
