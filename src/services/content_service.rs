// src/services/content_service.rs
// DOCUMENTATION: Business logic for team members and cards
// PURPOSE: Intermediary between handlers, the upload service and repositories

use crate::db::{CardRepository, TeamRepository};
use crate::errors::AdminError;
use crate::models::{AllData, CardField, NewCard, NewTeamMember, TeamField};
use crate::services::{PendingPhoto, UploadForm, UploadService};
use sqlx::SqlitePool;
use std::path::Path;
use validator::Validate;

pub struct ContentService;

impl ContentService {
    /// Create a team member from a multipart form
    /// DOCUMENTATION: Fields are presence-checked before the photo is written,
    /// so a rejected request leaves no file behind
    pub async fn create_team_member(
        pool: &SqlitePool,
        uploads: &UploadService,
        mut form: UploadForm,
    ) -> Result<i64, AdminError> {
        let member = NewTeamMember {
            name: form.text("name"),
            role: form.text("role"),
        };
        member
            .validate()
            .map_err(|e| AdminError::InvalidInput(e.to_string()))?;

        let photo = form.require_photo()?;
        let filename = uploads.store(photo).await?;
        TeamRepository::create(pool, &member, &filename).await
    }

    /// Update the name or role of one team member
    pub async fn update_team_field(
        pool: &SqlitePool,
        id: i64,
        field: TeamField,
        value: &str,
    ) -> Result<(), AdminError> {
        let affected = TeamRepository::update_field(pool, id, field, value).await?;
        if affected == 0 {
            return Err(AdminError::NotFound(id));
        }
        Ok(())
    }

    /// Store a new photo and point the team member at it
    pub async fn replace_team_photo(
        pool: &SqlitePool,
        uploads: &UploadService,
        id: i64,
        mut form: UploadForm,
    ) -> Result<String, AdminError> {
        let filename = uploads.store(form.require_photo()?).await?;
        let affected = TeamRepository::update_field(pool, id, TeamField::Photo, &filename).await?;
        if affected == 0 {
            discard_upload(uploads.upload_dir(), &filename).await;
            return Err(AdminError::NotFound(id));
        }
        Ok(filename)
    }

    /// Delete a team member; an absent id is not an error
    /// TODO: remove the photo file once nothing else references it
    pub async fn delete_team_member(pool: &SqlitePool, id: i64) -> Result<(), AdminError> {
        TeamRepository::delete(pool, id).await?;
        Ok(())
    }

    /// Create a card from a multipart form
    pub async fn create_card(
        pool: &SqlitePool,
        uploads: &UploadService,
        mut form: UploadForm,
    ) -> Result<i64, AdminError> {
        let card = NewCard {
            title: form.text("title"),
            description: form.text("description"),
        };
        card.validate()
            .map_err(|e| AdminError::InvalidInput(e.to_string()))?;

        let photo = form.require_photo()?;
        let filename = uploads.store(photo).await?;
        CardRepository::create(pool, &card, &filename).await
    }

    pub async fn update_card_field(
        pool: &SqlitePool,
        id: i64,
        field: CardField,
        value: &str,
    ) -> Result<(), AdminError> {
        let affected = CardRepository::update_field(pool, id, field, value).await?;
        if affected == 0 {
            return Err(AdminError::NotFound(id));
        }
        Ok(())
    }

    pub async fn replace_card_photo(
        pool: &SqlitePool,
        uploads: &UploadService,
        id: i64,
        mut form: UploadForm,
    ) -> Result<String, AdminError> {
        let filename = uploads.store(form.require_photo()?).await?;
        let affected = CardRepository::update_field(pool, id, CardField::Photo, &filename).await?;
        if affected == 0 {
            discard_upload(uploads.upload_dir(), &filename).await;
            return Err(AdminError::NotFound(id));
        }
        Ok(filename)
    }

    pub async fn delete_card(pool: &SqlitePool, id: i64) -> Result<(), AdminError> {
        CardRepository::delete(pool, id).await?;
        Ok(())
    }

    /// Both collections read from one snapshot
    /// DOCUMENTATION: Runs both SELECTs inside a single read transaction
    pub async fn all_data(pool: &SqlitePool) -> Result<AllData, AdminError> {
        let mut tx = pool.begin().await.map_err(|e| {
            log::error!("Failed to open read transaction: {}", e);
            AdminError::StorageError(e.to_string())
        })?;

        let teams = TeamRepository::list_all(&mut *tx).await?;
        let cards = CardRepository::list_all(&mut *tx).await?;

        tx.commit()
            .await
            .map_err(|e| AdminError::StorageError(e.to_string()))?;

        Ok(AllData { teams, cards })
    }
}

/// Best-effort removal of a photo written for a row that no longer exists
async fn discard_upload(dir: &Path, filename: &str) {
    if let Err(e) = tokio::fs::remove_file(dir.join(filename)).await {
        log::warn!("Could not remove orphaned upload {}: {}", filename, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;
    use actix_web::web::Bytes;

    fn photo(name: &str) -> PendingPhoto {
        PendingPhoto {
            original_name: name.to_string(),
            bytes: Bytes::from_static(b"img"),
        }
    }

    fn team_form(name: &str, role: &str, with_photo: bool) -> UploadForm {
        let mut form = UploadForm::default();
        form.fields.insert("name".to_string(), name.to_string());
        form.fields.insert("role".to_string(), role.to_string());
        if with_photo {
            form.photo = Some(photo("a.png"));
        }
        form
    }

    #[tokio::test]
    async fn test_create_requires_photo() {
        let (dir, pool) = test_pool().await;
        let uploads = UploadService::new(dir.path(), 1024);

        let result =
            ContentService::create_team_member(&pool, &uploads, team_form("Ada", "Engineer", false))
                .await;
        assert!(matches!(result, Err(AdminError::MissingUpload)));
    }

    #[tokio::test]
    async fn test_blank_field_is_rejected_before_upload() {
        let (dir, pool) = test_pool().await;
        let upload_dir = dir.path().join("assets");
        std::fs::create_dir(&upload_dir).unwrap();
        let uploads = UploadService::new(&upload_dir, 1024);

        let result =
            ContentService::create_team_member(&pool, &uploads, team_form("   ", "Engineer", true))
                .await;
        assert!(matches!(result, Err(AdminError::InvalidInput(_))));
        assert_eq!(std::fs::read_dir(&upload_dir).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_update_absent_row_is_not_found() {
        let (_dir, pool) = test_pool().await;
        let result = ContentService::update_card_field(&pool, 9, CardField::Title, "New").await;
        assert!(matches!(result, Err(AdminError::NotFound(9))));
    }

    #[tokio::test]
    async fn test_replace_photo_for_absent_row_discards_file() {
        let (dir, pool) = test_pool().await;
        let upload_dir = dir.path().join("assets");
        std::fs::create_dir(&upload_dir).unwrap();
        let uploads = UploadService::new(&upload_dir, 1024);

        let mut form = UploadForm::default();
        form.photo = Some(photo("b.png"));

        let result = ContentService::replace_team_photo(&pool, &uploads, 3, form).await;
        assert!(matches!(result, Err(AdminError::NotFound(3))));
        assert_eq!(std::fs::read_dir(&upload_dir).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_all_data_matches_individual_lists() {
        let (dir, pool) = test_pool().await;
        let uploads = UploadService::new(dir.path(), 1024);

        ContentService::create_team_member(&pool, &uploads, team_form("Ada", "Engineer", true))
            .await
            .unwrap();

        let mut card_form = UploadForm::default();
        card_form.fields.insert("title".to_string(), "Support".to_string());
        card_form
            .fields
            .insert("description".to_string(), "Around the clock".to_string());
        card_form.photo = Some(photo("c.png"));
        ContentService::create_card(&pool, &uploads, card_form)
            .await
            .unwrap();

        let all = ContentService::all_data(&pool).await.unwrap();
        assert_eq!(all.teams, TeamRepository::list_all(&pool).await.unwrap());
        assert_eq!(all.cards, CardRepository::list_all(&pool).await.unwrap());
        assert_eq!(all.teams.len(), 1);
        assert_eq!(all.cards.len(), 1);
    }
}
