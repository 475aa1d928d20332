// src/services/uploads.rs
// DOCUMENTATION: Multipart form intake and photo storage
// PURPOSE: Collect text parts and the single `photo` file of a request, then
// write the photo into the static upload directory under a unique name

use crate::errors::AdminError;
use actix_multipart::Multipart;
use actix_web::web::{Bytes, BytesMut};
use chrono::{DateTime, Local};
use futures_util::TryStreamExt;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Form field that carries the uploaded image
pub const PHOTO_FIELD: &str = "photo";

/// A photo received in a request but not yet written to disk
#[derive(Debug, Clone)]
pub struct PendingPhoto {
    pub original_name: String,
    pub bytes: Bytes,
}

/// Decoded multipart body
#[derive(Debug, Default)]
pub struct UploadForm {
    pub fields: HashMap<String, String>,
    pub photo: Option<PendingPhoto>,
}

impl UploadForm {
    /// Trimmed text value of a field, empty when absent
    pub fn text(&self, name: &str) -> String {
        self.fields
            .get(name)
            .map(|v| v.trim().to_string())
            .unwrap_or_default()
    }

    /// Take the photo, failing when the request carried none
    pub fn require_photo(&mut self) -> Result<PendingPhoto, AdminError> {
        self.photo.take().ok_or(AdminError::MissingUpload)
    }
}

/// Receives multipart bodies and stores uploaded photos
#[derive(Debug, Clone)]
pub struct UploadService {
    upload_dir: PathBuf,
    max_part_bytes: usize,
}

impl UploadService {
    pub fn new(upload_dir: impl Into<PathBuf>, max_part_bytes: usize) -> Self {
        Self {
            upload_dir: upload_dir.into(),
            max_part_bytes,
        }
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    pub fn max_part_bytes(&self) -> usize {
        self.max_part_bytes
    }

    /// Read a whole multipart body
    /// DOCUMENTATION: Text parts land in `fields`; exactly one file part named
    /// `photo` is accepted. File parts under other names are drained and ignored.
    /// A `photo` part with an empty filename (no file chosen) counts as absent.
    pub async fn read_form(&self, mut payload: Multipart) -> Result<UploadForm, AdminError> {
        let mut form = UploadForm::default();

        while let Some(mut field) = payload
            .try_next()
            .await
            .map_err(|e| AdminError::InvalidInput(format!("Malformed multipart body: {}", e)))?
        {
            let disposition = field.content_disposition();
            let name = disposition.get_name().unwrap_or_default().to_string();
            let filename = disposition.get_filename().map(str::to_string);

            let mut data = BytesMut::new();
            while let Some(chunk) = field
                .try_next()
                .await
                .map_err(|e| AdminError::InvalidInput(format!("Malformed multipart body: {}", e)))?
            {
                if data.len() + chunk.len() > self.max_part_bytes {
                    return Err(AdminError::PayloadTooLarge(self.max_part_bytes));
                }
                data.extend_from_slice(&chunk);
            }

            match filename {
                Some(original) if name == PHOTO_FIELD => {
                    if original.is_empty() && data.is_empty() {
                        continue;
                    }
                    if form.photo.is_some() {
                        return Err(AdminError::InvalidInput(
                            "Only one photo may be uploaded per request".to_string(),
                        ));
                    }
                    form.photo = Some(PendingPhoto {
                        original_name: original,
                        bytes: data.freeze(),
                    });
                }
                Some(_) => log::debug!("Ignoring unexpected file part '{}'", name),
                None => {
                    let value = String::from_utf8(data.to_vec()).map_err(|_| {
                        AdminError::InvalidInput(format!("Field '{}' is not valid UTF-8", name))
                    })?;
                    form.fields.insert(name, value);
                }
            }
        }

        Ok(form)
    }

    /// Write a photo to the upload directory and return its stored file name
    pub async fn store(&self, photo: PendingPhoto) -> Result<String, AdminError> {
        let filename = stored_name(&photo.original_name, Local::now(), Uuid::new_v4());
        let path = self.upload_dir.join(&filename);

        tokio::fs::write(&path, &photo.bytes).await.map_err(|e| {
            log::error!("Failed to write upload {}: {}", path.display(), e);
            AdminError::UploadError(e.to_string())
        })?;

        log::info!("Stored upload {} ({} bytes)", filename, photo.bytes.len());
        Ok(filename)
    }
}

/// `<YYYYMMDD_HHmmss>_<token>_<original>`
/// DOCUMENTATION: The random token keeps names unique even for identical
/// originals uploaded within the same second
pub fn stored_name(original: &str, captured_at: DateTime<Local>, token: Uuid) -> String {
    format!(
        "{}_{}_{}",
        captured_at.format("%Y%m%d_%H%M%S"),
        token.simple(),
        sanitize_filename(original)
    )
}

/// Keep only the last path component and a conservative character set
fn sanitize_filename(original: &str) -> String {
    let base = original
        .rsplit(|c| c == '/' || c == '\\')
        .next()
        .unwrap_or_default();

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    let cleaned = cleaned.trim_start_matches('.');
    if cleaned.is_empty() {
        "upload".to_string()
    } else {
        cleaned.to_string()
    }
}
