// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Each variant maps to an HTTP status code; the response body
/// is always `{"error": "<message>"}`
#[derive(Error, Debug)]
pub enum AdminError {
    #[error("Record not found with id: {0}")]
    NotFound(i64),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Upload error: {0}")]
    UploadError(String),

    #[error("A photo file is required in the 'photo' field")]
    MissingUpload,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Upload part exceeds the limit of {0} bytes")]
    PayloadTooLarge(usize),
}

/// Convert AdminError to HTTP response
impl ResponseError for AdminError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "error": self.to_string(),
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AdminError::NotFound(_) => StatusCode::NOT_FOUND,
            AdminError::StorageError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AdminError::UploadError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AdminError::MissingUpload => StatusCode::BAD_REQUEST,
            AdminError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AdminError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }
}
