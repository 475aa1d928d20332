// src/services/forms.rs
// DOCUMENTATION: Body decoding for single-field updates
// PURPOSE: PUT /admin/{collection}/{field}/{id} accepts either JSON or multipart

use crate::errors::AdminError;
use crate::services::UploadService;
use actix_multipart::Multipart;
use actix_web::http::header;
use actix_web::web::{self, BytesMut};
use actix_web::HttpRequest;
use futures_util::StreamExt;
use serde_json::Value;

/// Key accepted as an alternative to the field name in JSON bodies
const GENERIC_VALUE_KEY: &str = "value";

/// Extract the new value of `field` from a request body
/// DOCUMENTATION: multipart/form-data bodies are read through the upload
/// service (text part named after the field); anything else is parsed as a
/// JSON object `{"<field>": "..."}` or `{"value": "..."}`. The value is
/// trimmed and must not be blank.
pub async fn read_field_value(
    req: &HttpRequest,
    payload: web::Payload,
    uploads: &UploadService,
    field: &str,
) -> Result<String, AdminError> {
    let raw = if is_multipart(req) {
        let form = uploads
            .read_form(Multipart::new(req.headers(), payload))
            .await?;
        form.fields.get(field).cloned()
    } else {
        let body = read_body(payload, uploads.max_part_bytes()).await?;
        value_from_json(&body, field)?
    };

    match raw.map(|v| v.trim().to_string()) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(AdminError::InvalidInput(format!("{} is required", field))),
    }
}

fn is_multipart(req: &HttpRequest) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| ct.starts_with("multipart/form-data"))
        .unwrap_or(false)
}

async fn read_body(mut payload: web::Payload, limit: usize) -> Result<BytesMut, AdminError> {
    let mut body = BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk =
            chunk.map_err(|e| AdminError::InvalidInput(format!("Failed to read body: {}", e)))?;
        if body.len() + chunk.len() > limit {
            return Err(AdminError::PayloadTooLarge(limit));
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}

fn value_from_json(body: &[u8], field: &str) -> Result<Option<String>, AdminError> {
    let json: Value = serde_json::from_slice(body)
        .map_err(|e| AdminError::InvalidInput(format!("Invalid JSON body: {}", e)))?;

    let value = json.get(field).or_else(|| json.get(GENERIC_VALUE_KEY));
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(AdminError::InvalidInput(format!(
            "{} must be a string, got {}",
            field, other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_from_field_key() {
        let value = value_from_json(br#"{"role": "Lead"}"#, "role").unwrap();
        assert_eq!(value.as_deref(), Some("Lead"));
    }

    #[test]
    fn test_value_from_generic_key() {
        let value = value_from_json(br#"{"value": "Lead"}"#, "role").unwrap();
        assert_eq!(value.as_deref(), Some("Lead"));
    }

    #[test]
    fn test_missing_and_wrong_types() {
        assert_eq!(value_from_json(br#"{"name": "Ada"}"#, "role").unwrap(), None);
        assert!(value_from_json(br#"{"role": 5}"#, "role").is_err());
        assert!(value_from_json(b"role=Lead", "role").is_err());
    }
}
