// src/handlers/cards.rs
// DOCUMENTATION: HTTP handlers for the Cards collection

use crate::db::CardRepository;
use crate::errors::AdminError;
use crate::models::{CardField, CreatedResponse, StatusMessage};
use crate::services::{read_field_value, ContentService, UploadService};
use actix_multipart::Multipart;
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use sqlx::SqlitePool;

/// GET /admin/cards
pub async fn list_cards(pool: web::Data<SqlitePool>) -> Result<impl Responder, AdminError> {
    let cards = CardRepository::list_all(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(cards))
}

/// POST /admin/cards
/// Multipart body with `title`, `description` and a `photo` file
pub async fn create_card(
    pool: web::Data<SqlitePool>,
    uploads: web::Data<UploadService>,
    payload: Multipart,
) -> Result<impl Responder, AdminError> {
    let form = uploads.read_form(payload).await?;
    let id = ContentService::create_card(pool.get_ref(), uploads.get_ref(), form).await?;
    Ok(HttpResponse::Created().json(CreatedResponse { id }))
}

/// PUT /admin/cards/photo/{id}
pub async fn update_card_photo(
    pool: web::Data<SqlitePool>,
    uploads: web::Data<UploadService>,
    path: web::Path<i64>,
    payload: Multipart,
) -> Result<impl Responder, AdminError> {
    let id = path.into_inner();
    let form = uploads.read_form(payload).await?;
    ContentService::replace_card_photo(pool.get_ref(), uploads.get_ref(), id, form).await?;
    Ok(HttpResponse::Ok().json(StatusMessage::new("Card photo updated")))
}

/// PUT /admin/cards/{field}/{id}
pub async fn update_card_field(
    pool: web::Data<SqlitePool>,
    uploads: web::Data<UploadService>,
    path: web::Path<(String, i64)>,
    req: HttpRequest,
    payload: web::Payload,
) -> Result<impl Responder, AdminError> {
    let (field, id) = path.into_inner();
    let field: CardField = field.parse()?;

    let value = read_field_value(&req, payload, uploads.get_ref(), field.column()).await?;
    ContentService::update_card_field(pool.get_ref(), id, field, &value).await?;

    Ok(HttpResponse::Ok().json(StatusMessage::new(format!("Card {} updated", field))))
}

/// DELETE /admin/cards/{id}
pub async fn delete_card(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<impl Responder, AdminError> {
    ContentService::delete_card(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(StatusMessage::new("Card deleted")))
}

/// Configuration for card routes (mounted inside the /admin scope)
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/cards")
            .route("", web::get().to(list_cards))
            .route("", web::post().to(create_card))
            .route("/photo/{id}", web::put().to(update_card_photo))
            .route("/{field}/{id}", web::put().to(update_card_field))
            .route("/{id}", web::delete().to(delete_card)),
    );
}
