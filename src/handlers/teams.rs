// src/handlers/teams.rs
// DOCUMENTATION: HTTP handlers for the Team collection
// PURPOSE: Parse requests, call services, return responses

use crate::db::TeamRepository;
use crate::errors::AdminError;
use crate::models::{CreatedResponse, StatusMessage, TeamField};
use crate::services::{read_field_value, ContentService, UploadService};
use actix_multipart::Multipart;
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use sqlx::SqlitePool;

/// GET /admin/teams
pub async fn list_teams(pool: web::Data<SqlitePool>) -> Result<impl Responder, AdminError> {
    let members = TeamRepository::list_all(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(members))
}

/// POST /admin/teams
/// Multipart body with `name`, `role` and a `photo` file
pub async fn create_team_member(
    pool: web::Data<SqlitePool>,
    uploads: web::Data<UploadService>,
    payload: Multipart,
) -> Result<impl Responder, AdminError> {
    let form = uploads.read_form(payload).await?;
    let id = ContentService::create_team_member(pool.get_ref(), uploads.get_ref(), form).await?;
    Ok(HttpResponse::Created().json(CreatedResponse { id }))
}

/// PUT /admin/teams/photo/{id}
pub async fn update_team_photo(
    pool: web::Data<SqlitePool>,
    uploads: web::Data<UploadService>,
    path: web::Path<i64>,
    payload: Multipart,
) -> Result<impl Responder, AdminError> {
    let id = path.into_inner();
    let form = uploads.read_form(payload).await?;
    ContentService::replace_team_photo(pool.get_ref(), uploads.get_ref(), id, form).await?;
    Ok(HttpResponse::Ok().json(StatusMessage::new("Team member photo updated")))
}

/// PUT /admin/teams/{field}/{id}
/// Body is JSON (`{"role": "Lead"}`) or multipart with a text part named after the field
pub async fn update_team_field(
    pool: web::Data<SqlitePool>,
    uploads: web::Data<UploadService>,
    path: web::Path<(String, i64)>,
    req: HttpRequest,
    payload: web::Payload,
) -> Result<impl Responder, AdminError> {
    let (field, id) = path.into_inner();
    let field: TeamField = field.parse()?;

    let value = read_field_value(&req, payload, uploads.get_ref(), field.column()).await?;
    ContentService::update_team_field(pool.get_ref(), id, field, &value).await?;

    Ok(HttpResponse::Ok().json(StatusMessage::new(format!("Team member {} updated", field))))
}

/// DELETE /admin/teams/{id}
pub async fn delete_team_member(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<impl Responder, AdminError> {
    ContentService::delete_team_member(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(StatusMessage::new("Team member deleted")))
}

/// Configuration for team routes (mounted inside the /admin scope)
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/teams")
            .route("", web::get().to(list_teams))
            .route("", web::post().to(create_team_member))
            // must stay ahead of /{field}/{id}
            .route("/photo/{id}", web::put().to(update_team_photo))
            .route("/{field}/{id}", web::put().to(update_team_field))
            .route("/{id}", web::delete().to(delete_team_member)),
    );
}
