// src/handlers/pages.rs
// DOCUMENTATION: HTML pages and static assets
// PURPOSE: Serve home.html at "/", admin.html at "/admin", and the static root

use crate::config::Config;
use actix_files::{Files, NamedFile};
use actix_web::web;
use std::path::PathBuf;

/// GET /
pub async fn home_page(config: web::Data<Config>) -> actix_web::Result<NamedFile> {
    Ok(NamedFile::open_async(config.static_dir.join("home.html")).await?)
}

/// GET /admin
pub async fn admin_page(config: web::Data<Config>) -> actix_web::Result<NamedFile> {
    Ok(NamedFile::open_async(config.static_dir.join("admin.html")).await?)
}

/// Home page plus the static root; register after every other route
pub fn config(static_dir: PathBuf) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.route("/", web::get().to(home_page))
            .service(Files::new("/", static_dir));
    }
}
