// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config, database, upload directory, and start HTTP server

mod config;
mod db;
mod errors;
mod handlers;
mod models;
mod services;

use actix_web::{middleware::Logger, web, App, HttpServer};
use config::Config;
use dotenv::dotenv;
use services::UploadService;
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        let log_level = if !config.log_level.is_empty() {
            &config.log_level
        } else {
            "info,actix_web=info,sqlx=warn"
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    if let Err(e) = config.validate() {
        log::error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    log::info!("Starting showcase admin server...");
    log::info!("Environment: {}", config.environment);
    log::info!(
        "Server Address: {}:{}",
        config.server_address,
        config.server_port
    );

    // 4. Initialize database connection pool and schema
    let pool = match config::init_db_pool(&config).await {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = db::ensure_schema(&pool).await {
        log::error!("Failed to prepare schema: {}", e);
        std::process::exit(1);
    }

    // 5. Prepare the upload directory under the static root
    let uploads = UploadService::new(config.upload_dir(), config.max_upload_bytes);
    std::fs::create_dir_all(uploads.upload_dir())?;
    log::info!(
        "Serving static files from {} (uploads in {})",
        config.static_dir.display(),
        uploads.upload_dir().display()
    );

    // 6. Start HTTP server
    let server_addr = format!("{}:{}", config.server_address, config.server_port);
    let config_clone = config.clone();

    HttpServer::new(move || {
        App::new()
            // Application state (database pool, upload service, config)
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(uploads.clone()))
            .app_data(web::Data::new(config_clone.clone()))
            // Middleware
            .wrap(Logger::default())
            .wrap(actix_web::middleware::Compress::default())
            // Routes; static files last so they never shadow the API
            .configure(handlers::health_config)
            .configure(handlers::admin_config)
            .configure(handlers::pages_config(config_clone.static_dir.clone()))
    })
    .bind(&server_addr)?
    .run()
    .await
}
