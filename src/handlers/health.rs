// src/handlers/health.rs
// DOCUMENTATION: Liveness plus database reachability
// PURPOSE: Lets the seed tool and operators tell "process up" from "store usable"

use actix_web::{web, HttpResponse, Responder};
use serde_json::json;
use sqlx::SqlitePool;

/// GET /health
/// 200 when the SQLite store answers, 503 otherwise
pub async fn health_check(pool: web::Data<SqlitePool>) -> impl Responder {
    let database = match sqlx::query("SELECT 1").execute(pool.get_ref()).await {
        Ok(_) => "ok",
        Err(e) => {
            log::warn!("Health check: database unavailable: {}", e);
            "unavailable"
        }
    };

    let mut response = if database == "ok" {
        HttpResponse::Ok()
    } else {
        HttpResponse::ServiceUnavailable()
    };

    response.json(json!({
        "status": if database == "ok" { "ok" } else { "degraded" },
        "database": database,
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}

#[cfg(test)]
mod tests {
    use crate::handlers::test_support::*;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use serde_json::Value;

    #[actix_web::test]
    async fn test_health_reports_database_ok() {
        let state = TestState::new().await;
        let app = test::init_service(test_app!(state)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["database"], "ok");
        assert_eq!(body["service"], "showcase-admin");
    }

    #[actix_web::test]
    async fn test_health_degrades_when_pool_closed() {
        let state = TestState::new().await;
        let app = test::init_service(test_app!(state)).await;
        state.pool.close().await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "degraded");
        assert_eq!(body["database"], "unavailable");
    }
}
