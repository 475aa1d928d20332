// src/handlers/admin.rs
// DOCUMENTATION: The /admin scope
// PURPOSE: Admin page, combined read, and the per-collection routes

use crate::errors::AdminError;
use crate::handlers::{cards, pages, teams};
use crate::services::ContentService;
use actix_web::{web, HttpResponse, Responder};
use sqlx::SqlitePool;

/// GET /admin/allData
/// Both collections from a single snapshot
pub async fn all_data(pool: web::Data<SqlitePool>) -> Result<impl Responder, AdminError> {
    let data = ContentService::all_data(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(data))
}

/// Path extraction failures (non-integer ids) answer with the JSON error body
fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, _req| AdminError::InvalidInput(err.to_string()).into())
}

/// Configuration for admin routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .app_data(path_config())
            .route("", web::get().to(pages::admin_page))
            .route("/allData", web::get().to(all_data))
            .configure(teams::config)
            .configure(cards::config),
    );
}

#[cfg(test)]
mod tests {
    use crate::handlers::test_support::*;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn test_all_data_with_one_of_each() {
        let state = TestState::new().await;
        let app = test::init_service(test_app!(state)).await;
        state.seed_team_member("Ada", "Engineer").await;

        let req = multipart_request(
            test::TestRequest::post(),
            "/admin/cards",
            &[("title", "Support"), ("description", "Around the clock")],
            Some(("photo", "c.png", b"png")),
        )
        .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::get().uri("/admin/allData").to_request();
        let data: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(data["teams"].as_array().unwrap().len(), 1);
        assert_eq!(data["cards"].as_array().unwrap().len(), 1);
        assert_eq!(data["teams"][0]["name"], "Ada");
        assert_eq!(data["cards"][0]["title"], "Support");
    }

    #[actix_web::test]
    async fn test_all_data_empty() {
        let state = TestState::new().await;
        let app = test::init_service(test_app!(state)).await;

        let req = test::TestRequest::get().uri("/admin/allData").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let data: Value = test::read_body_json(resp).await;
        assert_eq!(data, json!({"teams": [], "cards": []}));
    }

    #[actix_web::test]
    async fn test_non_integer_id_is_json_bad_request() {
        let state = TestState::new().await;
        let app = test::init_service(test_app!(state)).await;

        for req in [
            test::TestRequest::delete().uri("/admin/teams/abc").to_request(),
            test::TestRequest::put()
                .uri("/admin/cards/title/abc")
                .set_json(json!({"title": "x"}))
                .to_request(),
        ] {
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

            let body: Value = test::read_body_json(resp).await;
            assert!(body["error"].as_str().unwrap().contains("abc"));
        }
    }

    #[actix_web::test]
    async fn test_admin_page_is_served() {
        let state = TestState::new().await;
        let app = test::init_service(test_app!(state)).await;

        let req = test::TestRequest::get().uri("/admin").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        assert!(std::str::from_utf8(&body).unwrap().contains("admin page"));
    }
}
