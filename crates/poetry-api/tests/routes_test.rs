//! Routing, access control and request parsing
//!
//! None of these requests reach the database: they are answered by the
//! router, the bearer token middleware, the access helpers or the JSON
//! extractor. The health test relies on the database being unreachable.

mod common;

use actix_web::{http::StatusCode, test, App};
use serde_json::json;

use crate::common::{bearer, expired_bearer, lazy_state};

macro_rules! init_app {
    ($prefix:expr) => {{
        let state = lazy_state($prefix);
        test::init_service(App::new().configure(|cfg| state.configure(cfg))).await
    }};
}

#[actix_web::test]
async fn test_root_returns_running_message() {
    let app = init_app!("");

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    assert_eq!(body, "Dead Poets API is running...");
}

#[actix_web::test]
async fn test_routes_mount_under_prefix() {
    let app = init_app!("/api");

    let req = test::TestRequest::get().uri("/api/").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/api").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/").to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[actix_web::test]
async fn test_health_reports_unavailable_database() {
    let app = init_app!("");

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "unhealthy");
    assert_eq!(body["database"], "disconnected");
}

#[actix_web::test]
async fn test_create_poem_requires_token() {
    let app = init_app!("");

    let req = test::TestRequest::post()
        .uri("/poems")
        .set_json(json!({"title": "Title", "content": "Body", "user_id": 1}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
}

#[actix_web::test]
async fn test_like_and_report_require_token() {
    let app = init_app!("");

    let req = test::TestRequest::post()
        .uri("/like")
        .set_json(json!({"poem_id": 1, "user_id": 1}))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNAUTHORIZED
    );

    let req = test::TestRequest::post()
        .uri("/report")
        .set_json(json!({"poem_id": 1, "reported_by": 1, "reason": "spam"}))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNAUTHORIZED
    );
}

#[actix_web::test]
async fn test_delete_poem_requires_token() {
    let app = init_app!("");

    let req = test::TestRequest::delete().uri("/poems/1").to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNAUTHORIZED
    );
}

#[actix_web::test]
async fn test_admin_routes_refuse_regular_users() {
    let app = init_app!("");
    let user = bearer(2, "user");

    for (method, uri) in [
        ("GET", "/users"),
        ("DELETE", "/users/3"),
        ("GET", "/reports"),
        ("DELETE", "/reports/4"),
    ] {
        let req = match method {
            "GET" => test::TestRequest::get(),
            _ => test::TestRequest::delete(),
        }
        .uri(uri)
        .insert_header(("Authorization", user.clone()))
        .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN, "{} {}", method, uri);
    }
}

#[actix_web::test]
async fn test_admin_routes_require_token() {
    let app = init_app!("");

    let req = test::TestRequest::get().uri("/users").to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNAUTHORIZED
    );
}

#[actix_web::test]
async fn test_invalid_token_ignored_on_public_route() {
    let app = init_app!("");

    // Reaches the handler, which fails on the unreachable database
    let req = test::TestRequest::get()
        .uri("/poems")
        .insert_header(("Authorization", "Bearer not.a.token"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Failed to load poems");
}

#[actix_web::test]
async fn test_login_with_expired_token_reaches_handler() {
    let app = init_app!("");

    let req = test::TestRequest::post()
        .uri("/login")
        .insert_header(("Authorization", expired_bearer(4, "user")))
        .set_json(json!({"email": "ann@x.com", "password": "pw"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_ne!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Failed to log in");
}

#[actix_web::test]
async fn test_expired_token_cannot_create_poem() {
    let app = init_app!("");

    let req = test::TestRequest::post()
        .uri("/poems")
        .insert_header(("Authorization", expired_bearer(4, "user")))
        .set_json(json!({"title": "Title", "content": "Body", "user_id": 4}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Authentication required");
}

#[actix_web::test]
async fn test_expired_admin_token_cannot_list_users() {
    let app = init_app!("");

    let req = test::TestRequest::get()
        .uri("/users")
        .insert_header(("Authorization", expired_bearer(1, "admin")))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNAUTHORIZED
    );
}

#[actix_web::test]
async fn test_malformed_signup_body_is_bad_request() {
    let app = init_app!("");

    let req = test::TestRequest::post()
        .uri("/signup")
        .insert_header(("Content-Type", "application/json"))
        .set_payload(r#"{"name": "Ann", "email": "#)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert!(body["message"]
        .as_str()
        .unwrap_or_default()
        .starts_with("Invalid request body"));
}

#[actix_web::test]
async fn test_non_numeric_id_is_not_found() {
    let app = init_app!("");

    let req = test::TestRequest::get().uri("/profile/abc").to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );
}
