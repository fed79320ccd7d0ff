//! HTTP-level tests for the login gate.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, login, post_json};

#[tokio::test]
async fn login_success_returns_token_and_user() {
    let app = common::build_test_app();
    let body = serde_json::json!({ "username": "admin", "password": "password" });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["access_token"].is_string());
    assert_eq!(json["expires_in"], 3600);
    assert_eq!(json["user"]["username"], "admin");
    assert_eq!(json["user"]["roles"], serde_json::json!(["admin"]));
}

#[tokio::test]
async fn login_with_wrong_password_is_rejected() {
    let app = common::build_test_app();
    let body = serde_json::json!({ "username": "admin", "password": "nope" });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
    assert_eq!(json["error"], "Invalid username or password");
}

#[tokio::test]
async fn me_returns_current_user() {
    let app = common::build_test_app();
    let token = login(app.clone()).await;

    let response = get_auth(app, "/api/v1/auth/me", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["username"], "admin");
}

#[tokio::test]
async fn protected_routes_require_a_token() {
    let app = common::build_test_app();
    for uri in ["/api/v1/auth/me", "/api/v1/lookups", "/api/v1/penalties"] {
        let response = get(app.clone(), uri).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{uri}");
    }
}

#[tokio::test]
async fn garbage_token_is_rejected() {
    let app = common::build_test_app();
    let response = get_auth(app, "/api/v1/penalties", "not-a-jwt").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid or expired token");
}
