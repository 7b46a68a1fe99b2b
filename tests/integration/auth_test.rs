//! Integration tests for login and service endpoints.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use newsdesk_core::types::PrincipalId;
use newsdesk_entity::principal::Principal;

#[tokio::test]
async fn test_login_success() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/auth/login",
            Some(json!({
                "username": helpers::ADMIN_USER,
                "password": helpers::ADMIN_PASS,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["access_token"].as_str().is_some());
    assert_eq!(response.body["token_type"], "bearer");
}

#[tokio::test]
async fn test_login_invalid_password() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/auth/login",
            Some(json!({
                "username": helpers::ADMIN_USER,
                "password": "wrongpassword",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["detail"], "Incorrect username or password");
}

#[tokio::test]
async fn test_login_nonexistent_user() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/auth/login",
            Some(json!({ "username": "nobody", "password": "password123" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["detail"], "Incorrect username or password");
}

#[tokio::test]
async fn test_login_empty_fields() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/auth/login",
            Some(json!({ "username": "", "password": "" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_token_endpoint_accepts_form() {
    let app = helpers::TestApp::new().await;

    let body = format!(
        "username={}&password={}",
        helpers::ADMIN_USER,
        helpers::ADMIN_PASS.replace(' ', "+")
    );
    let response = app
        .send(
            "POST",
            "/auth/token",
            "application/x-www-form-urlencoded",
            body.into_bytes(),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    let token = response.body["access_token"].as_str().unwrap();

    let created = app
        .request(
            "POST",
            "/news",
            Some(json!({ "title": "Via form token", "content": "ok" })),
            Some(token),
        )
        .await;
    assert_eq!(created.status, StatusCode::OK);
}

#[tokio::test]
async fn test_token_endpoint_accepts_json() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/auth/token",
            Some(json!({
                "username": helpers::ADMIN_USER,
                "password": helpers::ADMIN_PASS,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["token_type"], "bearer");
}

#[tokio::test]
async fn test_token_from_other_secret_rejected() {
    let app = helpers::TestApp::new().await;

    let mut foreign = app.config.auth.clone();
    foreign.jwt_secret = "some-other-secret".to_string();
    let principal = Principal {
        id: PrincipalId::new(1),
        username: helpers::ADMIN_USER.to_string(),
        password_hash: String::new(),
        created_at: chrono::Utc::now(),
    };
    let token = newsdesk_auth::JwtEncoder::new(&foreign)
        .issue(&principal)
        .unwrap()
        .access_token;

    let response = app
        .request(
            "POST",
            "/news",
            Some(json!({ "title": "Forged", "content": "nope" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_root_and_health() {
    let app = helpers::TestApp::new().await;

    let root = app.request("GET", "/", None, None).await;
    assert_eq!(root.status, StatusCode::OK);
    assert_eq!(root.body["message"], "NewsDesk API is running");

    let health = app.request("GET", "/health", None, None).await;
    assert_eq!(health.status, StatusCode::OK);
    assert_eq!(health.body["status"], "ok");
    assert_eq!(health.body["database"], "memory");
    assert_eq!(health.body["storage_healthy"], true);
}
