//! Integration tests for article endpoints.

mod helpers;

use axum::http::{StatusCode, header};
use serde_json::json;

#[tokio::test]
async fn test_article_lifecycle() {
    let app = helpers::TestApp::new().await;
    let token = app.admin_token().await;

    let created = app
        .request(
            "POST",
            "/news",
            Some(json!({ "title": "Election results", "content": "Turnout was high." })),
            Some(&token),
        )
        .await;
    assert_eq!(created.status, StatusCode::OK);
    assert_eq!(created.body["title"], "Election results");
    assert_eq!(created.body["content"], "Turnout was high.");
    assert_eq!(created.body["files"], json!([]));
    assert!(created.body["updated_at"].is_null());
    let id = created.body["id"].as_i64().unwrap();

    let fetched = app.request("GET", &format!("/news/{id}"), None, None).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["title"], "Election results");

    let updated = app
        .request(
            "PUT",
            &format!("/news/{id}"),
            Some(json!({ "title": "  Final election results  " })),
            Some(&token),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["title"], "Final election results");
    assert_eq!(updated.body["content"], "Turnout was high.");
    assert!(updated.body["updated_at"].is_string());

    let deleted = app
        .request("DELETE", &format!("/news/{id}"), None, Some(&token))
        .await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    let gone = app.request("GET", &format!("/news/{id}"), None, None).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
    assert_eq!(gone.body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_list_is_newest_first() {
    let app = helpers::TestApp::new().await;
    let token = app.admin_token().await;

    let first = app.create_article(&token, "First", "one").await;
    let second = app.create_article(&token, "Second", "two").await;
    let third = app.create_article(&token, "Third", "three").await;

    let response = app.request("GET", "/news", None, None).await;
    assert_eq!(response.status, StatusCode::OK);

    let ids: Vec<i64> = response
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![third, second, first]);
}

#[tokio::test]
async fn test_reads_are_public() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/news", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!([]));
}

#[tokio::test]
async fn test_mutations_require_token() {
    let app = helpers::TestApp::new().await;
    let token = app.admin_token().await;
    let id = app.create_article(&token, "Kept", "body").await;

    let create = app
        .request(
            "POST",
            "/news",
            Some(json!({ "title": "Sneaky", "content": "body" })),
            None,
        )
        .await;
    assert_eq!(create.status, StatusCode::UNAUTHORIZED);
    assert_eq!(create.body["error"], "UNAUTHENTICATED");
    assert_eq!(
        create.headers.get(header::WWW_AUTHENTICATE).unwrap(),
        "Bearer"
    );

    let update = app
        .request(
            "PUT",
            &format!("/news/{id}"),
            Some(json!({ "title": "Changed" })),
            Some("not-a-token"),
        )
        .await;
    assert_eq!(update.status, StatusCode::UNAUTHORIZED);

    let delete = app
        .request("DELETE", &format!("/news/{id}"), None, None)
        .await;
    assert_eq!(delete.status, StatusCode::UNAUTHORIZED);

    let list = app.request("GET", "/news", None, None).await;
    let articles = list.body.as_array().unwrap();
    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0]["title"], "Kept");
}

#[tokio::test]
async fn test_create_validation() {
    let app = helpers::TestApp::new().await;
    let token = app.admin_token().await;

    let blank = app
        .request(
            "POST",
            "/news",
            Some(json!({ "title": "   ", "content": "body" })),
            Some(&token),
        )
        .await;
    assert_eq!(blank.status, StatusCode::BAD_REQUEST);
    assert_eq!(blank.body["error"], "VALIDATION_ERROR");

    let long = app
        .request(
            "POST",
            "/news",
            Some(json!({ "title": "x".repeat(201), "content": "body" })),
            Some(&token),
        )
        .await;
    assert_eq!(long.status, StatusCode::BAD_REQUEST);

    let at_limit = app
        .request(
            "POST",
            "/news",
            Some(json!({ "title": "x".repeat(200), "content": "body" })),
            Some(&token),
        )
        .await;
    assert_eq!(at_limit.status, StatusCode::OK);
}

#[tokio::test]
async fn test_malformed_body_uses_error_body() {
    let app = helpers::TestApp::new().await;
    let token = app.admin_token().await;

    let malformed = app
        .send(
            "POST",
            "/news",
            "application/json",
            b"{\"title\": ".to_vec(),
            Some(&token),
        )
        .await;
    assert_eq!(malformed.status, StatusCode::BAD_REQUEST);
    assert_eq!(malformed.body["error"], "VALIDATION_ERROR");
    assert!(malformed.body["detail"].is_string());

    let missing_field = app
        .request(
            "POST",
            "/news",
            Some(json!({ "title": "No content" })),
            Some(&token),
        )
        .await;
    assert_eq!(missing_field.status, StatusCode::BAD_REQUEST);
    assert_eq!(missing_field.body["error"], "VALIDATION_ERROR");

    let list = app.request("GET", "/news", None, None).await;
    assert_eq!(list.body, json!([]));
}

#[tokio::test]
async fn test_update_validation() {
    let app = helpers::TestApp::new().await;
    let token = app.admin_token().await;
    let id = app.create_article(&token, "Title", "Content").await;

    let empty = app
        .request("PUT", &format!("/news/{id}"), Some(json!({})), Some(&token))
        .await;
    assert_eq!(empty.status, StatusCode::BAD_REQUEST);

    let blank_content = app
        .request(
            "PUT",
            &format!("/news/{id}"),
            Some(json!({ "title": "New title", "content": " " })),
            Some(&token),
        )
        .await;
    assert_eq!(blank_content.status, StatusCode::BAD_REQUEST);

    let unchanged = app.request("GET", &format!("/news/{id}"), None, None).await;
    assert_eq!(unchanged.body["title"], "Title");
    assert!(unchanged.body["updated_at"].is_null());

    let missing = app
        .request(
            "PUT",
            "/news/9999",
            Some(json!({ "title": "Nope" })),
            Some(&token),
        )
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_missing_article() {
    let app = helpers::TestApp::new().await;
    let token = app.admin_token().await;

    let response = app
        .request("DELETE", "/news/42", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
