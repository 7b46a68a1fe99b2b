//! Integration tests for attachment upload, serving, and cascade removal.

mod helpers;

use axum::http::StatusCode;

#[tokio::test]
async fn test_upload_and_serve() {
    let app = helpers::TestApp::new().await;
    let token = app.admin_token().await;
    let id = app.create_article(&token, "Budget", "Numbers inside").await;

    let response = app
        .upload(id, "Annual Report (final).PDF", b"%PDF-1.7 body", Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["filename"], "Annual Report (final).PDF");
    assert_eq!(response.body["is_image"], false);

    let filepath = response.body["filepath"].as_str().unwrap().to_string();
    let name = filepath.strip_prefix("/uploads/").unwrap();
    assert!(name.ends_with("_Annual_Report__final.pdf"), "{name}");
    let (token_hex, _) = name.split_once('_').unwrap();
    assert_eq!(token_hex.len(), 32);
    assert!(token_hex.chars().all(|c| c.is_ascii_hexdigit()));

    assert_eq!(
        std::fs::read(app.stored_file(&filepath)).unwrap(),
        b"%PDF-1.7 body"
    );

    let served = app
        .send("GET", &filepath, "application/octet-stream", Vec::new(), None)
        .await;
    assert_eq!(served.status, StatusCode::OK);
    assert_eq!(served.bytes, b"%PDF-1.7 body");

    let article = app.request("GET", &format!("/news/{id}"), None, None).await;
    let files = article.body["files"].as_array().unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0]["filepath"], filepath.as_str());
}

#[tokio::test]
async fn test_same_name_twice_gets_distinct_paths() {
    let app = helpers::TestApp::new().await;
    let token = app.admin_token().await;
    let id = app.create_article(&token, "Gallery", "Photos").await;

    let first = app.upload(id, "photo.png", b"one", Some(&token)).await;
    let second = app.upload(id, "photo.png", b"two", Some(&token)).await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(second.status, StatusCode::OK);
    assert_eq!(first.body["is_image"], true);
    assert_ne!(first.body["filepath"], second.body["filepath"]);
    assert_eq!(app.stored_files().len(), 2);

    let listed = app.request("GET", "/news", None, None).await;
    assert_eq!(listed.body[0]["files"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_upload_requires_token() {
    let app = helpers::TestApp::new().await;
    let token = app.admin_token().await;
    let id = app.create_article(&token, "Locked", "Body").await;

    let response = app.upload(id, "notes.txt", b"secret", None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(app.stored_files().is_empty());
}

#[tokio::test]
async fn test_upload_to_missing_article() {
    let app = helpers::TestApp::new().await;
    let token = app.admin_token().await;

    let response = app.upload(404, "notes.txt", b"orphan", Some(&token)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(app.stored_files().is_empty());
}

#[tokio::test]
async fn test_upload_without_file_field() {
    let app = helpers::TestApp::new().await;
    let token = app.admin_token().await;
    let id = app.create_article(&token, "Article", "Body").await;

    let body = helpers::multipart_body("attachment", "notes.txt", b"wrong field");
    let response = app
        .send(
            "POST",
            &format!("/news/{id}/files"),
            "multipart/form-data; boundary=newsdesk-test-boundary",
            body,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(app.stored_files().is_empty());
}

#[tokio::test]
async fn test_delete_removes_files() {
    let app = helpers::TestApp::new().await;
    let token = app.admin_token().await;
    let doomed = app.create_article(&token, "Doomed", "Body").await;
    let kept = app.create_article(&token, "Kept", "Body").await;

    let a = app.upload(doomed, "a.txt", b"a", Some(&token)).await;
    let b = app.upload(doomed, "b.jpg", b"b", Some(&token)).await;
    let c = app.upload(kept, "c.txt", b"c", Some(&token)).await;
    assert_eq!(app.stored_files().len(), 3);

    let deleted = app
        .request("DELETE", &format!("/news/{doomed}"), None, Some(&token))
        .await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    for removed in [&a, &b] {
        let filepath = removed.body["filepath"].as_str().unwrap();
        assert!(!app.stored_file(filepath).exists());
        let served = app
            .send("GET", filepath, "application/octet-stream", Vec::new(), None)
            .await;
        assert_eq!(served.status, StatusCode::NOT_FOUND);
    }

    let survivor = c.body["filepath"].as_str().unwrap();
    assert!(app.stored_file(survivor).exists());
    assert_eq!(app.stored_files().len(), 1);

    let listed = app.request("GET", "/news", None, None).await;
    let articles = listed.body.as_array().unwrap();
    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0]["id"], kept);
    assert_eq!(articles[0]["files"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_partial_uploads_are_not_served() {
    let app = helpers::TestApp::new().await;
    std::fs::write(app.upload_root().join("abc_draft.pdf.part"), b"half").unwrap();
    std::fs::write(app.upload_root().join("abc_draft.pdf"), b"whole").unwrap();

    for path in ["/uploads/abc_draft.pdf.part", "/uploads/abc_draft.pdf%2Epart"] {
        let response = app
            .send("GET", path, "application/octet-stream", Vec::new(), None)
            .await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{path}");
    }

    let served = app
        .send("GET", "/uploads/abc_draft.pdf", "application/octet-stream", Vec::new(), None)
        .await;
    assert_eq!(served.status, StatusCode::OK);
    assert_eq!(served.bytes, b"whole");
}

#[tokio::test]
async fn test_very_long_filename_upload() {
    let app = helpers::TestApp::new().await;
    let token = app.admin_token().await;
    let id = app.create_article(&token, "Long names", "Body").await;
    let filename = format!("{}.pdf", "a".repeat(300));

    let response = app.upload(id, &filename, b"%PDF", Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["filename"], filename.as_str());

    let filepath = response.body["filepath"].as_str().unwrap();
    assert!(app.stored_file(filepath).is_file());
}
