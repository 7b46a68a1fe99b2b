//! Shared test helpers for integration tests.
//!
//! Each [`TestApp`] runs the full router over the in-memory record store
//! and a private temporary upload root.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use newsdesk_api::AppState;
use newsdesk_auth::PasswordHasher;
use newsdesk_core::config::AppConfig;
use newsdesk_core::traits::StorageProvider;
use newsdesk_database::RecordStore;
use newsdesk_service::ensure_default_principal;
use newsdesk_storage::LocalStorageProvider;

pub const ADMIN_USER: &str = "editor";
pub const ADMIN_PASS: &str = "correct horse battery staple";

const MULTIPART_BOUNDARY: &str = "newsdesk-test-boundary";

/// Test application context.
pub struct TestApp {
    /// The full application, middleware included.
    pub router: Router,
    /// Application config.
    pub config: AppConfig,
    /// Upload root; removed when the app is dropped.
    upload_dir: TempDir,
}

impl TestApp {
    /// Create a test application with the default principal seeded.
    pub async fn new() -> Self {
        let upload_dir = tempfile::tempdir().expect("Failed to create upload dir");

        let mut config = AppConfig::default();
        config.storage.upload_root = upload_dir.path().to_string_lossy().into_owned();
        config.auth.jwt_secret = "integration-test-secret".to_string();
        config.admin.username = ADMIN_USER.to_string();
        config.admin.password = ADMIN_PASS.to_string();

        let records = RecordStore::memory();
        let storage: Arc<dyn StorageProvider> = Arc::new(
            LocalStorageProvider::from_config(&config.storage)
                .await
                .expect("Failed to init storage"),
        );

        ensure_default_principal(
            records.principals().as_ref(),
            &PasswordHasher::new(),
            ADMIN_USER,
            ADMIN_PASS,
        )
        .await
        .expect("Failed to seed principal");

        let state = AppState::new(config.clone(), records, storage);
        let router = newsdesk_api::build_app(state);

        Self {
            router,
            config,
            upload_dir,
        }
    }

    /// Directory uploaded files land in.
    pub fn upload_root(&self) -> &Path {
        self.upload_dir.path()
    }

    /// Absolute path of a file served under `filepath` (e.g. `/uploads/x.png`).
    pub fn stored_file(&self, filepath: &str) -> PathBuf {
        let name = filepath
            .strip_prefix(&format!("{}/", self.config.storage.mount_path()))
            .expect("filepath outside the upload mount");
        self.upload_dir.path().join(name)
    }

    /// Names of every file in the upload root.
    pub fn stored_files(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.upload_dir.path())
            .expect("Failed to read upload dir")
            .map(|e| e.expect("dir entry").file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    /// Login with the seeded credentials and return the access token.
    pub async fn admin_token(&self) -> String {
        self.login(ADMIN_USER, ADMIN_PASS).await
    }

    /// Login and return the JWT access token.
    pub async fn login(&self, username: &str, password: &str) -> String {
        let body = serde_json::json!({
            "username": username,
            "password": password,
        });

        let response = self.request("POST", "/auth/login", Some(body), None).await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response
            .body
            .get("access_token")
            .and_then(|v| v.as_str())
            .expect("No access_token in login response")
            .to_string()
    }

    /// Create an article and return its id.
    pub async fn create_article(&self, token: &str, title: &str, content: &str) -> i64 {
        let response = self
            .request(
                "POST",
                "/news",
                Some(serde_json::json!({ "title": title, "content": content })),
                Some(token),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
        response.body["id"].as_i64().expect("No id in article")
    }

    /// Make a JSON request to the test app.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body = body
            .map(|b| serde_json::to_vec(&b).expect("Failed to serialize body"))
            .unwrap_or_default();
        self.send(method, path, "application/json", body, token)
            .await
    }

    /// Upload `contents` as the `file` field of a multipart body.
    pub async fn upload(
        &self,
        article_id: i64,
        filename: &str,
        contents: &[u8],
        token: Option<&str>,
    ) -> TestResponse {
        let body = multipart_body("file", filename, contents);
        self.send(
            "POST",
            &format!("/news/{article_id}/files"),
            &format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"),
            body,
            token,
        )
        .await
    }

    /// Send a request with an explicit content type.
    pub async fn send(
        &self,
        method: &str,
        path: &str,
        content_type: &str,
        body: Vec<u8>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, content_type);

        if let Some(token) = token {
            req = req.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let req = req.body(Body::from(body)).expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes()
            .to_vec();
        let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
            bytes,
        }
    }
}

/// A single-field `multipart/form-data` body.
pub fn multipart_body(field: &str, filename: &str, contents: &[u8]) -> Vec<u8> {
    let mut body = format!(
        "--{MULTIPART_BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n\
         Content-Type: application/octet-stream\r\n\r\n"
    )
    .into_bytes();
    body.extend_from_slice(contents);
    body.extend_from_slice(format!("\r\n--{MULTIPART_BOUNDARY}--\r\n").as_bytes());
    body
}

/// Response from a test request.
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Parsed JSON body, `Null` when the body is not JSON.
    pub body: Value,
    /// Raw body.
    pub bytes: Vec<u8>,
}
