//! Guards the static upload mount.

use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use percent_encoding::percent_decode_str;

use newsdesk_storage::providers::local::PARTIAL_SUFFIX;

/// Answers 404 for in-flight upload files so they are never served.
pub async fn hide_partial_uploads(request: Request, next: Next) -> Response {
    if is_partial_upload(request.uri().path()) {
        return StatusCode::NOT_FOUND.into_response();
    }
    next.run(request).await
}

fn is_partial_upload(path: &str) -> bool {
    percent_decode_str(path)
        .decode_utf8_lossy()
        .trim_end_matches('/')
        .ends_with(PARTIAL_SUFFIX)
}
