//! Root banner and health check.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::dto::response::{HealthResponse, RootResponse};
use crate::state::AppState;

/// GET /
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "NewsDesk API is running".to_string(),
    })
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let database_healthy = state.records.health_check().await.unwrap_or(false);
    let storage_healthy = state.storage.health_check().await.unwrap_or(false);

    let (status, label) = if database_healthy && storage_healthy {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    (
        status,
        Json(HealthResponse {
            status: label.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            database: state.records.provider_type().to_string(),
            database_healthy,
            storage_healthy,
        }),
    )
}
