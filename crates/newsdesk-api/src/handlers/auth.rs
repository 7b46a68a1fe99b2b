//! Login handlers.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use newsdesk_core::error::AppError;

use crate::dto::request::LoginRequest;
use crate::dto::response::TokenResponse;
use crate::error::ApiError;
use crate::extractors::{JsonBody, LoginForm};
use crate::state::AppState;

/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    issue(&state, &req).await
}

/// POST /auth/token
pub async fn token(
    State(state): State<AppState>,
    LoginForm(req): LoginForm,
) -> Result<Json<TokenResponse>, ApiError> {
    issue(&state, &req).await
}

async fn issue(state: &AppState, req: &LoginRequest) -> Result<Json<TokenResponse>, ApiError> {
    let token = state
        .authenticator
        .login(&req.username, &req.password)
        .await?;
    Ok(Json(token.into()))
}
