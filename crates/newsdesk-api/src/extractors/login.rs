//! Login body accepted as either JSON or a urlencoded form.

use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::{Form, Json};
use validator::Validate;

use newsdesk_core::error::AppError;

use crate::dto::request::LoginRequest;
use crate::error::ApiError;

/// A validated [`LoginRequest`], decoded according to `Content-Type`.
#[derive(Debug, Clone)]
pub struct LoginForm(pub LoginRequest);

impl<S> FromRequest<S> for LoginForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/json"));

        let login = if is_json {
            let Json(login) = Json::<LoginRequest>::from_request(req, state)
                .await
                .map_err(|e| AppError::validation(e.body_text()))?;
            login
        } else {
            let Form(login) = Form::<LoginRequest>::from_request(req, state)
                .await
                .map_err(|e| AppError::validation(e.body_text()))?;
            login
        };

        login
            .validate()
            .map_err(|e| AppError::validation(e.to_string()))?;
        Ok(LoginForm(login))
    }
}
