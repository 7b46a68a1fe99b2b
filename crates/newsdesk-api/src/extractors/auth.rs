//! `AuthUser` extractor: runs the `Authorization` header through the
//! mutation gate.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use newsdesk_auth::Credentials;
use newsdesk_service::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// The authenticated caller of a mutating endpoint.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok());
        let credentials = Credentials::from_authorization(header);

        let ctx = state.gate.authorize(&credentials).await?;
        Ok(AuthUser(ctx))
    }
}
