//! Credentials to principal resolution.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use newsdesk_core::error::AppError;
use newsdesk_core::result::AppResult;
use newsdesk_database::store::PrincipalStore;
use newsdesk_entity::principal::Principal;

use crate::credentials::Credentials;
use crate::jwt::JwtDecoder;

/// Turns presented credentials into an authenticated principal.
#[async_trait]
pub trait PrincipalResolver: Send + Sync + std::fmt::Debug + 'static {
    /// Resolve `credentials`, failing with an authentication error when
    /// they are missing or do not identify a known principal.
    async fn resolve(&self, credentials: &Credentials) -> AppResult<Principal>;
}

/// Resolves bearer JWTs against the principal store.
#[derive(Debug, Clone)]
pub struct JwtPrincipalResolver {
    decoder: JwtDecoder,
    principals: Arc<dyn PrincipalStore>,
}

impl JwtPrincipalResolver {
    /// Create a resolver.
    pub fn new(decoder: JwtDecoder, principals: Arc<dyn PrincipalStore>) -> Self {
        Self {
            decoder,
            principals,
        }
    }
}

#[async_trait]
impl PrincipalResolver for JwtPrincipalResolver {
    async fn resolve(&self, credentials: &Credentials) -> AppResult<Principal> {
        let token = match credentials {
            Credentials::Bearer(token) => token,
            Credentials::Missing => return Err(AppError::unauthenticated("Not authenticated")),
        };

        let claims = self.decoder.decode(token)?;

        // A token outlives a deleted or recreated principal; reject both.
        match self.principals.find_by_username(claims.username()).await? {
            Some(principal) if principal.id == claims.pid => Ok(principal),
            _ => {
                debug!(username = %claims.username(), "Token subject no longer exists");
                Err(AppError::unauthenticated("Could not validate credentials"))
            }
        }
    }
}
