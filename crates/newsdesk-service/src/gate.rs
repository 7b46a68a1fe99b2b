//! The gate every mutating request passes through.

use std::sync::Arc;

use tracing::debug;

use newsdesk_auth::{Credentials, PrincipalResolver};
use newsdesk_core::result::AppResult;

use crate::context::RequestContext;

/// Resolves credentials into a [`RequestContext`].
#[derive(Debug, Clone)]
pub struct MutationGate {
    resolver: Arc<dyn PrincipalResolver>,
}

impl MutationGate {
    /// Create a gate backed by `resolver`.
    pub fn new(resolver: Arc<dyn PrincipalResolver>) -> Self {
        Self { resolver }
    }

    /// Verify `credentials`. Fails with an authentication error when the
    /// resolver rejects them.
    pub async fn authorize(&self, credentials: &Credentials) -> AppResult<RequestContext> {
        let principal = self.resolver.resolve(credentials).await?;
        debug!(username = %principal.username, "Request authorized");
        Ok(RequestContext::for_principal(&principal))
    }
}
