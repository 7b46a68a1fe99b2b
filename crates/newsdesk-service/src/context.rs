//! Request context carrying the authenticated principal.

use chrono::{DateTime, Utc};
use serde::Serialize;

use newsdesk_core::types::PrincipalId;
use newsdesk_entity::principal::Principal;

/// Proof that the current request was authenticated.
///
/// Fields are private so that a context can only be obtained through
/// [`MutationGate::authorize`](crate::gate::MutationGate::authorize).
#[derive(Debug, Clone, Serialize)]
pub struct RequestContext {
    principal_id: PrincipalId,
    username: String,
    request_time: DateTime<Utc>,
}

impl RequestContext {
    pub(crate) fn for_principal(principal: &Principal) -> Self {
        Self {
            principal_id: principal.id,
            username: principal.username.clone(),
            request_time: Utc::now(),
        }
    }

    /// ID of the acting principal.
    pub fn principal_id(&self) -> PrincipalId {
        self.principal_id
    }

    /// Username of the acting principal.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// When the request was authorized.
    pub fn request_time(&self) -> DateTime<Utc> {
        self.request_time
    }
}
