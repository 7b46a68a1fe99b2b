//! Principal entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use newsdesk_core::types::PrincipalId;

/// An identity permitted to perform mutations.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Principal {
    /// Unique principal identifier.
    pub id: PrincipalId,
    /// Unique login name.
    pub username: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// When the principal was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a principal.
#[derive(Debug, Clone)]
pub struct CreatePrincipal {
    /// Desired username.
    pub username: String,
    /// Pre-hashed password.
    pub password_hash: String,
}
