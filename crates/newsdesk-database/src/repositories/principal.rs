//! Principal repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use newsdesk_core::error::{AppError, ErrorKind};
use newsdesk_core::result::AppResult;
use newsdesk_entity::principal::{CreatePrincipal, Principal};

use crate::store::PrincipalStore;

/// Repository for the `principals` table.
#[derive(Debug, Clone)]
pub struct PrincipalRepository {
    pool: PgPool,
}

impl PrincipalRepository {
    /// Create a new principal repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PrincipalStore for PrincipalRepository {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<Principal>> {
        sqlx::query_as::<_, Principal>(
            "SELECT id, username, password_hash, created_at FROM principals WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find principal by username", e)
        })
    }

    async fn insert_if_absent(&self, data: &CreatePrincipal) -> AppResult<Option<Principal>> {
        sqlx::query_as::<_, Principal>(
            "INSERT INTO principals (username, password_hash) VALUES ($1, $2) \
             ON CONFLICT (username) DO NOTHING \
             RETURNING id, username, password_hash, created_at",
        )
        .bind(&data.username)
        .bind(&data.password_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create principal", e))
    }
}
