//! Shared fixtures for service tests.

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use chrono::Utc;
use futures::stream;

use newsdesk_auth::{Credentials, PrincipalResolver};
use newsdesk_core::error::AppError;
use newsdesk_core::result::AppResult;
use newsdesk_core::traits::storage::{ByteStream, StorageObjectMeta, StorageProvider};
use newsdesk_core::types::PrincipalId;
use newsdesk_entity::principal::Principal;
use newsdesk_storage::LocalStorageProvider;

use crate::context::RequestContext;

pub fn admin() -> Principal {
    Principal {
        id: PrincipalId::new(1),
        username: "admin".into(),
        password_hash: String::new(),
        created_at: Utc::now(),
    }
}

pub fn context() -> RequestContext {
    RequestContext::for_principal(&admin())
}

pub fn body(chunks: &[&'static str]) -> ByteStream<'static> {
    let items: Vec<Result<Bytes, std::io::Error>> = chunks
        .iter()
        .map(|c| Ok(Bytes::from_static(c.as_bytes())))
        .collect();
    Box::pin(stream::iter(items))
}

/// Accepts exactly one bearer token.
#[derive(Debug)]
pub struct StaticResolver {
    token: String,
}

impl StaticResolver {
    pub fn accepting(token: &str) -> Self {
        Self {
            token: token.to_string(),
        }
    }
}

#[async_trait]
impl PrincipalResolver for StaticResolver {
    async fn resolve(&self, credentials: &Credentials) -> AppResult<Principal> {
        match credentials {
            Credentials::Bearer(t) if *t == self.token => Ok(admin()),
            _ => Err(AppError::unauthenticated("Not authenticated")),
        }
    }
}

/// Local storage whose deletes always fail.
#[derive(Debug)]
pub struct UndeletableStorage {
    inner: LocalStorageProvider,
}

impl UndeletableStorage {
    pub fn new(inner: LocalStorageProvider) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl StorageProvider for UndeletableStorage {
    fn provider_type(&self) -> &str {
        "undeletable"
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.inner.health_check().await
    }

    async fn write_stream(&self, path: &str, stream: ByteStream<'_>) -> AppResult<u64> {
        self.inner.write_stream(path, stream).await
    }

    async fn delete(&self, path: &str) -> AppResult<bool> {
        Err(AppError::storage(format!("Permission denied: {path}")))
    }

    async fn exists(&self, path: &str) -> AppResult<bool> {
        self.inner.exists(path).await
    }

    async fn list(&self, path: &str) -> AppResult<Vec<StorageObjectMeta>> {
        self.inner.list(path).await
    }
}

pub async fn local_storage(dir: &tempfile::TempDir) -> Arc<LocalStorageProvider> {
    Arc::new(LocalStorageProvider::new(dir.path()).await.unwrap())
}
