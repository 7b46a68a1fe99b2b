//! Record store selected from configuration.

use std::sync::Arc;

use tracing::info;

use newsdesk_core::config::{DatabaseConfig, DatabaseProvider};
use newsdesk_core::result::AppResult;

use crate::connection::DatabasePool;
use crate::memory::MemoryStore;
use crate::migration::run_migrations;
use crate::repositories::{ArticleRepository, AttachmentRepository, PrincipalRepository};
use crate::store::{ArticleStore, AttachmentStore, PrincipalStore};

/// The set of table stores backing one NewsDesk instance.
///
/// The backend is chosen once at construction; callers only see the
/// store traits.
#[derive(Debug, Clone)]
pub struct RecordStore {
    articles: Arc<dyn ArticleStore>,
    attachments: Arc<dyn AttachmentStore>,
    principals: Arc<dyn PrincipalStore>,
    pool: Option<DatabasePool>,
}

impl RecordStore {
    /// Build the record store the configuration asks for. For PostgreSQL
    /// this connects and, when enabled, applies pending migrations.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        match config.provider {
            DatabaseProvider::Postgres => {
                info!("Initializing PostgreSQL record store");
                let pool = DatabasePool::connect(config).await?;
                if config.run_migrations {
                    run_migrations(pool.pool()).await?;
                }
                Ok(Self::postgres(pool))
            }
            DatabaseProvider::Memory => {
                info!("Initializing in-memory record store");
                Ok(Self::memory())
            }
        }
    }

    /// Record store over an open PostgreSQL pool.
    pub fn postgres(pool: DatabasePool) -> Self {
        let pg = pool.pool().clone();
        Self {
            articles: Arc::new(ArticleRepository::new(pg.clone())),
            attachments: Arc::new(AttachmentRepository::new(pg.clone())),
            principals: Arc::new(PrincipalRepository::new(pg)),
            pool: Some(pool),
        }
    }

    /// Fresh, empty in-memory record store.
    pub fn memory() -> Self {
        let store = Arc::new(MemoryStore::new());
        Self {
            articles: store.clone(),
            attachments: store.clone(),
            principals: store,
            pool: None,
        }
    }

    /// Article table.
    pub fn articles(&self) -> Arc<dyn ArticleStore> {
        Arc::clone(&self.articles)
    }

    /// Attachment table.
    pub fn attachments(&self) -> Arc<dyn AttachmentStore> {
        Arc::clone(&self.attachments)
    }

    /// Principal table.
    pub fn principals(&self) -> Arc<dyn PrincipalStore> {
        Arc::clone(&self.principals)
    }

    /// Name of the active backend.
    pub fn provider_type(&self) -> &'static str {
        if self.pool.is_some() { "postgres" } else { "memory" }
    }

    /// Whether the backend is reachable. The in-memory store always is.
    pub async fn health_check(&self) -> AppResult<bool> {
        match &self.pool {
            Some(pool) => pool.health_check().await,
            None => Ok(true),
        }
    }

    /// Release backend resources.
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}
