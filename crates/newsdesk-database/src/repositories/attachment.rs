//! Attachment repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use newsdesk_core::error::{AppError, ErrorKind};
use newsdesk_core::result::AppResult;
use newsdesk_core::types::ArticleId;
use newsdesk_entity::attachment::{Attachment, CreateAttachment};

use super::STORAGE_PATH_UNIQUE;
use crate::store::AttachmentStore;

const ATTACHMENT_COLUMNS: &str = "id, article_id, original_filename, storage_path, uploaded_at";

/// Repository for the `attachments` table.
#[derive(Debug, Clone)]
pub struct AttachmentRepository {
    pool: PgPool,
}

impl AttachmentRepository {
    /// Create a new attachment repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_insert_error(data: &CreateAttachment, e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db) = &e {
        if db.is_foreign_key_violation() {
            return AppError::not_found(format!("Article {} not found", data.article_id));
        }
        if db.is_unique_violation() && db.constraint() == Some(STORAGE_PATH_UNIQUE) {
            return AppError::conflict(format!(
                "Storage path '{}' is already in use",
                data.storage_path
            ));
        }
    }
    AppError::with_source(ErrorKind::Database, "Failed to create attachment", e)
}

#[async_trait]
impl AttachmentStore for AttachmentRepository {
    async fn create(&self, data: &CreateAttachment) -> AppResult<Attachment> {
        sqlx::query_as::<_, Attachment>(&format!(
            "INSERT INTO attachments (article_id, original_filename, storage_path) \
             VALUES ($1, $2, $3) RETURNING {ATTACHMENT_COLUMNS}"
        ))
        .bind(data.article_id)
        .bind(&data.original_filename)
        .bind(&data.storage_path)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_insert_error(data, e))
    }

    async fn find_by_article(&self, article_id: ArticleId) -> AppResult<Vec<Attachment>> {
        sqlx::query_as::<_, Attachment>(&format!(
            "SELECT {ATTACHMENT_COLUMNS} FROM attachments \
             WHERE article_id = $1 ORDER BY uploaded_at ASC, id ASC"
        ))
        .bind(article_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list attachments", e))
    }

    async fn find_by_articles(&self, article_ids: &[ArticleId]) -> AppResult<Vec<Attachment>> {
        if article_ids.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<i64> = article_ids.iter().map(|id| id.get()).collect();
        sqlx::query_as::<_, Attachment>(&format!(
            "SELECT {ATTACHMENT_COLUMNS} FROM attachments \
             WHERE article_id = ANY($1) ORDER BY uploaded_at ASC, id ASC"
        ))
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list attachments", e))
    }

    async fn storage_paths(&self) -> AppResult<Vec<String>> {
        sqlx::query_scalar::<_, String>("SELECT storage_path FROM attachments")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list storage paths", e)
            })
    }
}
