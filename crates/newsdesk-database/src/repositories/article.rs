//! Article repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::debug;

use newsdesk_core::error::{AppError, ErrorKind};
use newsdesk_core::result::AppResult;
use newsdesk_core::types::ArticleId;
use newsdesk_entity::article::{Article, CreateArticle, UpdateArticle};
use newsdesk_entity::attachment::Attachment;

use crate::store::ArticleStore;

const ARTICLE_COLUMNS: &str = "id, title, content, created_at, updated_at";

/// Repository for the `articles` table.
#[derive(Debug, Clone)]
pub struct ArticleRepository {
    pool: PgPool,
}

impl ArticleRepository {
    /// Create a new article repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArticleStore for ArticleRepository {
    async fn list(&self) -> AppResult<Vec<Article>> {
        sqlx::query_as::<_, Article>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list articles", e))
    }

    async fn find_by_id(&self, id: ArticleId) -> AppResult<Option<Article>> {
        sqlx::query_as::<_, Article>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find article", e))
    }

    async fn create(&self, data: &CreateArticle) -> AppResult<Article> {
        sqlx::query_as::<_, Article>(&format!(
            "INSERT INTO articles (title, content) VALUES ($1, $2) RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(&data.title)
        .bind(&data.content)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create article", e))
    }

    async fn update(
        &self,
        id: ArticleId,
        changes: &UpdateArticle,
        updated_at: DateTime<Utc>,
    ) -> AppResult<Option<Article>> {
        sqlx::query_as::<_, Article>(&format!(
            "UPDATE articles SET \
                title = COALESCE($2, title), \
                content = COALESCE($3, content), \
                updated_at = $4 \
             WHERE id = $1 RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(id)
        .bind(changes.title.as_deref())
        .bind(changes.content.as_deref())
        .bind(updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update article", e))
    }

    async fn delete_cascade(&self, id: ArticleId) -> AppResult<Option<Vec<Attachment>>> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let attachments = sqlx::query_as::<_, Attachment>(
            "DELETE FROM attachments WHERE article_id = $1 \
             RETURNING id, article_id, original_filename, storage_path, uploaded_at",
        )
        .bind(id)
        .fetch_all(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to delete article attachments", e)
        })?;

        let deleted = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete article", e))?
            .rows_affected();

        if deleted == 0 {
            // Dropping the transaction rolls it back.
            return Ok(None);
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit article delete", e)
        })?;

        debug!(article_id = %id, attachments = attachments.len(), "Article rows deleted");
        Ok(Some(attachments))
    }
}
