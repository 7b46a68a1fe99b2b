//! Cascading article deletion.
//!
//! Records go first, in one transaction. Files are removed afterwards,
//! each on its own; a file that cannot be removed is logged and left for
//! the orphan sweep.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use newsdesk_core::error::AppError;
use newsdesk_core::result::AppResult;
use newsdesk_core::traits::StorageProvider;
use newsdesk_core::types::ArticleId;
use newsdesk_database::store::ArticleStore;

use crate::context::RequestContext;

/// Outcome of a cascading delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CascadeReport {
    /// Deleted article.
    pub article_id: ArticleId,
    /// Attachment records deleted with it.
    pub records_removed: usize,
    /// Backing files removed.
    pub files_removed: usize,
    /// Backing files that were already gone.
    pub files_missing: usize,
    /// Backing files that could not be removed.
    pub files_failed: usize,
}

/// Deletes an article together with its attachments.
#[derive(Debug, Clone)]
pub struct CascadeDeleter {
    articles: Arc<dyn ArticleStore>,
    storage: Arc<dyn StorageProvider>,
}

impl CascadeDeleter {
    /// Create a cascade deleter.
    pub fn new(articles: Arc<dyn ArticleStore>, storage: Arc<dyn StorageProvider>) -> Self {
        Self { articles, storage }
    }

    /// Delete article `id` and everything it owns. Succeeds once the record
    /// transaction commits, regardless of how file removal goes.
    pub async fn delete_article_cascade(
        &self,
        ctx: &RequestContext,
        id: ArticleId,
    ) -> AppResult<CascadeReport> {
        let removed = self
            .articles
            .delete_cascade(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Article {id} not found")))?;

        let mut report = CascadeReport {
            article_id: id,
            records_removed: removed.len(),
            files_removed: 0,
            files_missing: 0,
            files_failed: 0,
        };

        for attachment in &removed {
            match self.storage.delete(&attachment.storage_path).await {
                Ok(true) => report.files_removed += 1,
                Ok(false) => {
                    report.files_missing += 1;
                    warn!(
                        article_id = %id,
                        attachment_id = %attachment.id,
                        storage_path = %attachment.storage_path,
                        "Attachment file was already missing"
                    );
                }
                Err(e) => {
                    report.files_failed += 1;
                    warn!(
                        article_id = %id,
                        attachment_id = %attachment.id,
                        storage_path = %attachment.storage_path,
                        error = %e,
                        "Failed to remove attachment file"
                    );
                }
            }
        }

        info!(
            article_id = %id,
            username = %ctx.username(),
            records = report.records_removed,
            files_removed = report.files_removed,
            files_missing = report.files_missing,
            files_failed = report.files_failed,
            "Article deleted"
        );
        Ok(report)
    }
}
