//! Binding uploaded bytes to an article.

use std::sync::Arc;

use tracing::{info, warn};

use newsdesk_core::error::AppError;
use newsdesk_core::result::AppResult;
use newsdesk_core::traits::{ByteStream, StorageProvider};
use newsdesk_core::types::ArticleId;
use newsdesk_database::store::{ArticleStore, AttachmentStore};
use newsdesk_entity::attachment::{Attachment, CreateAttachment};
use newsdesk_storage::SanitizedFilename;

use crate::context::RequestContext;

/// Stores uploaded files and records them against articles.
#[derive(Debug, Clone)]
pub struct AttachmentService {
    articles: Arc<dyn ArticleStore>,
    attachments: Arc<dyn AttachmentStore>,
    storage: Arc<dyn StorageProvider>,
}

impl AttachmentService {
    /// Create a new attachment service.
    pub fn new(
        articles: Arc<dyn ArticleStore>,
        attachments: Arc<dyn AttachmentStore>,
        storage: Arc<dyn StorageProvider>,
    ) -> Self {
        Self {
            articles,
            attachments,
            storage,
        }
    }

    /// Write `stream` under a sanitized unique name and record it as an
    /// attachment of `article_id`.
    ///
    /// The file is fully written before the record exists. If recording
    /// fails the file is removed again on a best-effort basis.
    pub async fn add_attachment(
        &self,
        ctx: &RequestContext,
        article_id: ArticleId,
        filename: &str,
        stream: ByteStream<'_>,
    ) -> AppResult<Attachment> {
        if self.articles.find_by_id(article_id).await?.is_none() {
            return Err(AppError::not_found(format!(
                "Article {article_id} not found"
            )));
        }

        let names = SanitizedFilename::generate(filename)?;
        let size = self
            .storage
            .write_stream(&names.storage_name, stream)
            .await?;

        let record = CreateAttachment {
            article_id,
            original_filename: names.display_name,
            storage_path: names.storage_name,
        };
        let attachment = match self.attachments.create(&record).await {
            Ok(attachment) => attachment,
            Err(e) => {
                if let Err(cleanup) = self.storage.delete(&record.storage_path).await {
                    warn!(
                        storage_path = %record.storage_path,
                        error = %cleanup,
                        "Failed to remove file of unrecorded attachment"
                    );
                }
                return Err(e);
            }
        };

        info!(
            article_id = %article_id,
            attachment_id = %attachment.id,
            storage_path = %attachment.storage_path,
            bytes = size,
            username = %ctx.username(),
            "Attachment uploaded"
        );
        Ok(attachment)
    }
}
