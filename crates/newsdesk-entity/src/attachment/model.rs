//! Attachment entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use newsdesk_core::types::{ArticleId, AttachmentId};

/// Lower-case extensions rendered inline as images by the frontend.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp", "svg"];

/// A file uploaded against exactly one article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Attachment {
    /// Unique attachment identifier.
    pub id: AttachmentId,
    /// The owning article.
    pub article_id: ArticleId,
    /// Client-supplied basename, for display only.
    pub original_filename: String,
    /// Server-generated path relative to the upload root. Unique.
    pub storage_path: String,
    /// When the file was uploaded.
    pub uploaded_at: DateTime<Utc>,
}

impl Attachment {
    /// Lower-cased extension of the original filename, if any.
    pub fn extension(&self) -> Option<String> {
        std::path::Path::new(&self.original_filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
    }

    /// Whether the attachment is an image by extension.
    pub fn is_image(&self) -> bool {
        self.extension()
            .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
    }
}

/// Data required to create an attachment record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAttachment {
    /// The owning article.
    pub article_id: ArticleId,
    /// Client-supplied basename.
    pub original_filename: String,
    /// Path of the already-written file.
    pub storage_path: String,
}
