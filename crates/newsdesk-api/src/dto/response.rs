//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use newsdesk_auth::AccessToken;
use newsdesk_core::config::StorageConfig;
use newsdesk_core::types::{ArticleId, AttachmentId};
use newsdesk_entity::article::{Article, ArticleWithAttachments};
use newsdesk_entity::attachment::Attachment;

/// `GET /` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootResponse {
    /// Banner text.
    pub message: String,
}

/// `GET /health` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok` or `degraded`.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Record store backend.
    pub database: String,
    /// Whether the record store answered.
    pub database_healthy: bool,
    /// Whether the upload root is usable.
    pub storage_healthy: bool,
}

/// Issued access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Signed JWT.
    pub access_token: String,
    /// Always `bearer`.
    pub token_type: String,
}

impl From<AccessToken> for TokenResponse {
    fn from(token: AccessToken) -> Self {
        Self {
            access_token: token.access_token,
            token_type: token.token_type.to_string(),
        }
    }
}

/// An attachment as the frontend sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttachmentResponse {
    pub id: AttachmentId,
    /// Original filename, for display.
    pub filename: String,
    /// URL path the file is served under.
    pub filepath: String,
    pub uploaded_at: DateTime<Utc>,
    pub is_image: bool,
}

impl AttachmentResponse {
    pub fn new(attachment: &Attachment, storage: &StorageConfig) -> Self {
        Self {
            id: attachment.id,
            filename: attachment.original_filename.clone(),
            filepath: storage.public_url(&attachment.storage_path),
            uploaded_at: attachment.uploaded_at,
            is_image: attachment.is_image(),
        }
    }
}

/// An article with its attachments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleResponse {
    pub id: ArticleId,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub files: Vec<AttachmentResponse>,
}

impl ArticleResponse {
    /// Article without attachments, as returned by create and update.
    pub fn bare(article: Article) -> Self {
        Self {
            id: article.id,
            title: article.title,
            content: article.content,
            created_at: article.created_at,
            updated_at: article.updated_at,
            files: Vec::new(),
        }
    }

    pub fn new(item: ArticleWithAttachments, storage: &StorageConfig) -> Self {
        let files = item
            .attachments
            .iter()
            .map(|a| AttachmentResponse::new(a, storage))
            .collect();
        Self {
            files,
            ..Self::bare(item.article)
        }
    }
}
