//! Article entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use newsdesk_core::types::ArticleId;

use crate::attachment::Attachment;

/// Maximum title length, counted in characters.
pub const TITLE_MAX_CHARS: usize = 200;

/// A news article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Article {
    /// Server-assigned identifier.
    pub id: ArticleId,
    /// Headline. Never empty.
    pub title: String,
    /// Body text. Never empty.
    pub content: String,
    /// When the article was created.
    pub created_at: DateTime<Utc>,
    /// When the article was last edited; `None` until the first update.
    pub updated_at: Option<DateTime<Utc>>,
}

/// An article together with the attachments it owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleWithAttachments {
    /// The article row.
    pub article: Article,
    /// Owned attachments, oldest first.
    pub attachments: Vec<Attachment>,
}

/// Data required to create a new article.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateArticle {
    /// Headline.
    pub title: String,
    /// Body text.
    pub content: String,
}

/// A validated partial update. At least one field is set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateArticle {
    /// New headline, already trimmed.
    pub title: Option<String>,
    /// New body text, already trimmed.
    pub content: Option<String>,
}

impl Article {
    /// Apply an update in place and stamp `updated_at`.
    pub fn apply(&mut self, changes: &UpdateArticle, at: DateTime<Utc>) {
        if let Some(title) = &changes.title {
            self.title.clone_from(title);
        }
        if let Some(content) = &changes.content {
            self.content.clone_from(content);
        }
        self.updated_at = Some(at);
    }
}
