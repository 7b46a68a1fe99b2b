//! Record store traits.
//!
//! Each trait covers one table. Operations that must be atomic across
//! tables (the cascading article delete) live on the trait of the owning
//! entity and are implemented with a single transaction.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use newsdesk_core::result::AppResult;
use newsdesk_core::types::ArticleId;
use newsdesk_entity::article::{Article, CreateArticle, UpdateArticle};
use newsdesk_entity::attachment::{Attachment, CreateAttachment};
use newsdesk_entity::principal::{CreatePrincipal, Principal};

/// Persistence for articles.
#[async_trait]
pub trait ArticleStore: Send + Sync + std::fmt::Debug + 'static {
    /// All articles, newest first; ties broken by id descending.
    async fn list(&self) -> AppResult<Vec<Article>>;

    /// Find an article by ID.
    async fn find_by_id(&self, id: ArticleId) -> AppResult<Option<Article>>;

    /// Insert a new article and return it.
    async fn create(&self, data: &CreateArticle) -> AppResult<Article>;

    /// Apply `changes` and set `updated_at`. Returns `None` if the article
    /// does not exist.
    async fn update(
        &self,
        id: ArticleId,
        changes: &UpdateArticle,
        updated_at: DateTime<Utc>,
    ) -> AppResult<Option<Article>>;

    /// Delete the article and every attachment record it owns in one
    /// transaction. Returns the deleted attachments, or `None` if the
    /// article does not exist (in which case nothing is deleted).
    async fn delete_cascade(&self, id: ArticleId) -> AppResult<Option<Vec<Attachment>>>;
}

/// Persistence for attachment records.
#[async_trait]
pub trait AttachmentStore: Send + Sync + std::fmt::Debug + 'static {
    /// Insert an attachment record. Fails with `NotFound` if the parent
    /// article is gone.
    async fn create(&self, data: &CreateAttachment) -> AppResult<Attachment>;

    /// Attachments of one article, oldest first.
    async fn find_by_article(&self, article_id: ArticleId) -> AppResult<Vec<Attachment>>;

    /// Attachments of several articles, oldest first.
    async fn find_by_articles(&self, article_ids: &[ArticleId]) -> AppResult<Vec<Attachment>>;

    /// Every storage path currently referenced by a record.
    async fn storage_paths(&self) -> AppResult<Vec<String>>;
}

/// Persistence for principals.
#[async_trait]
pub trait PrincipalStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find a principal by exact username.
    async fn find_by_username(&self, username: &str) -> AppResult<Option<Principal>>;

    /// Insert a principal unless the username is taken. Returns `None`
    /// when a principal with that username already exists.
    async fn insert_if_absent(&self, data: &CreatePrincipal) -> AppResult<Option<Principal>>;
}
