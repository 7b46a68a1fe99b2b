//! In-memory implementation of every record store trait.
//!
//! All tables live behind a single lock so that the cascading delete is
//! atomic with respect to concurrent inserts, the same guarantee the
//! PostgreSQL transaction gives.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use newsdesk_core::error::AppError;
use newsdesk_core::result::AppResult;
use newsdesk_core::types::{ArticleId, AttachmentId, PrincipalId};
use newsdesk_entity::article::{Article, CreateArticle, UpdateArticle};
use newsdesk_entity::attachment::{Attachment, CreateAttachment};
use newsdesk_entity::principal::{CreatePrincipal, Principal};

use crate::store::{ArticleStore, AttachmentStore, PrincipalStore};

#[derive(Debug, Default)]
struct Tables {
    next_article_id: i64,
    next_attachment_id: i64,
    next_principal_id: i64,
    articles: BTreeMap<ArticleId, Article>,
    attachments: BTreeMap<AttachmentId, Attachment>,
    principals: BTreeMap<PrincipalId, Principal>,
}

impl Tables {
    fn article_attachments(&self, article_id: ArticleId) -> Vec<Attachment> {
        self.attachments
            .values()
            .filter(|a| a.article_id == article_id)
            .cloned()
            .collect()
    }
}

/// Record store backed by process memory. Data is lost on restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn sort_by_upload(attachments: &mut [Attachment]) {
    attachments.sort_by(|a, b| a.uploaded_at.cmp(&b.uploaded_at).then(a.id.cmp(&b.id)));
}

#[async_trait]
impl ArticleStore for MemoryStore {
    async fn list(&self) -> AppResult<Vec<Article>> {
        let tables = self.tables.read().await;
        let mut articles: Vec<Article> = tables.articles.values().cloned().collect();
        articles.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(articles)
    }

    async fn find_by_id(&self, id: ArticleId) -> AppResult<Option<Article>> {
        Ok(self.tables.read().await.articles.get(&id).cloned())
    }

    async fn create(&self, data: &CreateArticle) -> AppResult<Article> {
        let mut tables = self.tables.write().await;
        tables.next_article_id += 1;
        let article = Article {
            id: ArticleId::new(tables.next_article_id),
            title: data.title.clone(),
            content: data.content.clone(),
            created_at: Utc::now(),
            updated_at: None,
        };
        tables.articles.insert(article.id, article.clone());
        Ok(article)
    }

    async fn update(
        &self,
        id: ArticleId,
        changes: &UpdateArticle,
        updated_at: DateTime<Utc>,
    ) -> AppResult<Option<Article>> {
        let mut tables = self.tables.write().await;
        Ok(tables.articles.get_mut(&id).map(|article| {
            article.apply(changes, updated_at);
            article.clone()
        }))
    }

    async fn delete_cascade(&self, id: ArticleId) -> AppResult<Option<Vec<Attachment>>> {
        let mut tables = self.tables.write().await;
        if tables.articles.remove(&id).is_none() {
            return Ok(None);
        }
        let mut removed = tables.article_attachments(id);
        tables.attachments.retain(|_, a| a.article_id != id);
        sort_by_upload(&mut removed);
        Ok(Some(removed))
    }
}

#[async_trait]
impl AttachmentStore for MemoryStore {
    async fn create(&self, data: &CreateAttachment) -> AppResult<Attachment> {
        let mut tables = self.tables.write().await;
        if !tables.articles.contains_key(&data.article_id) {
            return Err(AppError::not_found(format!(
                "Article {} not found",
                data.article_id
            )));
        }
        if tables
            .attachments
            .values()
            .any(|a| a.storage_path == data.storage_path)
        {
            return Err(AppError::conflict(format!(
                "Storage path '{}' is already in use",
                data.storage_path
            )));
        }
        tables.next_attachment_id += 1;
        let attachment = Attachment {
            id: AttachmentId::new(tables.next_attachment_id),
            article_id: data.article_id,
            original_filename: data.original_filename.clone(),
            storage_path: data.storage_path.clone(),
            uploaded_at: Utc::now(),
        };
        tables.attachments.insert(attachment.id, attachment.clone());
        Ok(attachment)
    }

    async fn find_by_article(&self, article_id: ArticleId) -> AppResult<Vec<Attachment>> {
        let mut attachments = self.tables.read().await.article_attachments(article_id);
        sort_by_upload(&mut attachments);
        Ok(attachments)
    }

    async fn find_by_articles(&self, article_ids: &[ArticleId]) -> AppResult<Vec<Attachment>> {
        let tables = self.tables.read().await;
        let mut attachments: Vec<Attachment> = tables
            .attachments
            .values()
            .filter(|a| article_ids.contains(&a.article_id))
            .cloned()
            .collect();
        sort_by_upload(&mut attachments);
        Ok(attachments)
    }

    async fn storage_paths(&self) -> AppResult<Vec<String>> {
        let tables = self.tables.read().await;
        Ok(tables
            .attachments
            .values()
            .map(|a| a.storage_path.clone())
            .collect())
    }
}

#[async_trait]
impl PrincipalStore for MemoryStore {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<Principal>> {
        let tables = self.tables.read().await;
        Ok(tables
            .principals
            .values()
            .find(|p| p.username == username)
            .cloned())
    }

    async fn insert_if_absent(&self, data: &CreatePrincipal) -> AppResult<Option<Principal>> {
        let mut tables = self.tables.write().await;
        if tables.principals.values().any(|p| p.username == data.username) {
            return Ok(None);
        }
        tables.next_principal_id += 1;
        let principal = Principal {
            id: PrincipalId::new(tables.next_principal_id),
            username: data.username.clone(),
            password_hash: data.password_hash.clone(),
            created_at: Utc::now(),
        };
        tables.principals.insert(principal.id, principal.clone());
        Ok(Some(principal))
    }
}
