//! Article reads and authenticated mutations.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use newsdesk_core::error::AppError;
use newsdesk_core::result::AppResult;
use newsdesk_core::types::ArticleId;
use newsdesk_database::store::{ArticleStore, AttachmentStore};
use newsdesk_entity::article::{
    Article, ArticleWithAttachments, CreateArticle, TITLE_MAX_CHARS, UpdateArticle,
};
use newsdesk_entity::attachment::Attachment;

use crate::article::cascade::{CascadeDeleter, CascadeReport};
use crate::context::RequestContext;

/// Lists, creates, updates, and deletes articles.
#[derive(Debug, Clone)]
pub struct ArticleService {
    articles: Arc<dyn ArticleStore>,
    attachments: Arc<dyn AttachmentStore>,
    cascade: CascadeDeleter,
}

impl ArticleService {
    /// Create a new article service.
    pub fn new(
        articles: Arc<dyn ArticleStore>,
        attachments: Arc<dyn AttachmentStore>,
        cascade: CascadeDeleter,
    ) -> Self {
        Self {
            articles,
            attachments,
            cascade,
        }
    }

    /// Every article, newest first, each with its attachments.
    pub async fn list(&self) -> AppResult<Vec<ArticleWithAttachments>> {
        let articles = self.articles.list().await?;
        let ids: Vec<ArticleId> = articles.iter().map(|a| a.id).collect();

        let mut by_article: HashMap<ArticleId, Vec<Attachment>> = HashMap::new();
        for attachment in self.attachments.find_by_articles(&ids).await? {
            by_article
                .entry(attachment.article_id)
                .or_default()
                .push(attachment);
        }

        Ok(articles
            .into_iter()
            .map(|article| {
                let attachments = by_article.remove(&article.id).unwrap_or_default();
                ArticleWithAttachments {
                    article,
                    attachments,
                }
            })
            .collect())
    }

    /// One article with its attachments.
    pub async fn get(&self, id: ArticleId) -> AppResult<ArticleWithAttachments> {
        let article = self.find_existing(id).await?;
        let attachments = self.attachments.find_by_article(id).await?;
        Ok(ArticleWithAttachments {
            article,
            attachments,
        })
    }

    /// Store a new article. Title and content are kept exactly as given but
    /// must contain something other than whitespace.
    pub async fn create(&self, ctx: &RequestContext, data: CreateArticle) -> AppResult<Article> {
        require_text("title", &data.title)?;
        require_title_length(&data.title)?;
        require_text("content", &data.content)?;

        let article = self.articles.create(&data).await?;
        info!(
            article_id = %article.id,
            username = %ctx.username(),
            "Article created"
        );
        Ok(article)
    }

    /// Change the title, the content, or both. Provided values are trimmed
    /// and must not end up empty; nothing is written unless every provided
    /// field is valid.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: ArticleId,
        data: UpdateArticle,
    ) -> AppResult<Article> {
        self.find_existing(id).await?;

        if data.title.is_none() && data.content.is_none() {
            return Err(AppError::validation("Nothing to update"));
        }

        let title = data.title.map(|t| t.trim().to_string());
        let content = data.content.map(|c| c.trim().to_string());
        if let Some(title) = &title {
            require_text("title", title)?;
            require_title_length(title)?;
        }
        if let Some(content) = &content {
            require_text("content", content)?;
        }

        let changes = UpdateArticle { title, content };
        let article = self
            .articles
            .update(id, &changes, Utc::now())
            .await?
            .ok_or_else(|| not_found(id))?;

        info!(
            article_id = %id,
            username = %ctx.username(),
            title_changed = changes.title.is_some(),
            content_changed = changes.content.is_some(),
            "Article updated"
        );
        Ok(article)
    }

    /// Delete an article, its attachment records, and their files.
    pub async fn delete(&self, ctx: &RequestContext, id: ArticleId) -> AppResult<CascadeReport> {
        self.cascade.delete_article_cascade(ctx, id).await
    }

    async fn find_existing(&self, id: ArticleId) -> AppResult<Article> {
        self.articles
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }
}

fn not_found(id: ArticleId) -> AppError {
    AppError::not_found(format!("Article {id} not found"))
}

fn require_text(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    Ok(())
}

fn require_title_length(title: &str) -> AppResult<()> {
    if title.chars().count() > TITLE_MAX_CHARS {
        return Err(AppError::validation(format!(
            "title must be at most {TITLE_MAX_CHARS} characters"
        )));
    }
    Ok(())
}
