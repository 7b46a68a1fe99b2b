//! Article domain entities.

pub mod model;

pub use model::{Article, ArticleWithAttachments, CreateArticle, UpdateArticle, TITLE_MAX_CHARS};
