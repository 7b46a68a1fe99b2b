//! Request DTOs with validation.

use serde::Deserialize;
use validator::Validate;

use newsdesk_entity::article::{CreateArticle, UpdateArticle};

/// Username and password, as JSON or as a form.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    /// Login name.
    #[serde(default)]
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    /// Plaintext password.
    #[serde(default)]
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Body of `POST /news`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateArticleRequest {
    /// Headline.
    pub title: String,
    /// Body text.
    pub content: String,
}

impl From<CreateArticleRequest> for CreateArticle {
    fn from(req: CreateArticleRequest) -> Self {
        Self {
            title: req.title,
            content: req.content,
        }
    }
}

/// Body of `PUT /news/{id}`. Absent and `null` fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateArticleRequest {
    /// New headline.
    #[serde(default)]
    pub title: Option<String>,
    /// New body text.
    #[serde(default)]
    pub content: Option<String>,
}

impl From<UpdateArticleRequest> for UpdateArticle {
    fn from(req: UpdateArticleRequest) -> Self {
        Self {
            title: req.title,
            content: req.content,
        }
    }
}
