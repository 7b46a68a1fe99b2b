//! Article handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use newsdesk_core::types::ArticleId;

use crate::dto::request::{CreateArticleRequest, UpdateArticleRequest};
use crate::dto::response::ArticleResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, JsonBody};
use crate::state::AppState;

/// GET /news
pub async fn list_articles(
    State(state): State<AppState>,
) -> Result<Json<Vec<ArticleResponse>>, ApiError> {
    let articles = state.article_service.list().await?;
    Ok(Json(
        articles
            .into_iter()
            .map(|item| ArticleResponse::new(item, &state.config.storage))
            .collect(),
    ))
}

/// GET /news/{id}
pub async fn get_article(
    State(state): State<AppState>,
    Path(id): Path<ArticleId>,
) -> Result<Json<ArticleResponse>, ApiError> {
    let item = state.article_service.get(id).await?;
    Ok(Json(ArticleResponse::new(item, &state.config.storage)))
}

/// POST /news
pub async fn create_article(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(req): JsonBody<CreateArticleRequest>,
) -> Result<Json<ArticleResponse>, ApiError> {
    let article = state.article_service.create(&auth, req.into()).await?;
    Ok(Json(ArticleResponse::bare(article)))
}

/// PUT /news/{id}
pub async fn update_article(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<ArticleId>,
    JsonBody(req): JsonBody<UpdateArticleRequest>,
) -> Result<Json<ArticleResponse>, ApiError> {
    state.article_service.update(&auth, id, req.into()).await?;
    let item = state.article_service.get(id).await?;
    Ok(Json(ArticleResponse::new(item, &state.config.storage)))
}

/// DELETE /news/{id}
pub async fn delete_article(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<ArticleId>,
) -> Result<StatusCode, ApiError> {
    state.article_service.delete(&auth, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
