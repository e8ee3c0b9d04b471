//! Admin news article management.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::{Value, json};

use kraftbox_core::ArticleId;

use crate::db::ArticleRepository;
use crate::error::{AppError, Result};
use crate::middleware::RequireAdminAuth;
use crate::models::{Article, ArticlePatch, NewArticle};
use crate::state::AppState;

/// List all articles, drafts included, newest first.
///
/// GET /api/admin/news
pub async fn list(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
) -> Result<Json<Vec<Article>>> {
    let articles = ArticleRepository::new(state.pool()).list_all().await?;

    Ok(Json(articles))
}

/// Create an article.
///
/// POST /api/admin/news
pub async fn create(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Json(new): Json<NewArticle>,
) -> Result<(StatusCode, Json<Article>)> {
    if new.title.trim().is_empty() {
        return Err(AppError::BadRequest("Article title is required".to_string()));
    }

    let article = ArticleRepository::new(state.pool()).create(&new).await?;
    tracing::info!(article_id = %article.id, "Article created");

    Ok((StatusCode::CREATED, Json(article)))
}

/// Update an article in place. Flipping `published` here is how drafts
/// go live.
///
/// PUT /api/admin/news/{id}
pub async fn update(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<ArticleId>,
    Json(patch): Json<ArticlePatch>,
) -> Result<Json<Article>> {
    if patch.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
        return Err(AppError::BadRequest("Article title is required".to_string()));
    }

    let article = ArticleRepository::new(state.pool()).update(id, &patch).await?;

    Ok(Json(article))
}

/// Delete an article.
///
/// DELETE /api/admin/news/{id}
pub async fn remove(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<ArticleId>,
) -> Result<Json<Value>> {
    ArticleRepository::new(state.pool()).delete(id).await?;
    tracing::info!(article_id = %id, "Article deleted");

    Ok(Json(json!({ "success": true })))
}
