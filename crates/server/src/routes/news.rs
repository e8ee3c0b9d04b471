//! Public news route.

use axum::{Json, extract::State};

use crate::db::ArticleRepository;
use crate::error::Result;
use crate::models::Article;
use crate::state::AppState;

/// List published articles, newest first.
///
/// GET /api/news
pub async fn published(State(state): State<AppState>) -> Result<Json<Vec<Article>>> {
    let articles = ArticleRepository::new(state.pool()).list_published().await?;

    Ok(Json(articles))
}
