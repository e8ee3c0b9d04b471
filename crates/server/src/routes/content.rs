//! Public page-content route.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use serde_json::Value;

use kraftbox_core::types::{ContentStatus, PageKey};

use crate::content;
use crate::db::PageContentRepository;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Published content payload for one page.
#[derive(Debug, Serialize)]
pub struct PublishedContent {
    pub content: Value,
}

/// Published content for a page, for the public site to render.
///
/// GET /api/content/{page_key}
///
/// Pages that have never been published serve their built-in defaults.
pub async fn published(
    State(state): State<AppState>,
    Path(page_key): Path<String>,
) -> Result<Json<PublishedContent>> {
    let page_key = parse_page_key(&page_key)?;

    let slot = PageContentRepository::new(state.pool())
        .get_slot(page_key, ContentStatus::Published)
        .await?;
    let content = slot.map_or_else(
        || content::default_content(page_key),
        |record| content::normalize(page_key, &record.content),
    );

    Ok(Json(PublishedContent { content }))
}

/// Page keys are a closed set; anything else is an unknown page.
pub(crate) fn parse_page_key(raw: &str) -> Result<PageKey> {
    raw.parse()
        .map_err(|_| AppError::NotFound("Page".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page_key_accepts_known_keys() {
        assert!(matches!(parse_page_key("home"), Ok(PageKey::Home)));
        assert!(matches!(
            parse_page_key("custom-boxes"),
            Ok(PageKey::CustomBoxes)
        ));
    }

    #[test]
    fn test_parse_page_key_rejects_unknown_keys() {
        assert!(parse_page_key("pricing").is_err());
        assert!(parse_page_key("").is_err());
    }
}
