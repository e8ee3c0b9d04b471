//! Admin page content editing: drafts, publishing, history restore.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::instrument;

use kraftbox_core::PageVersionId;

use crate::error::Result;
use crate::middleware::RequireAdminAuth;
use crate::models::{PageContentRecord, PageState};
use crate::routes::content::parse_page_key;
use crate::services::content::ContentService;
use crate::state::AppState;

/// Draft, published snapshot and recent history for one page.
///
/// GET /api/admin/content/{page_key}
pub async fn page_state(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(page_key): Path<String>,
) -> Result<Json<PageState>> {
    let page_key = parse_page_key(&page_key)?;
    let page = ContentService::new(state.pool()).page_state(page_key).await?;

    Ok(Json(page))
}

/// PUT /api/admin/content/{page_key} body.
#[derive(Debug, Deserialize)]
pub struct SaveDraftRequest {
    pub content: Value,
    #[serde(default)]
    pub note: Option<String>,
}

/// Wrapper returned whenever an operation rewrites the draft slot.
#[derive(Debug, Serialize)]
pub struct DraftResponse {
    pub draft: PageContentRecord,
}

/// Store a new draft for the page.
///
/// PUT /api/admin/content/{page_key}
#[instrument(skip_all, fields(page = %page_key))]
pub async fn save_draft(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(page_key): Path<String>,
    Json(request): Json<SaveDraftRequest>,
) -> Result<Json<DraftResponse>> {
    let page_key = parse_page_key(&page_key)?;
    let draft = ContentService::new(state.pool())
        .save_draft(page_key, &request.content, request.note.as_deref())
        .await?;
    tracing::info!(version = draft.version, "Draft saved");

    Ok(Json(DraftResponse { draft }))
}

/// POST /api/admin/content/{page_key} body.
#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ContentAction {
    /// Copy the current draft into the published slot.
    Publish,
    /// Overwrite the draft with a snapshot from the history trail.
    Restore { version_id: PageVersionId },
}

/// POST response: publishing returns the live slot, restoring returns
/// the rewritten draft.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ActionOutcome {
    Published { published: PageContentRecord },
    Draft { draft: PageContentRecord },
}

/// Publish the draft or restore a historical version into it.
///
/// POST /api/admin/content/{page_key}
#[instrument(skip_all, fields(page = %page_key))]
pub async fn action(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(page_key): Path<String>,
    Json(request): Json<ContentAction>,
) -> Result<Json<ActionOutcome>> {
    let page_key = parse_page_key(&page_key)?;
    let service = ContentService::new(state.pool());

    let outcome = match request {
        ContentAction::Publish => {
            let published = service.publish(page_key).await?;
            tracing::info!(version = published.version, "Page published");
            ActionOutcome::Published { published }
        }
        ContentAction::Restore { version_id } => {
            let draft = service.restore(page_key, version_id).await?;
            tracing::info!(version = draft.version, "Draft restored");
            ActionOutcome::Draft { draft }
        }
    };

    Ok(Json(outcome))
}
