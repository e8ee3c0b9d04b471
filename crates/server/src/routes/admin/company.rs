//! Admin company settings management.

use axum::{Json, extract::State};
use tracing::instrument;

use crate::db::CompanyRepository;
use crate::error::Result;
use crate::middleware::RequireAdminAuth;
use crate::models::{CompanyInfo, CompanyUpdate};
use crate::state::AppState;

/// Current company settings, defaults included.
///
/// GET /api/admin/company
pub async fn get(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
) -> Result<Json<CompanyInfo>> {
    let settings = CompanyRepository::new(state.pool()).latest().await?;
    let info = settings.map_or_else(CompanyInfo::default, |s| CompanyInfo::from_settings(&s));

    Ok(Json(info))
}

/// Replace the company settings with the submitted payload.
///
/// PUT /api/admin/company
///
/// The payload is normalized first, so omitted fields are written back as
/// their defaults rather than left at whatever the row held before.
#[instrument(skip_all)]
pub async fn update(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Json(payload): Json<CompanyUpdate>,
) -> Result<Json<CompanyInfo>> {
    let normalized = CompanyInfo::from_update(&payload);
    let update = CompanyUpdate::from(normalized);

    let saved = CompanyRepository::new(state.pool()).upsert(&update).await?;
    tracing::info!(settings_id = %saved.id, "Company settings updated");

    Ok(Json(CompanyInfo::from_settings(&saved)))
}
