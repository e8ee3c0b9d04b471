//! Public company-info route.

use axum::{Json, extract::State};

use crate::db::CompanyRepository;
use crate::error::Result;
use crate::models::CompanyInfo;
use crate::state::AppState;

/// Company contact details for the site header and footer.
///
/// GET /api/company-info
///
/// Always 200: an empty settings table serves the built-in defaults.
pub async fn info(State(state): State<AppState>) -> Result<Json<CompanyInfo>> {
    let settings = CompanyRepository::new(state.pool()).latest().await?;
    let info = settings.map_or_else(CompanyInfo::default, |s| CompanyInfo::from_settings(&s));

    Ok(Json(info))
}
