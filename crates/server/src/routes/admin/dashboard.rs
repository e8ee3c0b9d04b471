//! Admin dashboard overview.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::db::{ArticleRepository, ContactRepository, ProductRepository, QuoteRepository};
use crate::error::Result;
use crate::middleware::RequireAdminAuth;
use crate::models::QuoteRequest;
use crate::state::AppState;

/// How many of the newest quote requests the dashboard shows.
const RECENT_QUOTES: i64 = 5;

/// Headline counters for the dashboard cards.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_products: i64,
    pub total_quotes: i64,
    pub total_contacts: i64,
    pub total_articles: i64,
}

/// Dashboard payload: counters plus the newest quote requests.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub stats: DashboardStats,
    pub recent_quotes: Vec<QuoteRequest>,
}

/// Dashboard overview.
///
/// GET /api/admin/dashboard
///
/// Quote and contact counters only count rows still waiting on an admin
/// (`pending` / `unread`); the article counter counts published ones.
pub async fn overview(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
) -> Result<Json<DashboardResponse>> {
    let pool = state.pool();
    let products = ProductRepository::new(pool);
    let quotes = QuoteRepository::new(pool);
    let contacts = ContactRepository::new(pool);
    let articles = ArticleRepository::new(pool);

    let (total_products, total_quotes, total_contacts, total_articles, recent_quotes) = tokio::try_join!(
        products.count_all(),
        quotes.count_pending(),
        contacts.count_unread(),
        articles.count_published(),
        quotes.recent(RECENT_QUOTES),
    )?;

    Ok(Json(DashboardResponse {
        stats: DashboardStats {
            total_products,
            total_quotes,
            total_contacts,
            total_articles,
        },
        recent_quotes,
    }))
}
