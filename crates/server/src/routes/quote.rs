//! Public quote routes: request submission and the price estimator.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use kraftbox_core::pricing::{self, PriceBreakdown, ProductTier};

use crate::db::QuoteRepository;
use crate::error::{AppError, Result};
use crate::models::{NewQuoteRequest, QuoteRequest};
use crate::state::AppState;

/// Query parameters for the price estimator.
#[derive(Debug, Deserialize)]
pub struct EstimateParams {
    pub tier: String,
    pub quantity: u32,
}

/// Estimate the price of a tier/quantity pair.
///
/// GET /api/quote/estimate?tier=&quantity=
///
/// Backs the interactive calculator on the quote page. Quantity is
/// clamped to at least one box.
pub async fn estimate(Query(params): Query<EstimateParams>) -> Result<Json<PriceBreakdown>> {
    let tier = params
        .tier
        .parse::<ProductTier>()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    Ok(Json(pricing::estimate(tier, params.quantity.max(1))))
}

/// Response for a stored quote request.
#[derive(Debug, Serialize)]
pub struct QuoteSubmission {
    pub message: &'static str,
    pub data: QuoteRequest,
}

/// Submit a quote request.
///
/// POST /api/quote
///
/// Name, email, phone, product type, and a positive quantity are all
/// required. The stored row starts `pending`.
#[instrument(skip_all, fields(product_type = %new.product_type, quantity = new.quantity))]
pub async fn create(
    State(state): State<AppState>,
    Json(new): Json<NewQuoteRequest>,
) -> Result<(StatusCode, Json<QuoteSubmission>)> {
    if new.name.trim().is_empty()
        || new.email.trim().is_empty()
        || new.phone.trim().is_empty()
        || new.product_type.trim().is_empty()
        || new.quantity <= 0
    {
        return Err(AppError::BadRequest("Missing required fields".to_string()));
    }

    let quote = QuoteRepository::new(state.pool()).create(&new).await?;
    tracing::info!(quote_id = %quote.id, "Quote request received");

    Ok((
        StatusCode::CREATED,
        Json(QuoteSubmission {
            message: "Quote request submitted successfully",
            data: quote,
        }),
    ))
}
