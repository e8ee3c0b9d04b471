//! Admin inbox: quote requests and contact messages.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use serde_json::{Value, json};

use kraftbox_core::{ContactMessageId, MessageStatus, QuoteRequestId, QuoteStatus};

use crate::db::{ContactRepository, QuoteRepository};
use crate::error::Result;
use crate::middleware::RequireAdminAuth;
use crate::models::{ContactMessage, QuoteRequest};
use crate::state::AppState;

/// List all quote requests, newest first.
///
/// GET /api/admin/quotes
pub async fn list_quotes(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
) -> Result<Json<Vec<QuoteRequest>>> {
    let quotes = QuoteRepository::new(state.pool()).list_all().await?;

    Ok(Json(quotes))
}

/// PATCH /api/admin/quotes/{id} body.
#[derive(Debug, Deserialize)]
pub struct QuoteStatusUpdate {
    pub status: QuoteStatus,
}

/// Move a quote request through its workflow.
///
/// PATCH /api/admin/quotes/{id}
pub async fn set_quote_status(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<QuoteRequestId>,
    Json(update): Json<QuoteStatusUpdate>,
) -> Result<Json<QuoteRequest>> {
    let quote = QuoteRepository::new(state.pool())
        .set_status(id, update.status)
        .await?;
    tracing::info!(quote_id = %id, status = %update.status, "Quote status updated");

    Ok(Json(quote))
}

/// Delete a quote request.
///
/// DELETE /api/admin/quotes/{id}
pub async fn remove_quote(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<QuoteRequestId>,
) -> Result<Json<Value>> {
    QuoteRepository::new(state.pool()).delete(id).await?;
    tracing::info!(quote_id = %id, "Quote request deleted");

    Ok(Json(json!({ "success": true })))
}

/// List all contact messages, newest first.
///
/// GET /api/admin/contacts
pub async fn list_contacts(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
) -> Result<Json<Vec<ContactMessage>>> {
    let messages = ContactRepository::new(state.pool()).list_all().await?;

    Ok(Json(messages))
}

/// PATCH /api/admin/contacts/{id} body.
#[derive(Debug, Deserialize)]
pub struct ContactStatusUpdate {
    pub status: MessageStatus,
}

/// Mark a contact message read, or back to unread.
///
/// PATCH /api/admin/contacts/{id}
pub async fn set_contact_status(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<ContactMessageId>,
    Json(update): Json<ContactStatusUpdate>,
) -> Result<Json<ContactMessage>> {
    let message = ContactRepository::new(state.pool())
        .set_status(id, update.status)
        .await?;

    Ok(Json(message))
}

/// Delete a contact message.
///
/// DELETE /api/admin/contacts/{id}
pub async fn remove_contact(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<ContactMessageId>,
) -> Result<Json<Value>> {
    ContactRepository::new(state.pool()).delete(id).await?;
    tracing::info!(contact_id = %id, "Contact message deleted");

    Ok(Json(json!({ "success": true })))
}
