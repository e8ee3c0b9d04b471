//! Public contact-form route.

use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use tracing::instrument;

use crate::db::ContactRepository;
use crate::error::{AppError, Result};
use crate::models::{ContactMessage, NewContactMessage};
use crate::state::AppState;

/// Response for a stored contact message.
#[derive(Debug, Serialize)]
pub struct ContactSubmission {
    pub message: &'static str,
    pub data: ContactMessage,
}

/// Submit a contact message.
///
/// POST /api/contact
///
/// Name, email, and message are required; the stored row starts `unread`
/// and shows up in the admin inbox.
#[instrument(skip_all)]
pub async fn create(
    State(state): State<AppState>,
    Json(new): Json<NewContactMessage>,
) -> Result<(StatusCode, Json<ContactSubmission>)> {
    if new.name.trim().is_empty() || new.email.trim().is_empty() || new.message.trim().is_empty() {
        return Err(AppError::BadRequest("Missing required fields".to_string()));
    }

    let message = ContactRepository::new(state.pool()).create(&new).await?;
    tracing::info!(contact_id = %message.id, "Contact message received");

    Ok((
        StatusCode::CREATED,
        Json(ContactSubmission {
            message: "Contact message submitted successfully",
            data: message,
        }),
    ))
}
