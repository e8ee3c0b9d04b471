//! Inbox models: quote requests and contact messages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use kraftbox_core::{ContactMessageId, MessageStatus, QuoteRequestId, QuoteStatus};

/// A quote request submitted from the public quote form.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct QuoteRequest {
    pub id: QuoteRequestId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub product_type: String,
    pub quantity: i32,
    pub message: String,
    pub status: QuoteStatus,
    pub created_at: DateTime<Utc>,
}

/// Payload for a public quote submission.
///
/// `quantity` defaults to zero, which the handler rejects the same as a
/// missing field.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewQuoteRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub product_type: String,
    #[serde(default)]
    pub quantity: i32,
    #[serde(default)]
    pub message: String,
}

/// A message submitted from the public contact form.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ContactMessage {
    pub id: ContactMessageId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub status: MessageStatus,
    pub created_at: DateTime<Utc>,
}

/// Payload for a public contact submission.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewContactMessage {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}
