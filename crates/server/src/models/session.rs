//! Admin session model.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use kraftbox_core::{AdminRole, AdminSessionId, AdminUserId};

/// A minted bearer-token session for an admin user.
///
/// Tokens are random 64-character hex strings and expire 24 hours after
/// login. Logout deletes the row, so a token stops working the moment the
/// admin signs out.
#[derive(Debug, Clone, FromRow)]
pub struct AdminSession {
    pub id: AdminSessionId,
    pub admin_id: AdminUserId,
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// The authenticated admin attached to a request after token validation.
///
/// Joined from `admin_sessions` and `admin_users` in a single query, so a
/// deactivated account fails validation even while its token is unexpired.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CurrentAdmin {
    pub id: AdminUserId,
    pub email: String,
    pub name: String,
    pub role: AdminRole,
}
