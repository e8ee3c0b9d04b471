//! Admin user account model.

use chrono::{DateTime, Utc};
use serde::Serialize;

use kraftbox_core::{AdminRole, AdminUserId, Email};

/// An administrator account.
///
/// Accounts are provisioned by operators through `kb-cli`, never over HTTP.
/// The `password_hash` is a hex-encoded salted SHA-256 digest and is never
/// serialized; API responses use [`AdminUserPublic`] instead.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub id: AdminUserId,
    pub email: Email,
    pub name: String,
    pub role: AdminRole,
    pub password_hash: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Projection of an [`AdminUser`] that is safe to return to clients.
#[derive(Debug, Clone, Serialize)]
pub struct AdminUserPublic {
    pub id: AdminUserId,
    pub email: Email,
    pub name: String,
    pub role: AdminRole,
}

impl From<&AdminUser> for AdminUserPublic {
    fn from(user: &AdminUser) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role,
        }
    }
}
