//! Admin session database operations.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use kraftbox_core::AdminUserId;

use crate::db::RepositoryError;
use crate::models::{AdminSession, CurrentAdmin};

/// Repository for bearer-token sessions.
pub struct SessionRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SessionRepository<'a> {
    /// Creates a new repository with the given database pool.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Stores a freshly minted session token.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Database`] on query failure.
    pub async fn create(
        &self,
        admin_id: AdminUserId,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<AdminSession, RepositoryError> {
        let session = sqlx::query_as::<_, AdminSession>(
            r#"
            INSERT INTO admin_sessions (admin_id, token, expires_at)
            VALUES ($1, $2, $3)
            RETURNING id, admin_id, token, expires_at, created_at
            "#,
        )
        .bind(admin_id)
        .bind(token)
        .bind(expires_at)
        .fetch_one(self.pool)
        .await?;

        Ok(session)
    }

    /// Resolves a token to its admin in one query.
    ///
    /// Returns `None` unless the token exists, is unexpired, and belongs
    /// to an account that is still active.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Database`] on query failure.
    pub async fn find_current_admin(
        &self,
        token: &str,
    ) -> Result<Option<CurrentAdmin>, RepositoryError> {
        let admin = sqlx::query_as::<_, CurrentAdmin>(
            r#"
            SELECT u.id, u.email, u.name, u.role
            FROM admin_sessions s
            JOIN admin_users u ON u.id = s.admin_id
            WHERE s.token = $1 AND s.expires_at > NOW() AND u.is_active = TRUE
            "#,
        )
        .bind(token)
        .fetch_optional(self.pool)
        .await?;

        Ok(admin)
    }

    /// Deletes the session holding the given token. Returns the number of
    /// rows removed; zero means the token was already gone, which logout
    /// treats as success.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Database`] on query failure.
    pub async fn delete_by_token(&self, token: &str) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM admin_sessions WHERE token = $1")
            .bind(token)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Removes all expired sessions. Run periodically from `kb-cli`.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Database`] on query failure.
    pub async fn prune_expired(&self) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM admin_sessions WHERE expires_at <= NOW()")
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
