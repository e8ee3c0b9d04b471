//! Admin user database operations.

use sqlx::PgPool;

use kraftbox_core::{AdminRole, AdminUserId, Email};

use crate::db::{RepositoryError, is_unique_violation};
use crate::models::AdminUser;

/// Raw database row. Converted to [`AdminUser`] after validating fields
/// that have stricter domain types than their columns.
#[derive(sqlx::FromRow)]
struct AdminUserRow {
    id: AdminUserId,
    email: String,
    name: String,
    role: AdminRole,
    password_hash: String,
    is_active: bool,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl TryFrom<AdminUserRow> for AdminUser {
    type Error = RepositoryError;

    fn try_from(row: AdminUserRow) -> Result<Self, Self::Error> {
        let email = Email::parse(&row.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in admin_users: {e}"))
        })?;
        Ok(Self {
            id: row.id,
            email,
            name: row.name,
            role: row.role,
            password_hash: row.password_hash,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Repository for admin user operations.
pub struct AdminUserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AdminUserRepository<'a> {
    /// Creates a new repository with the given database pool.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Finds an active admin by email. Returns `None` for unknown emails
    /// and for deactivated accounts alike.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Database`] on query failure or
    /// [`RepositoryError::DataCorruption`] if the stored email is invalid.
    pub async fn get_active_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<AdminUser>, RepositoryError> {
        let row = sqlx::query_as::<_, AdminUserRow>(
            r#"
            SELECT id, email, name, role, password_hash, is_active, created_at, updated_at
            FROM admin_users
            WHERE email = $1 AND is_active = TRUE
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// Finds an admin by email regardless of active state. Used by the
    /// CLI, which must address deactivated accounts too.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Database`] on query failure or
    /// [`RepositoryError::DataCorruption`] if the stored email is invalid.
    pub async fn get_by_email(&self, email: &Email) -> Result<Option<AdminUser>, RepositoryError> {
        let row = sqlx::query_as::<_, AdminUserRow>(
            r#"
            SELECT id, email, name, role, password_hash, is_active, created_at, updated_at
            FROM admin_users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// Gets an admin by ID.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if no admin with that ID exists.
    pub async fn get_by_id(&self, id: AdminUserId) -> Result<AdminUser, RepositoryError> {
        let row = sqlx::query_as::<_, AdminUserRow>(
            r#"
            SELECT id, email, name, role, password_hash, is_active, created_at, updated_at
            FROM admin_users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        row.try_into()
    }

    /// Creates a new admin account.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Conflict`] if the email is already taken.
    pub async fn create(
        &self,
        email: &Email,
        name: &str,
        role: AdminRole,
        password_hash: &str,
    ) -> Result<AdminUser, RepositoryError> {
        let row = sqlx::query_as::<_, AdminUserRow>(
            r#"
            INSERT INTO admin_users (email, name, role, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id, email, name, role, password_hash, is_active, created_at, updated_at
            "#,
        )
        .bind(email.as_str())
        .bind(name)
        .bind(role)
        .bind(password_hash)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                RepositoryError::Conflict(format!("admin with email {email} already exists"))
            } else {
                RepositoryError::Database(e)
            }
        })?;

        row.try_into()
    }

    /// Activates or deactivates an account. Deactivation does not delete
    /// sessions; token validation rejects inactive accounts on its own.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if no admin with that ID exists.
    pub async fn set_active(
        &self,
        id: AdminUserId,
        is_active: bool,
    ) -> Result<AdminUser, RepositoryError> {
        let row = sqlx::query_as::<_, AdminUserRow>(
            r#"
            UPDATE admin_users
            SET is_active = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING id, email, name, role, password_hash, is_active, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(is_active)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        row.try_into()
    }

    /// Lists all admin accounts, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Database`] on query failure.
    pub async fn list_all(&self) -> Result<Vec<AdminUser>, RepositoryError> {
        let rows = sqlx::query_as::<_, AdminUserRow>(
            r#"
            SELECT id, email, name, role, password_hash, is_active, created_at, updated_at
            FROM admin_users
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }
}
