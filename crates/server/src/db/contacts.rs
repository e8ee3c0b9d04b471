//! Contact message database operations.

use sqlx::PgPool;

use kraftbox_core::{ContactMessageId, MessageStatus};

use crate::db::RepositoryError;
use crate::models::{ContactMessage, NewContactMessage};

/// Repository for contact messages.
pub struct ContactRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ContactRepository<'a> {
    /// Creates a new repository with the given database pool.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Lists all contact messages, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Database`] on query failure.
    pub async fn list_all(&self) -> Result<Vec<ContactMessage>, RepositoryError> {
        let messages = sqlx::query_as::<_, ContactMessage>(
            r#"
            SELECT id, name, email, phone, subject, message, status, created_at
            FROM contact_messages
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(messages)
    }

    /// Inserts a contact message with status `unread`.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Database`] on query failure.
    pub async fn create(
        &self,
        new: &NewContactMessage,
    ) -> Result<ContactMessage, RepositoryError> {
        let message = sqlx::query_as::<_, ContactMessage>(
            r#"
            INSERT INTO contact_messages (name, email, phone, subject, message)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, email, phone, subject, message, status, created_at
            "#,
        )
        .bind(&new.name)
        .bind(&new.email)
        .bind(&new.phone)
        .bind(&new.subject)
        .bind(&new.message)
        .fetch_one(self.pool)
        .await?;

        Ok(message)
    }

    /// Sets the read status of a message.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if no message with that ID
    /// exists.
    pub async fn set_status(
        &self,
        id: ContactMessageId,
        status: MessageStatus,
    ) -> Result<ContactMessage, RepositoryError> {
        let message = sqlx::query_as::<_, ContactMessage>(
            r#"
            UPDATE contact_messages
            SET status = $2
            WHERE id = $1
            RETURNING id, name, email, phone, subject, message, status, created_at
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        Ok(message)
    }

    /// Deletes a contact message.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if no message with that ID
    /// exists.
    pub async fn delete(&self, id: ContactMessageId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM contact_messages WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    /// Counts unread messages.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Database`] on query failure.
    pub async fn count_unread(&self) -> Result<i64, RepositoryError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM contact_messages WHERE status = 'unread'",
        )
        .fetch_one(self.pool)
        .await?;

        Ok(count)
    }
}
