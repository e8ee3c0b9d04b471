//! Quote request database operations.

use sqlx::PgPool;

use kraftbox_core::{QuoteRequestId, QuoteStatus};

use crate::db::RepositoryError;
use crate::models::{NewQuoteRequest, QuoteRequest};

/// Repository for quote requests.
pub struct QuoteRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> QuoteRepository<'a> {
    /// Creates a new repository with the given database pool.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Lists all quote requests, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Database`] on query failure.
    pub async fn list_all(&self) -> Result<Vec<QuoteRequest>, RepositoryError> {
        let quotes = sqlx::query_as::<_, QuoteRequest>(
            r#"
            SELECT id, name, email, phone, company, product_type, quantity, message,
                   status, created_at
            FROM quote_requests
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(quotes)
    }

    /// Lists the most recent quote requests for the dashboard.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Database`] on query failure.
    pub async fn recent(&self, limit: i64) -> Result<Vec<QuoteRequest>, RepositoryError> {
        let quotes = sqlx::query_as::<_, QuoteRequest>(
            r#"
            SELECT id, name, email, phone, company, product_type, quantity, message,
                   status, created_at
            FROM quote_requests
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(quotes)
    }

    /// Inserts a quote request with status `pending`.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Database`] on query failure.
    pub async fn create(&self, new: &NewQuoteRequest) -> Result<QuoteRequest, RepositoryError> {
        let quote = sqlx::query_as::<_, QuoteRequest>(
            r#"
            INSERT INTO quote_requests (name, email, phone, company, product_type,
                                        quantity, message)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, name, email, phone, company, product_type, quantity, message,
                      status, created_at
            "#,
        )
        .bind(&new.name)
        .bind(&new.email)
        .bind(&new.phone)
        .bind(&new.company)
        .bind(&new.product_type)
        .bind(new.quantity)
        .bind(&new.message)
        .fetch_one(self.pool)
        .await?;

        Ok(quote)
    }

    /// Sets the workflow status of a quote request.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if no request with that ID
    /// exists.
    pub async fn set_status(
        &self,
        id: QuoteRequestId,
        status: QuoteStatus,
    ) -> Result<QuoteRequest, RepositoryError> {
        let quote = sqlx::query_as::<_, QuoteRequest>(
            r#"
            UPDATE quote_requests
            SET status = $2
            WHERE id = $1
            RETURNING id, name, email, phone, company, product_type, quantity, message,
                      status, created_at
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        Ok(quote)
    }

    /// Deletes a quote request.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if no request with that ID
    /// exists.
    pub async fn delete(&self, id: QuoteRequestId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM quote_requests WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    /// Counts quote requests still awaiting processing.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Database`] on query failure.
    pub async fn count_pending(&self) -> Result<i64, RepositoryError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM quote_requests WHERE status = 'pending'",
        )
        .fetch_one(self.pool)
        .await?;

        Ok(count)
    }
}
