//! Company settings database operations.

use sqlx::PgPool;

use crate::db::RepositoryError;
use crate::models::{CompanySettings, CompanyUpdate};

/// Repository for the singleton-by-convention company settings table.
pub struct CompanyRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CompanyRepository<'a> {
    /// Creates a new repository with the given database pool.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Reads the newest settings row, if any exists.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Database`] on query failure.
    pub async fn latest(&self) -> Result<Option<CompanySettings>, RepositoryError> {
        let settings = sqlx::query_as::<_, CompanySettings>(
            r#"
            SELECT id, company_name, short_name, tagline, description, phone, email,
                   address, working_hours, logo_url, logo_text, created_at, updated_at
            FROM company_settings
            ORDER BY updated_at DESC
            LIMIT 1
            "#,
        )
        .fetch_optional(self.pool)
        .await?;

        Ok(settings)
    }

    /// Writes settings: updates the newest row in place, or inserts the
    /// first row when the table is empty. Absent fields keep their
    /// stored values; on insert they start blank.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Database`] on query failure.
    pub async fn upsert(&self, update: &CompanyUpdate) -> Result<CompanySettings, RepositoryError> {
        if let Some(existing) = self.latest().await? {
            let settings = sqlx::query_as::<_, CompanySettings>(
                r#"
                UPDATE company_settings
                SET company_name = COALESCE($2, company_name),
                    short_name = COALESCE($3, short_name),
                    tagline = COALESCE($4, tagline),
                    description = COALESCE($5, description),
                    phone = COALESCE($6, phone),
                    email = COALESCE($7, email),
                    address = COALESCE($8, address),
                    working_hours = COALESCE($9, working_hours),
                    logo_url = COALESCE($10, logo_url),
                    logo_text = COALESCE($11, logo_text),
                    updated_at = NOW()
                WHERE id = $1
                RETURNING id, company_name, short_name, tagline, description, phone, email,
                          address, working_hours, logo_url, logo_text, created_at, updated_at
                "#,
            )
            .bind(existing.id)
            .bind(&update.company_name)
            .bind(&update.short_name)
            .bind(&update.tagline)
            .bind(&update.description)
            .bind(&update.phone)
            .bind(&update.email)
            .bind(&update.address)
            .bind(&update.working_hours)
            .bind(&update.logo_url)
            .bind(&update.logo_text)
            .fetch_one(self.pool)
            .await?;

            return Ok(settings);
        }

        let settings = sqlx::query_as::<_, CompanySettings>(
            r#"
            INSERT INTO company_settings (company_name, short_name, tagline, description,
                                          phone, email, address, working_hours,
                                          logo_url, logo_text)
            VALUES (COALESCE($1, ''), COALESCE($2, ''), COALESCE($3, ''), COALESCE($4, ''),
                    COALESCE($5, ''), COALESCE($6, ''), COALESCE($7, ''), COALESCE($8, ''),
                    COALESCE($9, ''), COALESCE($10, ''))
            RETURNING id, company_name, short_name, tagline, description, phone, email,
                      address, working_hours, logo_url, logo_text, created_at, updated_at
            "#,
        )
        .bind(&update.company_name)
        .bind(&update.short_name)
        .bind(&update.tagline)
        .bind(&update.description)
        .bind(&update.phone)
        .bind(&update.email)
        .bind(&update.address)
        .bind(&update.working_hours)
        .bind(&update.logo_url)
        .bind(&update.logo_text)
        .fetch_one(self.pool)
        .await?;

        Ok(settings)
    }
}
