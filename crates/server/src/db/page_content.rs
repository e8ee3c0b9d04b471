//! Page content and version-history database operations.
//!
//! Slot reads run against the pool. The write steps (`lock_slot`,
//! `upsert_slot`, `append_version`) take an open transaction's connection
//! so a save, publish, or restore commits atomically with its history row.

use serde_json::Value;
use sqlx::{PgConnection, PgPool};

use kraftbox_core::{ContentStatus, PageKey, PageVersionId, VersionAction};

use crate::db::RepositoryError;
use crate::models::{PageContentRecord, PageVersionRecord};

/// Repository for page content slots and their version history.
pub struct PageContentRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PageContentRepository<'a> {
    /// Creates a new repository with the given database pool.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Reads one content slot, if it has ever been written.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Database`] on query failure.
    pub async fn get_slot(
        &self,
        page_key: PageKey,
        status: ContentStatus,
    ) -> Result<Option<PageContentRecord>, RepositoryError> {
        let slot = sqlx::query_as::<_, PageContentRecord>(
            r#"
            SELECT id, page_key, status, content, version, created_at, updated_at, published_at
            FROM page_contents
            WHERE page_key = $1 AND status = $2
            "#,
        )
        .bind(page_key)
        .bind(status)
        .fetch_optional(self.pool)
        .await?;

        Ok(slot)
    }

    /// Lists the newest history entries for a page.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Database`] on query failure.
    pub async fn history(
        &self,
        page_key: PageKey,
        limit: i64,
    ) -> Result<Vec<PageVersionRecord>, RepositoryError> {
        let versions = sqlx::query_as::<_, PageVersionRecord>(
            r#"
            SELECT id, page_key, source_status, version_number, action, change_note,
                   content, created_at
            FROM page_content_versions
            WHERE page_key = $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2
            "#,
        )
        .bind(page_key)
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(versions)
    }

    /// Fetches one history entry, scoped to its page so a version id from
    /// another page cannot be restored across pages.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Database`] on query failure.
    pub async fn get_version(
        &self,
        id: PageVersionId,
        page_key: PageKey,
    ) -> Result<Option<PageVersionRecord>, RepositoryError> {
        let version = sqlx::query_as::<_, PageVersionRecord>(
            r#"
            SELECT id, page_key, source_status, version_number, action, change_note,
                   content, created_at
            FROM page_content_versions
            WHERE id = $1 AND page_key = $2
            "#,
        )
        .bind(id)
        .bind(page_key)
        .fetch_optional(self.pool)
        .await?;

        Ok(version)
    }

    /// Reads a slot under `FOR UPDATE`, serializing concurrent writers on
    /// the same slot until the surrounding transaction ends.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Database`] on query failure.
    pub async fn lock_slot(
        conn: &mut PgConnection,
        page_key: PageKey,
        status: ContentStatus,
    ) -> Result<Option<PageContentRecord>, RepositoryError> {
        let slot = sqlx::query_as::<_, PageContentRecord>(
            r#"
            SELECT id, page_key, status, content, version, created_at, updated_at, published_at
            FROM page_contents
            WHERE page_key = $1 AND status = $2
            FOR UPDATE
            "#,
        )
        .bind(page_key)
        .bind(status)
        .fetch_optional(conn)
        .await?;

        Ok(slot)
    }

    /// Writes a slot in place, inserting it on first write.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Database`] on query failure.
    pub async fn upsert_slot(
        conn: &mut PgConnection,
        page_key: PageKey,
        status: ContentStatus,
        content: &Value,
        version: i32,
        published_at: Option<chrono::DateTime<chrono::Utc>>,
    ) -> Result<PageContentRecord, RepositoryError> {
        let slot = sqlx::query_as::<_, PageContentRecord>(
            r#"
            INSERT INTO page_contents (page_key, status, content, version, published_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (page_key, status) DO UPDATE
            SET content = EXCLUDED.content,
                version = EXCLUDED.version,
                published_at = EXCLUDED.published_at,
                updated_at = NOW()
            RETURNING id, page_key, status, content, version, created_at, updated_at, published_at
            "#,
        )
        .bind(page_key)
        .bind(status)
        .bind(content)
        .bind(version)
        .bind(published_at)
        .fetch_one(conn)
        .await?;

        Ok(slot)
    }

    /// Appends one history entry. History rows are never updated or
    /// deleted.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Database`] on query failure.
    pub async fn append_version(
        conn: &mut PgConnection,
        page_key: PageKey,
        source_status: ContentStatus,
        version_number: i32,
        action: VersionAction,
        change_note: Option<&str>,
        content: &Value,
    ) -> Result<PageVersionRecord, RepositoryError> {
        let version = sqlx::query_as::<_, PageVersionRecord>(
            r#"
            INSERT INTO page_content_versions
                (page_key, source_status, version_number, action, change_note, content)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, page_key, source_status, version_number, action, change_note,
                      content, created_at
            "#,
        )
        .bind(page_key)
        .bind(source_status)
        .bind(version_number)
        .bind(action)
        .bind(change_note)
        .bind(content)
        .fetch_one(conn)
        .await?;

        Ok(version)
    }
}
