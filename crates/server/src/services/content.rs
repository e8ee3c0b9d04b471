//! Draft/publish workflow for editable page content.
//!
//! Every page has at most one draft row and one published row in
//! `page_contents`, plus an append-only trail in `page_content_versions`.
//! All writes normalize the payload first, bump the per-slot version
//! counter, and record a history entry inside the same transaction.

use chrono::{DateTime, Utc};
use kraftbox_core::types::{ContentStatus, PageKey, PageVersionId, VersionAction};
use serde_json::Value;
use sqlx::{PgPool, Postgres, Transaction};

use crate::content;
use crate::db::{PageContentRepository, RepositoryError};
use crate::models::{PageContentRecord, PageState};

/// How many history entries `page_state` returns, newest first.
const HISTORY_LIMIT: i64 = 20;

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("No draft to publish")]
    NoDraftToPublish,
    #[error("Version not found")]
    VersionNotFound,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Orchestrates the editorial workflow on top of [`PageContentRepository`].
pub struct ContentService<'a> {
    pool: &'a PgPool,
}

impl<'a> ContentService<'a> {
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Draft, published snapshot and recent history for one page.
    ///
    /// Missing slots are synthesized from the built-in defaults so the
    /// editor always has something to render, even before the first save.
    pub async fn page_state(&self, page_key: PageKey) -> Result<PageState, ContentError> {
        let repo = PageContentRepository::new(self.pool);

        let draft = repo.get_slot(page_key, ContentStatus::Draft).await?;
        let published = repo.get_slot(page_key, ContentStatus::Published).await?;
        let history = repo.history(page_key, HISTORY_LIMIT).await?;

        Ok(PageState {
            draft: draft.map_or_else(
                || {
                    PageContentRecord::synthetic(
                        page_key,
                        ContentStatus::Draft,
                        content::default_content(page_key),
                    )
                },
                |mut record| {
                    record.content = content::normalize(page_key, &record.content);
                    record
                },
            ),
            published: published.map_or_else(
                || {
                    PageContentRecord::synthetic(
                        page_key,
                        ContentStatus::Published,
                        content::default_content(page_key),
                    )
                },
                |mut record| {
                    record.content = content::normalize(page_key, &record.content);
                    record
                },
            ),
            history,
        })
    }

    /// Normalizes and stores `content` as the page draft.
    ///
    /// An empty `note` is recorded as no note at all.
    pub async fn save_draft(
        &self,
        page_key: PageKey,
        content: &Value,
        note: Option<&str>,
    ) -> Result<PageContentRecord, ContentError> {
        let normalized = content::normalize(page_key, content);
        let note = note.map(str::trim).filter(|n| !n.is_empty());

        let mut tx = self.pool.begin().await.map_err(RepositoryError::from)?;
        let saved = write_slot(
            &mut tx,
            page_key,
            ContentStatus::Draft,
            &normalized,
            VersionAction::SaveDraft,
            note,
            None,
        )
        .await?;
        tx.commit().await.map_err(RepositoryError::from)?;

        Ok(saved)
    }

    /// Copies the current draft into the published slot.
    pub async fn publish(&self, page_key: PageKey) -> Result<PageContentRecord, ContentError> {
        let mut tx = self.pool.begin().await.map_err(RepositoryError::from)?;

        // Lock order is always draft first, then published.
        let draft = PageContentRepository::lock_slot(&mut *tx, page_key, ContentStatus::Draft)
            .await?
            .ok_or(ContentError::NoDraftToPublish)?;
        let normalized = content::normalize(page_key, &draft.content);

        let published = write_slot(
            &mut tx,
            page_key,
            ContentStatus::Published,
            &normalized,
            VersionAction::Publish,
            None,
            Some(Utc::now()),
        )
        .await?;
        tx.commit().await.map_err(RepositoryError::from)?;

        Ok(published)
    }

    /// Overwrites the draft with a snapshot from the history trail.
    ///
    /// The version must belong to `page_key`; ids from another page are
    /// reported as not found.
    pub async fn restore(
        &self,
        page_key: PageKey,
        version_id: PageVersionId,
    ) -> Result<PageContentRecord, ContentError> {
        let repo = PageContentRepository::new(self.pool);
        let version = repo
            .get_version(version_id, page_key)
            .await?
            .ok_or(ContentError::VersionNotFound)?;

        let normalized = content::normalize(page_key, &version.content);
        let note = format!(
            "Restored from {} #{}",
            version.action, version.version_number
        );

        let mut tx = self.pool.begin().await.map_err(RepositoryError::from)?;
        let draft = write_slot(
            &mut tx,
            page_key,
            ContentStatus::Draft,
            &normalized,
            VersionAction::Restore,
            Some(&note),
            None,
        )
        .await?;
        tx.commit().await.map_err(RepositoryError::from)?;

        Ok(draft)
    }
}

/// Locks the slot, bumps its version, upserts the row and appends history.
async fn write_slot(
    tx: &mut Transaction<'_, Postgres>,
    page_key: PageKey,
    status: ContentStatus,
    content: &Value,
    action: VersionAction,
    note: Option<&str>,
    published_at: Option<DateTime<Utc>>,
) -> Result<PageContentRecord, ContentError> {
    let prior = PageContentRepository::lock_slot(&mut **tx, page_key, status).await?;
    let version = prior.map_or(1, |slot| slot.version + 1);

    let record = PageContentRepository::upsert_slot(
        &mut **tx,
        page_key,
        status,
        content,
        version,
        published_at,
    )
    .await?;
    PageContentRepository::append_version(&mut **tx, page_key, status, version, action, note, content)
        .await?;

    Ok(record)
}
