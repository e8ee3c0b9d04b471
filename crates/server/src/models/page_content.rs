//! Page content and version-history models.
//!
//! Each editable page has up to two rows in `page_contents`, one per
//! status slot (draft and published). Every mutation also appends a row to
//! `page_content_versions`, which is never updated or deleted.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use sqlx::FromRow;

use kraftbox_core::{ContentStatus, PageContentId, PageKey, PageVersionId, VersionAction};

/// A live content slot: the current draft or published payload for a page.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PageContentRecord {
    pub id: PageContentId,
    pub page_key: PageKey,
    pub status: ContentStatus,
    pub content: Value,
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}

impl PageContentRecord {
    /// Stand-in for a slot that has never been written.
    ///
    /// Carries version 0 and the page's default content so editor clients
    /// always receive a complete state, even for a brand-new page.
    #[must_use]
    pub fn synthetic(page_key: PageKey, status: ContentStatus, content: Value) -> Self {
        let now = Utc::now();
        Self {
            id: PageContentId::new(0),
            page_key,
            status,
            content,
            version: 0,
            created_at: now,
            updated_at: now,
            published_at: None,
        }
    }
}

/// An append-only history entry recording one save, publish, or restore.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PageVersionRecord {
    pub id: PageVersionId,
    pub page_key: PageKey,
    pub source_status: ContentStatus,
    pub version_number: i32,
    pub action: VersionAction,
    pub change_note: Option<String>,
    pub content: Value,
    pub created_at: DateTime<Utc>,
}

/// Full editing state for one page: both slots plus recent history.
#[derive(Debug, Clone, Serialize)]
pub struct PageState {
    pub draft: PageContentRecord,
    pub published: PageContentRecord,
    pub history: Vec<PageVersionRecord>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_synthetic_slot_has_version_zero() {
        let slot = PageContentRecord::synthetic(
            PageKey::Home,
            ContentStatus::Draft,
            json!({"hero": {}}),
        );

        assert_eq!(slot.version, 0);
        assert_eq!(slot.id, PageContentId::new(0));
        assert!(slot.published_at.is_none());

        let json = serde_json::to_value(&slot).unwrap();
        assert_eq!(json["page_key"], "home");
        assert_eq!(json["status"], "draft");
        assert_eq!(json["version"], 0);
    }
}
