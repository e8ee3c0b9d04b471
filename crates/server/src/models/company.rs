//! Company settings model and presentation normalization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use kraftbox_core::CompanySettingsId;

/// A stored company-settings row.
///
/// The table is singleton-by-convention: readers take the newest row by
/// `updated_at` and writers update it in place, inserting only when the
/// table is empty.
#[derive(Debug, Clone, FromRow)]
pub struct CompanySettings {
    pub id: CompanySettingsId,
    pub company_name: String,
    pub short_name: String,
    pub tagline: String,
    pub description: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub working_hours: String,
    pub logo_url: String,
    pub logo_text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update for company settings. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompanyUpdate {
    pub company_name: Option<String>,
    pub short_name: Option<String>,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub working_hours: Option<String>,
    pub logo_url: Option<String>,
    pub logo_text: Option<String>,
}

/// Normalized company info as served to clients.
///
/// Every field is trimmed and blank fields fall back to the defaults, so
/// the header and footer of the site always have something to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyInfo {
    pub company_name: String,
    pub short_name: String,
    pub tagline: String,
    pub description: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub working_hours: String,
    pub logo_url: String,
    pub logo_text: String,
}

impl Default for CompanyInfo {
    fn default() -> Self {
        Self {
            company_name: "Bao Bì Kraftbox".to_string(),
            short_name: "Kraftbox".to_string(),
            tagline: "Sản xuất thùng carton chuyên dụng".to_string(),
            description: "Nhà sản xuất trực tiếp thùng carton theo yêu cầu với năng lực \
                          sản xuất lớn, giá sỉ tận xưởng."
                .to_string(),
            phone: "Cập nhật số điện thoại".to_string(),
            email: "Cập nhật email".to_string(),
            address: "Cập nhật địa chỉ xưởng/văn phòng".to_string(),
            working_hours: "Thứ 2 - Thứ 6: 08:00 - 17:00\nThứ 7: 08:00 - 12:00\nChủ Nhật: Đóng cửa"
                .to_string(),
            logo_url: String::new(),
            logo_text: "KB".to_string(),
        }
    }
}

impl CompanyInfo {
    /// Normalizes a stored row: trims every field and substitutes the
    /// default wherever the stored value is blank. `logo_url` falls back
    /// to empty instead, since an absent logo is a valid state.
    #[must_use]
    pub fn from_settings(settings: &CompanySettings) -> Self {
        let defaults = Self::default();
        Self {
            company_name: pick(&settings.company_name, &defaults.company_name),
            short_name: pick(&settings.short_name, &defaults.short_name),
            tagline: pick(&settings.tagline, &defaults.tagline),
            description: pick(&settings.description, &defaults.description),
            phone: pick(&settings.phone, &defaults.phone),
            email: pick(&settings.email, &defaults.email),
            address: pick(&settings.address, &defaults.address),
            working_hours: pick(&settings.working_hours, &defaults.working_hours),
            logo_url: settings.logo_url.trim().to_string(),
            logo_text: pick(&settings.logo_text, &defaults.logo_text),
        }
    }

    /// Normalizes an incoming write payload the same way stored rows are
    /// normalized. Absent fields count as blank, so a partial payload
    /// resets the omitted fields to their defaults rather than leaving
    /// stale text behind.
    #[must_use]
    pub fn from_update(update: &CompanyUpdate) -> Self {
        let defaults = Self::default();
        fn field(value: &Option<String>) -> &str {
            value.as_deref().unwrap_or_default()
        }
        Self {
            company_name: pick(field(&update.company_name), &defaults.company_name),
            short_name: pick(field(&update.short_name), &defaults.short_name),
            tagline: pick(field(&update.tagline), &defaults.tagline),
            description: pick(field(&update.description), &defaults.description),
            phone: pick(field(&update.phone), &defaults.phone),
            email: pick(field(&update.email), &defaults.email),
            address: pick(field(&update.address), &defaults.address),
            working_hours: pick(field(&update.working_hours), &defaults.working_hours),
            logo_url: field(&update.logo_url).trim().to_string(),
            logo_text: pick(field(&update.logo_text), &defaults.logo_text),
        }
    }
}

impl From<CompanyInfo> for CompanyUpdate {
    /// Every field present, so writing the update overwrites the whole row.
    fn from(info: CompanyInfo) -> Self {
        Self {
            company_name: Some(info.company_name),
            short_name: Some(info.short_name),
            tagline: Some(info.tagline),
            description: Some(info.description),
            phone: Some(info.phone),
            email: Some(info.email),
            address: Some(info.address),
            working_hours: Some(info.working_hours),
            logo_url: Some(info.logo_url),
            logo_text: Some(info.logo_text),
        }
    }
}

fn pick(value: &str, fallback: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}
