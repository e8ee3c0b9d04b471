//! Database operations for the Kraftbox `PostgreSQL` database.
//!
//! ## Tables
//!
//! - `admin_users` - CMS accounts, provisioned via `kb-cli`
//! - `admin_sessions` - Bearer-token sessions (24h expiry)
//! - `page_contents` - Draft/published content slot per page
//! - `page_content_versions` - Append-only edit history
//! - `products`, `product_categories` - Public catalog
//! - `news_articles` - News and knowledge-base posts
//! - `quote_requests`, `contact_messages` - Public form inboxes
//! - `company_settings` - Site-wide contact and branding info
//!
//! Schema migrations live in `crates/server/migrations/` and are applied
//! with `kb-cli migrate`, never at server startup.

pub mod admin_users;
pub mod categories;
pub mod company;
pub mod contacts;
pub mod news;
pub mod page_content;
pub mod products;
pub mod quotes;
pub mod sessions;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use admin_users::AdminUserRepository;
pub use categories::CategoryRepository;
pub use company::CompanyRepository;
pub use contacts::ContactRepository;
pub use news::ArticleRepository;
pub use page_content::PageContentRepository;
pub use products::ProductRepository;
pub use quotes::QuoteRepository;
pub use sessions::SessionRepository;

/// Failure surface shared by every repository.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database query failed.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Stored data is invalid and cannot be loaded into a domain type.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// The requested entity does not exist.
    #[error("entity not found")]
    NotFound,

    /// A uniqueness constraint was violated.
    #[error("conflict: {0}")]
    Conflict(String),
}

/// Connection pool sized for a small always-on deployment.
///
/// # Errors
///
/// Fails when the database cannot be reached or refuses the credentials.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

/// Whether an error is a Postgres unique-constraint violation (code 23505).
fn is_unique_violation(error: &sqlx::Error) -> bool {
    matches!(
        error,
        sqlx::Error::Database(db) if db.code().as_deref() == Some("23505")
    )
}
