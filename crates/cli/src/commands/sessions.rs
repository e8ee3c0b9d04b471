//! Session hygiene commands.
//!
//! # Usage
//!
//! ```bash
//! kb-cli sessions prune
//! ```
//!
//! The server never deletes expired sessions on its own; run this from a
//! scheduler to keep the table small.

use secrecy::SecretString;
use thiserror::Error;

use kraftbox_server::db::{self, RepositoryError, SessionRepository};

/// Errors that can occur during session maintenance.
#[derive(Debug, Error)]
pub enum SessionError {
    /// `DATABASE_URL` is not set.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Could not reach the database.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Repository operation failed.
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Delete all sessions whose expiry has passed.
///
/// # Errors
///
/// Returns [`SessionError`] if `DATABASE_URL` is unset or the delete fails.
pub async fn prune() -> Result<(), SessionError> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("DATABASE_URL")
        .map(SecretString::from)
        .map_err(|_| SessionError::MissingEnvVar("DATABASE_URL"))?;

    let pool = db::create_pool(&database_url).await?;

    let removed = SessionRepository::new(&pool).prune_expired().await?;
    tracing::info!("Pruned {} expired session(s)", removed);

    Ok(())
}
