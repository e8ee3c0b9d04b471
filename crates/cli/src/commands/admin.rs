//! Admin account management commands.
//!
//! # Usage
//!
//! ```bash
//! # Create a new admin account
//! kb-cli admin create -e admin@kraftbox.io -n "Site Admin" -p <password> -r admin
//!
//! # Toggle an account
//! kb-cli admin deactivate -e admin@kraftbox.io
//! kb-cli admin activate -e admin@kraftbox.io
//!
//! # List accounts
//! kb-cli admin list
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` - `PostgreSQL` connection string
//! - `ADMIN_PASSWORD_SALT` - Same salt the server uses; digests made with a
//!   different salt will never verify

use secrecy::SecretString;
use sqlx::PgPool;
use thiserror::Error;

use kraftbox_core::{AdminRole, Email};
use kraftbox_server::db::{self, AdminUserRepository, RepositoryError};
use kraftbox_server::services::auth::hash_password;

/// Errors that can occur during admin account operations.
#[derive(Debug, Error)]
pub enum AdminError {
    /// A required environment variable is not set.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Could not reach the database.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Repository operation failed.
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// The role is not one of the known names.
    #[error("Invalid role: {0}. Valid roles: admin, editor")]
    InvalidRole(String),

    /// The email does not parse.
    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    /// No account with the given email.
    #[error("No admin account with email: {0}")]
    NoSuchUser(String),
}

async fn connect() -> Result<PgPool, AdminError> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("DATABASE_URL")
        .map(SecretString::from)
        .map_err(|_| AdminError::MissingEnvVar("DATABASE_URL"))?;

    tracing::info!("Connecting to database...");
    Ok(db::create_pool(&database_url).await?)
}

/// Create a new admin account.
///
/// # Errors
///
/// Returns [`AdminError`] if the role or email is invalid, required
/// environment is missing, or the email is already taken.
pub async fn create(email: &str, name: &str, password: &str, role: &str) -> Result<i32, AdminError> {
    let role: AdminRole = role
        .parse()
        .map_err(|_| AdminError::InvalidRole(role.to_owned()))?;
    let email = Email::parse(email).map_err(|_| AdminError::InvalidEmail(email.to_owned()))?;

    let salt = std::env::var("ADMIN_PASSWORD_SALT")
        .map_err(|_| AdminError::MissingEnvVar("ADMIN_PASSWORD_SALT"))?;
    let password_hash = hash_password(password, &salt);

    let pool = connect().await?;

    tracing::info!("Creating admin account: {} ({})", email, role);
    let user = AdminUserRepository::new(&pool)
        .create(&email, name, role, &password_hash)
        .await?;

    tracing::info!(
        "Admin account created. ID: {}, Email: {}, Role: {}",
        user.id,
        user.email,
        user.role
    );

    Ok(user.id.as_i32())
}

/// Activate or deactivate an account by email.
///
/// Deactivation leaves existing session rows in place; token validation
/// rejects them because the owning account is inactive.
///
/// # Errors
///
/// Returns [`AdminError::NoSuchUser`] if the email matches no account.
pub async fn set_active(email: &str, is_active: bool) -> Result<(), AdminError> {
    let email = Email::parse(email).map_err(|_| AdminError::InvalidEmail(email.to_owned()))?;

    let pool = connect().await?;
    let repo = AdminUserRepository::new(&pool);

    let user = repo
        .get_by_email(&email)
        .await?
        .ok_or_else(|| AdminError::NoSuchUser(email.to_string()))?;

    let user = repo.set_active(user.id, is_active).await?;

    tracing::info!(
        "Admin account {} is now {}",
        user.email,
        if user.is_active { "active" } else { "inactive" }
    );

    Ok(())
}

/// List all admin accounts, newest first.
///
/// # Errors
///
/// Returns [`AdminError`] if required environment is missing or the query
/// fails.
pub async fn list() -> Result<(), AdminError> {
    let pool = connect().await?;

    let users = AdminUserRepository::new(&pool).list_all().await?;

    if users.is_empty() {
        tracing::info!("No admin accounts. Create one with: kb-cli admin create");
        return Ok(());
    }

    for user in users {
        tracing::info!(
            "#{} {} <{}> role={} active={}",
            user.id,
            user.name,
            user.email,
            user.role,
            user.is_active
        );
    }

    Ok(())
}
