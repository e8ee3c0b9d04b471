//! Environment-driven server configuration.
//!
//! Required variables: `DATABASE_URL` (a `PostgreSQL` connection string),
//! `BASE_URL` (the public origin of the deployment), `ADMIN_PASSWORD_SALT`
//! (application-wide salt mixed into admin password digests), and
//! `STORAGE_URL` plus `STORAGE_SERVICE_KEY` for the hosted object storage
//! service.
//!
//! Optional: `HOST` (default 0.0.0.0), `PORT` (default 8080),
//! `STORAGE_BUCKET` (default `website-assets`), `SENTRY_DSN`,
//! `SENTRY_ENVIRONMENT`, and `LOG_FORMAT` (`json` switches on structured
//! logs).
//!
//! Machine-generated secrets are checked against placeholder patterns and
//! a minimum entropy so a copied `.env.example` never boots in production.

use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

/// The salt only needs to exist and be non-trivial. Rotating it would
/// orphan every stored digest, so strength checking stops at length.
const SALT_MIN_LEN: usize = 8;

/// Bits per character a generated service key comfortably exceeds.
const MIN_SECRET_ENTROPY: f64 = 3.3;

/// Substrings that betray an untouched `.env.example` (checked lowercase).
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-", "changeme", "replace", "placeholder", "example", "secret", "password", "xxx",
    "todo", "fixme", "insert", "enter-", "put-your", "add-your",
];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    Missing(String),
    #[error("environment variable {0} is invalid: {1}")]
    Invalid(String, String),
    #[error("refusing to start with a weak secret in {0}: {1}")]
    WeakSecret(String, String),
}

/// Server application configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// `PostgreSQL` connection URL (embeds the database password)
    pub database_url: SecretString,
    /// Address the listener binds to
    pub host: IpAddr,
    /// Port the listener binds to
    pub port: u16,
    /// Public origin the API is deployed behind
    pub base_url: String,
    /// Application-wide salt mixed into admin password digests
    pub password_salt: SecretString,
    /// Hosted object storage settings
    pub storage: StorageConfig,
    /// DSN for Sentry error tracking, unset in local runs
    pub sentry_dsn: Option<String>,
    /// Sentry environment name (production, staging)
    pub sentry_environment: Option<String>,
    /// Emit JSON-formatted logs instead of text
    pub log_json: bool,
}

/// Hosted object storage settings.
///
/// `Debug` is written by hand so the service key never lands in a log.
#[derive(Clone)]
pub struct StorageConfig {
    /// Base URL of the storage service
    pub url: String,
    /// Bucket uploaded images are written to
    pub bucket: String,
    /// Service key authorizing uploads (server-side only)
    pub service_key: SecretString,
}

impl std::fmt::Debug for StorageConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageConfig")
            .field("url", &self.url)
            .field("bucket", &self.bucket)
            .field("service_key", &"[REDACTED]")
            .finish()
    }
}

impl ServerConfig {
    /// Reads the whole configuration from the environment, consulting a
    /// `.env` file first when one exists.
    ///
    /// # Errors
    ///
    /// Fails when a required variable is absent, a value does not parse,
    /// or a secret trips the placeholder or entropy checks.
    pub fn from_env() -> Result<Self, ConfigError> {
        // .env is a local-development convenience; absence is fine.
        let _ = dotenvy::dotenv();

        let database_url = require_database_url()?;
        let host: IpAddr = parse_var("HOST", "0.0.0.0")?;
        let port: u16 = parse_var("PORT", "8080")?;

        let base_url = require("BASE_URL")?;
        expect_http_url("BASE_URL", &base_url)?;

        Ok(Self {
            database_url,
            host,
            port,
            base_url,
            password_salt: require_salt()?,
            storage: StorageConfig::from_env()?,
            sentry_dsn: std::env::var("SENTRY_DSN").ok(),
            sentry_environment: std::env::var("SENTRY_ENVIRONMENT").ok(),
            log_json: var_or("LOG_FORMAT", "text") == "json",
        })
    }

    /// The address the listener binds to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl StorageConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let url = require("STORAGE_URL")?;
        expect_http_url("STORAGE_URL", &url)?;

        Ok(Self {
            url,
            bucket: var_or("STORAGE_BUCKET", "website-assets"),
            service_key: require_strong_secret("STORAGE_SERVICE_KEY")?,
        })
    }
}

fn require(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::Missing(name.to_owned()))
}

fn var_or(name: &str, fallback: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| fallback.to_owned())
}

/// Reads an optional variable and parses it, falling back to `fallback`
/// when unset.
fn parse_var<T>(name: &str, fallback: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    var_or(name, fallback)
        .parse()
        .map_err(|e: T::Err| ConfigError::Invalid(name.to_owned(), e.to_string()))
}

fn expect_http_url(name: &str, value: &str) -> Result<(), ConfigError> {
    if value.starts_with("http://") || value.starts_with("https://") {
        return Ok(());
    }
    Err(ConfigError::Invalid(
        name.to_owned(),
        format!("expected an absolute http(s) URL, got {value:?}"),
    ))
}

fn require_database_url() -> Result<SecretString, ConfigError> {
    let raw = require("DATABASE_URL")?;
    check_postgres_scheme(&raw)?;
    Ok(SecretString::from(raw))
}

/// The connection URL embeds the database password, so the error text
/// never echoes the value.
fn check_postgres_scheme(raw: &str) -> Result<(), ConfigError> {
    if raw.starts_with("postgres://") || raw.starts_with("postgresql://") {
        return Ok(());
    }
    Err(ConfigError::Invalid(
        "DATABASE_URL".to_owned(),
        "expected a postgres:// or postgresql:// URL".to_owned(),
    ))
}

fn require_salt() -> Result<SecretString, ConfigError> {
    let raw = require("ADMIN_PASSWORD_SALT")?;
    check_salt_length(&raw)?;
    Ok(SecretString::from(raw))
}

fn check_salt_length(raw: &str) -> Result<(), ConfigError> {
    if raw.len() >= SALT_MIN_LEN {
        return Ok(());
    }
    Err(ConfigError::WeakSecret(
        "ADMIN_PASSWORD_SALT".to_owned(),
        format!("need at least {SALT_MIN_LEN} characters, got {}", raw.len()),
    ))
}

fn require_strong_secret(name: &str) -> Result<SecretString, ConfigError> {
    let raw = require(name)?;
    check_secret_strength(name, &raw)?;
    Ok(SecretString::from(raw))
}

fn check_secret_strength(name: &str, raw: &str) -> Result<(), ConfigError> {
    if let Some(pattern) = placeholder_match(raw) {
        return Err(ConfigError::WeakSecret(
            name.to_owned(),
            format!("looks like a placeholder (contains {pattern:?})"),
        ));
    }

    let entropy = entropy_bits_per_char(raw);
    if entropy < MIN_SECRET_ENTROPY {
        return Err(ConfigError::WeakSecret(
            name.to_owned(),
            format!(
                "entropy is {entropy:.2} bits/char, expected at least \
                 {MIN_SECRET_ENTROPY}; generate the key instead of typing one"
            ),
        ));
    }

    Ok(())
}

fn placeholder_match(secret: &str) -> Option<&'static str> {
    let lower = secret.to_lowercase();
    PLACEHOLDER_PATTERNS
        .iter()
        .copied()
        .find(|pattern| lower.contains(pattern))
}

/// Shannon entropy over the character distribution, in bits per character.
fn entropy_bits_per_char(secret: &str) -> f64 {
    let mut counts: HashMap<char, u32> = HashMap::new();
    let mut total = 0u32;
    for c in secret.chars() {
        *counts.entry(c).or_insert(0) += 1;
        total += 1;
    }
    if total == 0 {
        return 0.0;
    }

    counts
        .values()
        .map(|&n| {
            let p = f64::from(n) / f64::from(total);
            -(p * p.log2())
        })
        .sum()
}
