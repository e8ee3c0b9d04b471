//! Admin credential verification and session issuance.

use chrono::{DateTime, Duration, Utc};
use rand::RngCore;
use secrecy::{ExposeSecret, SecretString};
use sha2::{Digest, Sha256};
use sqlx::PgPool;
use thiserror::Error;

use kraftbox_core::Email;

use crate::db::{AdminUserRepository, RepositoryError, SessionRepository};
use crate::models::AdminUserPublic;

/// Sessions expire this long after login.
pub const SESSION_TTL_HOURS: i64 = 24;

/// Errors from login and logout.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Email or password missing from the request.
    #[error("Email and password are required")]
    MissingCredentials,

    /// Unknown email, deactivated account, or wrong password. One
    /// variant for all three, so responses do not reveal which.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Database lookup failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// A successful login: the minted token plus the public user projection.
#[derive(Debug)]
pub struct LoginSession {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub user: AdminUserPublic,
}

/// Service for admin authentication.
pub struct AuthService<'a> {
    pool: &'a PgPool,
    salt: &'a SecretString,
}

impl<'a> AuthService<'a> {
    #[must_use]
    pub const fn new(pool: &'a PgPool, salt: &'a SecretString) -> Self {
        Self { pool, salt }
    }

    /// Verifies credentials and mints a 24-hour session token.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingCredentials`] when either field is
    /// blank, [`AuthError::InvalidCredentials`] when the email does not
    /// resolve to an active account with a matching password hash, or
    /// [`AuthError::Repository`] on database failure.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginSession, AuthError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        let email = Email::parse(email).map_err(|_| AuthError::InvalidCredentials)?;

        // The rejection cause is logged here and nowhere else; the response
        // is the same for unknown, deactivated, and wrong-password logins.
        let Some(user) = AdminUserRepository::new(self.pool)
            .get_active_by_email(&email)
            .await?
        else {
            tracing::debug!(email = %email, "Login rejected: no active admin for email");
            return Err(AuthError::InvalidCredentials);
        };

        let digest = hash_password(password, self.salt.expose_secret());
        if digest != user.password_hash {
            tracing::debug!(admin_id = %user.id, "Login rejected: password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        let token = generate_session_token();
        let expires_at = Utc::now() + Duration::hours(SESSION_TTL_HOURS);
        let session = SessionRepository::new(self.pool)
            .create(user.id, &token, expires_at)
            .await?;

        Ok(LoginSession {
            token: session.token,
            expires_at: session.expires_at,
            user: AdminUserPublic::from(&user),
        })
    }

    /// Deletes the session behind `token`. Tokens that are already gone
    /// are a no-op, making logout idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Repository`] on database failure.
    pub async fn logout(&self, token: &str) -> Result<(), AuthError> {
        SessionRepository::new(self.pool)
            .delete_by_token(token)
            .await?;
        Ok(())
    }
}

/// Hex digest of SHA-256(password ++ salt). Shared with `kb-cli`, which
/// uses it when provisioning admin accounts.
#[must_use]
pub fn hash_password(password: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hasher.update(salt.as_bytes());
    hex::encode(hasher.finalize())
}

/// 64-hex-character session token from 32 random bytes.
#[must_use]
pub fn generate_session_token() -> String {
    let mut bytes = [0u8; 32];
    rand::rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_password_is_deterministic() {
        let a = hash_password("kraft-2025", "factory-salt");
        let b = hash_password("kraft-2025", "factory-salt");

        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_hash_password_depends_on_salt() {
        assert_ne!(
            hash_password("kraft-2025", "salt-one"),
            hash_password("kraft-2025", "salt-two"),
        );
    }

    #[test]
    fn test_hash_password_known_digest() {
        // SHA-256("password" ++ "salt"), independently computed.
        assert_eq!(
            hash_password("password", "salt"),
            "7a37b85c8918eac19a9089c0fa5a2ab4dce3f90528dcdeec108b23ddf3607b99",
        );
    }

    #[test]
    fn test_session_tokens_are_unique_hex() {
        let a = generate_session_token();
        let b = generate_session_token();

        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }
}
