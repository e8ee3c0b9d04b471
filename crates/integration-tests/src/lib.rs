//! Integration tests for Kraftbox.
//!
//! Tests are `#[ignore]`d by default; they need a running server and a
//! migrated database.
//!
//! # Running Tests
//!
//! ```bash
//! # Migrate the database and start the server
//! cargo run -p kraftbox-cli -- migrate
//! cargo run -p kraftbox-server &
//!
//! # Run integration tests
//! cargo test -p kraftbox-integration-tests -- --ignored
//! ```
//!
//! # Environment Variables
//!
//! - `KRAFTBOX_BASE_URL` - Server under test (default `http://localhost:8080`)
//! - `DATABASE_URL` - Same database the server uses; tests seed admin
//!   accounts and clean up what they create
//! - `ADMIN_PASSWORD_SALT` - Must match the server's salt, or seeded
//!   passwords will never verify

use reqwest::Client;
use sqlx::PgPool;

use kraftbox_server::services::auth::hash_password;

/// Shared handle for one test: an HTTP client plus a direct database
/// connection for seeding and cleanup.
pub struct TestContext {
    pub client: Client,
    pub base_url: String,
    pub pool: PgPool,
}

impl TestContext {
    /// Connect to the server and database named in the environment.
    ///
    /// # Panics
    ///
    /// Panics if `DATABASE_URL` is unset or unreachable. Tests are
    /// `#[ignore]`d by default, so this only fires when explicitly
    /// running the integration suite.
    pub async fn new() -> Self {
        let base_url = std::env::var("KRAFTBOX_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string());
        let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

        let pool = PgPool::connect(&database_url)
            .await
            .expect("Failed to connect to database");

        Self {
            client: Client::new(),
            base_url,
            pool,
        }
    }

    /// Absolute URL for an API path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Upsert an active admin account with a known password, bypassing
    /// the CLI. The digest uses the same salt the server reads.
    pub async fn seed_admin(&self, email: &str, password: &str) {
        let salt = std::env::var("ADMIN_PASSWORD_SALT").expect("ADMIN_PASSWORD_SALT must be set");
        let password_hash = hash_password(password, &salt);

        sqlx::query(
            r#"
            INSERT INTO admin_users (email, name, role, password_hash)
            VALUES ($1, 'Integration Test Admin', 'admin', $2)
            ON CONFLICT (email) DO UPDATE
            SET password_hash = EXCLUDED.password_hash, is_active = TRUE
            "#,
        )
        .bind(email)
        .bind(&password_hash)
        .execute(&self.pool)
        .await
        .expect("Failed to seed admin account");
    }

    /// Log in over HTTP and return the bearer token.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let resp = self
            .client
            .post(self.url("/api/admin/auth/login"))
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Login request failed");

        assert_eq!(resp.status(), reqwest::StatusCode::OK, "Login rejected");

        let body: serde_json::Value = resp.json().await.expect("Login response was not JSON");
        body["token"]
            .as_str()
            .expect("Login response missing token")
            .to_string()
    }

    /// Seed a fresh admin and log in, returning the token.
    pub async fn admin_token(&self) -> String {
        let email = format!("it-{}@kraftbox.io", uuid::Uuid::new_v4().simple());
        let password = "integration-password";

        self.seed_admin(&email, password).await;
        self.login(&email, password).await
    }
}
