//! Integration tests for admin authentication.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//!   (cargo run -p kraftbox-cli -- migrate)
//! - The server running (cargo run -p kraftbox-server)
//! - `ADMIN_PASSWORD_SALT` matching the server's salt
//!
//! Run with: cargo test -p kraftbox-integration-tests -- --ignored

use reqwest::StatusCode;
use serde_json::{Value, json};
use uuid::Uuid;

use kraftbox_integration_tests::TestContext;

/// Fresh admin credentials that no other test run has seen.
fn unique_credentials() -> (String, String) {
    let email = format!("it-auth-{}@kraftbox.io", Uuid::new_v4().simple());
    (email, "integration-password".to_string())
}

async fn login_response(ctx: &TestContext, email: &str, password: &str) -> reqwest::Response {
    ctx.client
        .post(ctx.url("/api/admin/auth/login"))
        .json(&json!({ "email": email, "password": password }))
        .send()
        .await
        .expect("Login request failed")
}

// ============================================================================
// Login
// ============================================================================

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_login_returns_token_and_public_user() {
    let ctx = TestContext::new().await;
    let (email, password) = unique_credentials();
    ctx.seed_admin(&email, &password).await;

    let resp = login_response(&ctx, &email, &password).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.expect("Login response was not JSON");
    let token = body["token"].as_str().expect("Response missing token");
    assert_eq!(token.len(), 64, "Token must be 32 random bytes hex-encoded");
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));

    assert_eq!(body["user"]["email"], email);
    assert_eq!(body["user"]["role"], "admin");
    assert!(
        body["user"].get("password_hash").is_none(),
        "Password digest must never leave the server"
    );
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_login_rejection_is_indistinguishable() {
    let ctx = TestContext::new().await;
    let (email, password) = unique_credentials();
    ctx.seed_admin(&email, &password).await;

    // Wrong password for a real account.
    let resp = login_response(&ctx, &email, "wrong-password").await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let wrong_password: Value = resp.json().await.expect("Response was not JSON");

    // An account that does not exist at all.
    let resp = login_response(&ctx, "nobody@kraftbox.io", password.as_str()).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let unknown_email: Value = resp.json().await.expect("Response was not JSON");

    // A syntactically invalid email.
    let resp = login_response(&ctx, "not-an-email", password.as_str()).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let invalid_email: Value = resp.json().await.expect("Response was not JSON");

    // All three rejections carry the same body, so responses never reveal
    // which accounts exist.
    assert_eq!(wrong_password, unknown_email);
    assert_eq!(unknown_email, invalid_email);
    assert_eq!(wrong_password["error"], "Invalid email or password");
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_login_with_blank_credentials_is_bad_request() {
    let ctx = TestContext::new().await;

    let resp = login_response(&ctx, "", "").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = resp.json().await.expect("Response was not JSON");
    assert_eq!(body["error"], "Email and password are required");

    // A body with the fields missing entirely behaves the same.
    let resp = ctx
        .client
        .post(ctx.url("/api/admin/auth/login"))
        .json(&json!({}))
        .send()
        .await
        .expect("Login request failed");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_deactivated_account_cannot_login() {
    let ctx = TestContext::new().await;
    let (email, password) = unique_credentials();
    ctx.seed_admin(&email, &password).await;

    sqlx::query("UPDATE admin_users SET is_active = FALSE WHERE email = $1")
        .bind(&email)
        .execute(&ctx.pool)
        .await
        .expect("Failed to deactivate admin");

    let resp = login_response(&ctx, &email, &password).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

// ============================================================================
// Bearer Token Validation
// ============================================================================

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_protected_route_requires_bearer_token() {
    let ctx = TestContext::new().await;

    // No Authorization header at all.
    let resp = ctx
        .client
        .get(ctx.url("/api/admin/dashboard"))
        .send()
        .await
        .expect("Request failed");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = resp.json().await.expect("Response was not JSON");
    assert_eq!(body["error"], "Unauthorized");

    // A token nobody ever minted.
    let resp = ctx
        .client
        .get(ctx.url("/api/admin/dashboard"))
        .bearer_auth("f".repeat(64))
        .send()
        .await
        .expect("Request failed");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // A malformed Authorization scheme.
    let resp = ctx
        .client
        .get(ctx.url("/api/admin/dashboard"))
        .header("Authorization", "Basic dXNlcjpwYXNz")
        .send()
        .await
        .expect("Request failed");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_expired_session_is_rejected() {
    let ctx = TestContext::new().await;
    let (email, password) = unique_credentials();
    ctx.seed_admin(&email, &password).await;
    let token = ctx.login(&email, &password).await;

    // The token works while the session is fresh.
    let resp = ctx
        .client
        .get(ctx.url("/api/admin/dashboard"))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Request failed");
    assert_eq!(resp.status(), StatusCode::OK);

    // Age the session past its expiry.
    sqlx::query("UPDATE admin_sessions SET expires_at = NOW() - INTERVAL '1 hour' WHERE token = $1")
        .bind(&token)
        .execute(&ctx.pool)
        .await
        .expect("Failed to expire session");

    let resp = ctx
        .client
        .get(ctx.url("/api/admin/dashboard"))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Request failed");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_deactivating_account_invalidates_live_sessions() {
    let ctx = TestContext::new().await;
    let (email, password) = unique_credentials();
    ctx.seed_admin(&email, &password).await;
    let token = ctx.login(&email, &password).await;

    sqlx::query("UPDATE admin_users SET is_active = FALSE WHERE email = $1")
        .bind(&email)
        .execute(&ctx.pool)
        .await
        .expect("Failed to deactivate admin");

    // The still-unexpired token dies with the account.
    let resp = ctx
        .client
        .get(ctx.url("/api/admin/dashboard"))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Request failed");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

// ============================================================================
// Logout
// ============================================================================

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_logout_revokes_the_session() {
    let ctx = TestContext::new().await;
    let (email, password) = unique_credentials();
    ctx.seed_admin(&email, &password).await;
    let token = ctx.login(&email, &password).await;

    let resp = ctx
        .client
        .delete(ctx.url("/api/admin/auth/logout"))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Logout request failed");
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.expect("Logout response was not JSON");
    assert_eq!(body["success"], true);

    // The revoked token no longer opens anything.
    let resp = ctx
        .client
        .get(ctx.url("/api/admin/dashboard"))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Request failed");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // Logging out again with the same token is a no-op, not an error.
    let resp = ctx
        .client
        .delete(ctx.url("/api/admin/auth/logout"))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Second logout request failed");
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_logout_without_token_is_unauthorized() {
    let ctx = TestContext::new().await;

    let resp = ctx
        .client
        .delete(ctx.url("/api/admin/auth/logout"))
        .send()
        .await
        .expect("Logout request failed");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
