//! Integration tests for company settings and image uploads.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//!   (cargo run -p kraftbox-cli -- migrate)
//! - The server running (cargo run -p kraftbox-server)
//! - `ADMIN_PASSWORD_SALT` matching the server's salt
//!
//! The upload tests only cover validation, so they pass without a
//! storage service behind the server.
//!
//! Run with: cargo test -p kraftbox-integration-tests -- --ignored

use reqwest::StatusCode;
use reqwest::multipart::{Form, Part};
use serde_json::{Value, json};

use kraftbox_integration_tests::TestContext;

// ============================================================================
// Company Settings
// ============================================================================

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_company_settings_round_trip() {
    let ctx = TestContext::new().await;
    let token = ctx.admin_token().await;

    // Remember the current settings so the test can put them back.
    let resp = ctx
        .client
        .get(ctx.url("/api/admin/company"))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to fetch company settings");
    assert_eq!(resp.status(), StatusCode::OK);
    let original: Value = resp.json().await.expect("Settings were not JSON");

    // Replace the settings; whitespace is trimmed on the way in.
    let resp = ctx
        .client
        .put(ctx.url("/api/admin/company"))
        .bearer_auth(&token)
        .json(&json!({
            "company_name": "  Bao Bì Kraftbox Miền Nam  ",
            "phone": "0287 300 1234",
            "email": "sales@kraftbox.example",
            "address": "KCN Sóng Thần, Bình Dương",
            "logo_text": "KBMN"
        }))
        .send()
        .await
        .expect("Failed to update company settings");
    assert_eq!(resp.status(), StatusCode::OK);

    let updated: Value = resp.json().await.expect("Update response was not JSON");
    assert_eq!(updated["company_name"], "Bao Bì Kraftbox Miền Nam");
    assert_eq!(updated["phone"], "0287 300 1234");
    assert_eq!(updated["logo_text"], "KBMN");

    // Omitted fields are reset to their defaults, not left stale.
    assert_eq!(updated["short_name"], "Kraftbox");
    assert_eq!(updated["logo_url"], "");

    // The public site serves the same normalized settings.
    let resp = ctx
        .client
        .get(ctx.url("/api/company-info"))
        .send()
        .await
        .expect("Failed to fetch public company info");
    let public: Value = resp.json().await.expect("Company info was not JSON");
    assert_eq!(public["company_name"], "Bao Bì Kraftbox Miền Nam");
    assert_eq!(public["email"], "sales@kraftbox.example");

    // Restore whatever was there before the test.
    let resp = ctx
        .client
        .put(ctx.url("/api/admin/company"))
        .bearer_auth(&token)
        .json(&original)
        .send()
        .await
        .expect("Failed to restore company settings");
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_company_settings_require_auth() {
    let ctx = TestContext::new().await;

    let resp = ctx
        .client
        .get(ctx.url("/api/admin/company"))
        .send()
        .await
        .expect("Request failed");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = ctx
        .client
        .put(ctx.url("/api/admin/company"))
        .json(&json!({ "company_name": "intruder" }))
        .send()
        .await
        .expect("Request failed");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

// ============================================================================
// Image Uploads
// ============================================================================

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_upload_requires_auth() {
    let ctx = TestContext::new().await;

    let form = Form::new().part(
        "file",
        Part::bytes(vec![0_u8; 16])
            .file_name("logo.png")
            .mime_str("image/png")
            .expect("Valid mime type"),
    );

    let resp = ctx
        .client
        .post(ctx.url("/api/admin/uploads"))
        .multipart(form)
        .send()
        .await
        .expect("Upload request failed");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_upload_without_file_part_is_rejected() {
    let ctx = TestContext::new().await;
    let token = ctx.admin_token().await;

    let form = Form::new().text("folder", "logos");

    let resp = ctx
        .client
        .post(ctx.url("/api/admin/uploads"))
        .bearer_auth(&token)
        .multipart(form)
        .send()
        .await
        .expect("Upload request failed");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Error response was not JSON");
    assert_eq!(body["error"], "File is required");
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_upload_rejects_non_image_files() {
    let ctx = TestContext::new().await;
    let token = ctx.admin_token().await;

    let form = Form::new().part(
        "file",
        Part::bytes(b"%PDF-1.4 not an image".to_vec())
            .file_name("catalog.pdf")
            .mime_str("application/pdf")
            .expect("Valid mime type"),
    );

    let resp = ctx
        .client
        .post(ctx.url("/api/admin/uploads"))
        .bearer_auth(&token)
        .multipart(form)
        .send()
        .await
        .expect("Upload request failed");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Error response was not JSON");
    assert_eq!(body["error"], "Only image files are supported (got application/pdf)");
}
