//! Integration tests for the public site API.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//!   (cargo run -p kraftbox-cli -- migrate)
//! - The server running (cargo run -p kraftbox-server)
//!
//! Run with: cargo test -p kraftbox-integration-tests -- --ignored

use reqwest::StatusCode;
use serde_json::{Value, json};
use uuid::Uuid;

use kraftbox_integration_tests::TestContext;

// ============================================================================
// Health Checks
// ============================================================================

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_health_liveness() {
    let ctx = TestContext::new().await;

    let resp = ctx
        .client
        .get(ctx.url("/health"))
        .send()
        .await
        .expect("Failed to reach health endpoint");

    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_health_readiness_probes_database() {
    let ctx = TestContext::new().await;

    let resp = ctx
        .client
        .get(ctx.url("/health/ready"))
        .send()
        .await
        .expect("Failed to reach readiness endpoint");

    assert_eq!(resp.status(), StatusCode::OK);
}

// ============================================================================
// Catalog & Company Info
// ============================================================================

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_products_listing_and_category_filter() {
    let ctx = TestContext::new().await;

    let resp = ctx
        .client
        .get(ctx.url("/api/products"))
        .send()
        .await
        .expect("Failed to list products");
    assert_eq!(resp.status(), StatusCode::OK);

    let products: Value = resp.json().await.expect("Products response was not JSON");
    assert!(products.is_array(), "Expected a JSON array of products");

    // An empty category parameter means no filter and must not error.
    let resp = ctx
        .client
        .get(ctx.url("/api/products?category="))
        .send()
        .await
        .expect("Failed to list products with empty filter");
    assert_eq!(resp.status(), StatusCode::OK);

    // A category nothing matches returns an empty list, not an error.
    let resp = ctx
        .client
        .get(ctx.url(&format!("/api/products?category=no-such-{}", Uuid::new_v4())))
        .send()
        .await
        .expect("Failed to list products with unmatched filter");
    assert_eq!(resp.status(), StatusCode::OK);

    let filtered: Value = resp.json().await.expect("Filtered response was not JSON");
    assert_eq!(filtered.as_array().map(Vec::len), Some(0));
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_categories_listing() {
    let ctx = TestContext::new().await;

    let resp = ctx
        .client
        .get(ctx.url("/api/categories"))
        .send()
        .await
        .expect("Failed to list categories");

    assert_eq!(resp.status(), StatusCode::OK);
    let categories: Value = resp.json().await.expect("Categories response was not JSON");
    assert!(categories.is_array());
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_news_lists_published_articles_only() {
    let ctx = TestContext::new().await;

    let resp = ctx
        .client
        .get(ctx.url("/api/news"))
        .send()
        .await
        .expect("Failed to list news");
    assert_eq!(resp.status(), StatusCode::OK);

    let articles: Value = resp.json().await.expect("News response was not JSON");
    for article in articles.as_array().expect("Expected a JSON array") {
        assert_eq!(article["status"], "published");
        assert!(
            !article["published_at"].is_null(),
            "Published article must carry a published_at timestamp"
        );
    }
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_company_info_always_available() {
    let ctx = TestContext::new().await;

    let resp = ctx
        .client
        .get(ctx.url("/api/company-info"))
        .send()
        .await
        .expect("Failed to fetch company info");
    assert_eq!(resp.status(), StatusCode::OK);

    // Even a fresh database serves built-in defaults, never an empty body.
    let info: Value = resp.json().await.expect("Company info was not JSON");
    assert!(
        info["company_name"].as_str().is_some_and(|n| !n.is_empty()),
        "Company name must never be empty"
    );
    assert!(info["email"].as_str().is_some_and(|e| !e.is_empty()));
}

// ============================================================================
// Page Content
// ============================================================================

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_published_content_serves_every_known_page() {
    let ctx = TestContext::new().await;

    for page_key in ["home", "products", "quote", "printing", "custom-boxes"] {
        let resp = ctx
            .client
            .get(ctx.url(&format!("/api/content/{page_key}")))
            .send()
            .await
            .expect("Failed to fetch page content");

        assert_eq!(resp.status(), StatusCode::OK, "Page {page_key} must serve content");

        let body: Value = resp.json().await.expect("Content response was not JSON");
        assert!(
            body["content"].is_object(),
            "Page {page_key} must serve a content object"
        );
    }
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_unknown_page_key_is_not_found() {
    let ctx = TestContext::new().await;

    let resp = ctx
        .client
        .get(ctx.url("/api/content/pricing"))
        .send()
        .await
        .expect("Failed to request unknown page");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.expect("Error response was not JSON");
    assert_eq!(body["error"], "Page not found");
}

// ============================================================================
// Price Estimator
// ============================================================================

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_estimate_below_discount_threshold() {
    let ctx = TestContext::new().await;

    let resp = ctx
        .client
        .get(ctx.url("/api/quote/estimate?tier=standard&quantity=100"))
        .send()
        .await
        .expect("Failed to fetch estimate");
    assert_eq!(resp.status(), StatusCode::OK);

    let breakdown: Value = resp.json().await.expect("Estimate was not JSON");
    assert_eq!(breakdown["base_price"], "250000");
    assert_eq!(breakdown["discount"], "0");
    assert_eq!(breakdown["total"], "250000");
    assert_eq!(breakdown["discount_percent"], 0);
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_estimate_crosses_discount_bracket() {
    let ctx = TestContext::new().await;

    // 501 boxes tips standard stock into the 10% bracket.
    let resp = ctx
        .client
        .get(ctx.url("/api/quote/estimate?tier=standard&quantity=501"))
        .send()
        .await
        .expect("Failed to fetch estimate");
    assert_eq!(resp.status(), StatusCode::OK);

    let breakdown: Value = resp.json().await.expect("Estimate was not JSON");
    assert_eq!(breakdown["base_price"], "1252500");
    assert_eq!(breakdown["discount"], "125250");
    assert_eq!(breakdown["total"], "1127250");
    assert_eq!(breakdown["discount_percent"], 10);
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_estimate_matches_pricing_table() {
    let ctx = TestContext::new().await;

    for (tier, quantity) in [("standard", 50), ("lined", 800), ("specialized", 6000)] {
        let resp = ctx
            .client
            .get(ctx.url(&format!(
                "/api/quote/estimate?tier={tier}&quantity={quantity}"
            )))
            .send()
            .await
            .expect("Failed to fetch estimate");
        assert_eq!(resp.status(), StatusCode::OK);

        let breakdown: Value = resp.json().await.expect("Estimate was not JSON");
        let expected = kraftbox_core::pricing::estimate(
            tier.parse().expect("Known tier string"),
            quantity,
        );
        assert_eq!(breakdown["total"], expected.total.to_string());
        assert_eq!(
            breakdown["discount_percent"],
            u64::from(expected.discount_percent)
        );
    }
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_estimate_rejects_unknown_tier() {
    let ctx = TestContext::new().await;

    let resp = ctx
        .client
        .get(ctx.url("/api/quote/estimate?tier=cardboard&quantity=10"))
        .send()
        .await
        .expect("Failed to request estimate");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// ============================================================================
// Public Form Submissions
// ============================================================================

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_quote_submission_round_trip() {
    let ctx = TestContext::new().await;
    let marker = format!("it-quote-{}", Uuid::new_v4().simple());

    let resp = ctx
        .client
        .post(ctx.url("/api/quote"))
        .json(&json!({
            "name": "Nguyen Van A",
            "email": format!("{marker}@example.com"),
            "phone": "0901234567",
            "company": "Cong ty TNHH ABC",
            "productType": "lined",
            "quantity": 800,
            "message": "Can bao gia gap"
        }))
        .send()
        .await
        .expect("Failed to submit quote request");

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = resp.json().await.expect("Quote response was not JSON");
    assert_eq!(body["message"], "Quote request submitted successfully");
    assert_eq!(body["data"]["status"], "pending");
    assert_eq!(body["data"]["quantity"], 800);
    assert_eq!(body["data"]["product_type"], "lined");

    sqlx::query("DELETE FROM quote_requests WHERE email = $1")
        .bind(format!("{marker}@example.com"))
        .execute(&ctx.pool)
        .await
        .expect("Failed to clean up quote request");
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_quote_submission_requires_core_fields() {
    let ctx = TestContext::new().await;

    // Missing phone, product type and quantity.
    let resp = ctx
        .client
        .post(ctx.url("/api/quote"))
        .json(&json!({ "name": "A", "email": "a@example.com" }))
        .send()
        .await
        .expect("Failed to submit incomplete quote");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // A zero quantity is rejected the same as a missing one.
    let resp = ctx
        .client
        .post(ctx.url("/api/quote"))
        .json(&json!({
            "name": "A",
            "email": "a@example.com",
            "phone": "0901234567",
            "productType": "standard",
            "quantity": 0
        }))
        .send()
        .await
        .expect("Failed to submit zero-quantity quote");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = resp.json().await.expect("Error response was not JSON");
    assert_eq!(body["error"], "Missing required fields");
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_contact_submission_round_trip() {
    let ctx = TestContext::new().await;
    let marker = format!("it-contact-{}", Uuid::new_v4().simple());

    let resp = ctx
        .client
        .post(ctx.url("/api/contact"))
        .json(&json!({
            "name": "Tran Thi B",
            "email": format!("{marker}@example.com"),
            "subject": "Hoi ve mau in",
            "message": "Toi muon in logo 2 mau"
        }))
        .send()
        .await
        .expect("Failed to submit contact message");

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = resp.json().await.expect("Contact response was not JSON");
    assert_eq!(body["message"], "Contact message submitted successfully");
    assert_eq!(body["data"]["status"], "unread");
    // Optional fields are stored as empty strings, not nulls.
    assert_eq!(body["data"]["phone"], "");

    sqlx::query("DELETE FROM contact_messages WHERE email = $1")
        .bind(format!("{marker}@example.com"))
        .execute(&ctx.pool)
        .await
        .expect("Failed to clean up contact message");
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_contact_submission_requires_message() {
    let ctx = TestContext::new().await;

    let resp = ctx
        .client
        .post(ctx.url("/api/contact"))
        .json(&json!({ "name": "B", "email": "b@example.com", "message": "   " }))
        .send()
        .await
        .expect("Failed to submit blank contact message");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
