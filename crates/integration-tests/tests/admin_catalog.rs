//! Integration tests for admin catalog management: products, categories,
//! and news articles.
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

/// A name no other test run will have used.
fn unique_name(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4().simple())
}

/// Find an entry by `name` in a JSON array response.
fn find_by_name<'a>(items: &'a Value, name: &str) -> Option<&'a Value> {
    items.as_array()?.iter().find(|item| item["name"] == name)
}

// ============================================================================
// Products
// ============================================================================

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_product_crud_lifecycle() {
    let ctx = TestContext::new().await;
    let token = ctx.admin_token().await;
    let name = unique_name("it-product");

    // Create.
    let resp = ctx
        .client
        .post(ctx.url("/api/admin/products"))
        .bearer_auth(&token)
        .json(&json!({
            "name": name,
            "category": "carton-3-lop",
            "description": "Thùng carton 3 lớp chuẩn xuất khẩu",
            "price": "2500",
            "is_featured": true
        }))
        .send()
        .await
        .expect("Failed to create product");
    assert_eq!(resp.status(), StatusCode::CREATED);

    let product: Value = resp.json().await.expect("Product response was not JSON");
    let id = product["id"].as_i64().expect("Product id must be a number");
    assert_eq!(product["name"], name);
    assert_eq!(product["price"], "2500");
    assert_eq!(product["is_featured"], true);
    assert!(product["image_url"].is_null());

    // It shows up in the admin list and the public catalog.
    let resp = ctx
        .client
        .get(ctx.url("/api/admin/products"))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to list products");
    let listing: Value = resp.json().await.expect("Listing was not JSON");
    assert!(find_by_name(&listing, &name).is_some());

    let resp = ctx
        .client
        .get(ctx.url("/api/products?category=carton-3-lop"))
        .send()
        .await
        .expect("Failed to list public products");
    let listing: Value = resp.json().await.expect("Public listing was not JSON");
    assert!(
        find_by_name(&listing, &name).is_some(),
        "Product must appear under its category filter"
    );

    // Update a subset of fields; the rest stay as they were.
    let resp = ctx
        .client
        .put(ctx.url(&format!("/api/admin/products/{id}")))
        .bearer_auth(&token)
        .json(&json!({ "price": "2800", "is_featured": false }))
        .send()
        .await
        .expect("Failed to update product");
    assert_eq!(resp.status(), StatusCode::OK);

    let updated: Value = resp.json().await.expect("Update response was not JSON");
    assert_eq!(updated["price"], "2800");
    assert_eq!(updated["is_featured"], false);
    assert_eq!(updated["name"], name);
    assert_eq!(updated["category"], "carton-3-lop");

    // Delete, then confirm it is really gone.
    let resp = ctx
        .client
        .delete(ctx.url(&format!("/api/admin/products/{id}")))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to delete product");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = ctx
        .client
        .put(ctx.url(&format!("/api/admin/products/{id}")))
        .bearer_auth(&token)
        .json(&json!({ "price": "3000" }))
        .send()
        .await
        .expect("Failed to update deleted product");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_product_create_requires_name() {
    let ctx = TestContext::new().await;
    let token = ctx.admin_token().await;

    let resp = ctx
        .client
        .post(ctx.url("/api/admin/products"))
        .bearer_auth(&token)
        .json(&json!({ "name": "   ", "price": "1000" }))
        .send()
        .await
        .expect("Failed to create nameless product");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Error response was not JSON");
    assert_eq!(body["error"], "Product name is required");
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_product_routes_require_auth() {
    let ctx = TestContext::new().await;

    let resp = ctx
        .client
        .post(ctx.url("/api/admin/products"))
        .json(&json!({ "name": "unauthenticated" }))
        .send()
        .await
        .expect("Request failed");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = ctx
        .client
        .delete(ctx.url("/api/admin/products/1"))
        .send()
        .await
        .expect("Request failed");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

// ============================================================================
// Categories
// ============================================================================

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_category_crud_lifecycle() {
    let ctx = TestContext::new().await;
    let token = ctx.admin_token().await;
    let name = unique_name("it-category");

    // Create; whitespace around fields is trimmed before storage.
    let resp = ctx
        .client
        .post(ctx.url("/api/admin/categories"))
        .bearer_auth(&token)
        .json(&json!({ "name": format!("  {name}  "), "description": " Thùng đặc chủng " }))
        .send()
        .await
        .expect("Failed to create category");
    assert_eq!(resp.status(), StatusCode::CREATED);

    let category: Value = resp.json().await.expect("Category response was not JSON");
    let id = category["id"].as_i64().expect("Category id must be a number");
    assert_eq!(category["name"], name);
    assert_eq!(category["description"], "Thùng đặc chủng");

    // Visible on the public categories listing too.
    let resp = ctx
        .client
        .get(ctx.url("/api/categories"))
        .send()
        .await
        .expect("Failed to list categories");
    let listing: Value = resp.json().await.expect("Listing was not JSON");
    assert!(find_by_name(&listing, &name).is_some());

    // Rename.
    let renamed = unique_name("it-category-renamed");
    let resp = ctx
        .client
        .put(ctx.url(&format!("/api/admin/categories/{id}")))
        .bearer_auth(&token)
        .json(&json!({ "name": renamed }))
        .send()
        .await
        .expect("Failed to rename category");
    assert_eq!(resp.status(), StatusCode::OK);

    let updated: Value = resp.json().await.expect("Update response was not JSON");
    assert_eq!(updated["name"], renamed);
    assert_eq!(updated["description"], "Thùng đặc chủng");

    // A blank rename is rejected before it reaches the database.
    let resp = ctx
        .client
        .put(ctx.url(&format!("/api/admin/categories/{id}")))
        .bearer_auth(&token)
        .json(&json!({ "name": "" }))
        .send()
        .await
        .expect("Failed to submit blank rename");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Delete.
    let resp = ctx
        .client
        .delete(ctx.url(&format!("/api/admin/categories/{id}")))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to delete category");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = ctx
        .client
        .put(ctx.url(&format!("/api/admin/categories/{id}")))
        .bearer_auth(&token)
        .json(&json!({ "name": "ghost" }))
        .send()
        .await
        .expect("Failed to update deleted category");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_deleting_category_leaves_products_in_place() {
    let ctx = TestContext::new().await;
    let token = ctx.admin_token().await;
    let category_name = unique_name("it-orphan-category");
    let product_name = unique_name("it-orphan-product");

    let resp = ctx
        .client
        .post(ctx.url("/api/admin/categories"))
        .bearer_auth(&token)
        .json(&json!({ "name": category_name }))
        .send()
        .await
        .expect("Failed to create category");
    let category: Value = resp.json().await.expect("Category response was not JSON");

    let resp = ctx
        .client
        .post(ctx.url("/api/admin/products"))
        .bearer_auth(&token)
        .json(&json!({ "name": product_name, "category": category_name }))
        .send()
        .await
        .expect("Failed to create product");
    let product: Value = resp.json().await.expect("Product response was not JSON");

    // Deleting the category must not cascade into the product.
    let resp = ctx
        .client
        .delete(ctx.url(&format!("/api/admin/categories/{}", category["id"])))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to delete category");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = ctx
        .client
        .get(ctx.url("/api/admin/products"))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to list products");
    let listing: Value = resp.json().await.expect("Listing was not JSON");
    let survivor = find_by_name(&listing, &product_name).expect("Product must survive");
    assert_eq!(survivor["category"], category_name);

    // Clean up the product.
    ctx.client
        .delete(ctx.url(&format!("/api/admin/products/{}", product["id"])))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to clean up product");
}

// ============================================================================
// News Articles
// ============================================================================

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_article_draft_to_published_lifecycle() {
    let ctx = TestContext::new().await;
    let token = ctx.admin_token().await;
    let title = unique_name("it-article");

    // New articles default to draft with no publication timestamp.
    let resp = ctx
        .client
        .post(ctx.url("/api/admin/news"))
        .bearer_auth(&token)
        .json(&json!({
            "title": title,
            "excerpt": "Quy trình sản xuất thùng carton",
            "content": "Nội dung bài viết",
            "author": "Kraftbox"
        }))
        .send()
        .await
        .expect("Failed to create article");
    assert_eq!(resp.status(), StatusCode::CREATED);

    let article: Value = resp.json().await.expect("Article response was not JSON");
    let id = article["id"].as_i64().expect("Article id must be a number");
    assert_eq!(article["status"], "draft");
    assert!(article["published_at"].is_null());

    // Drafts are invisible to the public news feed.
    let resp = ctx
        .client
        .get(ctx.url("/api/news"))
        .send()
        .await
        .expect("Failed to list news");
    let feed: Value = resp.json().await.expect("Feed was not JSON");
    assert!(
        feed.as_array()
            .expect("Feed must be an array")
            .iter()
            .all(|a| a["title"] != title),
        "Draft article must not appear in the public feed"
    );

    // Publishing stamps published_at and puts it on the feed.
    let resp = ctx
        .client
        .put(ctx.url(&format!("/api/admin/news/{id}")))
        .bearer_auth(&token)
        .json(&json!({ "status": "published" }))
        .send()
        .await
        .expect("Failed to publish article");
    assert_eq!(resp.status(), StatusCode::OK);

    let published: Value = resp.json().await.expect("Publish response was not JSON");
    assert_eq!(published["status"], "published");
    let first_published_at = published["published_at"].clone();
    assert!(!first_published_at.is_null());

    let resp = ctx
        .client
        .get(ctx.url("/api/news"))
        .send()
        .await
        .expect("Failed to list news");
    let feed: Value = resp.json().await.expect("Feed was not JSON");
    assert!(
        feed.as_array()
            .expect("Feed must be an array")
            .iter()
            .any(|a| a["title"] == title)
    );

    // Editing a published article keeps the original publication time.
    let resp = ctx
        .client
        .put(ctx.url(&format!("/api/admin/news/{id}")))
        .bearer_auth(&token)
        .json(&json!({ "excerpt": "Quy trình sản xuất, bản cập nhật" }))
        .send()
        .await
        .expect("Failed to edit article");
    let edited: Value = resp.json().await.expect("Edit response was not JSON");
    assert_eq!(edited["published_at"], first_published_at);

    // Pulling it back to draft clears the timestamp and hides it again.
    let resp = ctx
        .client
        .put(ctx.url(&format!("/api/admin/news/{id}")))
        .bearer_auth(&token)
        .json(&json!({ "status": "draft" }))
        .send()
        .await
        .expect("Failed to unpublish article");
    let unpublished: Value = resp.json().await.expect("Unpublish response was not JSON");
    assert_eq!(unpublished["status"], "draft");
    assert!(unpublished["published_at"].is_null());

    // Delete.
    let resp = ctx
        .client
        .delete(ctx.url(&format!("/api/admin/news/{id}")))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to delete article");
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.expect("Delete response was not JSON");
    assert_eq!(body["success"], true);
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_article_can_be_created_published() {
    let ctx = TestContext::new().await;
    let token = ctx.admin_token().await;
    let title = unique_name("it-article-live");

    let resp = ctx
        .client
        .post(ctx.url("/api/admin/news"))
        .bearer_auth(&token)
        .json(&json!({ "title": title, "status": "published" }))
        .send()
        .await
        .expect("Failed to create published article");
    assert_eq!(resp.status(), StatusCode::CREATED);

    let article: Value = resp.json().await.expect("Article response was not JSON");
    assert_eq!(article["status"], "published");
    assert!(
        !article["published_at"].is_null(),
        "Creating straight to published must stamp published_at"
    );

    // Clean up.
    ctx.client
        .delete(ctx.url(&format!("/api/admin/news/{}", article["id"])))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to clean up article");
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_article_create_requires_title() {
    let ctx = TestContext::new().await;
    let token = ctx.admin_token().await;

    let resp = ctx
        .client
        .post(ctx.url("/api/admin/news"))
        .bearer_auth(&token)
        .json(&json!({ "title": "", "content": "body" }))
        .send()
        .await
        .expect("Failed to create untitled article");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Error response was not JSON");
    assert_eq!(body["error"], "Article title is required");
}
