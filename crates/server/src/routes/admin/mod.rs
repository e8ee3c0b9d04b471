//! Admin API route handlers.
//!
//! Every handler except `auth::login` takes [`RequireAdminAuth`] as its
//! first argument, so an expired or missing bearer token is rejected
//! before any work happens.
//!
//! [`RequireAdminAuth`]: crate::middleware::RequireAdminAuth

pub mod auth;
pub mod company;
pub mod content;
pub mod dashboard;
pub mod inbox;
pub mod news;
pub mod products;
pub mod uploads;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{delete, get, patch, post, put},
};

use crate::services::storage::MAX_UPLOAD_BYTES;
use crate::state::AppState;

/// Multipart request cap: the image limit plus headroom for the form
/// framing around it.
const UPLOAD_BODY_LIMIT: usize = MAX_UPLOAD_BYTES + 1024 * 1024;

/// Create the admin API router, mounted under `/api/admin`.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Session management
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", delete(auth::logout))
        // Overview
        .route("/dashboard", get(dashboard::overview))
        // Catalog
        .route("/products", get(products::list).post(products::create))
        .route(
            "/products/{id}",
            put(products::update).delete(products::remove),
        )
        .route(
            "/categories",
            get(products::list_categories).post(products::create_category),
        )
        .route(
            "/categories/{id}",
            put(products::update_category).delete(products::remove_category),
        )
        // News
        .route("/news", get(news::list).post(news::create))
        .route("/news/{id}", put(news::update).delete(news::remove))
        // Inboxes
        .route("/quotes", get(inbox::list_quotes))
        .route(
            "/quotes/{id}",
            patch(inbox::set_quote_status).delete(inbox::remove_quote),
        )
        .route("/contacts", get(inbox::list_contacts))
        .route(
            "/contacts/{id}",
            patch(inbox::set_contact_status).delete(inbox::remove_contact),
        )
        // Company settings
        .route("/company", get(company::get).put(company::update))
        // Page content workflow
        .route(
            "/content/{page_key}",
            get(content::page_state)
                .put(content::save_draft)
                .post(content::action),
        )
        // Image uploads
        .route(
            "/uploads",
            post(uploads::create).layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT)),
        )
}
