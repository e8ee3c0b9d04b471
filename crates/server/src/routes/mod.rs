//! HTTP route handlers for the Kraftbox API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                     - Liveness check
//! GET  /health/ready               - Readiness check (probes Postgres)
//!
//! # Public site
//! GET  /api/products               - Product catalog (?category= filter)
//! GET  /api/categories             - Product categories
//! GET  /api/news                   - Published articles
//! GET  /api/company-info           - Company contact and branding info
//! GET  /api/content/{page_key}     - Published page content
//! GET  /api/quote/estimate         - Price estimate (?tier=&quantity=)
//! POST /api/quote                  - Submit a quote request
//! POST /api/contact                - Submit a contact message
//!
//! # Admin session
//! POST   /api/admin/auth/login     - Exchange credentials for a bearer token
//! DELETE /api/admin/auth/logout    - Revoke the current session
//!
//! # Admin CMS (bearer-protected)
//! GET    /api/admin/dashboard          - Counts + recent quote requests
//! CRUD   /api/admin/products[/{id}]    - Product management
//! CRUD   /api/admin/categories[/{id}]  - Category management
//! CRUD   /api/admin/news[/{id}]        - Article management
//! GET    /api/admin/quotes             - Quote request inbox
//! PATCH  /api/admin/quotes/{id}        - Update quote status
//! DELETE /api/admin/quotes/{id}        - Delete a quote request
//! GET    /api/admin/contacts           - Contact message inbox
//! PATCH  /api/admin/contacts/{id}      - Update message status
//! DELETE /api/admin/contacts/{id}      - Delete a contact message
//! GET    /api/admin/company            - Company settings
//! PUT    /api/admin/company            - Replace company settings
//! GET    /api/admin/content/{page_key} - Draft + published + history
//! PUT    /api/admin/content/{page_key} - Save a draft
//! POST   /api/admin/content/{page_key} - Publish or restore
//! POST   /api/admin/uploads            - Multipart image upload
//! ```

pub mod admin;
pub mod company;
pub mod contact;
pub mod content;
pub mod news;
pub mod products;
pub mod quote;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the public API router.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(products::list))
        .route("/categories", get(products::categories))
        .route("/news", get(news::published))
        .route("/company-info", get(company::info))
        .route("/content/{page_key}", get(content::published))
        .route("/quote", post(quote::create))
        .route("/quote/estimate", get(quote::estimate))
        .route("/contact", post(contact::create))
}

/// Create all API routes.
///
/// Health endpoints live next to the server setup in `main.rs`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/api", public_routes())
        .nest("/api/admin", admin::routes())
}
