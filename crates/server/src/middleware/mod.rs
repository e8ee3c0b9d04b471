//! HTTP middleware and extractors.
//!
//! The admin surface is protected per-handler by the [`RequireAdminAuth`]
//! extractor rather than a router-level layer, so public and admin routes
//! can share one router without carve-outs.

pub mod auth;

pub use auth::RequireAdminAuth;
