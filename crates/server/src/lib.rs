//! Kraftbox server library.
//!
//! Everything the `kraftbox-server` binary does lives here so the CLI and
//! the integration tests can reuse the config, pool setup, and migrations.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod content;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

/// Embedded SQL migrations, applied via `kb-cli migrate`.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
