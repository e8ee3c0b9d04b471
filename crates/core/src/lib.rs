//! Kraftbox Core - Shared domain types.
//!
//! Domain vocabulary shared by the server and the CLI: typed ids, the
//! validated email address, role and status enums ([`types`]), and the
//! quote price estimator ([`pricing`]). Everything here is pure - no I/O,
//! no async, no database handles - so both binaries depend on it freely.
//!
//! `PostgreSQL` bindings for the newtypes sit behind the `postgres`
//! feature; the types themselves compile without sqlx.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod pricing;
pub mod types;

pub use types::*;
