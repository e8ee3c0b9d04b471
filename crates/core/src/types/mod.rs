//! Core types for Kraftbox.
//!
//! Newtypes and closed enums for the ids, statuses, and addresses that
//! cross the API and database boundaries.

pub mod email;
pub mod id;
pub mod status;

pub use email::{Email, EmailError};
pub use id::*;
pub use status::*;
