//! Business logic services.
//!
//! - `auth` - Credential verification and bearer-token sessions
//! - `content` - Draft/publish/restore workflow for editable pages
//! - `storage` - Image uploads to the object storage bucket

pub mod auth;
pub mod content;
pub mod storage;
