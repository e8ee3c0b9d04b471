//! Object storage client for admin image uploads.
//!
//! Talks to a hosted storage service over its object HTTP API: uploads go
//! to `{url}/storage/v1/object/{bucket}/{path}` authorized with the
//! service key, and the stored file is served from the public endpoint
//! `{url}/storage/v1/object/public/{bucket}/{path}`.

use reqwest::header::{AUTHORIZATION, CACHE_CONTROL, CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::config::StorageConfig;

/// Hard cap on upload size, checked before any bytes leave the server.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Folder used when the client does not name one.
pub const DEFAULT_FOLDER: &str = "home";

/// Errors that can occur when storing uploads.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Upload is not an image.
    #[error("Only image files are supported (got {0})")]
    UnsupportedType(String),

    /// Upload exceeds [`MAX_UPLOAD_BYTES`].
    #[error("File size {size} exceeds the {max} byte limit")]
    TooLarge { size: usize, max: usize },

    /// The request to the storage service never completed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Storage service returned an error response.
    #[error("Storage API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Client could not be built from the configuration.
    #[error("Invalid storage configuration: {0}")]
    Config(String),
}

/// A stored object, as returned to the admin editor.
#[derive(Debug, Clone, Serialize)]
pub struct UploadedObject {
    /// Public download URL.
    pub url: String,
    /// Object key inside the bucket.
    pub path: String,
}

/// HTTP client for the object storage service.
#[derive(Clone)]
pub struct StorageClient {
    client: reqwest::Client,
    base_url: String,
    bucket: String,
}

impl StorageClient {
    /// Create a new storage client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build or the service key
    /// is not a valid header value.
    pub fn new(config: &StorageConfig) -> Result<Self, StorageError> {
        let mut headers = HeaderMap::new();

        let auth_value = format!("Bearer {}", config.service_key.expose_secret());
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&auth_value)
                .map_err(|e| StorageError::Config(format!("Invalid service key format: {e}")))?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
            bucket: config.bucket.clone(),
        })
    }

    /// Upload an image and return its public URL and object key.
    ///
    /// The object key is `{folder}/{unix_millis}-{uuid}.{ext}` so repeated
    /// uploads of the same file never collide.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::UnsupportedType`] for non-image content,
    /// [`StorageError::TooLarge`] past the size cap, and
    /// [`StorageError::Api`] when the storage service rejects the write.
    pub async fn upload_image(
        &self,
        folder: Option<&str>,
        filename: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadedObject, StorageError> {
        if !content_type.starts_with("image/") {
            return Err(StorageError::UnsupportedType(content_type.to_string()));
        }
        if bytes.len() > MAX_UPLOAD_BYTES {
            return Err(StorageError::TooLarge {
                size: bytes.len(),
                max: MAX_UPLOAD_BYTES,
            });
        }

        let path = object_path(folder, filename);
        let url = format!("{}/storage/v1/object/{}/{path}", self.base_url, self.bucket);

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, content_type)
            .header(CACHE_CONTROL, "max-age=3600")
            .body(bytes)
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StorageError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(UploadedObject {
            url: self.public_url(&path),
            path,
        })
    }

    /// Public download URL for an object key.
    #[must_use]
    pub fn public_url(&self, path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{path}",
            self.base_url, self.bucket
        )
    }
}

/// Builds the object key for a fresh upload.
fn object_path(folder: Option<&str>, filename: &str) -> String {
    let folder = sanitize_folder(folder);
    let millis = chrono::Utc::now().timestamp_millis();
    let ext = file_extension(filename);
    format!("{folder}/{millis}-{}.{ext}", Uuid::new_v4())
}

/// Keeps object keys URL-safe: anything outside `[A-Za-z0-9_-]` in the
/// requested folder falls back to the default.
fn sanitize_folder(folder: Option<&str>) -> &str {
    match folder.map(str::trim) {
        Some(f)
            if !f.is_empty()
                && f.chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_')) =>
        {
            f
        }
        _ => DEFAULT_FOLDER,
    }
}

/// Lowercased extension of the client filename, `jpg` when absent or odd.
fn file_extension(filename: &str) -> String {
    match filename.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()) => {
            ext.to_lowercase()
        }
        _ => "jpg".to_string(),
    }
}
