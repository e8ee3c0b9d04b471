//! Shared handler state.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::ServerConfig;
use crate::services::storage::{StorageClient, StorageError};

/// Everything a request handler needs: configuration, the database pool,
/// and the object storage client.
///
/// Cloning is cheap; the contents live behind one `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<Shared>,
}

struct Shared {
    config: ServerConfig,
    pool: PgPool,
    storage: StorageClient,
}

impl AppState {
    /// Builds the state, constructing the storage client from the
    /// configured endpoint.
    ///
    /// # Errors
    ///
    /// Fails when the storage section of the configuration cannot be
    /// turned into a usable client.
    pub fn new(config: ServerConfig, pool: PgPool) -> Result<Self, StorageError> {
        let storage = StorageClient::new(&config.storage)?;
        let inner = Arc::new(Shared {
            config,
            pool,
            storage,
        });

        Ok(Self { inner })
    }

    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Client for the hosted image bucket.
    #[must_use]
    pub fn storage(&self) -> &StorageClient {
        &self.inner.storage
    }
}
