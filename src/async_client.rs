//! Async wrapper around [`CatalogSdk`] for use in async runtimes (Tokio, etc.).
//!
//! The SDK performs blocking HTTP and file I/O, so every operation is moved
//! onto Tokio's blocking pool via [`tokio::task::spawn_blocking`].
//!
//! # Example
//!
//! ```no_run
//! use tcgdex_catalog::{AsyncCatalogSdk, SearchCardsParams};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let sdk = AsyncCatalogSdk::builder().build().await.unwrap();
//!
//!     let _result = sdk
//!         .run(|s| s.cards().search(&SearchCardsParams::default()))
//!         .await
//!         .unwrap();
//!
//!     let _now_favorite = sdk.toggle_favorite("base1-4").await.unwrap();
//! }
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::error::{CatalogError, Result};
use crate::{config, CatalogSdk};

fn join_error(e: tokio::task::JoinError) -> CatalogError {
    CatalogError::InvalidArgument(format!("Task join error: {e}"))
}

// ---------------------------------------------------------------------------
// AsyncCatalogSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncCatalogSdk`] instance.
#[derive(Debug, Clone)]
pub struct AsyncCatalogSdkBuilder {
    base_url: String,
    timeout: Duration,
    favorites_path: Option<PathBuf>,
    page_size: usize,
}

impl Default for AsyncCatalogSdkBuilder {
    fn default() -> Self {
        Self {
            base_url: config::DEFAULT_BASE_URL.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
            favorites_path: None,
            page_size: config::PAGE_SIZE,
        }
    }
}

impl AsyncCatalogSdkBuilder {
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn favorites_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.favorites_path = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Build the async SDK.
    ///
    /// The blocking HTTP client must not be created on an async worker, so
    /// construction runs on the blocking pool as well.
    pub async fn build(self) -> Result<AsyncCatalogSdk> {
        tokio::task::spawn_blocking(move || {
            let mut builder = CatalogSdk::builder()
                .base_url(self.base_url)
                .timeout(self.timeout)
                .page_size(self.page_size);
            if let Some(path) = self.favorites_path {
                builder = builder.favorites_path(path);
            }
            let sdk = builder.build()?;
            Ok(AsyncCatalogSdk {
                inner: Arc::new(sdk),
            })
        })
        .await
        .map_err(join_error)?
    }
}

// ---------------------------------------------------------------------------
// AsyncCatalogSdk
// ---------------------------------------------------------------------------

/// Async wrapper around [`CatalogSdk`].
///
/// [`CatalogSdk`] is `Sync`, so the wrapper only needs an [`Arc`]; the
/// favorites store does its own locking.
#[derive(Debug, Clone)]
pub struct AsyncCatalogSdk {
    inner: Arc<CatalogSdk>,
}

impl AsyncCatalogSdk {
    /// Create a new builder for configuring the async SDK.
    pub fn builder() -> AsyncCatalogSdkBuilder {
        AsyncCatalogSdkBuilder::default()
    }

    /// Run a sync SDK operation on the blocking thread pool.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&CatalogSdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = Arc::clone(&self.inner);
        tokio::task::spawn_blocking(move || f(&sdk))
            .await
            .map_err(join_error)?
    }

    pub async fn toggle_favorite(&self, id: &str) -> Result<bool> {
        let id = id.to_string();
        self.run(move |s| s.toggle_favorite(&id)).await
    }

    pub async fn favorites(&self) -> Result<HashMap<String, bool>> {
        self.run(|s| Ok(s.favorites())).await
    }

    /// Release this handle on the blocking pool.
    ///
    /// Dropping the last handle inside an async task would drop the blocking
    /// HTTP client there, which Tokio forbids.
    pub async fn close(self) -> Result<()> {
        tokio::task::spawn_blocking(move || drop(self.inner))
            .await
            .map_err(join_error)
    }
}
