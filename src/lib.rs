//! TCGdex catalog SDK for Rust.
//!
//! Browses a remote trading-card catalog over HTTP, normalizes the drifting
//! upstream payloads into a stable card model, filters and paginates listings
//! in-process, and keeps a file-backed set of favorite cards.
//!
//! # Quick start
//!
//! ```no_run
//! use tcgdex_catalog::{CatalogSdk, SearchCardsParams};
//!
//! let sdk = CatalogSdk::builder().build().unwrap();
//!
//! // Search the catalog
//! let result = sdk
//!     .cards()
//!     .search(&SearchCardsParams {
//!         text: "pika".to_string(),
//!         ..Default::default()
//!     })
//!     .unwrap();
//!
//! // Mark the first hit as favorite
//! if let Some(card) = result.page.items.first() {
//!     sdk.toggle_favorite(&card.id).unwrap();
//! }
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod client;
pub mod config;
pub mod error;
pub mod favorites;
pub mod models;
pub mod normalize;
pub mod queries;

#[cfg(feature = "async")]
pub use async_client::AsyncCatalogSdk;
pub use client::CatalogClient;
pub use error::{CatalogError, Result};
pub use favorites::FavoritesStore;
pub use models::{CardDetail, CardSummary, Page, Series};
pub use queries::{SearchCardsParams, SearchResult};

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ---------------------------------------------------------------------------
// CatalogSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`CatalogSdk`] instance.
///
/// Use [`CatalogSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](CatalogSdkBuilder::build) to create the SDK.
#[derive(Debug, Clone)]
pub struct CatalogSdkBuilder {
    base_url: String,
    timeout: Duration,
    favorites_path: Option<PathBuf>,
    page_size: usize,
}

impl Default for CatalogSdkBuilder {
    fn default() -> Self {
        Self {
            base_url: config::DEFAULT_BASE_URL.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
            favorites_path: None,
            page_size: config::PAGE_SIZE,
        }
    }
}

impl CatalogSdkBuilder {
    /// Set the upstream API base URL, e.g. `https://api.tcgdex.net/v2/fr`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the timeout applied to every upstream request.
    ///
    /// Defaults to 15 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the favorites file.
    ///
    /// If not set, `favorites.json` in the platform data directory is used
    /// (e.g. `~/.local/share/tcgdex-catalog` on Linux).
    pub fn favorites_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.favorites_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the number of cards per search page. Defaults to 20.
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Build the SDK: create the HTTP client and load the favorites file.
    ///
    /// No upstream request is made here.
    pub fn build(self) -> Result<CatalogSdk> {
        if self.page_size == 0 {
            return Err(CatalogError::InvalidArgument("page size must be positive".into()));
        }
        let client = CatalogClient::new(&self.base_url, self.timeout)?;
        let path = self.favorites_path.unwrap_or_else(config::default_favorites_path);
        let favorites = FavoritesStore::open(path);
        Ok(CatalogSdk {
            client,
            favorites,
            page_size: self.page_size,
        })
    }
}

// ---------------------------------------------------------------------------
// CatalogSdk
// ---------------------------------------------------------------------------

/// The main entry point for the catalog SDK.
///
/// Owns the [`CatalogClient`] and the [`FavoritesStore`]. All methods take
/// `&self`, so one instance can be shared across threads.
#[derive(Debug)]
pub struct CatalogSdk {
    client: CatalogClient,
    favorites: FavoritesStore,
    page_size: usize,
}

impl CatalogSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> CatalogSdkBuilder {
        CatalogSdkBuilder::default()
    }

    /// Access the card query interface.
    pub fn cards(&self) -> queries::cards::CardQuery<'_> {
        queries::cards::CardQuery::new(&self.client, &self.favorites, self.page_size)
    }

    // -- Favorites ---------------------------------------------------------

    /// Flip the favorite status of `id`, returning the new status.
    pub fn toggle_favorite(&self, id: &str) -> Result<bool> {
        let id = id.trim();
        if id.is_empty() {
            return Err(CatalogError::InvalidArgument("card id is empty".into()));
        }
        self.favorites.toggle(id)
    }

    /// Snapshot of the favorite set.
    pub fn favorites(&self) -> HashMap<String, bool> {
        self.favorites.snapshot()
    }

    // -- Accessors ---------------------------------------------------------

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Return a reference to the underlying [`CatalogClient`].
    pub fn client(&self) -> &CatalogClient {
        &self.client
    }

    /// Return a reference to the underlying [`FavoritesStore`].
    pub fn favorites_store(&self) -> &FavoritesStore {
        &self.favorites
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for CatalogSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CatalogSdk(base_url={}, favorites={}, page_size={})",
            self.client.base_url(),
            self.favorites.path().display(),
            self.page_size
        )
    }
}
