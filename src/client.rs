//! Blocking HTTP client for the upstream card catalog.
//!
//! Each call issues one GET with the configured timeout and hands the body
//! to [`crate::normalize`]. Nothing is cached and nothing is retried, except
//! the single alternate address tried by [`CatalogClient::get_detail`].

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::Url;

use crate::config;
use crate::error::{CatalogError, Result};
use crate::models::{CardDetail, CardSummary, Series};
use crate::normalize;

/// Fetches and normalizes card data from a TCGdex-style REST API.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    base_url: Url,
    client: Client,
}

impl CatalogClient {
    /// Create a client rooted at `base_url` (trailing `/` ignored).
    ///
    /// Every request made through the client is bounded by `timeout`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let trimmed = base_url.trim_end_matches('/');
        let base_url = Url::parse(trimmed)
            .map_err(|e| CatalogError::InvalidArgument(format!("base URL '{trimmed}': {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(CatalogError::InvalidArgument(format!(
                "base URL '{trimmed}' cannot carry a path"
            )));
        }

        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    // -- Listings ----------------------------------------------------------

    /// Fetch the full card collection from `/cards`.
    pub fn list_all(&self) -> Result<Vec<CardSummary>> {
        let url = self.endpoint(&["cards"])?;
        normalize::decode_summaries(&self.get(url)?)
    }

    /// Fetch the cards of one type, filtered upstream via `?types=`.
    pub fn list_by_type(&self, card_type: &str) -> Result<Vec<CardSummary>> {
        let mut url = self.endpoint(&["cards"])?;
        url.query_pairs_mut().append_pair("types", card_type);
        normalize::decode_summaries(&self.get(url)?)
    }

    /// Fetch the series list from `/series`.
    ///
    /// Not every upstream exposes this endpoint; callers that need series
    /// anyway can fall back to [`crate::queries::derive_series`].
    pub fn list_series(&self) -> Result<Vec<Series>> {
        let url = self.endpoint(&["series"])?;
        normalize::decode_series(&self.get(url)?)
    }

    // -- Single card lookup ------------------------------------------------

    /// Fetch one card by its composite id via `/cards/{id}`.
    pub fn get_by_id(&self, id: &str) -> Result<CardDetail> {
        let url = self.endpoint(&["cards", id])?;
        self.fetch_detail(url)
    }

    /// Fetch one card by set and local id.
    ///
    /// Tries `/sets/{set_id}/{local_id}` first. On any failure, tries once
    /// more with `/cards/{set_id}-{local_id}`; if that fails too, its error
    /// is returned.
    pub fn get_detail(&self, set_id: &str, local_id: &str) -> Result<CardDetail> {
        let primary = self.endpoint(&["sets", set_id, local_id])?;
        match self.fetch_detail(primary) {
            Ok(card) => Ok(card),
            Err(_) => self.get_by_id(&format!("{set_id}-{local_id}")),
        }
    }

    fn fetch_detail(&self, url: Url) -> Result<CardDetail> {
        let body = match self.get(url.clone()) {
            Ok(body) => body,
            Err(e) if e.status() == Some(404) => {
                return Err(CatalogError::NotFound(format!("no card at {url}")));
            }
            Err(e) => return Err(e),
        };
        normalize::decode_detail(&body)?
            .ok_or_else(|| CatalogError::NotFound(format!("empty card payload at {url}")))
    }

    // -- Transport ---------------------------------------------------------

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                CatalogError::InvalidArgument(format!("base URL '{}' cannot carry a path", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// GET `url` and return the body of a 2xx response.
    fn get(&self, url: Url) -> Result<Vec<u8>> {
        let resp = self.client.get(url.clone()).send()?;
        let status = resp.status();
        let body = resp.bytes()?;

        if !status.is_success() {
            return Err(CatalogError::Upstream {
                status: Some(status.as_u16()),
                message: format!("GET {url}: {}", excerpt(&body)),
            });
        }

        Ok(body.to_vec())
    }
}

fn excerpt(body: &[u8]) -> String {
    let cut = body.len().min(config::BODY_EXCERPT_LEN);
    String::from_utf8_lossy(&body[..cut]).into_owned()
}
