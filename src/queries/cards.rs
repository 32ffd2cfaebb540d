//! Card queries combining the upstream catalog, the pagination engine and
//! the favorites store.

use std::collections::HashMap;

use serde::Serialize;

use crate::client::CatalogClient;
use crate::error::{CatalogError, Result};
use crate::favorites::FavoritesStore;
use crate::models::{CardDetail, CardSummary, Page, Series};
use crate::queries::paginate::{derive_series, paginate};

// ---------------------------------------------------------------------------
// SearchCardsParams
// ---------------------------------------------------------------------------

/// Parameters for a catalog search.
///
/// Empty strings disable the corresponding filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCardsParams {
    /// Free text matched against card name or id.
    pub text: String,
    /// Card type, filtered upstream.
    pub card_type: String,
    /// Exact series id.
    pub series: String,
    /// 1-based page; clamped into range.
    pub page: i64,
}

impl Default for SearchCardsParams {
    fn default() -> Self {
        Self {
            text: String::new(),
            card_type: String::new(),
            series: String::new(),
            page: 1,
        }
    }
}

// ---------------------------------------------------------------------------
// SearchResult
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub page: Page<CardSummary>,
    /// Series observed in the fetched (unfiltered) cards.
    pub series: Vec<Series>,
    pub favorites: HashMap<String, bool>,
}

impl SearchResult {
    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.get(id).copied().unwrap_or(false)
    }
}

// ---------------------------------------------------------------------------
// CardQuery
// ---------------------------------------------------------------------------

/// Query interface over the remote catalog.
pub struct CardQuery<'a> {
    client: &'a CatalogClient,
    favorites: &'a FavoritesStore,
    page_size: usize,
}

impl<'a> CardQuery<'a> {
    pub fn new(client: &'a CatalogClient, favorites: &'a FavoritesStore, page_size: usize) -> Self {
        Self {
            client,
            favorites,
            page_size,
        }
    }

    // -- Listing -----------------------------------------------------------

    /// Fetch all cards, or only those of `card_type` when it is non-empty.
    pub fn list(&self, card_type: &str) -> Result<Vec<CardSummary>> {
        if card_type.is_empty() {
            self.client.list_all()
        } else {
            self.client.list_by_type(card_type)
        }
    }

    /// Fetch, filter and paginate cards, annotated with favorite status.
    pub fn search(&self, params: &SearchCardsParams) -> Result<SearchResult> {
        let cards = self.list(&params.card_type)?;
        let series = derive_series(&cards);
        let page = paginate(&cards, &params.text, &params.series, params.page, self.page_size);

        Ok(SearchResult {
            page,
            series,
            favorites: self.favorites.snapshot(),
        })
    }

    /// Series filter options: the upstream list when available, otherwise
    /// derived from the full card collection.
    pub fn series_options(&self) -> Result<Vec<Series>> {
        match self.client.list_series() {
            Ok(series) if !series.is_empty() => Ok(series),
            _ => Ok(derive_series(&self.client.list_all()?)),
        }
    }

    /// All favorite cards, in upstream order.
    pub fn favorites(&self) -> Result<Vec<CardSummary>> {
        let favorites = self.favorites.snapshot();
        if favorites.is_empty() {
            return Ok(Vec::new());
        }
        let cards = self.client.list_all()?;
        Ok(cards
            .into_iter()
            .filter(|card| favorites.contains_key(&card.id))
            .collect())
    }

    // -- Single card lookup ------------------------------------------------

    /// Retrieve one card by its composite id.
    pub fn get(&self, id: &str) -> Result<CardDetail> {
        if id.trim().is_empty() {
            return Err(CatalogError::InvalidArgument("card id is empty".into()));
        }
        self.client.get_by_id(id)
    }

    /// Retrieve one card by set and local id.
    pub fn get_in_set(&self, set_id: &str, local_id: &str) -> Result<CardDetail> {
        if set_id.trim().is_empty() || local_id.trim().is_empty() {
            return Err(CatalogError::InvalidArgument(
                "both set id and local id are required".into(),
            ));
        }
        self.client.get_detail(set_id, local_id)
    }
}
