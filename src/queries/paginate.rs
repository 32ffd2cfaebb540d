//! Pure filter → paginate pipeline over an in-memory card list.

use std::collections::BTreeSet;

use crate::models::{CardSummary, Page, Series};

/// Filter `cards` by `text` and `series_id`, then cut out one page.
///
/// `text` matches case-insensitively against name or id; `series_id` must
/// match exactly. Empty filters match everything. Survivors keep their input
/// order. `page` is clamped into `1..=total_pages`, so out-of-range requests
/// land on the first or last page instead of failing. A `page_size` of 0 is
/// treated as 1.
pub fn paginate(
    cards: &[CardSummary],
    text: &str,
    series_id: &str,
    page: i64,
    page_size: usize,
) -> Page<CardSummary> {
    let page_size = page_size.max(1);
    let needle = text.to_lowercase();

    let filtered: Vec<&CardSummary> = cards
        .iter()
        .filter(|card| card.matches_text(&needle))
        .filter(|card| series_id.is_empty() || card.series_id == series_id)
        .collect();

    let total_items = filtered.len();
    let total_pages = total_items.div_ceil(page_size).max(1);
    let page_number = page.clamp(1, total_pages as i64) as usize;

    let start = ((page_number - 1) * page_size).min(total_items);
    let end = (page_number * page_size).min(total_items);

    Page {
        items: filtered[start..end].iter().map(|&card| card.clone()).collect(),
        page_number,
        total_pages,
        total_items,
    }
}

/// Distinct non-empty series ids of `cards`, ascending, named by their
/// uppercased id.
///
/// Used when the upstream has no series endpoint. Pass the unfiltered list.
pub fn derive_series(cards: &[CardSummary]) -> Vec<Series> {
    cards
        .iter()
        .map(|card| card.series_id.as_str())
        .filter(|id| !id.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(Series::from_id)
        .collect()
}

/// Parse a 1-based page number, defaulting to 1 when missing or invalid.
pub fn parse_page(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(1)
}
