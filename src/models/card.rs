use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// CardSummary — One row of a card listing
// ---------------------------------------------------------------------------

/// A card as it appears in listings, with reconciled identifiers.
///
/// `set_id` and `local_id` are always filled when `id` has the
/// `<setID>-<localID>` form, even if the upstream row omitted them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSummary {
    pub id: String,
    pub name: String,
    pub image: String,
    pub set_id: String,
    pub local_id: String,
    pub series_id: String,
}

impl CardSummary {
    /// Case-insensitive substring match against the name or the id.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_text(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name.to_lowercase().contains(needle)
            || self.id.to_lowercase().contains(needle)
    }
}

// ---------------------------------------------------------------------------
// CardDetail — Full card data from a detail endpoint
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDetail {
    pub id: String,
    pub name: String,
    pub image: String,
    pub set_id: String,
    pub local_id: String,
    pub series_id: String,
    pub hp: u32,
    pub rarity: String,
    #[serde(default)]
    pub types: Vec<String>,
}

impl CardDetail {
    pub fn into_summary(self) -> CardSummary {
        CardSummary {
            id: self.id,
            name: self.name,
            image: self.image,
            set_id: self.set_id,
            local_id: self.local_id,
            series_id: self.series_id,
        }
    }

    pub fn summary(&self) -> CardSummary {
        CardSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            image: self.image.clone(),
            set_id: self.set_id.clone(),
            local_id: self.local_id.clone(),
            series_id: self.series_id.clone(),
        }
    }
}
