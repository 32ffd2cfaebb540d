//! Tolerant decoding of upstream catalog payloads.
//!
//! The upstream schema has drifted over time: `set` and `serie` arrive either
//! as bare strings or as `{ "id": ... }` objects, `hp` as a number or a numeric
//! string, and identifier fields may be missing entirely. Everything here
//! reduces those variants to [`CardSummary`], [`CardDetail`] and [`Series`];
//! nothing outside this module sees the wire shapes.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{CatalogError, Result};
use crate::models::{CardDetail, CardSummary, Series};

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// A reference that is either a bare id string or an object with an `id`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum IdRef {
    Bare(String),
    Object {
        #[serde(default)]
        id: Option<String>,
    },
}

impl IdRef {
    fn into_id(self) -> String {
        match self {
            IdRef::Bare(id) => id,
            IdRef::Object { id } => id.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum HpValue {
    Number(f64),
    Text(String),
    Other(Value),
}

impl HpValue {
    fn coerce(self) -> u32 {
        match self {
            HpValue::Number(n) if n.is_finite() && n > 0.0 => n.trunc().min(u32::MAX as f64) as u32,
            HpValue::Number(_) => 0,
            HpValue::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_or(0, |n| HpValue::Number(n).coerce()),
            HpValue::Other(_) => 0,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCard {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    set: Option<IdRef>,
    #[serde(default)]
    local_id: Option<String>,
    #[serde(default)]
    serie: Option<IdRef>,
    #[serde(default)]
    hp: Option<HpValue>,
    #[serde(default)]
    rarity: Option<String>,
    #[serde(default)]
    types: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct RawSeries {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: Option<String>,
}

// ---------------------------------------------------------------------------
// Identifier reconciliation
// ---------------------------------------------------------------------------

/// Split a composite card id on its first `-`.
///
/// Returns `None` when the id has no hyphen.
pub fn split_id(id: &str) -> Option<(&str, &str)> {
    id.split_once('-')
}

/// Leading alphabetic run of a set id, lowercased.
///
/// `"BASE1"` gives `"base"`, `"swsh-promo"` gives `"swsh"`, `"sv01"` gives `"sv"`.
pub fn derive_series_id(set_id: &str) -> String {
    set_id
        .chars()
        .take_while(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect()
}

fn fix_ids(id: &str, set_id: String, local_id: String) -> (String, String) {
    if !set_id.is_empty() && !local_id.is_empty() {
        return (set_id, local_id);
    }
    match split_id(id) {
        Some((set_half, local_half)) => (
            if set_id.is_empty() { set_half.to_string() } else { set_id },
            if local_id.is_empty() { local_half.to_string() } else { local_id },
        ),
        None => (set_id, local_id),
    }
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

impl RawCard {
    /// Normalize into a detail record, or `None` for a row with neither id nor name.
    fn normalize(self) -> Option<CardDetail> {
        let id = self.id.unwrap_or_default();
        let name = self.name.unwrap_or_default();
        if id.is_empty() && name.is_empty() {
            return None;
        }

        let set_id = self.set.map(IdRef::into_id).unwrap_or_default();
        let local_id = self.local_id.unwrap_or_default();
        let (set_id, local_id) = fix_ids(&id, set_id, local_id);

        let series_id = self
            .serie
            .map(IdRef::into_id)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| derive_series_id(&set_id));

        Some(CardDetail {
            id,
            name,
            image: self.image.unwrap_or_default(),
            set_id,
            local_id,
            series_id,
            hp: self.hp.map(HpValue::coerce).unwrap_or(0),
            rarity: self.rarity.unwrap_or_default(),
            types: self.types.unwrap_or_default(),
        })
    }
}

fn decode_array(body: &[u8]) -> Result<Vec<Value>> {
    match serde_json::from_slice::<Value>(body)? {
        Value::Array(rows) => Ok(rows),
        other => Err(CatalogError::Upstream {
            status: None,
            message: format!("expected a JSON array, got {}", json_kind(&other)),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Decode a card listing. Rows that fail to decode or carry neither id nor
/// name are dropped; only a body that is not a JSON array is an error.
pub(crate) fn decode_summaries(body: &[u8]) -> Result<Vec<CardSummary>> {
    let rows = decode_array(body)?;
    Ok(rows
        .into_iter()
        .filter_map(|row| serde_json::from_value::<RawCard>(row).ok())
        .filter_map(RawCard::normalize)
        .map(CardDetail::into_summary)
        .collect())
}

/// Decode a single card payload. `Ok(None)` means the payload held no card.
pub(crate) fn decode_detail(body: &[u8]) -> Result<Option<CardDetail>> {
    let raw: RawCard = match serde_json::from_slice::<Value>(body)? {
        Value::Null => return Ok(None),
        value => serde_json::from_value(value)?,
    };
    Ok(raw.normalize())
}

pub(crate) fn decode_series(body: &[u8]) -> Result<Vec<Series>> {
    let rows = decode_array(body)?;
    Ok(rows
        .into_iter()
        .filter_map(|row| serde_json::from_value::<RawSeries>(row).ok())
        .filter_map(|raw| {
            let id = raw.id.filter(|id| !id.is_empty())?;
            let name = raw
                .name
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| id.to_uppercase());
            Some(Series { id, name })
        })
        .collect())
}
