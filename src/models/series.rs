use serde::{Deserialize, Serialize};

/// A card series, used to populate filter options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
    pub id: String,
    pub name: String,
}

impl Series {
    /// Build a series entry from a bare id, displaying it uppercased.
    pub fn from_id(id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: id.to_uppercase(),
        }
    }
}
