use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.tcgdex.net/v2/en";

/// Number of cards per page served by the catalog search.
pub const PAGE_SIZE: usize = 20;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

pub const FAVORITES_FILE: &str = "favorites.json";

/// Maximum number of response body bytes kept in an upstream error.
pub const BODY_EXCERPT_LEN: usize = 512;

pub fn default_data_dir() -> PathBuf {
    if let Some(data) = dirs::data_dir() {
        data.join("tcgdex-catalog")
    } else {
        PathBuf::from(".tcgdex-catalog")
    }
}

pub fn default_favorites_path() -> PathBuf {
    default_data_dir().join(FAVORITES_FILE)
}
