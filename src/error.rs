#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Non-2xx response, transport failure, timeout or malformed JSON.
    #[error("Upstream error{}: {message}", status_suffix(.status))]
    Upstream {
        status: Option<u16>,
        message: String,
    },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Persistence error: {0}")]
    Persistence(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl CatalogError {
    /// HTTP status carried by an upstream error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            CatalogError::Upstream { status, .. } => *status,
            _ => None,
        }
    }

    pub fn is_upstream(&self) -> bool {
        matches!(self, CatalogError::Upstream { .. })
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(e: reqwest::Error) -> Self {
        CatalogError::Upstream {
            status: e.status().map(|s| s.as_u16()),
            message: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Upstream {
            status: None,
            message: format!("malformed JSON: {e}"),
        }
    }
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" (HTTP {s})")).unwrap_or_default()
}

pub type Result<T> = std::result::Result<T, CatalogError>;
