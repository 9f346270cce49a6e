use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Rate limited: retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Registry unavailable: status {status}")]
    Unavailable { status: u16 },

    #[error("Mod not found: {0}")]
    NotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl RegistryError {
    /// Whether a retry has a chance of succeeding
    ///
    /// Rate limiting and upstream 502/503 recover on their own; so do
    /// connection-reset-class transport errors. 404s, auth failures, and
    /// malformed payloads do not.
    pub fn is_retryable(&self) -> bool {
        match self {
            RegistryError::RateLimited { .. } | RegistryError::Unavailable { .. } => true,
            RegistryError::Network(e) => e.is_connect() || e.is_timeout() || e.is_request(),
            RegistryError::NotFound(_) | RegistryError::InvalidResponse(_) => false,
        }
    }
}
