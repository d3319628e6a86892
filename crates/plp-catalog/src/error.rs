use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// Connect, TLS, timeout, or body-read failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid catalog endpoint \"{endpoint}\": {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
}

impl CatalogError {
    /// Stable short code for logs and error bodies.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            CatalogError::Http(_) => "transport",
            CatalogError::UnexpectedStatus { .. } => "upstream_status",
            CatalogError::Deserialize { .. } => "malformed_body",
            CatalogError::InvalidEndpoint { .. } => "invalid_endpoint",
        }
    }
}
