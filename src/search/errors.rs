//! Error types for one search cycle
//!
//! Every variant is terminal for the cycle that produced it. The dispatch
//! worker logs it, optionally surfaces it on the view, and moves on.

use thiserror::Error;

/// Result type alias for search operations
pub type SearchResult<T> = Result<T, SearchError>;

/// Failure of a single request/response/render cycle
#[derive(Debug, Error)]
pub enum SearchError {
    /// No response was obtained (connect failure, reset, timeout)
    #[error("Search request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-success status
    #[error("Search backend returned status {status}")]
    Backend { status: u16, body: String },

    /// The body was not a JSON array of `[path, rank]` pairs
    #[error("Malformed search response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Writing to the view failed
    #[error("Failed to render results: {0}")]
    Render(#[from] std::io::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl SearchError {
    /// Short label used in structured logs
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            SearchError::Transport { .. } => "transport",
            SearchError::Backend { .. } => "backend",
            SearchError::Parse(_) => "parse",
            SearchError::Render(_) => "render",
            SearchError::Other(_) => "other",
        }
    }

    /// True when the failure happened before any response arrived
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, SearchError::Transport { .. })
    }
}
