//! # Search Errors
//!
//! Error codes:
//! - SEARCH_INVALID_QUERY (client error, not retryable)
//! - SEARCH_OVERLOADED (server error, retryable)

use thiserror::Error;

/// Result type for engine operations
pub type EngineResult<T> = Result<T, SearchError>;

/// Conditions under which a search produces no results at all
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The query cannot be evaluated (e.g. no requesting identity)
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// The latency budget was exceeded
    #[error("Search took too long ({elapsed_ms}ms, budget {budget_ms}ms). Please try again.")]
    Overloaded { elapsed_ms: u64, budget_ms: u64 },
}

impl SearchError {
    /// Missing or blank identity
    pub fn missing_identity() -> Self {
        SearchError::InvalidQuery("requesting identity is required".to_string())
    }

    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            SearchError::InvalidQuery(_) => "SEARCH_INVALID_QUERY",
            SearchError::Overloaded { .. } => "SEARCH_OVERLOADED",
        }
    }

    /// Whether the caller may retry the same request
    pub fn is_retryable(&self) -> bool {
        matches!(self, SearchError::Overloaded { .. })
    }
}
