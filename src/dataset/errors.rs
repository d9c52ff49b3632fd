//! # Dataset Errors
//!
//! Error types raised while loading the record set at startup.

use thiserror::Error;

/// Result type for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;

/// Dataset loading errors
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Dataset file could not be read
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset file is not a JSON array of records
    #[error("Invalid dataset JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two records share an identifier
    #[error("Duplicate record id: {0}")]
    DuplicateId(u64),
}
