//! Dataset subsystem
//!
//! Holds the read-only record set. The dataset is loaded once at boot and
//! shared behind an `Arc` by every search call; nothing mutates it afterwards.

mod errors;
mod record;

pub use errors::{DatasetError, DatasetResult};
pub use record::Record;

use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Ordered, immutable collection of records
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Build a dataset, rejecting duplicate ids
    pub fn new(records: Vec<Record>) -> DatasetResult<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                return Err(DatasetError::DuplicateId(record.id));
            }
        }
        Ok(Self { records })
    }

    /// Load a JSON array of records from disk
    pub fn load(path: &Path) -> DatasetResult<Self> {
        let content = fs::read_to_string(path)?;
        let records: Vec<Record> = serde_json::from_str(&content)?;
        Self::new(records)
    }

    /// The built-in records served when no dataset file is configured
    pub fn seed() -> Self {
        Self {
            records: vec![
                Record::new(
                    1,
                    "FastAPI Tutorial",
                    "Education",
                    &["python", "api", "fastapi"],
                    true,
                    "alice",
                ),
                Record::new(
                    2,
                    "React Guide",
                    "Education",
                    &["javascript", "react"],
                    true,
                    "bob",
                ),
                Record::new(
                    3,
                    "Private Notes",
                    "Personal",
                    &["notes", "private"],
                    false,
                    "alice",
                ),
            ],
        }
    }

    /// Records in insertion order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
