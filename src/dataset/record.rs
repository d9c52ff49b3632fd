//! Searchable record type

use serde::{Deserialize, Serialize};

/// One searchable item
///
/// Records are immutable once loaded. `owner` and `is_public` feed the
/// permission gate and are never projected into search output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: u64,
    pub title: String,
    pub category: String,
    /// Echoed back in stored order
    #[serde(default)]
    pub tags: Vec<String>,
    pub is_public: bool,
    pub owner: String,
}

impl Record {
    /// Create a new record
    pub fn new(
        id: u64,
        title: impl Into<String>,
        category: impl Into<String>,
        tags: &[&str],
        is_public: bool,
        owner: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            category: category.into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            is_public,
            owner: owner.into(),
        }
    }

    /// Whether `identity` may ever see this record
    pub fn is_visible_to(&self, identity: &str) -> bool {
        self.is_public || self.owner == identity
    }

    /// Exact, case-sensitive tag membership
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
