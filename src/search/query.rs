//! Structured search request

use serde::{Deserialize, Serialize};

use super::errors::{EngineResult, SearchError};

/// A validated search request
///
/// Built by the outer layer from typed fields; the engine never parses raw
/// strings. `identity` is resolved externally and is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuerySpec {
    pub keyword: Option<String>,
    pub category: Option<String>,
    /// Required tags; empty means no tag filter
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_only_public")]
    pub only_public: bool,
    pub identity: String,
}

fn default_only_public() -> bool {
    true
}

impl QuerySpec {
    /// Query with no filters for `identity`, public records only
    pub fn new(identity: impl Into<String>) -> Self {
        Self {
            keyword: None,
            category: None,
            tags: Vec::new(),
            only_public: default_only_public(),
            identity: identity.into(),
        }
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_only_public(mut self, only_public: bool) -> Self {
        self.only_public = only_public;
        self
    }

    /// Reject queries the permission gate cannot evaluate
    pub fn validate(&self) -> EngineResult<()> {
        if self.identity.trim().is_empty() {
            return Err(SearchError::missing_identity());
        }
        Ok(())
    }
}
