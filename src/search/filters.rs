//! Record filtering for search execution
//!
//! Stages run in a fixed order and the first failing stage excludes the
//! record. The stages are independent, so order only affects how early a
//! record is dropped, never whether it is.
//!
//! Keyword and category comparisons are case-insensitive. Tag membership is
//! exact and case-sensitive with no normalization.

use std::fmt;

use crate::dataset::Record;

use super::query::QuerySpec;

/// A single filter stage, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterStage {
    /// Public, or owned by the requester
    Permission,
    /// `only_public` narrowing
    Visibility,
    Category,
    Tags,
    Keyword,
}

impl FilterStage {
    /// All stages in evaluation order
    pub const ALL: [FilterStage; 5] = [
        FilterStage::Permission,
        FilterStage::Visibility,
        FilterStage::Category,
        FilterStage::Tags,
        FilterStage::Keyword,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterStage::Permission => "permission",
            FilterStage::Visibility => "visibility",
            FilterStage::Category => "category",
            FilterStage::Tags => "tags",
            FilterStage::Keyword => "keyword",
        }
    }

    /// Position in `ALL`
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for FilterStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of running a record through every stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOutcome {
    Match,
    Rejected(FilterStage),
}

impl FilterOutcome {
    pub fn is_match(&self) -> bool {
        matches!(self, FilterOutcome::Match)
    }
}

/// Evaluates one query against records
///
/// Lower-cased keyword and category are computed once per query. An empty
/// keyword or category is no filter at all.
pub struct RecordFilter<'q> {
    query: &'q QuerySpec,
    keyword: Option<String>,
    category: Option<String>,
}

impl<'q> RecordFilter<'q> {
    pub fn new(query: &'q QuerySpec) -> Self {
        Self {
            query,
            keyword: lowered(&query.keyword),
            category: lowered(&query.category),
        }
    }

    /// Checks if a record passes every stage
    pub fn matches(&self, record: &Record) -> bool {
        self.evaluate(record).is_match()
    }

    /// Runs all stages, reporting the first one that rejects
    pub fn evaluate(&self, record: &Record) -> FilterOutcome {
        FilterStage::ALL
            .iter()
            .find(|stage| !self.passes(**stage, record))
            .map_or(FilterOutcome::Match, |stage| FilterOutcome::Rejected(*stage))
    }

    fn passes(&self, stage: FilterStage, record: &Record) -> bool {
        match stage {
            FilterStage::Permission => record.is_visible_to(&self.query.identity),
            FilterStage::Visibility => !self.query.only_public || record.is_public,
            FilterStage::Category => self.category_match(record),
            FilterStage::Tags => self.tags_match(record),
            FilterStage::Keyword => self.keyword_match(record),
        }
    }

    fn category_match(&self, record: &Record) -> bool {
        match &self.category {
            Some(category) => record.category.to_lowercase() == *category,
            None => true,
        }
    }

    /// Record tags must be a superset of the query tags
    fn tags_match(&self, record: &Record) -> bool {
        self.query.tags.iter().all(|tag| record.has_tag(tag))
    }

    /// Substring of the title or of any tag
    fn keyword_match(&self, record: &Record) -> bool {
        let keyword = match &self.keyword {
            Some(k) => k,
            None => return true,
        };

        record.title.to_lowercase().contains(keyword.as_str())
            || record
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(keyword.as_str()))
    }
}

fn lowered(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .map(str::to_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tutorial() -> Record {
        Record::new(
            1,
            "FastAPI Tutorial",
            "Education",
            &["python", "api", "fastapi"],
            true,
            "alice",
        )
    }

    fn notes() -> Record {
        Record::new(3, "Private Notes", "Personal", &["notes", "private"], false, "alice")
    }

    #[test]
    fn test_permission_gate_excludes_foreign_private() {
        let query = QuerySpec::new("bob").with_only_public(false);
        let filter = RecordFilter::new(&query);
        assert_eq!(
            filter.evaluate(&notes()),
            FilterOutcome::Rejected(FilterStage::Permission)
        );
    }

    #[test]
    fn test_visibility_filter_narrows_owned_private() {
        let query = QuerySpec::new("alice");
        let filter = RecordFilter::new(&query);
        assert_eq!(
            filter.evaluate(&notes()),
            FilterOutcome::Rejected(FilterStage::Visibility)
        );

        let query = QuerySpec::new("alice").with_only_public(false);
        assert!(RecordFilter::new(&query).matches(&notes()));
    }

    #[test]
    fn test_category_case_insensitive() {
        for category in ["education", "EDUCATION", "Education"] {
            let query = QuerySpec::new("bob").with_category(category);
            assert!(RecordFilter::new(&query).matches(&tutorial()));
        }

        let query = QuerySpec::new("bob").with_category("Personal");
        assert_eq!(
            RecordFilter::new(&query).evaluate(&tutorial()),
            FilterOutcome::Rejected(FilterStage::Category)
        );
    }

    #[test]
    fn test_tags_superset() {
        let query = QuerySpec::new("bob").with_tags(["python", "api"]);
        assert!(RecordFilter::new(&query).matches(&tutorial()));

        let query = QuerySpec::new("bob").with_tags(["python", "react"]);
        assert_eq!(
            RecordFilter::new(&query).evaluate(&tutorial()),
            FilterOutcome::Rejected(FilterStage::Tags)
        );
    }

    #[test]
    fn test_tags_case_sensitive() {
        let query = QuerySpec::new("bob").with_tags(["Python"]);
        assert!(!RecordFilter::new(&query).matches(&tutorial()));
    }

    #[test]
    fn test_keyword_matches_title_or_tag() {
        let query = QuerySpec::new("bob").with_keyword("TUTORIAL");
        assert!(RecordFilter::new(&query).matches(&tutorial()));

        let query = QuerySpec::new("bob").with_keyword("fast");
        assert!(RecordFilter::new(&query).matches(&tutorial()));

        let query = QuerySpec::new("bob").with_keyword("PyTh");
        assert!(RecordFilter::new(&query).matches(&tutorial()));

        let query = QuerySpec::new("bob").with_keyword("react");
        assert_eq!(
            RecordFilter::new(&query).evaluate(&tutorial()),
            FilterOutcome::Rejected(FilterStage::Keyword)
        );
    }

    #[test]
    fn test_empty_category_and_keyword_are_absent() {
        let query = QuerySpec::new("bob").with_category("").with_keyword("");
        let filter = RecordFilter::new(&query);
        assert_eq!(filter.evaluate(&tutorial()), FilterOutcome::Match);
        assert!(filter.category.is_none());
        assert!(filter.keyword.is_none());
    }

    #[test]
    fn test_first_failing_stage_reported() {
        // Fails category, tags and keyword; category runs first
        let query = QuerySpec::new("bob")
            .with_category("Personal")
            .with_tags(["missing"])
            .with_keyword("nothing");
        assert_eq!(
            RecordFilter::new(&query).evaluate(&tutorial()),
            FilterOutcome::Rejected(FilterStage::Category)
        );
    }

    #[test]
    fn test_stage_indices_follow_order() {
        for (i, stage) in FilterStage::ALL.iter().enumerate() {
            assert_eq!(stage.index(), i);
        }
    }
}
