//! Search output types

use serde::{Deserialize, Serialize};

use crate::dataset::Record;

use super::filters::FilterStage;

/// Projection of a matching record
///
/// Owner and visibility are not exposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: u64,
    pub title: String,
    pub category: String,
    pub tags: Vec<String>,
}

impl From<&Record> for SearchResult {
    fn from(record: &Record) -> Self {
        Self {
            id: record.id,
            title: record.title.clone(),
            category: record.category.clone(),
            tags: record.tags.clone(),
        }
    }
}

/// Counters gathered during one scan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub scanned: usize,
    pub matched: usize,
    /// Rejections indexed by `FilterStage::index`
    pub rejected: [usize; 5],
}

impl ScanStats {
    pub fn record_rejection(&mut self, stage: FilterStage) {
        self.rejected[stage.index()] += 1;
    }

    pub fn rejected_by(&self, stage: FilterStage) -> usize {
        self.rejected[stage.index()]
    }
}

/// Results plus scan counters
#[derive(Debug, Clone, Default)]
pub struct SearchOutput {
    pub results: Vec<SearchResult>,
    pub stats: ScanStats,
    pub elapsed_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_hides_owner_and_visibility() {
        let record = Record::new(3, "Private Notes", "Personal", &["notes"], false, "alice");
        let result = SearchResult::from(&record);

        let json = serde_json::to_value(&result).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        assert!(!obj.contains_key("owner"));
        assert!(!obj.contains_key("is_public"));
        assert_eq!(json["tags"], serde_json::json!(["notes"]));
    }

    #[test]
    fn test_scan_stats_rejections() {
        let mut stats = ScanStats::default();
        stats.record_rejection(FilterStage::Keyword);
        stats.record_rejection(FilterStage::Keyword);
        stats.record_rejection(FilterStage::Permission);
        assert_eq!(stats.rejected_by(FilterStage::Keyword), 2);
        assert_eq!(stats.rejected_by(FilterStage::Permission), 1);
        assert_eq!(stats.rejected_by(FilterStage::Tags), 0);
    }
}
