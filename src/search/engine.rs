//! Search engine
//!
//! Scans the shared dataset linearly. A deadline is fixed when the call
//! starts; it is checked before each record and once more after the scan.
//! Exceeding it fails the call with `Overloaded` and discards any matches.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::dataset::{Dataset, Record};

use super::errors::{EngineResult, SearchError};
use super::filters::{FilterOutcome, RecordFilter};
use super::query::QuerySpec;
use super::result::{ScanStats, SearchOutput, SearchResult};

/// Default latency budget for one search
pub const DEFAULT_LATENCY_BUDGET: Duration = Duration::from_secs(2);

/// Time source for the latency guard
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Evaluates queries against a read-only dataset
///
/// Cloning is cheap; clones share the dataset and clock.
#[derive(Clone)]
pub struct SearchEngine {
    dataset: Arc<Dataset>,
    budget: Duration,
    clock: Arc<dyn Clock>,
}

impl SearchEngine {
    /// Engine with the default budget and the wall clock
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self {
            dataset,
            budget: DEFAULT_LATENCY_BUDGET,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_budget(mut self, budget: Duration) -> Self {
        self.budget = budget;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Matching records in dataset order
    pub fn search(&self, query: &QuerySpec) -> EngineResult<Vec<SearchResult>> {
        self.execute(query).map(|output| output.results)
    }

    /// Like `search`, also returning scan counters and elapsed time
    pub fn execute(&self, query: &QuerySpec) -> EngineResult<SearchOutput> {
        scan(
            self.dataset.records(),
            query,
            self.clock.as_ref(),
            self.budget,
        )
    }
}

/// Searches `records` with the default budget and the wall clock
pub fn search(records: &[Record], query: &QuerySpec) -> EngineResult<Vec<SearchResult>> {
    scan(records, query, &SystemClock, DEFAULT_LATENCY_BUDGET).map(|output| output.results)
}

fn scan(
    records: &[Record],
    query: &QuerySpec,
    clock: &dyn Clock,
    budget: Duration,
) -> EngineResult<SearchOutput> {
    query.validate()?;

    let start = clock.now();
    let deadline = start + budget;
    let filter = RecordFilter::new(query);
    let mut stats = ScanStats::default();
    let mut results = Vec::new();

    for record in records {
        let now = clock.now();
        if now > deadline {
            return Err(overloaded(now - start, budget));
        }

        stats.scanned += 1;
        match filter.evaluate(record) {
            FilterOutcome::Match => {
                stats.matched += 1;
                results.push(SearchResult::from(record));
            }
            FilterOutcome::Rejected(stage) => stats.record_rejection(stage),
        }
    }

    let elapsed = clock.now().saturating_duration_since(start);
    if elapsed > budget {
        return Err(overloaded(elapsed, budget));
    }

    Ok(SearchOutput {
        results,
        stats,
        elapsed_ms: elapsed.as_millis() as u64,
    })
}

fn overloaded(elapsed: Duration, budget: Duration) -> SearchError {
    SearchError::Overloaded {
        elapsed_ms: elapsed.as_millis() as u64,
        budget_ms: budget.as_millis() as u64,
    }
}
