//! Metrics registry
//!
//! - Counters only increase, reset only on process start
//! - `records_loaded` is set once at boot
//! - Thread-safe but lock-free

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Operational counters for the search service
///
/// Uses Relaxed ordering; readers only need eventually consistent values.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Searches that returned results (possibly empty)
    searches_executed: AtomicU64,
    /// Searches rejected as invalid
    searches_rejected: AtomicU64,
    /// Searches that exceeded the latency budget
    searches_overloaded: AtomicU64,
    /// Total results returned
    results_returned: AtomicU64,
    /// Records in the loaded dataset
    records_loaded: AtomicU64,
}

impl MetricsRegistry {
    /// Create a new metrics registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful search returning `results` rows
    pub fn record_search(&self, results: usize) {
        self.searches_executed.fetch_add(1, Ordering::Relaxed);
        self.results_returned
            .fetch_add(results as u64, Ordering::Relaxed);
    }

    pub fn increment_searches_rejected(&self) {
        self.searches_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_searches_overloaded(&self) {
        self.searches_overloaded.fetch_add(1, Ordering::Relaxed);
    }

    pub fn set_records_loaded(&self, count: u64) {
        self.records_loaded.store(count, Ordering::Relaxed);
    }

    /// Get all metrics as a snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            searches_executed: self.searches_executed.load(Ordering::Relaxed),
            searches_rejected: self.searches_rejected.load(Ordering::Relaxed),
            searches_overloaded: self.searches_overloaded.load(Ordering::Relaxed),
            results_returned: self.results_returned.load(Ordering::Relaxed),
            records_loaded: self.records_loaded.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time snapshot of all metrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub searches_executed: u64,
    pub searches_rejected: u64,
    pub searches_overloaded: u64,
    pub results_returned: u64,
    pub records_loaded: u64,
}
