//! Observable events
//!
//! Events are explicit and typed; their string forms are stable log keys.

use std::fmt;

/// Observable events in the search service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Boot & Lifecycle
    /// Startup begins
    BootStart,
    /// Configuration loaded
    ConfigLoaded,
    /// Record set loaded
    DatasetLoaded,
    /// Dataset could not be loaded (FATAL)
    DatasetFailed,
    /// Listening for requests
    Serving,
    /// Shutdown complete
    ShutdownComplete,

    // Search operations
    /// Search received
    SearchBegin,
    /// Search returned results
    SearchComplete,
    /// Search rejected as invalid
    SearchRejected,
    /// Search exceeded its latency budget
    SearchOverloaded,
    /// Per-stage rejection counts for one search (TRACE)
    SearchStageStats,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "SEARCHD_STARTUP_BEGIN",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::DatasetLoaded => "DATASET_LOADED",
            Event::DatasetFailed => "DATASET_FAILED",
            Event::Serving => "SEARCHD_SERVING",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",

            Event::SearchBegin => "SEARCH_BEGIN",
            Event::SearchComplete => "SEARCH_COMPLETE",
            Event::SearchRejected => "SEARCH_REJECTED",
            Event::SearchOverloaded => "SEARCH_OVERLOADED",
            Event::SearchStageStats => "SEARCH_STAGE_STATS",
        }
    }

    /// Returns true if this event indicates a fatal condition
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::DatasetFailed)
    }

    /// Returns true if the service itself could not complete the operation
    pub fn is_error(&self) -> bool {
        matches!(self, Event::SearchOverloaded)
    }

    /// Returns true if this event is debug detail
    pub fn is_trace(&self) -> bool {
        matches!(self, Event::SearchStageStats)
    }

    /// Returns true if this event reports a failed operation
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Event::DatasetFailed | Event::SearchRejected | Event::SearchOverloaded
        )
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
