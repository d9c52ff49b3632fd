//! Observability subsystem
//!
//! - Structured logging (JSON lines)
//! - Lock-free counters
//! - Typed lifecycle and search events
//!
//! Observability is read-only: it never changes search outcomes.
//!
//! # Usage
//!
//! ```ignore
//! use recordsearch::observability::{log_event_with_fields, Event, MetricsRegistry};
//!
//! log_event_with_fields(Event::SearchComplete, &[("results", "2")]);
//!
//! let metrics = MetricsRegistry::new();
//! metrics.record_search(2);
//! ```

mod events;
mod logger;
mod metrics;

pub use events::Event;
pub use logger::{Logger, Severity};

#[cfg(test)]
pub(crate) use logger::capture_log;
pub use metrics::{MetricsRegistry, MetricsSnapshot};

/// Severity used when logging `event`
pub fn severity_for(event: Event) -> Severity {
    if event.is_fatal() {
        Severity::Fatal
    } else if event.is_error() {
        Severity::Error
    } else if event.is_failure() {
        Severity::Warn
    } else if event.is_trace() {
        Severity::Trace
    } else {
        Severity::Info
    }
}

/// Log a lifecycle event
pub fn log_event(event: Event) {
    log_event_with_fields(event, &[]);
}

/// Log an event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    let severity = severity_for(event);
    if severity >= Severity::Error {
        Logger::log_stderr(severity, event.as_str(), fields);
    } else {
        Logger::log(severity, event.as_str(), fields);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_mapping() {
        assert_eq!(severity_for(Event::DatasetFailed), Severity::Fatal);
        assert_eq!(severity_for(Event::SearchOverloaded), Severity::Error);
        assert_eq!(severity_for(Event::SearchRejected), Severity::Warn);
        assert_eq!(severity_for(Event::SearchComplete), Severity::Info);
        assert_eq!(severity_for(Event::SearchStageStats), Severity::Trace);
    }

    #[test]
    fn test_log_event() {
        // This just verifies no panic
        log_event(Event::BootStart);
        log_event_with_fields(Event::ConfigLoaded, &[("port", "8000")]);
    }
}
