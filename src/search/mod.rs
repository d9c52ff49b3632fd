//! Record Filter Engine
//!
//! Given a dataset, a requesting identity and a query, produces the matching
//! records in dataset order.
//!
//! # Execution Flow (strict order, per record)
//!
//! 1. Permission gate: public, or owned by the requester
//! 2. Visibility: drop private records when `only_public` is set
//! 3. Category: case-insensitive equality
//! 4. Tags: record tags must contain every query tag (exact match)
//! 5. Keyword: case-insensitive substring of title or any tag
//!
//! # Invariants
//!
//! - A record the requester may not view is never emitted
//! - Output is deterministic and preserves dataset order
//! - Either the full result set or an error, never partial output

mod engine;
mod errors;
mod filters;
mod query;
mod result;

pub use engine::{search, Clock, SearchEngine, SystemClock, DEFAULT_LATENCY_BUDGET};
pub use errors::{EngineResult, SearchError};
pub use filters::{FilterOutcome, FilterStage, RecordFilter};
pub use query::QuerySpec;
pub use result::{ScanStats, SearchOutput, SearchResult};
