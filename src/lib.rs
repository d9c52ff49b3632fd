//! recordsearch - permission-aware search over an in-memory record set
//!
//! The core is the record filter engine in [`search`]. The HTTP layer,
//! CLI and observability modules wrap it.

pub mod cli;
pub mod dataset;
pub mod http_server;
pub mod identity;
pub mod observability;
pub mod search;
