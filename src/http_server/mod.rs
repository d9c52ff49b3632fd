//! # HTTP Server Module
//!
//! Thin axum layer in front of the search engine.
//!
//! # Endpoints
//!
//! - `/` - Welcome payload
//! - `/search` - Permission-aware record search
//! - `/health` - Health check
//! - `/metrics` - Search counters

pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod search_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use search_routes::{SearchParams, SearchState};
pub use server::HttpServer;
