//! Search HTTP Routes
//!
//! `GET /search` turns query parameters into a `QuerySpec`, resolves the
//! requester and runs the engine.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::HeaderMap,
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::identity::IdentityResolver;
use crate::observability::{log_event_with_fields, Event, MetricsRegistry};
use crate::search::{FilterStage, QuerySpec, ScanStats, SearchEngine, SearchError, SearchResult};

use super::errors::{ApiError, ApiResult};

/// Shared search state
pub struct SearchState {
    pub engine: SearchEngine,
    pub identity: Arc<dyn IdentityResolver>,
    pub metrics: Arc<MetricsRegistry>,
}

impl SearchState {
    pub fn new(
        engine: SearchEngine,
        identity: Arc<dyn IdentityResolver>,
        metrics: Arc<MetricsRegistry>,
    ) -> Self {
        Self {
            engine,
            identity,
            metrics,
        }
    }
}

/// Search routes with shared state
pub fn search_routes(state: Arc<SearchState>) -> Router {
    Router::new()
        .route("/search", get(search_handler))
        .with_state(state)
}

/// Typed `/search` parameters
///
/// `tags` may repeat. For the other keys the last occurrence wins, and an
/// empty `keywords` or `category` counts as absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub keywords: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub only_public: bool,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            keywords: None,
            category: None,
            tags: Vec::new(),
            only_public: true,
        }
    }
}

impl SearchParams {
    /// Parse decoded query pairs; unknown keys are ignored
    pub fn from_pairs(pairs: Vec<(String, String)>) -> ApiResult<Self> {
        let mut params = SearchParams::default();

        for (key, value) in pairs {
            match key.as_str() {
                "keywords" => params.keywords = non_empty(value),
                "category" => params.category = non_empty(value),
                "tags" => params.tags.push(value),
                "only_public" => params.only_public = parse_bool("only_public", value.as_str())?,
                _ => {}
            }
        }

        Ok(params)
    }

    /// Attach the resolved identity
    pub fn into_query(self, identity: String) -> QuerySpec {
        QuerySpec {
            keyword: self.keywords,
            category: self.category,
            tags: self.tags,
            only_public: self.only_public,
            identity,
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Per-stage rejection counts as log fields, e.g. `rejected_category`
fn stage_stats_fields(request_id: &str, stats: &ScanStats) -> Vec<(String, String)> {
    let mut fields = vec![("request_id".to_string(), request_id.to_string())];
    fields.extend(FilterStage::ALL.iter().map(|stage| {
        (
            format!("rejected_{}", stage.as_str()),
            stats.rejected_by(*stage).to_string(),
        )
    }));
    fields
}

fn parse_bool(name: &str, value: &str) -> ApiResult<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" | "t" | "y" => Ok(true),
        "false" | "0" | "no" | "off" | "f" | "n" => Ok(false),
        _ => Err(ApiError::BadRequest(format!(
            "{} must be a boolean, got '{}'",
            name, value
        ))),
    }
}

/// Search handler
async fn search_handler(
    State(state): State<Arc<SearchState>>,
    headers: HeaderMap,
    Query(pairs): Query<Vec<(String, String)>>,
) -> ApiResult<Json<Vec<SearchResult>>> {
    let request_id = Uuid::new_v4().to_string();
    let params = SearchParams::from_pairs(pairs)?;

    // A missing identity still reaches the engine so it is rejected there
    let identity = state.identity.resolve(&headers).unwrap_or_default();
    let query = params.into_query(identity);

    log_event_with_fields(
        Event::SearchBegin,
        &[
            ("request_id", request_id.as_str()),
            ("identity", query.identity.as_str()),
            ("only_public", if query.only_public { "true" } else { "false" }),
        ],
    );

    match state.engine.execute(&query) {
        Ok(output) => {
            state.metrics.record_search(output.results.len());

            let results = output.results.len().to_string();
            let scanned = output.stats.scanned.to_string();
            let elapsed_ms = output.elapsed_ms.to_string();
            log_event_with_fields(
                Event::SearchComplete,
                &[
                    ("request_id", request_id.as_str()),
                    ("results", results.as_str()),
                    ("scanned", scanned.as_str()),
                    ("elapsed_ms", elapsed_ms.as_str()),
                ],
            );

            let stage_fields = stage_stats_fields(&request_id, &output.stats);
            let stage_fields: Vec<(&str, &str)> = stage_fields
                .iter()
                .map(|(key, value)| (key.as_str(), value.as_str()))
                .collect();
            log_event_with_fields(Event::SearchStageStats, &stage_fields);

            Ok(Json(output.results))
        }
        Err(err) => {
            let event = match err {
                SearchError::InvalidQuery(_) => {
                    state.metrics.increment_searches_rejected();
                    Event::SearchRejected
                }
                SearchError::Overloaded { .. } => {
                    state.metrics.increment_searches_overloaded();
                    Event::SearchOverloaded
                }
            };
            let reason = err.to_string();
            log_event_with_fields(
                event,
                &[("request_id", request_id.as_str()), ("reason", reason.as_str())],
            );

            Err(err.into())
        }
    }
}
