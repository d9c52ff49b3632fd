//! # HTTP Server
//!
//! Combines the search, welcome and observability routers behind CORS.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::identity::IdentityResolver;
use crate::observability::{log_event, log_event_with_fields, Event, MetricsRegistry};
use crate::search::SearchEngine;

use super::config::HttpServerConfig;
use super::observability_routes::{observability_routes, root_routes};
use super::search_routes::{search_routes, SearchState};

/// HTTP server for the search API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Server with an explicit identity resolver and metrics registry
    pub fn with_parts(
        config: HttpServerConfig,
        engine: SearchEngine,
        identity: Arc<dyn IdentityResolver>,
        metrics: Arc<MetricsRegistry>,
    ) -> Self {
        let state = Arc::new(SearchState::new(engine, identity, metrics));
        let router = Self::build_router(&config, state);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, state: Arc<SearchState>) -> Router {
        let metrics = state.metrics.clone();

        Router::new()
            .merge(root_routes())
            .merge(search_routes(state))
            .merge(observability_routes(metrics))
            .layer(Self::cors_layer(config))
    }

    fn cors_layer(config: &HttpServerConfig) -> CorsLayer {
        if config.cors_origins.is_empty() {
            // No origins configured: allow any
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                // Rejected at config load; see `HttpServerConfig::invalid_origin`
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Serve until Ctrl+C
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Invalid socket address '{}': {}", self.config.socket_addr(), e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        let bound = listener.local_addr()?.to_string();
        log_event_with_fields(Event::Serving, &[("addr", bound.as_str())]);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        log_event(Event::ShutdownComplete);
        Ok(())
    }
}

async fn shutdown_signal() {
    // If the handler cannot be installed, serve until the process is killed
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}
