//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (interceptor, security headers, limits, request ID, tracing, metrics)
//! - Serve static assets
//! - Apply configuration updates to the shared site snapshot
//! - Bind server to listener with graceful shutdown

use std::path::Path;
use std::time::Duration;

use axum::{http::StatusCode, middleware, routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::{broadcast, mpsc};
use tower_http::{
    limit::RequestBodyLimitLayer,
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::http::handlers;
use crate::http::middleware::legacy_redirect_middleware;
use crate::http::request::{propagate_request_id_layer, set_request_id_layer};
use crate::http::state::{AppState, SiteSnapshot};
use crate::observability::metrics;
use crate::security::headers;

/// HTTP server for the site.
pub struct SiteServer {
    router: Router,
    state: AppState,
}

impl SiteServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: SiteConfig) -> Result<Self, SiteError> {
        let snapshot = SiteSnapshot::build_now(config.clone())?;
        Ok(Self::with_snapshot(&config, snapshot))
    }

    /// Create a server around a prepared snapshot. Listener-level settings
    /// (assets, limits, timeouts, headers) come from `config`.
    pub fn with_snapshot(config: &SiteConfig, snapshot: SiteSnapshot) -> Self {
        let state = AppState::new(snapshot);
        let router = Self::build_router(config, state.clone());
        Self { router, state }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &SiteConfig, state: AppState) -> Router {
        let assets = Path::new(&config.assets.dir);

        let router = Router::new()
            .route("/api/health", get(handlers::health))
            .route("/sitemap.xml", get(handlers::sitemap_xml))
            .route("/robots.txt", get(handlers::robots_txt))
            .route_service("/favicon.ico", ServeFile::new(assets.join("favicon.ico")))
            .nest_service(&config.assets.mount, ServeDir::new(assets))
            .fallback(handlers::site_page)
            .layer(middleware::from_fn_with_state(
                state.clone(),
                legacy_redirect_middleware,
            ))
            .with_state(state);

        let router = if config.security.enable_headers {
            headers::apply(router)
        } else {
            router
        };

        router
            .layer(RequestBodyLimitLayer::new(config.security.max_body_size))
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                Duration::from_secs(config.timeouts.request_secs),
            ))
            .layer(middleware::from_fn(metrics::track_requests))
            .layer(propagate_request_id_layer())
            .layer(TraceLayer::new_for_http())
            .layer(set_request_id_layer())
    }

    /// Router for in-process use (tests, embedding).
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Shared state, for applying configuration out of band.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Configurations received on `config_updates` replace the site snapshot.
    /// Returns after `shutdown` fires and in-flight requests drain.
    pub async fn run(
        self,
        listener: TcpListener,
        mut config_updates: mpsc::UnboundedReceiver<SiteConfig>,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let state = self.state.clone();
        let mut reload_shutdown = shutdown.resubscribe();
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    update = config_updates.recv() => match update {
                        Some(config) => {
                            let _ = state.apply_config(config);
                        }
                        None => break,
                    },
                    _ = reload_shutdown.recv() => break,
                }
            }
        });

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
