//! Metrics collection and exposition.
//!
//! # Metrics
//! - `site_requests_total` (counter): requests by method, status
//! - `site_request_duration_seconds` (histogram): latency distribution
//! - `site_legacy_redirects_total` (counter): `.html` redirects issued
//! - `site_not_found_total` (counter): fallback page renders
//! - `site_config_reloads_total` (counter): reloads by outcome
//!
//! # Design Decisions
//! - Recording without an installed exporter is a no-op
//! - Status is recorded as a label, path is not (unbounded cardinality)

use std::net::SocketAddr;
use std::time::Instant;

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter with its own HTTP listener.
pub fn init_metrics(addr: SocketAddr) -> Result<(), String> {
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| e.to_string())?;

    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

pub fn record_request(method: &str, status: u16, start: Instant) {
    counter!(
        "site_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!("site_request_duration_seconds", "method" => method.to_string())
        .record(start.elapsed().as_secs_f64());
}

pub fn record_legacy_redirect() {
    counter!("site_legacy_redirects_total").increment(1);
}

pub fn record_not_found() {
    counter!("site_not_found_total").increment(1);
}

pub fn record_config_reload(outcome: &'static str) {
    counter!("site_config_reloads_total", "outcome" => outcome).increment(1);
}

/// Middleware recording request count and latency.
pub async fn track_requests(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();

    let response = next.run(request).await;

    record_request(&method, response.status().as_u16(), start);
    response
}
