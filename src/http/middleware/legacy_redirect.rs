//! Legacy `.html` URL interceptor.
//!
//! Runs before page resolution on every request. Paths the rule redirects get
//! a `301` to their canonical form with query string, scheme and host kept;
//! everything else goes through untouched.

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderValue, Request},
    middleware::Next,
    response::Response,
};

use crate::http::request::request_id;
use crate::http::response::moved_permanently;
use crate::http::state::AppState;
use crate::observability::metrics;
use crate::routing::rewrite::Rewrite;

const X_FORWARDED_PROTO: &str = "x-forwarded-proto";

pub async fn legacy_redirect_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let snapshot = state.snapshot();
    if !snapshot.config.interceptor.enabled {
        return next.run(request).await;
    }

    match snapshot.rule.evaluate(request.uri().path()) {
        Rewrite::Bypass | Rewrite::PassThrough => next.run(request).await,
        Rewrite::Redirect { location, .. } => {
            let target = redirect_location(&request, &location);
            tracing::debug!(
                request_id = %request_id(&request),
                from = %request.uri().path(),
                to = ?target,
                "Legacy URL redirect"
            );
            metrics::record_legacy_redirect();
            moved_permanently(target)
        }
    }
}

/// Build the `Location` value for `path`, keeping the query string and, when
/// the request names its host, the scheme and host.
fn redirect_location<B>(request: &Request<B>, path: &str) -> HeaderValue {
    let query = request
        .uri()
        .query()
        .map(|q| format!("?{q}"))
        .unwrap_or_default();
    let relative = format!("{path}{query}");

    let host = request
        .headers()
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
        .or_else(|| request.uri().authority().map(|a| a.as_str()));

    if let Some(host) = host {
        let scheme = request
            .headers()
            .get(X_FORWARDED_PROTO)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .or_else(|| request.uri().scheme_str())
            .unwrap_or("http");

        if let Ok(value) = HeaderValue::try_from(format!("{scheme}://{host}{relative}")) {
            return value;
        }
    }

    HeaderValue::try_from(relative).unwrap_or_else(|_| HeaderValue::from_static("/"))
}
