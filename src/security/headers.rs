//! Security response headers.
//!
//! # Responsibilities
//! - Add X-Content-Type-Options, X-Frame-Options and Referrer-Policy to
//!   every response
//!
//! # Design Decisions
//! - Headers override whatever a handler set
//! - No Content-Security-Policy: the analytics snippet loads a third-party script

use axum::http::header::{HeaderName, REFERRER_POLICY, X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS};
use axum::http::HeaderValue;
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;

/// Fixed security headers as (name, value) pairs.
pub const SECURITY_HEADERS: [(HeaderName, &str); 3] = [
    (X_CONTENT_TYPE_OPTIONS, "nosniff"),
    (X_FRAME_OPTIONS, "DENY"),
    (REFERRER_POLICY, "strict-origin-when-cross-origin"),
];

fn header_layer(name: HeaderName, value: &'static str) -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(name, HeaderValue::from_static(value))
}

/// Wrap `router` with every security header layer.
pub fn apply(router: Router) -> Router {
    SECURITY_HEADERS
        .into_iter()
        .fold(router, |router, (name, value)| router.layer(header_layer(name, value)))
}
