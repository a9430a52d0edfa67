//! Route handlers.

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::Response,
    Json,
};
use serde::Serialize;

use crate::http::not_found;
use crate::http::response;
use crate::http::state::AppState;
use crate::pages;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn sitemap_xml(State(state): State<AppState>) -> Response {
    response::document("application/xml", state.snapshot().sitemap_xml.clone())
}

pub async fn robots_txt(State(state): State<AppState>) -> Response {
    response::document("text/plain; charset=utf-8", state.snapshot().robots_txt.clone())
}

/// Page table lookup; unmatched paths get the not-found page.
pub async fn site_page(State(state): State<AppState>, uri: Uri) -> Response {
    let snapshot = state.snapshot();
    let html = pages::lookup(uri.path()).and_then(|page| snapshot.page_html(page.route));

    match html {
        Some(html) => response::html(StatusCode::OK, html.to_string()),
        None => not_found::respond(uri.path(), &snapshot),
    }
}
