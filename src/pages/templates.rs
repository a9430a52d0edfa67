//! Askama templates.
//!
//! Template structs for every HTML document the site serves. Files live in
//! `templates/`; values are HTML-escaped unless passed through `|safe`.

use askama::Template;

/// `<head>` values shared by every document.
pub struct Head {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub canonical: Option<String>,
    pub analytics: Option<Tracking>,
}

/// Tracking snippet values.
pub struct Tracking {
    pub provider_id: String,
    /// Provider id as a JavaScript string literal.
    pub provider_js: String,
}

/// Content page rendered from markdown.
#[derive(Template)]
#[template(path = "page.html")]
pub struct PageTemplate {
    pub head: Head,
    pub content_html: String,
}

/// Not-found page.
#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate<'a> {
    pub head: Head,
    /// Canonical path of a legacy location, when the request named one.
    pub moved_to: Option<&'a str>,
    /// Seconds left on the visible countdown, when counting down.
    pub countdown_from: Option<u32>,
    /// Countdown tick period in milliseconds.
    pub tick_ms: u128,
    /// Navigation target as a JavaScript string literal.
    pub target_js: String,
    pub home_path: &'a str,
    pub contact_path: &'a str,
}

/// JSON string literal safe to embed in an inline script.
pub fn script_literal(value: &str) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| "\"/\"".to_string())
        .replace("</", "<\\/")
}
