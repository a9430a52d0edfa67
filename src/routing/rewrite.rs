//! Legacy `.html` URL rewrite rule.
//!
//! # Responsibilities
//! - Map legacy `.html` paths to their extension-less canonical form
//! - Decide, per path, whether the interceptor redirects, passes through,
//!   or is bypassed entirely
//!
//! # Design Decisions
//! - `canonical_path` is the only place suffix stripping is defined; the
//!   interceptor and the not-found fallback both call it
//! - Stripping repeats until no suffix is left, so the rule never redirects
//!   to a path it would redirect again
//! - The suffix check is literal and case-sensitive
//! - Leading slashes collapse to one, so a target is always site-relative and
//!   never a protocol-relative `//host` reference

use axum::http::StatusCode;

use crate::config::InterceptorConfig;
use crate::routing::matcher::{AnyMatcher, Matcher};

/// Literal suffix of legacy page URLs.
pub const LEGACY_SUFFIX: &str = ".html";

/// Legacy root document.
pub const LEGACY_INDEX: &str = "/index.html";

/// Returns the canonical path for a legacy `.html` path, or `None` if the
/// path carries no legacy suffix.
pub fn canonical_path(path: &str) -> Option<String> {
    if !path.ends_with(LEGACY_SUFFIX) {
        return None;
    }

    let mut target = collapse_leading_slashes(path);
    while let Some(stripped) = target.strip_suffix(LEGACY_SUFFIX) {
        if target == LEGACY_INDEX {
            return Some("/".to_string());
        }
        target = stripped;
    }

    if target.is_empty() {
        Some("/".to_string())
    } else {
        Some(target.to_string())
    }
}

fn collapse_leading_slashes(path: &str) -> &str {
    let rest = path.trim_start_matches('/');
    if rest.len() == path.len() {
        path
    } else {
        &path[path.len() - rest.len() - 1..]
    }
}

/// Outcome of evaluating the rule for one request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rewrite {
    /// Path is excluded; the rule was not evaluated.
    Bypass,
    /// No legacy suffix; continue to normal routing.
    PassThrough,
    /// Redirect the client to the canonical path.
    Redirect { location: String, status: StatusCode },
}

/// Compiled interceptor rule: exclusions plus the legacy suffix rewrite.
#[derive(Debug)]
pub struct LegacyRedirectRule {
    exclusions: AnyMatcher,
}

impl LegacyRedirectRule {
    pub fn new(exclusions: AnyMatcher) -> Self {
        Self { exclusions }
    }

    /// Compile the rule from interceptor configuration.
    pub fn from_config(config: &InterceptorConfig) -> Self {
        Self::new(AnyMatcher::from_lists(
            &config.exclude_prefixes,
            &config.exclude_paths,
        ))
    }

    /// Returns true if the interceptor must not look at this path.
    pub fn is_excluded(&self, path: &str) -> bool {
        self.exclusions.matches(path)
    }

    pub fn evaluate(&self, path: &str) -> Rewrite {
        if self.is_excluded(path) {
            return Rewrite::Bypass;
        }

        match canonical_path(path) {
            Some(location) => Rewrite::Redirect {
                location,
                status: StatusCode::MOVED_PERMANENTLY,
            },
            None => Rewrite::PassThrough,
        }
    }
}

impl Default for LegacyRedirectRule {
    fn default() -> Self {
        Self::from_config(&InterceptorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn redirect(location: &str) -> Rewrite {
        Rewrite::Redirect {
            location: location.to_string(),
            status: StatusCode::MOVED_PERMANENTLY,
        }
    }

    #[test]
    fn test_strips_html_suffix() {
        let rule = LegacyRedirectRule::default();
        assert_eq!(rule.evaluate("/agent/policy.html"), redirect("/agent/policy"));
        assert_eq!(rule.evaluate("/cloud.html"), redirect("/cloud"));
    }

    #[test]
    fn test_index_maps_to_root() {
        let rule = LegacyRedirectRule::default();
        assert_eq!(rule.evaluate("/index.html"), redirect("/"));
    }

    #[test]
    fn test_nested_index_is_only_stripped() {
        assert_eq!(canonical_path("/agent/index.html").as_deref(), Some("/agent/index"));
    }

    #[test]
    fn test_passes_through_without_suffix() {
        let rule = LegacyRedirectRule::default();
        assert_eq!(rule.evaluate("/agent/policy"), Rewrite::PassThrough);
        assert_eq!(rule.evaluate("/"), Rewrite::PassThrough);
        assert_eq!(rule.evaluate("/page.HTML"), Rewrite::PassThrough);
        assert_eq!(rule.evaluate("/page.htm"), Rewrite::PassThrough);
    }

    #[test]
    fn test_excluded_paths_bypass() {
        let rule = LegacyRedirectRule::default();
        for path in [
            "/api/contact.html",
            "/_next/static/page.html",
            "/_next/image/banner.html",
            "/favicon.ico",
            "/robots.txt",
            "/sitemap.xml",
        ] {
            assert_eq!(rule.evaluate(path), Rewrite::Bypass, "{path}");
        }
    }

    #[test]
    fn test_repeated_suffix_collapses() {
        assert_eq!(canonical_path("/a.html.html").as_deref(), Some("/a"));
        assert_eq!(canonical_path("/index.html.html").as_deref(), Some("/"));
        assert_eq!(canonical_path("/.html").as_deref(), Some("/"));
    }

    #[test]
    fn test_leading_slashes_collapse() {
        assert_eq!(canonical_path("//evil.example.html").as_deref(), Some("/evil.example"));
        assert_eq!(canonical_path("///evil.example/x.html").as_deref(), Some("/evil.example/x"));
        assert_eq!(canonical_path("//index.html").as_deref(), Some("/"));
        assert_eq!(canonical_path("//.html").as_deref(), Some("/"));
    }

    proptest! {
        #[test]
        fn prop_rewrite_is_idempotent(path in "/[a-z/]{0,20}(\\.html){0,3}") {
            let rule = LegacyRedirectRule::default();
            if let Rewrite::Redirect { location, .. } = rule.evaluate(&path) {
                prop_assert_eq!(rule.evaluate(&location), Rewrite::PassThrough);
            }
        }

        #[test]
        fn prop_target_is_site_relative(path in "/{1,4}[a-z./]{0,20}\\.html") {
            let target = canonical_path(&path).unwrap();
            prop_assert!(target.starts_with('/'));
            prop_assert!(!target.starts_with("//"));
        }

        #[test]
        fn prop_stripped_path_is_prefix(segment in "[a-z]{1,12}(/[a-z]{1,12}){0,3}") {
            let path = format!("/{segment}.html");
            prop_assert_eq!(canonical_path(&path), Some(format!("/{segment}")));
        }

        #[test]
        fn prop_non_html_paths_pass_through(path in "/[a-z0-9/._-]{0,24}[a-z0-9/_-]") {
            prop_assume!(!path.ends_with(".html"));
            prop_assert_eq!(canonical_path(&path), None);
        }
    }
}
