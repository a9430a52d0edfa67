//! Not-found fallback page.
//!
//! The server runs the fallback state machine for the request path and
//! renders its decision into the page: either an immediate jump to the
//! canonical path of a legacy `.html` location, or a visible countdown that
//! sends the visitor home. Without scripting the page still offers links to
//! the home and contact pages.

use askama::Template;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::error::SiteError;
use crate::fallback::{FallbackMachine, Navigation};
use crate::http::response;
use crate::http::state::SiteSnapshot;
use crate::observability::metrics;
use crate::pages::templates::{script_literal, NotFoundTemplate};
use crate::pages::PageMeta;

const META: PageMeta = PageMeta {
    title: "Page Not Found",
    description: "The page you are looking for does not exist or has moved.",
    keywords: &[],
};

/// What the rendered page does once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackPlan {
    /// Replace the location with the canonical path right away.
    Legacy { target: String },
    /// Count down from `from` seconds, then go to `home`.
    Countdown { from: u32, home: String },
    /// Go to `home` right away.
    Home { home: String },
}

impl FallbackPlan {
    pub fn for_path(path: &str, snapshot: &SiteSnapshot) -> Self {
        let countdown = &snapshot.countdown;
        match FallbackMachine::enter(path, countdown.countdown_from, &countdown.home) {
            (_, Some(Navigation { target, legacy: true })) => FallbackPlan::Legacy { target },
            (_, Some(Navigation { target, legacy: false })) => FallbackPlan::Home { home: target },
            (machine, None) => FallbackPlan::Countdown {
                from: machine.remaining(),
                home: countdown.home.clone(),
            },
        }
    }
}

/// Render the 404 response for `path`.
pub fn respond(path: &str, snapshot: &SiteSnapshot) -> Response {
    let plan = FallbackPlan::for_path(path, snapshot);
    tracing::debug!(path = %path, plan = ?plan, "No page matched");
    metrics::record_not_found();

    match render(&plan, snapshot) {
        Ok(html) => response::html(StatusCode::NOT_FOUND, html),
        Err(e) => {
            tracing::error!(error = %e, "Failed to render not-found page");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

fn render(plan: &FallbackPlan, snapshot: &SiteSnapshot) -> Result<String, SiteError> {
    let not_found = &snapshot.config.not_found;
    let (moved_to, countdown_from, target) = match plan {
        FallbackPlan::Legacy { target } => (Some(target.as_str()), None, target),
        FallbackPlan::Countdown { from, home } => (None, Some(*from), home),
        FallbackPlan::Home { home } => (None, None, home),
    };

    let template = NotFoundTemplate {
        head: snapshot.render.head(&META, None)?,
        moved_to,
        countdown_from,
        tick_ms: snapshot.countdown.tick.as_millis(),
        target_js: script_literal(target),
        home_path: &not_found.home_path,
        contact_path: &not_found.contact_path,
    };
    Ok(template.render()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use chrono::NaiveDate;

    fn snapshot(countdown_secs: u32) -> SiteSnapshot {
        let mut config = SiteConfig::default();
        config.not_found.countdown_secs = countdown_secs;
        SiteSnapshot::build(config, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()).unwrap()
    }

    #[test]
    fn test_plan_for_unknown_path_counts_down() {
        assert_eq!(
            FallbackPlan::for_path("/nowhere", &snapshot(2)),
            FallbackPlan::Countdown {
                from: 2,
                home: "/".into()
            }
        );
    }

    #[test]
    fn test_plan_for_legacy_path_uses_canonical_target() {
        assert_eq!(
            FallbackPlan::for_path("/api/report.html", &snapshot(2)),
            FallbackPlan::Legacy {
                target: "/api/report".into()
            }
        );
    }

    #[test]
    fn test_plan_with_zero_countdown_goes_home() {
        assert_eq!(
            FallbackPlan::for_path("/nowhere", &snapshot(0)),
            FallbackPlan::Home { home: "/".into() }
        );
    }

    fn body(plan: FallbackPlan) -> String {
        render(&plan, &snapshot(2)).unwrap()
    }

    #[test]
    fn test_countdown_body() {
        let body = body(FallbackPlan::Countdown {
            from: 2,
            home: "/".into(),
        });
        assert!(body.contains("<title>Page Not Found | PayPoint Agents</title>"));
        assert!(body.contains(r#"<span id="countdown">2</span>"#));
        assert!(body.contains("var n=2,home=\"/\""));
        assert!(body.contains("clearInterval(t)"));
        assert!(body.contains("},1000);"));
        assert!(body.contains("pagehide"));
        assert!(body.contains(r#"<a href="/">Back to home</a>"#));
        assert!(body.contains(r#"<a href="/contact">Contact us</a>"#));
        assert!(!body.contains("rel=\"canonical\""));
    }

    #[test]
    fn test_countdown_script_follows_tick_setting() {
        let mut snapshot = snapshot(3);
        snapshot.countdown.tick = std::time::Duration::from_millis(250);
        let plan = FallbackPlan::for_path("/nowhere", &snapshot);
        let body = render(&plan, &snapshot).unwrap();
        assert!(body.contains("var n=3,"));
        assert!(body.contains("},250);"));
    }

    #[test]
    fn test_home_body_replaces_location() {
        let body = body(FallbackPlan::Home { home: "/".into() });
        assert!(body.contains("Taking you to the home page."));
        assert!(body.contains(r#"window.location.replace("/");"#));
        assert!(!body.contains("countdown"));
    }

    #[test]
    fn test_legacy_body_escapes_target() {
        let body = body(FallbackPlan::Legacy {
            target: "/a</script>".into(),
        });
        assert!(body.contains(r#"window.location.replace("/a<\/script>");"#));
        assert!(body.contains(r#"<a href="/a&"#));
        assert!(!body.contains(r#"href="/a</script>""#));
    }

    #[test]
    fn test_protocol_relative_legacy_path_stays_on_site() {
        assert_eq!(
            FallbackPlan::for_path("//evil.example.html", &snapshot(2)),
            FallbackPlan::Legacy {
                target: "/evil.example".into()
            }
        );
    }

    #[test]
    fn test_respond_is_404_html() {
        let res = respond("/nowhere", &snapshot(2));
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
