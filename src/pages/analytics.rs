//! Tracking snippet injection.
//!
//! The provider id comes from `AnalyticsConfig`, loaded once with the rest of
//! the configuration and handed to the renderer. Nothing here reads process
//! state.

use crate::config::AnalyticsConfig;
use crate::pages::templates::{script_literal, Tracking};

/// Snippet values for the configured provider, if any.
pub fn tracking(config: &AnalyticsConfig) -> Option<Tracking> {
    let id = config.provider_id.as_deref()?.trim();
    if id.is_empty() {
        return None;
    }

    Some(Tracking {
        provider_id: id.to_string(),
        provider_js: script_literal(id),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_provider_no_snippet() {
        assert!(tracking(&AnalyticsConfig::default()).is_none());
        assert!(tracking(&AnalyticsConfig {
            provider_id: Some("  ".into())
        })
        .is_none());
    }

    #[test]
    fn test_provider_id_is_trimmed() {
        let tracking = tracking(&AnalyticsConfig {
            provider_id: Some(" G-ABC123 ".into()),
        })
        .unwrap();
        assert_eq!(tracking.provider_id, "G-ABC123");
        assert_eq!(tracking.provider_js, r#""G-ABC123""#);
    }
}
