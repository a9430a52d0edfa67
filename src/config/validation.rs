//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, priorities in 0.0..=1.0)
//! - Check that every configured path is site-relative
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: SiteConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use url::Url;

use crate::config::schema::SiteConfig;

/// Longest countdown the not-found page accepts, in seconds.
pub const MAX_COUNTDOWN_SECS: u32 = 60;

/// One failed semantic check.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Validate a parsed configuration.
pub fn validate_config(config: &SiteConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::new(
            "listener.bind_address",
            format!("'{}' is not a socket address", config.listener.bind_address),
        ));
    }

    match Url::parse(&config.site.base_url) {
        Ok(url) if !matches!(url.scheme(), "http" | "https") || !url.has_host() => {
            errors.push(ValidationError::new(
                "site.base_url",
                format!("'{url}' must be an absolute http(s) URL"),
            ))
        }
        Ok(url) if url.path() != "/" || url.query().is_some() || url.fragment().is_some() => {
            errors.push(ValidationError::new(
                "site.base_url",
                format!("'{url}' must be scheme and host only; the site is served from '/'"),
            ))
        }
        Ok(_) => {}
        Err(e) => errors.push(ValidationError::new(
            "site.base_url",
            format!("'{}' is not a URL: {e}", config.site.base_url),
        )),
    }

    for (i, prefix) in config.interceptor.exclude_prefixes.iter().enumerate() {
        check_site_path(&mut errors, &format!("interceptor.exclude_prefixes[{i}]"), prefix);
    }
    for (i, path) in config.interceptor.exclude_paths.iter().enumerate() {
        check_site_path(&mut errors, &format!("interceptor.exclude_paths[{i}]"), path);
    }

    if config.not_found.countdown_secs > MAX_COUNTDOWN_SECS {
        errors.push(ValidationError::new(
            "not_found.countdown_secs",
            format!("must be at most {MAX_COUNTDOWN_SECS}"),
        ));
    }
    check_site_path(&mut errors, "not_found.home_path", &config.not_found.home_path);
    check_site_path(&mut errors, "not_found.contact_path", &config.not_found.contact_path);

    for (i, entry) in config.sitemap.urls.iter().enumerate() {
        check_site_path(&mut errors, &format!("sitemap.urls[{i}].path"), &entry.path);
        if !(0.0..=1.0).contains(&entry.priority) {
            errors.push(ValidationError::new(
                format!("sitemap.urls[{i}].priority"),
                "must be within 0.0..=1.0",
            ));
        }
    }

    for (i, rule) in config.robots.rules.iter().enumerate() {
        if rule.user_agent.trim().is_empty() {
            errors.push(ValidationError::new(
                format!("robots.rules[{i}].user_agent"),
                "must not be empty",
            ));
        }
    }

    check_site_path(&mut errors, "assets.mount", &config.assets.mount);
    if config.assets.mount == "/" || config.assets.mount.ends_with('/') {
        errors.push(ValidationError::new(
            "assets.mount",
            "must name a directory below the root without a trailing '/'",
        ));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::new("timeouts.request_secs", "must be greater than 0"));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::new(
            "observability.metrics_address",
            format!("'{}' is not a socket address", config.observability.metrics_address),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_site_path(errors: &mut Vec<ValidationError>, field: &str, path: &str) {
    if !path.starts_with('/') {
        errors.push(ValidationError::new(field, format!("'{path}' must start with '/'")));
    } else if path.starts_with("//") {
        errors.push(ValidationError::new(field, format!("'{path}' must not start with '//'")));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::SitemapUrlConfig;
    use crate::seo::ChangeFrequency;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&SiteConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = SiteConfig::default();
        config.listener.bind_address = "not-an-address".into();
        config.site.base_url = "ftp://example.com".into();
        config.not_found.countdown_secs = 600;
        config.timeouts.request_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec![
                "listener.bind_address",
                "site.base_url",
                "not_found.countdown_secs",
                "timeouts.request_secs",
            ]
        );
    }

    #[test]
    fn test_rejects_relative_paths_and_bad_priority() {
        let mut config = SiteConfig::default();
        config.interceptor.exclude_prefixes.push("api/".into());
        config.sitemap.urls.push(SitemapUrlConfig {
            path: "agent".into(),
            last_modified: None,
            change_frequency: ChangeFrequency::Daily,
            priority: 1.5,
        });

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[0].field, "interceptor.exclude_prefixes[3]");
        assert_eq!(errors[1].field, "sitemap.urls[0].path");
        assert_eq!(errors[2].field, "sitemap.urls[0].priority");
    }

    #[test]
    fn test_rejects_base_url_with_path() {
        let mut config = SiteConfig::default();
        for base in [
            "https://www.example.com/site",
            "https://www.example.com/site/",
            "https://www.example.com/?lang=en",
        ] {
            config.site.base_url = base.into();
            let errors = validate_config(&config).unwrap_err();
            assert_eq!(errors.len(), 1, "{base}");
            assert_eq!(errors[0].field, "site.base_url");
        }

        config.site.base_url = "https://www.example.com/".into();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_rejects_protocol_relative_site_path() {
        let mut config = SiteConfig::default();
        config.not_found.home_path = "//evil.example".into();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "not_found.home_path");
    }

    #[test]
    fn test_rejects_root_asset_mount() {
        let mut config = SiteConfig::default();
        config.assets.mount = "/".into();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "assets.mount");
    }

    #[test]
    fn test_metrics_address_only_checked_when_enabled() {
        let mut config = SiteConfig::default();
        config.observability.metrics_address = "nowhere".into();
        assert!(validate_config(&config).is_err());

        config.observability.metrics_enabled = false;
        assert!(validate_config(&config).is_ok());
    }
}
