//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the site.
//! All types derive Serde traits for deserialization from config files.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::seo::ChangeFrequency;

/// Root configuration for the site server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SiteConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Public identity of the site.
    pub site: SiteIdentityConfig,

    /// Legacy `.html` URL interceptor.
    pub interceptor: InterceptorConfig,

    /// Not-found fallback page.
    pub not_found: NotFoundConfig,

    /// Sitemap generation.
    pub sitemap: SitemapConfig,

    /// robots.txt generation.
    pub robots: RobotsConfig,

    /// Static asset serving.
    pub assets: AssetsConfig,

    /// Analytics snippet injection.
    pub analytics: AnalyticsConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Security hardening.
    pub security: SecurityConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Public identity of the site, used for canonical links and SEO output.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteIdentityConfig {
    /// Display name appended to page titles.
    pub name: String,

    /// Absolute base URL (scheme + host) of the public site.
    pub base_url: String,
}

impl Default for SiteIdentityConfig {
    fn default() -> Self {
        Self {
            name: "PayPoint Agents".to_string(),
            base_url: "https://www.example.com".to_string(),
        }
    }
}

/// Legacy URL interceptor configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct InterceptorConfig {
    /// Enable the `.html` rewrite.
    pub enabled: bool,

    /// Path prefixes the interceptor never evaluates.
    pub exclude_prefixes: Vec<String>,

    /// Exact paths the interceptor never evaluates.
    pub exclude_paths: Vec<String>,
}

impl Default for InterceptorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            exclude_prefixes: vec![
                "/api/".to_string(),
                "/_next/static/".to_string(),
                "/_next/image/".to_string(),
            ],
            exclude_paths: vec![
                "/favicon.ico".to_string(),
                "/robots.txt".to_string(),
                "/sitemap.xml".to_string(),
            ],
        }
    }
}

/// Not-found fallback page configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NotFoundConfig {
    /// Seconds counted down before navigating home.
    pub countdown_secs: u32,

    /// Route navigated to when the countdown ends.
    pub home_path: String,

    /// Contact route linked from the page.
    pub contact_path: String,
}

impl Default for NotFoundConfig {
    fn default() -> Self {
        Self {
            countdown_secs: 2,
            home_path: "/".to_string(),
            contact_path: "/contact".to_string(),
        }
    }
}

/// Sitemap configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SitemapConfig {
    /// Explicit URL list. Empty means "derive from the page table".
    pub urls: Vec<SitemapUrlConfig>,
}

/// One explicitly configured sitemap entry.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SitemapUrlConfig {
    /// Site-relative path, starting with `/`.
    pub path: String,

    /// Last modification date; generation time when absent.
    #[serde(default)]
    pub last_modified: Option<NaiveDate>,

    #[serde(default = "default_change_frequency")]
    pub change_frequency: ChangeFrequency,

    #[serde(default = "default_priority")]
    pub priority: f32,
}

fn default_change_frequency() -> ChangeFrequency {
    ChangeFrequency::Monthly
}

fn default_priority() -> f32 {
    0.5
}

/// robots.txt configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RobotsConfig {
    /// Rule groups, one per user agent.
    pub rules: Vec<RobotsRuleConfig>,

    /// Emit a `Host:` line with the site host.
    pub include_host: bool,
}

impl Default for RobotsConfig {
    fn default() -> Self {
        Self {
            rules: vec![RobotsRuleConfig {
                user_agent: "*".to_string(),
                allow: vec!["/".to_string()],
                disallow: vec!["/api/".to_string()],
            }],
            include_host: false,
        }
    }
}

/// One robots.txt rule group.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RobotsRuleConfig {
    pub user_agent: String,

    #[serde(default)]
    pub allow: Vec<String>,

    #[serde(default)]
    pub disallow: Vec<String>,
}

/// Static asset configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Directory served as static assets.
    pub dir: String,

    /// URL prefix the directory is mounted at.
    pub mount: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            dir: "public".to_string(),
            mount: "/_next/static".to_string(),
        }
    }
}

/// Analytics configuration. Loaded once and handed to the page renderer.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Tracking provider id; enables the tracking snippet when set.
    pub provider_id: Option<String>,
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Security hardening configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Enable security headers.
    pub enable_headers: bool,
    /// Maximum body size in bytes.
    pub max_body_size: usize,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            enable_headers: true,
            max_body_size: 64 * 1024,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: true,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert_eq!(config.not_found.countdown_secs, 2);
        assert!(config.interceptor.enabled);
        assert_eq!(config.interceptor.exclude_prefixes.len(), 3);
        assert!(config.analytics.provider_id.is_none());
    }

    #[test]
    fn test_partial_sections_merge_with_defaults() {
        let config: SiteConfig = toml::from_str(
            r#"
            [site]
            base_url = "https://agents.example.org"

            [analytics]
            provider_id = "G-TEST123"

            [observability]
            log_format = "json"

            [[sitemap.urls]]
            path = "/agent"
            last_modified = "2024-03-01"
            change_frequency = "weekly"
            priority = 0.9

            [[sitemap.urls]]
            path = "/contact"
            "#,
        )
        .unwrap();

        assert_eq!(config.site.base_url, "https://agents.example.org");
        assert_eq!(config.site.name, "PayPoint Agents");
        assert_eq!(config.analytics.provider_id.as_deref(), Some("G-TEST123"));
        assert_eq!(config.observability.log_format, LogFormat::Json);
        assert_eq!(config.sitemap.urls.len(), 2);
        assert_eq!(config.sitemap.urls[0].change_frequency, ChangeFrequency::Weekly);
        assert_eq!(config.sitemap.urls[1].priority, 0.5);
        assert!(config.sitemap.urls[1].last_modified.is_none());
    }
}
