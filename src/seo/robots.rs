//! robots.txt generation.

use std::fmt::Write;

use crate::config::RobotsConfig;
use crate::seo::{absolute_url, base_url as parse_base_url, SeoError};

/// One user-agent group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RobotsRule {
    pub user_agent: String,
    pub allow: Vec<String>,
    pub disallow: Vec<String>,
}

/// Complete crawl policy for the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RobotsPolicy {
    pub rules: Vec<RobotsRule>,
    pub host: Option<String>,
    pub sitemap: Option<String>,
}

impl RobotsPolicy {
    /// Build the policy from configuration; the sitemap line points at the
    /// site's own `/sitemap.xml`.
    pub fn from_config(config: &RobotsConfig, base_url: &str) -> Result<Self, SeoError> {
        let base = parse_base_url(base_url)?;
        let sitemap = absolute_url(&base, "/sitemap.xml")?;

        Ok(Self {
            rules: config
                .rules
                .iter()
                .map(|r| RobotsRule {
                    user_agent: r.user_agent.clone(),
                    allow: r.allow.clone(),
                    disallow: r.disallow.clone(),
                })
                .collect(),
            host: if config.include_host {
                base.host_str().map(str::to_string)
            } else {
                None
            },
            sitemap: Some(sitemap.to_string()),
        })
    }
}

/// Render robots.txt text.
pub fn render(policy: &RobotsPolicy) -> String {
    let mut out = String::new();

    for (i, rule) in policy.rules.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "User-agent: {}", rule.user_agent);
        for path in &rule.allow {
            let _ = writeln!(out, "Allow: {path}");
        }
        for path in &rule.disallow {
            let _ = writeln!(out, "Disallow: {path}");
        }
    }

    if policy.host.is_some() || policy.sitemap.is_some() {
        if !policy.rules.is_empty() {
            out.push('\n');
        }
        if let Some(host) = &policy.host {
            let _ = writeln!(out, "Host: {host}");
        }
        if let Some(sitemap) = &policy.sitemap {
            let _ = writeln!(out, "Sitemap: {sitemap}");
        }
    }

    out
}
