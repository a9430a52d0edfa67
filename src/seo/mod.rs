//! Search-engine output generators.
//!
//! # Data Flow
//! ```text
//! SiteConfig.sitemap / page table
//!     → sitemap::entries (list of SiteUrlEntry)
//!     → sitemap.rs (sitemaps.org XML)
//!
//! SiteConfig.robots + base URL
//!     → RobotsPolicy
//!     → robots.rs (crawl directives)
//! ```
//!
//! # Design Decisions
//! - Generators are pure: the generation timestamp is an argument, never read inside
//! - Output is produced once per site snapshot, not per request
//! - Every absolute URL (sitemap `<loc>`, robots `Sitemap:`, canonical links)
//!   comes from `absolute_url`

pub mod robots;
pub mod sitemap;

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use url::Url;

pub use robots::{RobotsPolicy, RobotsRule};

/// Error type for SEO output generation.
#[derive(Debug, thiserror::Error)]
pub enum SeoError {
    #[error("invalid base URL '{url}': {source}")]
    BaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("cannot join '{path}' onto base URL: {source}")]
    Join {
        path: String,
        #[source]
        source: url::ParseError,
    },
    #[error("XML write failed: {0}")]
    Xml(String),
}

/// Parse the site base URL.
pub fn base_url(base_url: &str) -> Result<Url, SeoError> {
    Url::parse(base_url).map_err(|source| SeoError::BaseUrl {
        url: base_url.to_string(),
        source,
    })
}

/// Absolute URL of a site-relative `path` under `base`.
pub fn absolute_url(base: &Url, path: &str) -> Result<Url, SeoError> {
    base.join(path).map_err(|source| SeoError::Join {
        path: path.to_string(),
        source,
    })
}

/// How often a page is expected to change (`<changefreq>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Always => "always",
            ChangeFrequency::Hourly => "hourly",
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
            ChangeFrequency::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One crawlable URL.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteUrlEntry {
    /// Site-relative path.
    pub path: String,
    /// Last modification date; `None` means "use the generation date".
    pub last_modified: Option<NaiveDate>,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}
