//! Top-level error type.

use crate::config::ConfigError;
use crate::seo::SeoError;

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("SEO generation error: {0}")]
    Seo(#[from] SeoError),
    #[error("template rendering error: {0}")]
    Render(#[from] askama::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("metrics error: {0}")]
    Metrics(String),
    #[error("config watcher error: {0}")]
    Watch(#[from] notify::Error),
}
