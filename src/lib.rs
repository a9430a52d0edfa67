//! Marketing site server library.
//!
//! Serves the agent-recruitment and cloud product pages from a static page
//! table, normalizes legacy `.html` URLs, renders the not-found fallback and
//! generates `sitemap.xml` / `robots.txt`.

pub mod config;
pub mod error;
pub mod fallback;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod pages;
pub mod routing;
pub mod security;
pub mod seo;

pub use config::schema::SiteConfig;
pub use error::SiteError;
pub use http::SiteServer;
pub use lifecycle::Shutdown;
