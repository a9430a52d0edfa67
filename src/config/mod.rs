//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → SiteConfig (validated, immutable)
//!     → compiled into a site snapshot by the HTTP server
//!
//! On file change:
//!     watcher.rs detects change
//!     → loader.rs loads new config
//!     → validation.rs validates
//!     → server rebuilds the snapshot and swaps it atomically
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require full reload
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{
    AnalyticsConfig, AssetsConfig, InterceptorConfig, ListenerConfig, LogFormat, NotFoundConfig,
    ObservabilityConfig, RobotsConfig, RobotsRuleConfig, SecurityConfig, SiteConfig,
    SiteIdentityConfig, SitemapConfig, SitemapUrlConfig, TimeoutConfig,
};
