//! Shared server state.
//!
//! Everything derived from the configuration (compiled redirect rule,
//! rendered pages, sitemap, robots) lives in one immutable `SiteSnapshot`.
//! Handlers load the current snapshot; a config reload builds a new one and
//! swaps it in atomically.

use std::collections::HashMap;
use std::sync::Arc;

use arc_swap::ArcSwap;
use chrono::NaiveDate;

use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::fallback::CountdownSettings;
use crate::observability::metrics;
use crate::pages::{self, RenderContext, PAGES};
use crate::routing::rewrite::LegacyRedirectRule;
use crate::seo::{self, robots, sitemap, RobotsPolicy};

/// Immutable view of the site built from one configuration.
pub struct SiteSnapshot {
    pub config: SiteConfig,
    pub rule: LegacyRedirectRule,
    pub render: RenderContext,
    pub countdown: CountdownSettings,
    pub sitemap_xml: String,
    pub robots_txt: String,
    pages_html: HashMap<&'static str, String>,
}

impl SiteSnapshot {
    /// Build a snapshot. `generated_on` stamps sitemap entries without a date.
    pub fn build(config: SiteConfig, generated_on: NaiveDate) -> Result<Self, SiteError> {
        let entries = sitemap::entries(&config.sitemap, PAGES);
        let sitemap_xml = sitemap::render(&config.site.base_url, &entries, generated_on)?;

        let policy = RobotsPolicy::from_config(&config.robots, &config.site.base_url)?;
        let robots_txt = robots::render(&policy);

        let render = RenderContext {
            site_name: config.site.name.clone(),
            base_url: seo::base_url(&config.site.base_url)?,
            analytics: config.analytics.clone(),
        };

        let pages_html = PAGES
            .iter()
            .map(|page| Ok((page.route, pages::render_page(page, &render)?)))
            .collect::<Result<_, SiteError>>()?;

        Ok(Self {
            rule: LegacyRedirectRule::from_config(&config.interceptor),
            countdown: CountdownSettings {
                countdown_from: config.not_found.countdown_secs,
                home: config.not_found.home_path.clone(),
                ..CountdownSettings::default()
            },
            render,
            sitemap_xml,
            robots_txt,
            pages_html,
            config,
        })
    }

    /// Build a snapshot stamped with today's date.
    pub fn build_now(config: SiteConfig) -> Result<Self, SiteError> {
        Self::build(config, chrono::Utc::now().date_naive())
    }

    /// Pre-rendered HTML for a page route.
    pub fn page_html(&self, route: &str) -> Option<&str> {
        self.pages_html.get(route).map(String::as_str)
    }
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    snapshot: Arc<ArcSwap<SiteSnapshot>>,
}

impl AppState {
    pub fn new(snapshot: SiteSnapshot) -> Self {
        Self {
            snapshot: Arc::new(ArcSwap::from_pointee(snapshot)),
        }
    }

    /// Current snapshot.
    pub fn snapshot(&self) -> Arc<SiteSnapshot> {
        self.snapshot.load_full()
    }

    /// Rebuild from a new configuration and swap it in. On failure the
    /// current snapshot stays active.
    pub fn apply_config(&self, config: SiteConfig) -> Result<(), SiteError> {
        match SiteSnapshot::build_now(config) {
            Ok(snapshot) => {
                self.snapshot.store(Arc::new(snapshot));
                metrics::record_config_reload("applied");
                tracing::info!("Site snapshot rebuilt from new configuration");
                Ok(())
            }
            Err(e) => {
                metrics::record_config_reload("rejected");
                tracing::error!(error = %e, "Failed to rebuild site snapshot. Keeping current one.");
                Err(e)
            }
        }
    }
}
