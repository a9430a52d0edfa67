//! HTML document rendering.

use askama::Template;
use pulldown_cmark::{html, Options, Parser};
use url::Url;

use crate::config::AnalyticsConfig;
use crate::error::SiteError;
use crate::pages::analytics;
use crate::pages::registry::{Page, PageMeta};
use crate::pages::templates::{Head, PageTemplate};
use crate::seo;

/// Site-wide values every rendered page needs.
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub site_name: String,
    pub base_url: Url,
    pub analytics: AnalyticsConfig,
}

impl RenderContext {
    /// `<head>` values for a page; `canonical` is a site-relative route.
    pub fn head(&self, meta: &PageMeta, canonical: Option<&str>) -> Result<Head, SiteError> {
        let canonical = canonical
            .map(|route| seo::absolute_url(&self.base_url, route).map(String::from))
            .transpose()?;

        Ok(Head {
            title: format!("{} | {}", meta.title, self.site_name),
            description: meta.description.to_string(),
            keywords: meta.keywords.join(", "),
            canonical,
            analytics: analytics::tracking(&self.analytics),
        })
    }
}

/// Render a page from the table into a complete HTML document.
pub fn render_page(page: &Page, ctx: &RenderContext) -> Result<String, SiteError> {
    let mut content_html = String::new();
    html::push_html(&mut content_html, Parser::new_ext(page.body, Options::all()));

    let template = PageTemplate {
        head: ctx.head(&page.meta, Some(page.route))?,
        content_html,
    };
    Ok(template.render()?)
}
