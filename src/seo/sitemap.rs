//! sitemap.xml generation.

use chrono::NaiveDate;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::config::{SitemapConfig, SitemapUrlConfig};
use crate::pages::registry::Page;
use crate::seo::{absolute_url, base_url as parse_base_url, SeoError, SiteUrlEntry};

/// sitemaps.org schema namespace.
pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Collect the URL list: the configured list when present, otherwise every
/// page in the table.
pub fn entries(config: &SitemapConfig, pages: &[Page]) -> Vec<SiteUrlEntry> {
    if config.urls.is_empty() {
        pages.iter().map(Page::sitemap_entry).collect()
    } else {
        config.urls.iter().map(SiteUrlEntry::from).collect()
    }
}

impl From<&SitemapUrlConfig> for SiteUrlEntry {
    fn from(url: &SitemapUrlConfig) -> Self {
        Self {
            path: url.path.clone(),
            last_modified: url.last_modified,
            change_frequency: url.change_frequency,
            priority: url.priority,
        }
    }
}

/// Render a sitemap document.
///
/// Deterministic: the same inputs always produce byte-identical output.
pub fn render(
    base_url: &str,
    entries: &[SiteUrlEntry],
    generated_on: NaiveDate,
) -> Result<String, SeoError> {
    let base = parse_base_url(base_url)?;

    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    write(&mut writer, Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    write(
        &mut writer,
        Event::Start(BytesStart::new("urlset").with_attributes([("xmlns", SITEMAP_NS)])),
    )?;

    for entry in entries {
        let loc = absolute_url(&base, &entry.path)?;
        let lastmod = entry
            .last_modified
            .unwrap_or(generated_on)
            .format("%Y-%m-%d")
            .to_string();

        write(&mut writer, Event::Start(BytesStart::new("url")))?;
        text_element(&mut writer, "loc", loc.as_str())?;
        text_element(&mut writer, "lastmod", &lastmod)?;
        text_element(&mut writer, "changefreq", entry.change_frequency.as_str())?;
        text_element(&mut writer, "priority", &format_priority(entry.priority))?;
        write(&mut writer, Event::End(BytesEnd::new("url")))?;
    }

    write(&mut writer, Event::End(BytesEnd::new("urlset")))?;

    let mut xml = String::from_utf8(writer.into_inner()).map_err(|e| SeoError::Xml(e.to_string()))?;
    xml.push('\n');
    Ok(xml)
}

/// `<priority>` text: up to two decimals, trailing zeros trimmed, at least
/// one fractional digit.
fn format_priority(priority: f32) -> String {
    let text = format!("{priority:.2}");
    let trimmed = text.trim_end_matches('0');
    if trimmed.ends_with('.') {
        format!("{trimmed}0")
    } else {
        trimmed.to_string()
    }
}

fn text_element(writer: &mut Writer<Vec<u8>>, name: &str, text: &str) -> Result<(), SeoError> {
    write(writer, Event::Start(BytesStart::new(name)))?;
    write(writer, Event::Text(BytesText::new(text)))?;
    write(writer, Event::End(BytesEnd::new(name)))
}

fn write(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<(), SeoError> {
    writer
        .write_event(event)
        .map_err(|e| SeoError::Xml(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::registry::PAGES;
    use crate::seo::ChangeFrequency;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(path: &str, last_modified: Option<NaiveDate>) -> SiteUrlEntry {
        SiteUrlEntry {
            path: path.to_string(),
            last_modified,
            change_frequency: ChangeFrequency::Weekly,
            priority: 0.8,
        }
    }

    #[test]
    fn test_renders_urlset() {
        let xml = render(
            "https://www.example.com",
            &[entry("/agent/policy", Some(date(2024, 5, 1)))],
            date(2024, 6, 1),
        )
        .unwrap();

        assert!(xml.trim_start().starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#));
        assert!(xml.contains("<loc>https://www.example.com/agent/policy</loc>"));
        assert!(xml.contains("<lastmod>2024-05-01</lastmod>"));
        assert!(xml.contains("<changefreq>weekly</changefreq>"));
        assert!(xml.contains("<priority>0.8</priority>"));
        assert!(xml.trim_end().ends_with("</urlset>"));
    }

    #[test]
    fn test_missing_date_uses_generation_date() {
        let xml = render("https://www.example.com", &[entry("/", None)], date(2024, 6, 1)).unwrap();
        assert!(xml.contains("<loc>https://www.example.com/</loc>"));
        assert!(xml.contains("<lastmod>2024-06-01</lastmod>"));
    }

    #[test]
    fn test_output_is_deterministic() {
        let entries = entries(&SitemapConfig::default(), PAGES);
        let a = render("https://www.example.com", &entries, date(2024, 6, 1)).unwrap();
        let b = render("https://www.example.com", &entries, date(2024, 6, 1)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_text_is_escaped() {
        let xml = render(
            "https://www.example.com",
            &[entry("/search?q=a&b", None)],
            date(2024, 6, 1),
        )
        .unwrap();
        assert!(xml.contains("<loc>https://www.example.com/search?q=a&amp;b</loc>"));
    }

    #[test]
    fn test_priority_keeps_two_decimals() {
        assert_eq!(format_priority(0.85), "0.85");
        assert_eq!(format_priority(0.8), "0.8");
        assert_eq!(format_priority(1.0), "1.0");
        assert_eq!(format_priority(0.0), "0.0");

        let mut precise = entry("/agent", None);
        precise.priority = 0.85;
        let xml = render("https://www.example.com", &[precise], date(2024, 6, 1)).unwrap();
        assert!(xml.contains("<priority>0.85</priority>"));
    }

    #[test]
    fn test_invalid_base_url() {
        let err = render("not a url", &[], date(2024, 6, 1)).unwrap_err();
        assert!(matches!(err, SeoError::BaseUrl { .. }));
    }

    #[test]
    fn test_entries_prefer_configured_list() {
        let config = SitemapConfig {
            urls: vec![SitemapUrlConfig {
                path: "/only".into(),
                last_modified: None,
                change_frequency: ChangeFrequency::Yearly,
                priority: 0.1,
            }],
        };
        let list = entries(&config, PAGES);
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].path, "/only");

        let derived = entries(&SitemapConfig::default(), PAGES);
        assert_eq!(derived.len(), PAGES.len());
    }
}
