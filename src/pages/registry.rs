//! Static page table.
//!
//! Every routable page is one row: route, SEO metadata, sitemap hints and a
//! markdown body. Lookup is a linear scan; the table is small and fixed at
//! compile time.

use crate::seo::{ChangeFrequency, SiteUrlEntry};

/// SEO metadata for one page.
#[derive(Debug, Clone, Copy)]
pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
}

/// One routable page.
#[derive(Debug, Clone, Copy)]
pub struct Page {
    pub route: &'static str,
    pub meta: PageMeta,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
    /// Markdown source of the page body.
    pub body: &'static str,
}

impl Page {
    pub fn sitemap_entry(&self) -> SiteUrlEntry {
        SiteUrlEntry {
            path: self.route.to_string(),
            last_modified: None,
            change_frequency: self.change_frequency,
            priority: self.priority,
        }
    }
}

pub static PAGES: &[Page] = &[
    Page {
        route: "/",
        meta: PageMeta {
            title: "Become a POS Terminal Agent",
            description: "Join our POS terminal agent network and earn commission on every transaction in your area.",
            keywords: &["pos agent", "pos terminal", "payment agent", "agent recruitment"],
        },
        change_frequency: ChangeFrequency::Daily,
        priority: 1.0,
        body: r#"# Become a POS Terminal Agent

Run card payments, transfers and bill payments for your neighbourhood with a
terminal we supply and support.

- Commission paid on every successful transaction
- Free terminal for qualifying shops
- Settlement the next working day

[See how it works](/agent) · [Talk to us](/contact)
"#,
    },
    Page {
        route: "/agent",
        meta: PageMeta {
            title: "Agent Programme",
            description: "How the POS agent programme works: requirements, onboarding and earnings.",
            keywords: &["pos agent programme", "agent onboarding", "agent commission"],
        },
        change_frequency: ChangeFrequency::Weekly,
        priority: 0.9,
        body: r#"# Agent Programme

## Requirements

1. A registered shop or kiosk with a fixed address
2. Valid government ID
3. A bank account in the business name

## Onboarding

Apply online, complete a short training session and receive your terminal
within five working days. Read the [agent policy](/agent/policy) before applying.

[Apply now](/agent/apply)
"#,
    },
    Page {
        route: "/agent/apply",
        meta: PageMeta {
            title: "Apply to Become an Agent",
            description: "Start your POS agent application in a few minutes.",
            keywords: &["pos agent application", "apply pos terminal"],
        },
        change_frequency: ChangeFrequency::Monthly,
        priority: 0.8,
        body: r#"# Apply to Become an Agent

Have your ID and shop details ready. Our onboarding team reviews every
application within two working days and calls you to arrange training.

Questions first? [Contact the agent desk](/contact).
"#,
    },
    Page {
        route: "/agent/policy",
        meta: PageMeta {
            title: "Agent Policy",
            description: "Terms, fees, settlement schedule and conduct rules for POS terminal agents.",
            keywords: &["pos agent policy", "agent terms", "settlement schedule"],
        },
        change_frequency: ChangeFrequency::Monthly,
        priority: 0.7,
        body: r#"# Agent Policy

## Fees and commission

Commission is credited per successful transaction and settled the next
working day. Terminal rental is waived while monthly volume stays above the
published threshold.

## Conduct

Agents must display the official price list, issue a receipt for every
transaction and never retain a customer's card.
"#,
    },
    Page {
        route: "/cloud",
        meta: PageMeta {
            title: "Cloud Computing",
            description: "Elastic cloud servers, object storage and managed databases for growing businesses.",
            keywords: &["cloud computing", "cloud server", "object storage"],
        },
        change_frequency: ChangeFrequency::Weekly,
        priority: 0.9,
        body: r#"# Cloud Computing

Compute, storage and networking billed by the hour, in data centres close to
your customers.

- [Cloud servers](/cloud/servers)
- [Object storage](/cloud/storage)
"#,
    },
    Page {
        route: "/cloud/servers",
        meta: PageMeta {
            title: "Cloud Servers",
            description: "General-purpose and compute-optimised cloud servers with per-hour billing.",
            keywords: &["cloud server", "vps", "virtual machine"],
        },
        change_frequency: ChangeFrequency::Monthly,
        priority: 0.8,
        body: r#"# Cloud Servers

Launch a server in under a minute. Scale vCPU and memory without
reinstalling, and snapshot disks before every change.
"#,
    },
    Page {
        route: "/cloud/storage",
        meta: PageMeta {
            title: "Object Storage",
            description: "S3-compatible object storage with lifecycle rules and no egress surprises.",
            keywords: &["object storage", "s3 compatible", "backup storage"],
        },
        change_frequency: ChangeFrequency::Monthly,
        priority: 0.8,
        body: r#"# Object Storage

Store backups, media and logs in S3-compatible buckets. Lifecycle rules move
cold data to cheaper tiers automatically.
"#,
    },
    Page {
        route: "/about",
        meta: PageMeta {
            title: "About Us",
            description: "Who we are and the merchants, agents and businesses we serve.",
            keywords: &["about", "company"],
        },
        change_frequency: ChangeFrequency::Yearly,
        priority: 0.5,
        body: r#"# About Us

We build payment and infrastructure products for small businesses, and the
agent network that brings them to every street.
"#,
    },
    Page {
        route: "/contact",
        meta: PageMeta {
            title: "Contact",
            description: "Reach the agent desk or the cloud sales team.",
            keywords: &["contact", "support", "sales"],
        },
        change_frequency: ChangeFrequency::Yearly,
        priority: 0.6,
        body: r#"# Contact

- Agent desk: agents@example.com
- Cloud sales: cloud@example.com

Office hours are Monday to Friday, 08:00 to 18:00.
"#,
    },
];

/// Find the page for a request path. A trailing slash is ignored except on
/// the root.
pub fn lookup(path: &str) -> Option<&'static Page> {
    let path = match path.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => trimmed,
        _ => path,
    };
    PAGES.iter().find(|page| page.route == path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_lookup_exact_routes() {
        assert_eq!(lookup("/").map(|p| p.route), Some("/"));
        assert_eq!(lookup("/agent/policy").map(|p| p.route), Some("/agent/policy"));
        assert!(lookup("/agent/policy.html").is_none());
        assert!(lookup("/missing").is_none());
    }

    #[test]
    fn test_lookup_ignores_trailing_slash() {
        assert_eq!(lookup("/cloud/").map(|p| p.route), Some("/cloud"));
    }

    #[test]
    fn test_routes_are_unique_and_canonical() {
        let mut seen = HashSet::new();
        for page in PAGES {
            assert!(seen.insert(page.route), "duplicate route {}", page.route);
            assert!(page.route.starts_with('/'));
            assert!(!page.route.ends_with(".html"));
            assert!((0.0..=1.0).contains(&page.priority));
        }
    }

    #[test]
    fn test_sitemap_entry_mirrors_page() {
        let page = lookup("/cloud").unwrap();
        let entry = page.sitemap_entry();
        assert_eq!(entry.path, "/cloud");
        assert_eq!(entry.change_frequency, ChangeFrequency::Weekly);
        assert!(entry.last_modified.is_none());
    }
}
