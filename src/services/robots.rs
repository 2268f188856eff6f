// src/services/robots.rs

//! Crawler policy served as `/robots.txt`.

use std::fmt::Write;

use crate::models::SiteConfig;

/// Paths no crawler should index: internals, raw data and tracking-parameter duplicates.
const DISALLOWED: [&str; 10] = [
    "/admin/",
    "/api/",
    "/_next/",
    "/static/",
    "/.well-known/",
    "/node_modules/",
    "/*.json$",
    "/*?*utm_*",
    "/*?*fbclid*",
    "/*?*gclid*",
];

/// Search engines allowed at a throttled rate.
const THROTTLED: [&str; 2] = ["Googlebot", "Bingbot"];

/// SEO scrapers that are shut out.
const BLOCKED: [&str; 3] = ["AhrefsBot", "MJ12bot", "DotBot"];

/// One `User-Agent` group.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RobotsRule {
    pub user_agents: Vec<String>,
    pub allow: Vec<String>,
    pub disallow: Vec<String>,
    /// Seconds between requests
    pub crawl_delay: Option<u32>,
}

impl RobotsRule {
    fn for_agents<'a>(agents: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            user_agents: agents.into_iter().map(str::to_string).collect(),
            ..Self::default()
        }
    }

    fn allow(mut self, path: &str) -> Self {
        self.allow.push(path.to_string());
        self
    }

    fn disallow<'a>(mut self, paths: impl IntoIterator<Item = &'a str>) -> Self {
        self.disallow.extend(paths.into_iter().map(str::to_string));
        self
    }

    fn crawl_delay(mut self, seconds: u32) -> Self {
        self.crawl_delay = Some(seconds);
        self
    }
}

/// The full robots policy of the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RobotsPolicy {
    pub rules: Vec<RobotsRule>,
    /// Absolute sitemap URL
    pub sitemap: String,
}

impl RobotsPolicy {
    /// The site's standard policy.
    pub fn for_site(site: &SiteConfig) -> Self {
        let mut rules = vec![RobotsRule::for_agents(["*"]).allow("/").disallow(DISALLOWED)];
        rules.extend(
            THROTTLED
                .iter()
                .map(|agent| RobotsRule::for_agents([*agent]).allow("/").crawl_delay(1)),
        );
        rules.push(RobotsRule::for_agents(BLOCKED).disallow(["/"]));

        Self {
            rules,
            sitemap: site.url("/sitemap.xml"),
        }
    }

    /// Render as robots.txt text.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for rule in &self.rules {
            for agent in &rule.user_agents {
                let _ = writeln!(out, "User-Agent: {agent}");
            }
            for path in &rule.allow {
                let _ = writeln!(out, "Allow: {path}");
            }
            for path in &rule.disallow {
                let _ = writeln!(out, "Disallow: {path}");
            }
            if let Some(delay) = rule.crawl_delay {
                let _ = writeln!(out, "Crawl-delay: {delay}");
            }
            out.push('\n');
        }
        let _ = writeln!(out, "Sitemap: {}", self.sitemap);
        out
    }
}
