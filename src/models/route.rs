//! Public URL surface of the website.

use serde::Serialize;

use crate::utils::pagination::parse_page;
use crate::utils::url::{SearchQuery, is_slug};

/// Informational pages that carry no API data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StaticPage {
    About,
    Contact,
    Privacy,
    Terms,
    Careers,
}

impl StaticPage {
    pub const ALL: [StaticPage; 5] = [
        StaticPage::About,
        StaticPage::Contact,
        StaticPage::Privacy,
        StaticPage::Terms,
        StaticPage::Careers,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Self::About => "/about",
            Self::Contact => "/contact",
            Self::Privacy => "/privacy",
            Self::Terms => "/terms",
            Self::Careers => "/careers",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::About => "About Us",
            Self::Contact => "Contact Us",
            Self::Privacy => "Privacy Policy",
            Self::Terms => "Terms of Service",
            Self::Careers => "Careers",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::About => "Learn about our mission, our newsroom and the people behind the reporting.",
            Self::Contact => "Get in touch with our editorial team, send news tips or ask a question.",
            Self::Privacy => "How we collect, use and protect your personal information.",
            Self::Terms => "The terms and conditions that govern the use of this website.",
            Self::Careers => "Join our newsroom. Browse open positions in journalism and beyond.",
        }
    }

    fn from_segment(segment: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|page| &page.path()[1..] == segment)
    }
}

/// A resolved request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Article { slug: String },
    Category { slug: String, page: u64 },
    Author { slug: String },
    Tag { slug: String, page: u64 },
    Search(SearchQuery),
    Static(StaticPage),
    Sitemap,
    Robots,
    NotFound,
}

impl Route {
    /// Resolve a path with an optional query string, e.g. `/category/world?page=2`.
    pub fn parse(target: &str) -> Self {
        let (path, query) = target.split_once('?').unwrap_or((target, ""));
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let page = || parse_page(query_value(query, "page").as_deref());

        match segments.as_slice() {
            [] => Self::Home,
            ["sitemap.xml"] => Self::Sitemap,
            ["robots.txt"] => Self::Robots,
            ["search"] => Self::Search(SearchQuery::from_query(query)),
            ["article", slug] if is_slug(slug) => Self::Article {
                slug: slug.to_string(),
            },
            ["category", slug] if is_slug(slug) => Self::Category {
                slug: slug.to_string(),
                page: page(),
            },
            ["author", slug] if is_slug(slug) => Self::Author {
                slug: slug.to_string(),
            },
            ["tag", slug] if is_slug(slug) => Self::Tag {
                slug: slug.to_string(),
                page: page(),
            },
            [segment] => StaticPage::from_segment(segment).map_or(Self::NotFound, Self::Static),
            _ => Self::NotFound,
        }
    }
}

fn query_value(query: &str, key: &str) -> Option<String> {
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}
