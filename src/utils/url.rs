// src/utils/url.rs

//! URL helpers for page links, search parameters and images.

use serde::Serialize;
use url::form_urlencoded;

use crate::utils::pagination::parse_page;

/// Image shown when an article or author has no usable image.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.jpg";

/// Return `url` when it is absolute http(s) or root-relative, else the placeholder.
///
/// # Examples
/// ```
/// use newsroom::utils::url::valid_image_url;
///
/// assert_eq!(valid_image_url(Some("/img/a.jpg")), "/img/a.jpg");
/// assert_eq!(valid_image_url(Some("image/upload/a.jpg")), "/placeholder.jpg");
/// assert_eq!(valid_image_url(None), "/placeholder.jpg");
/// ```
pub fn valid_image_url(url: Option<&str>) -> &str {
    match url.map(str::trim) {
        Some(u) if u.starts_with("http://") || u.starts_with("https://") || u.starts_with('/') => {
            u
        }
        _ => PLACEHOLDER_IMAGE,
    }
}

/// Whether `s` is usable as a slug in a public URL.
pub fn is_slug(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Link to page `page` of a listing rooted at `path`.
///
/// Page 1 is the bare path.
pub fn page_href(path: &str, page: u64) -> String {
    if page <= 1 {
        path.to_string()
    } else {
        format!("{path}?page={page}")
    }
}

/// Search parameters carried in `/search?q=&category=&page=`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SearchQuery {
    /// Search term, trimmed
    pub q: String,
    /// Category slug filter
    pub category: Option<String>,
    /// Requested page (1-based)
    pub page: u64,
}

impl SearchQuery {
    pub fn new(q: impl Into<String>, category: Option<String>) -> Self {
        Self {
            q: q.into().trim().to_string(),
            category: category.filter(|c| !c.trim().is_empty()),
            page: 1,
        }
    }

    /// Parse a raw query string (without the leading `?`).
    pub fn from_query(query: &str) -> Self {
        let mut q = String::new();
        let mut category = None;
        let mut page = None;

        for (key, value) in form_urlencoded::parse(query.trim_start_matches('?').as_bytes()) {
            match key.as_ref() {
                "q" => q = value.into_owned(),
                "category" => category = Some(value.into_owned()),
                "page" => page = Some(value.into_owned()),
                _ => {}
            }
        }

        Self {
            page: parse_page(page.as_deref()),
            ..Self::new(q, category)
        }
    }

    /// Whether there is anything to search for.
    pub fn is_empty(&self) -> bool {
        self.q.is_empty()
    }

    /// Encode as a query string; page 1 is omitted.
    pub fn to_query_string(&self) -> String {
        self.encode(self.page)
    }

    /// `/search?...` link for this query.
    pub fn href(&self) -> String {
        format!("/search?{}", self.to_query_string())
    }

    /// `/search?...` link for another page of the same query.
    pub fn page_href(&self, page: u64) -> String {
        format!("/search?{}", self.encode(page.max(1)))
    }

    fn encode(&self, page: u64) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        serializer.append_pair("q", &self.q);
        if let Some(category) = &self.category {
            serializer.append_pair("category", category);
        }
        if page > 1 {
            serializer.append_pair("page", &page.to_string());
        }
        serializer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_image_url() {
        assert_eq!(
            valid_image_url(Some("https://cdn.example.com/a.jpg")),
            "https://cdn.example.com/a.jpg"
        );
        assert_eq!(valid_image_url(Some("http://x/a.jpg")), "http://x/a.jpg");
        assert_eq!(valid_image_url(Some("")), PLACEHOLDER_IMAGE);
        assert_eq!(valid_image_url(Some("ftp://x/a.jpg")), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_is_slug() {
        assert!(is_slug("world-news"));
        assert!(is_slug("tech_2024"));
        assert!(!is_slug(""));
        assert!(!is_slug("a/b"));
        assert!(!is_slug("has space"));
    }

    #[test]
    fn test_page_href() {
        assert_eq!(page_href("/category/world", 1), "/category/world");
        assert_eq!(page_href("/category/world", 3), "/category/world?page=3");
    }

    #[test]
    fn test_search_round_trip() {
        let query = SearchQuery::new("rate & inflation 2024", Some("business".to_string()));
        let parsed = SearchQuery::from_query(&query.to_query_string());
        assert_eq!(parsed.q, "rate & inflation 2024");
        assert_eq!(parsed.category.as_deref(), Some("business"));
        assert_eq!(parsed, query);
    }

    #[test]
    fn test_search_round_trip_unicode() {
        let query = SearchQuery::new("élection présidentielle", Some("politique".into()));
        let parsed = SearchQuery::from_query(query.href().trim_start_matches("/search"));
        assert_eq!(parsed, query);
    }

    #[test]
    fn test_search_page_href_keeps_filters() {
        let query = SearchQuery::new("fed", Some("business".to_string()));
        assert_eq!(query.page_href(2), "/search?q=fed&category=business&page=2");
        assert_eq!(query.page_href(1), "/search?q=fed&category=business");
    }

    #[test]
    fn test_search_from_query_defaults() {
        let parsed = SearchQuery::from_query("q=%20%20&category=&page=abc");
        assert!(parsed.is_empty());
        assert_eq!(parsed.category, None);
        assert_eq!(parsed.page, 1);
    }

    #[test]
    fn test_search_from_query_page() {
        let parsed = SearchQuery::from_query("?q=climate&page=3");
        assert_eq!(parsed.q, "climate");
        assert_eq!(parsed.page, 3);
        assert_eq!(parsed.to_query_string(), "q=climate&page=3");
    }
}
