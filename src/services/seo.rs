// src/services/seo.rs

//! Page metadata and structured data.
//!
//! Produces the `<head>` data of every page: title, description, canonical
//! URL, Open Graph and Twitter card fields, and `NewsArticle` JSON-LD for
//! article pages.

use chrono::{DateTime, SecondsFormat, Utc};
use scraper::Html;
use serde::Serialize;
use serde_json::{Value, json};
use unicode_segmentation::UnicodeSegmentation;

use crate::models::{Article, Author, SiteConfig};
use crate::utils::url::valid_image_url;

/// Maximum length of a description derived from body text, in characters.
pub const DESCRIPTION_LIMIT: usize = 160;

const DEFAULT_TITLE_SUFFIX: &str = "Professional News Website";
const DEFAULT_DESCRIPTION: &str = "Stay informed with the latest breaking news, politics, business, technology, and more.";
const OG_IMAGE: &str = "/og-image.jpg";
const LOGO: &str = "/logo.png";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OgType {
    Website,
    Article,
    Profile,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpenGraph {
    #[serde(rename = "type")]
    pub og_type: OgType,
    pub title: String,
    pub description: String,
    pub url: String,
    pub site_name: String,
    pub images: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_time: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TwitterCard {
    pub card: &'static str,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
}

/// Everything a page puts in its document head.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub canonical: String,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
    /// JSON-LD document, article pages only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structured_data: Option<Value>,
}

/// Builds [`PageMeta`] for a site.
#[derive(Debug, Clone)]
pub struct SeoBuilder {
    site: SiteConfig,
}

impl SeoBuilder {
    pub fn new(site: SiteConfig) -> Self {
        Self { site }
    }

    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    /// `"{title} | {site name}"`.
    pub fn full_title(&self, title: &str) -> String {
        format!("{} | {}", title, self.site.name)
    }

    /// Metadata of the home page.
    pub fn home(&self) -> PageMeta {
        let title = format!("{} - {}", self.site.name, DEFAULT_TITLE_SUFFIX);
        let mut meta = self.page(&title, DEFAULT_DESCRIPTION, "/");
        meta.title = title;
        meta
    }

    /// Metadata of a plain page.
    pub fn page(&self, title: &str, description: &str, path: &str) -> PageMeta {
        self.build(
            OgType::Website,
            title,
            description,
            path,
            vec![self.site.url(OG_IMAGE)],
        )
    }

    /// Metadata of a page that could not be resolved.
    pub fn not_found(&self, what: &str) -> PageMeta {
        self.page(
            &format!("{what} Not Found"),
            &format!("The requested {} could not be found.", what.to_lowercase()),
            "/",
        )
    }

    /// Article metadata including `NewsArticle` JSON-LD.
    pub fn article(&self, article: &Article) -> PageMeta {
        let description = article_description(article);
        let images = article
            .featured_image
            .as_deref()
            .map(|image| vec![self.absolute(valid_image_url(Some(image)))])
            .unwrap_or_default();

        let mut meta = self.build(
            OgType::Article,
            &article.title,
            &description,
            &article.path(),
            images,
        );
        meta.open_graph.published_time = published(article).map(rfc3339);
        meta.open_graph.authors = vec![article.author.name.clone()];
        meta.structured_data = Some(self.article_structured_data(article));
        meta
    }

    /// Author profile metadata.
    pub fn author(&self, author: &Author) -> PageMeta {
        let description = if author.bio.trim().is_empty() {
            format!("Read articles by {} on {}.", author.name, self.site.name)
        } else {
            author.bio.clone()
        };
        let images = author
            .avatar
            .as_deref()
            .map(|avatar| vec![self.absolute(valid_image_url(Some(avatar)))])
            .unwrap_or_default();

        self.build(
            OgType::Profile,
            &format!("{} - Author", author.name),
            &description,
            &author.path(),
            images,
        )
    }

    /// `NewsArticle` JSON-LD for an article.
    pub fn article_structured_data(&self, article: &Article) -> Value {
        let url = self.site.url(&article.path());
        let date_published = published(article).map(rfc3339);
        let date_modified = article.updated_at.map(rfc3339).or(date_published.clone());

        let mut data = json!({
            "@context": "https://schema.org",
            "@type": "NewsArticle",
            "headline": article.title,
            "description": article_description(article),
            "url": url,
            "datePublished": date_published,
            "dateModified": date_modified,
            "author": {
                "@type": "Person",
                "name": article.author.name,
                "url": self.site.url(&article.author.path()),
                "description": article.author.bio,
            },
            "publisher": {
                "@type": "NewsMediaOrganization",
                "name": self.site.name,
                "url": self.site.url("/"),
                "logo": {
                    "@type": "ImageObject",
                    "url": self.site.url(LOGO),
                    "width": 600,
                    "height": 60,
                },
            },
            "mainEntityOfPage": {
                "@type": "WebPage",
                "@id": url,
            },
            "articleSection": article.category.name,
            "keywords": [article.category.name, "news", "breaking news"],
            "inLanguage": "en-US",
        });

        if let Some(image) = article.featured_image.as_deref() {
            data["image"] = json!({
                "@type": "ImageObject",
                "url": self.absolute(valid_image_url(Some(image))),
                "width": 1200,
                "height": 630,
            });
        }

        data
    }

    fn build(
        &self,
        og_type: OgType,
        title: &str,
        description: &str,
        path: &str,
        images: Vec<String>,
    ) -> PageMeta {
        let canonical = self.site.url(path);
        PageMeta {
            title: self.full_title(title),
            description: description.to_string(),
            open_graph: OpenGraph {
                og_type,
                title: title.to_string(),
                description: description.to_string(),
                url: canonical.clone(),
                site_name: self.site.name.clone(),
                images: images.clone(),
                published_time: None,
                authors: Vec::new(),
            },
            twitter: TwitterCard {
                card: "summary_large_image",
                title: title.to_string(),
                description: description.to_string(),
                images,
            },
            canonical,
            structured_data: None,
        }
    }

    fn absolute(&self, url: &str) -> String {
        if url.starts_with('/') {
            self.site.url(url)
        } else {
            url.to_string()
        }
    }
}

fn published(article: &Article) -> Option<DateTime<Utc>> {
    article.published_date.or(article.created_at)
}

fn rfc3339(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// The excerpt, or the start of the body's plain text when there is none.
pub fn article_description(article: &Article) -> String {
    let excerpt = article.excerpt.trim();
    if excerpt.is_empty() {
        truncate(&plain_text(&article.content), DESCRIPTION_LIMIT)
    } else {
        excerpt.to_string()
    }
}

/// Visible text of an HTML fragment with whitespace collapsed.
pub fn plain_text(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let text: String = fragment.root_element().text().collect::<Vec<_>>().join(" ");
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// The first `max` user-perceived characters of `text`.
pub fn truncate(text: &str, max: usize) -> String {
    text.graphemes(true).take(max).collect()
}
