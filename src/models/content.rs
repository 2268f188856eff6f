//! Editorial content as served by the content API.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A published article.
///
/// `author` and `category` are required: a record missing either fails to
/// parse instead of being filled with a default.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Article {
    pub id: u64,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub excerpt: String,

    /// Body markup (HTML). List endpoints omit it.
    #[serde(default)]
    pub content: String,

    #[serde(default)]
    pub featured_image: Option<String>,

    #[serde(default)]
    pub published_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    pub author: Author,
    pub category: Category,

    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub is_breaking: bool,

    /// Estimated read time in minutes
    #[serde(default)]
    pub read_time: u32,
}

impl Article {
    /// Root-relative URL of the article page.
    pub fn path(&self) -> String {
        format!("/article/{}", self.slug)
    }
}

/// A staff writer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Author {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub twitter_handle: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

impl Author {
    pub fn path(&self) -> String {
        format!("/author/{}", self.slug)
    }
}

/// An editorial section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: u64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    /// Display color as a hex string, e.g. `#C14444`
    #[serde(default)]
    pub color: String,
    /// Ordering rank; lower sorts first
    #[serde(default)]
    pub order: i32,
}

impl Category {
    pub fn path(&self) -> String {
        format!("/category/{}", self.slug)
    }
}

/// A tag is only ever a slug on an article; this derives its display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    pub name: String,
    pub slug: String,
}

impl Tag {
    /// Build a tag from its slug, turning dashes into spaces for display.
    pub fn from_slug(slug: &str) -> Self {
        Self {
            name: slug.replace('-', " "),
            slug: slug.to_string(),
        }
    }

    pub fn path(&self) -> String {
        format!("/tag/{}", self.slug)
    }
}

/// Payload of the `/homepage/` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Homepage {
    #[serde(default)]
    pub featured_articles: Vec<Article>,
    #[serde(default)]
    pub breaking_news: Vec<Article>,
    /// Latest articles keyed by category slug
    #[serde(default)]
    pub category_articles: BTreeMap<String, Vec<Article>>,
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_article_parses_full_record() {
        let article: Article = serde_json::from_value(article_json("fed-policy")).unwrap();
        assert_eq!(article.slug, "fed-policy");
        assert_eq!(article.author.slug, "sarah-johnson");
        assert_eq!(article.category.slug, "business");
        assert_eq!(article.tags.len(), 2);
        assert!(article.is_featured);
        assert!(!article.is_breaking);
        assert_eq!(article.path(), "/article/fed-policy");
        assert!(article.published_date.is_some());
    }

    #[test]
    fn test_article_without_category_is_rejected() {
        let mut value = article_json("x");
        value.as_object_mut().unwrap().remove("category");
        assert!(serde_json::from_value::<Article>(value).is_err());
    }

    #[test]
    fn test_article_without_author_is_rejected() {
        let mut value = article_json("x");
        value.as_object_mut().unwrap().remove("author");
        assert!(serde_json::from_value::<Article>(value).is_err());
    }

    #[test]
    fn test_tag_display_name() {
        let tag = Tag::from_slug("federal-reserve");
        assert_eq!(tag.name, "federal reserve");
        assert_eq!(tag.path(), "/tag/federal-reserve");
    }

    #[test]
    fn test_homepage_defaults_missing_sections() {
        let homepage: Homepage = serde_json::from_str(r#"{"breaking_news": []}"#).unwrap();
        assert!(homepage.featured_articles.is_empty());
        assert!(homepage.category_articles.is_empty());
    }
}
