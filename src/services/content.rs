// src/services/content.rs

//! Read-only client for the editorial content API.
//!
//! Every call returns a typed [`AppError`] on failure. Page code is expected
//! to absorb those failures through [`Fallback`] instead of propagating them,
//! so a flaky upstream degrades a page to empty sections rather than an error.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::error::{AppError, Result};
use crate::models::{ApiConfig, Article, Author, Category, Homepage, Listing};
use crate::utils::http;

/// Revalidation hint attached to fetched data.
///
/// This is a freshness hint for downstream HTTP caches, not a cache here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Freshness {
    /// Article lists and article detail
    Listing,
    /// Category taxonomy
    Taxonomy,
    /// Author profiles
    Profile,
    /// Informational pages without API data
    Static,
}

impl Freshness {
    pub fn revalidate(&self) -> Duration {
        match self {
            Self::Listing => Duration::from_secs(5 * 60),
            Self::Taxonomy => Duration::from_secs(10 * 60),
            Self::Profile => Duration::from_secs(60 * 60),
            Self::Static => Duration::from_secs(24 * 60 * 60),
        }
    }
}

/// Filters for `GET /articles/`. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleQuery {
    pub page: Option<u64>,
    pub limit: Option<u32>,
    pub category: Option<String>,
    pub author: Option<String>,
    pub tag: Option<String>,
    pub search: Option<String>,
    pub featured: bool,
}

impl ArticleQuery {
    pub fn page(mut self, page: u64) -> Self {
        self.page = Some(page);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn category(mut self, slug: impl Into<String>) -> Self {
        self.category = Some(slug.into());
        self
    }

    pub fn author(mut self, slug: impl Into<String>) -> Self {
        self.author = Some(slug.into());
        self
    }

    pub fn tag(mut self, slug: impl Into<String>) -> Self {
        self.tag = Some(slug.into());
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    /// Query pairs in a stable order.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        let filters = [
            ("category", &self.category),
            ("author", &self.author),
            ("tag", &self.tag),
            ("search", &self.search),
        ];
        for (key, value) in filters {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                params.push((key, value.to_string()));
            }
        }
        if self.featured {
            params.push(("featured", "true".to_string()));
        }
        params
    }
}

/// Client for the content API.
#[derive(Debug, Clone)]
pub struct ContentClient {
    client: Client,
    base_url: String,
}

impl ContentClient {
    /// Create a client from API settings.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        Ok(Self::with_client(
            http::create_client(config)?,
            config.base_url(),
        ))
    }

    /// Create a client around an existing HTTP client.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for `endpoint` with `params` appended as a query string.
    pub fn url(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Url> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, endpoint))?;
        if !params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// Fetch `endpoint` and parse the body as JSON.
    ///
    /// 404 becomes [`AppError::NotFound`], other non-2xx statuses
    /// [`AppError::Api`].
    pub async fn get_value(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Value> {
        let url = self.url(endpoint, params)?;
        log::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(AppError::not_found(endpoint));
        }
        if !status.is_success() {
            return Err(AppError::Api {
                status: status.as_u16(),
                endpoint: endpoint.to_string(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetch a single entity.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        let value = self.get_value(endpoint, params).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Fetch a collection in either accepted shape.
    pub async fn get_listing<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<Listing<T>> {
        let value = self.get_value(endpoint, params).await?;
        Listing::from_value(value, endpoint)
    }

    // --- Articles ---

    pub async fn articles(&self, query: &ArticleQuery) -> Result<Listing<Article>> {
        self.get_listing("/articles/", &query.to_params()).await
    }

    pub async fn article(&self, slug: &str) -> Result<Article> {
        self.get_json(&format!("/articles/{slug}/"), &[])
            .await
            .map_err(|e| rename_not_found(e, "article", slug))
    }

    // --- Categories ---

    pub async fn categories(&self) -> Result<Vec<Category>> {
        Ok(self.get_listing("/categories/", &[]).await?.results)
    }

    pub async fn category(&self, slug: &str) -> Result<Category> {
        self.get_json(&format!("/categories/{slug}/"), &[])
            .await
            .map_err(|e| rename_not_found(e, "category", slug))
    }

    pub async fn category_articles(&self, slug: &str, page: u64) -> Result<Listing<Article>> {
        self.get_listing(
            &format!("/categories/{slug}/articles/"),
            &[("page", page.to_string())],
        )
        .await
    }

    // --- Authors ---

    pub async fn authors(&self) -> Result<Vec<Author>> {
        Ok(self.get_listing("/authors/", &[]).await?.results)
    }

    pub async fn author(&self, slug: &str) -> Result<Author> {
        self.get_json(&format!("/authors/{slug}/"), &[])
            .await
            .map_err(|e| rename_not_found(e, "author", slug))
    }

    pub async fn author_articles(&self, slug: &str) -> Result<Listing<Article>> {
        self.get_listing(&format!("/authors/{slug}/articles/"), &[])
            .await
    }

    // --- Homepage ---

    pub async fn homepage(&self) -> Result<Homepage> {
        self.get_json("/homepage/", &[]).await
    }
}

fn rename_not_found(error: AppError, kind: &str, slug: &str) -> AppError {
    if error.is_not_found() {
        AppError::not_found(format!("{kind} '{slug}'"))
    } else {
        error
    }
}

/// Substitution of empty values for failed fetches.
pub trait Fallback<T> {
    /// The value, or its default (empty list, zero count) when the fetch failed.
    fn or_empty(self, context: &str) -> T
    where
        T: Default;

    /// The entity, or `None` when it is missing or could not be fetched.
    fn found(self, context: &str) -> Option<T>;
}

impl<T> Fallback<T> for Result<T> {
    fn or_empty(self, context: &str) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(|e| {
            log::warn!("Error fetching {}: {} (status {})", context, e, e.status());
            T::default()
        })
    }

    fn found(self, context: &str) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(e) if e.is_not_found() => {
                log::debug!("{} not found: {}", context, e);
                None
            }
            Err(e) => {
                log::warn!("Error fetching {}: {} (status {})", context, e, e.status());
                None
            }
        }
    }
}
