// src/services/sitemap.rs

//! Sitemap aggregation service.
//!
//! Combines the fixed site routes with one entry per article, category and
//! author known to the content API. The three feeds are fetched concurrently
//! and settle independently: a failed or slow feed only drops its own entries.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::error::AppError;
use crate::models::{
    ChangeFrequency, Config, Environment, Listing, SiteConfig, SitemapConfig, SitemapEntry,
};
use crate::services::content::ContentClient;

/// Routes advertised regardless of API availability.
const STATIC_ROUTES: [(&str, ChangeFrequency, f32); 6] = [
    ("/", ChangeFrequency::Daily, 1.0),
    ("/about", ChangeFrequency::Monthly, 0.8),
    ("/contact", ChangeFrequency::Monthly, 0.8),
    ("/privacy", ChangeFrequency::Yearly, 0.5),
    ("/terms", ChangeFrequency::Yearly, 0.5),
    ("/careers", ChangeFrequency::Monthly, 0.7),
];

/// Dynamic sources of sitemap entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feed {
    Articles,
    Categories,
    Authors,
}

impl Feed {
    pub const ALL: [Feed; 3] = [Feed::Articles, Feed::Categories, Feed::Authors];

    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Articles => "/articles/",
            Self::Categories => "/categories/",
            Self::Authors => "/authors/",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Articles => "articles",
            Self::Categories => "categories",
            Self::Authors => "authors",
        }
    }

    fn path_prefix(&self) -> &'static str {
        match self {
            Self::Articles => "/article",
            Self::Categories => "/category",
            Self::Authors => "/author",
        }
    }

    fn change_frequency(&self) -> ChangeFrequency {
        match self {
            Self::Articles | Self::Authors => ChangeFrequency::Weekly,
            Self::Categories => ChangeFrequency::Daily,
        }
    }

    fn priority(&self) -> f32 {
        match self {
            Self::Articles => 0.9,
            Self::Categories => 0.8,
            Self::Authors => 0.7,
        }
    }
}

/// Settled result of one feed request.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedOutcome {
    /// 2xx with a JSON body
    Ok(Value),
    /// The API answered with an error status, or an unreadable body
    Status(u16),
    /// No answer: network failure or timeout
    Rejected(String),
}

impl FeedOutcome {
    fn status(&self) -> FeedStatus {
        match self {
            Self::Ok(_) => FeedStatus::Ok,
            Self::Status(code) => FeedStatus::Error(*code),
            Self::Rejected(_) => FeedStatus::Rejected,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedStatus {
    Ok,
    Error(u16),
    Rejected,
}

/// Per-feed line of a sitemap build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedReport {
    pub feed: Feed,
    pub status: FeedStatus,
    pub entries: usize,
}

/// Result of a sitemap build.
#[derive(Debug, Clone, Default)]
pub struct SitemapOutcome {
    /// Static entries first, then articles, categories, authors
    pub entries: Vec<SitemapEntry>,
    pub static_count: usize,
    /// Empty when the build skipped the API
    pub feeds: Vec<FeedReport>,
}

impl SitemapOutcome {
    pub fn dynamic_count(&self) -> usize {
        self.entries.len() - self.static_count
    }
}

/// Builds sitemap entries from static routes and content API feeds.
pub struct SitemapAggregator {
    client: ContentClient,
    site: SiteConfig,
    settings: SitemapConfig,
    api_configured: bool,
    feed_timeout: Duration,
}

impl SitemapAggregator {
    pub fn new(client: ContentClient, config: &Config) -> Self {
        Self {
            client,
            site: config.site.clone(),
            settings: config.sitemap.clone(),
            api_configured: config.api.is_configured(),
            feed_timeout: Duration::from_secs(config.sitemap.feed_timeout_secs),
        }
    }

    /// Override the per-feed timeout.
    pub fn with_feed_timeout(mut self, timeout: Duration) -> Self {
        self.feed_timeout = timeout;
        self
    }

    /// Build entries stamped with the current time.
    pub async fn build(&self) -> SitemapOutcome {
        self.build_at(Utc::now()).await
    }

    /// Build entries using `now` as the generation time.
    pub async fn build_at(&self, now: DateTime<Utc>) -> SitemapOutcome {
        let mut entries = self.static_entries(now);
        let static_count = entries.len();

        if self.site.environment == Environment::Production && !self.api_configured {
            log::info!("Skipping dynamic sitemap entries: no content API configured for production");
            return SitemapOutcome {
                entries,
                static_count,
                feeds: Vec::new(),
            };
        }

        let (articles, categories, authors) = futures::join!(
            self.fetch(Feed::Articles),
            self.fetch(Feed::Categories),
            self.fetch(Feed::Authors),
        );

        let mut feeds = Vec::with_capacity(Feed::ALL.len());
        for (feed, outcome) in Feed::ALL.into_iter().zip([articles, categories, authors]) {
            let status = outcome.status();
            let feed_entries = match outcome {
                FeedOutcome::Ok(value) => self.entries_for(feed, value, now),
                FeedOutcome::Status(code) => {
                    log::warn!("Sitemap feed {} failed with status {}", feed.label(), code);
                    Vec::new()
                }
                FeedOutcome::Rejected(reason) => {
                    log::warn!("Sitemap feed {} rejected: {}", feed.label(), reason);
                    Vec::new()
                }
            };

            feeds.push(FeedReport {
                feed,
                status,
                entries: feed_entries.len(),
            });
            entries.extend(feed_entries);
        }

        SitemapOutcome {
            entries,
            static_count,
            feeds,
        }
    }

    /// The fixed routes, all stamped with `now`.
    pub fn static_entries(&self, now: DateTime<Utc>) -> Vec<SitemapEntry> {
        STATIC_ROUTES
            .iter()
            .map(|(path, frequency, priority)| {
                SitemapEntry::new(self.site.url(path), now, *frequency, *priority)
            })
            .collect()
    }

    async fn fetch(&self, feed: Feed) -> FeedOutcome {
        let params = match feed {
            Feed::Articles => vec![("limit", self.settings.article_limit.to_string())],
            Feed::Categories | Feed::Authors => Vec::new(),
        };

        let request = self.client.get_value(feed.endpoint(), &params);
        match tokio::time::timeout(self.feed_timeout, request).await {
            Ok(Ok(value)) => FeedOutcome::Ok(value),
            Ok(Err(AppError::Http(e))) => FeedOutcome::Rejected(e.to_string()),
            Ok(Err(e)) => FeedOutcome::Status(e.status()),
            Err(_) => FeedOutcome::Rejected(format!(
                "timed out after {}ms",
                self.feed_timeout.as_millis()
            )),
        }
    }

    /// Entries for one successful feed body; unrecognized shapes yield none.
    fn entries_for(&self, feed: Feed, body: Value, now: DateTime<Utc>) -> Vec<SitemapEntry> {
        let records = match Listing::<Value>::from_value(body, feed.endpoint()) {
            Ok(listing) => listing.results,
            Err(e) => {
                log::warn!("Sitemap feed {} ignored: {}", feed.label(), e);
                return Vec::new();
            }
        };

        records
            .iter()
            .filter_map(|record| {
                let slug = record
                    .get("slug")
                    .and_then(Value::as_str)
                    .filter(|s| !s.is_empty())?;
                let last_modified = match feed {
                    Feed::Articles => article_last_modified(record).unwrap_or(now),
                    Feed::Categories | Feed::Authors => now,
                };

                Some(SitemapEntry::new(
                    self.site.url(&format!("{}/{}", feed.path_prefix(), slug)),
                    last_modified,
                    feed.change_frequency(),
                    feed.priority(),
                ))
            })
            .collect()
    }
}

/// First parseable of the publication and creation timestamps.
fn article_last_modified(record: &Value) -> Option<DateTime<Utc>> {
    ["published_date", "created_at"].iter().find_map(|key| {
        let raw = record.get(*key)?.as_str()?;
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    })
}
