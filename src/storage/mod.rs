//! Storage abstractions for generated site documents.
//!
//! ## Directory Structure
//!
//! ```text
//! storage/
//! ├── config.toml           # Site configuration
//! ├── sitemap.xml           # Generated sitemap
//! ├── robots.txt            # Generated robots policy
//! └── build.json            # Metadata of the last sitemap build
//! ```

pub mod local;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::services::{FeedStatus, SitemapOutcome};

// Re-export for convenience
pub use local::LocalStorage;

/// Key of the build metadata document.
pub const BUILD_KEY: &str = "build.json";

/// Metadata about a storage write operation.
#[derive(Debug, Clone)]
pub struct WriteMetadata {
    /// Storage key that was written
    pub key: String,
    /// Bytes written
    pub bytes: usize,
    /// Timestamp of the write
    pub timestamp: DateTime<Utc>,
}

/// Summary of the last sitemap build, stored next to the sitemap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildRecord {
    pub generated_at: DateTime<Utc>,
    pub total: usize,
    pub static_count: usize,
    /// `(feed, outcome, entries)` per dynamic feed
    pub feeds: Vec<(String, String, usize)>,
}

impl BuildRecord {
    pub fn new(outcome: &SitemapOutcome, generated_at: DateTime<Utc>) -> Self {
        Self {
            generated_at,
            total: outcome.entries.len(),
            static_count: outcome.static_count,
            feeds: outcome
                .feeds
                .iter()
                .map(|report| {
                    let status = match report.status {
                        FeedStatus::Ok => "ok".to_string(),
                        FeedStatus::Error(code) => format!("error {code}"),
                        FeedStatus::Rejected => "rejected".to_string(),
                    };
                    (report.feed.label().to_string(), status, report.entries)
                })
                .collect(),
        }
    }
}

/// Trait for document storage backends.
#[async_trait]
pub trait SiteStorage: Send + Sync {
    /// Replace the document at `key`.
    async fn write_document(&self, key: &str, body: &[u8]) -> Result<WriteMetadata>;

    /// Read the document at `key`, `None` if it does not exist.
    async fn read_document(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Record metadata of a sitemap build.
    async fn save_build(&self, record: &BuildRecord) -> Result<WriteMetadata> {
        let body = serde_json::to_vec_pretty(record)?;
        self.write_document(BUILD_KEY, &body).await
    }

    /// Metadata of the last recorded sitemap build.
    async fn load_build(&self) -> Result<Option<BuildRecord>> {
        match self.read_document(BUILD_KEY).await? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }
}
