// src/pipeline/sitemap.rs

//! Sitemap generation pipeline.

use chrono::Utc;

use crate::error::Result;
use crate::models::{Config, render_xml};
use crate::services::sitemap::FeedStatus;
use crate::services::{ContentClient, SitemapAggregator, SitemapOutcome};
use crate::storage::{BuildRecord, SiteStorage};
use crate::utils::log;

/// Build the sitemap and write it, with its build record, to storage.
pub async fn run_sitemap(
    config: &Config,
    client: ContentClient,
    storage: &dyn SiteStorage,
) -> Result<SitemapOutcome> {
    log::header("Sitemap generation starting");

    let generated_at = Utc::now();
    log::step(1, 3, "Fetch - Collecting articles, categories and authors");
    let outcome = SitemapAggregator::new(client, config)
        .build_at(generated_at)
        .await;

    if config.logging.show_progress {
        for report in &outcome.feeds {
            let status = match report.status {
                FeedStatus::Ok => "ok".to_string(),
                FeedStatus::Error(code) => format!("HTTP {code}"),
                FeedStatus::Rejected => "rejected".to_string(),
            };
            log::sub_item(&format!(
                "{}: {} ({} entries)",
                report.feed.label(),
                status,
                report.entries
            ));
        }
    }

    log::step(2, 3, "Render - Writing sitemap document");
    let xml = render_xml(&outcome.entries);
    let written = storage
        .write_document(&config.sitemap.file_name, xml.as_bytes())
        .await?;

    log::step(3, 3, "Record - Saving build metadata");
    storage
        .save_build(&BuildRecord::new(&outcome, generated_at))
        .await?;

    let failed = outcome
        .feeds
        .iter()
        .filter(|r| r.status != FeedStatus::Ok)
        .count();
    log::summary(
        "Sitemap",
        &[
            ("Entries", outcome.entries.len().to_string()),
            ("Static", outcome.static_count.to_string()),
            ("Dynamic", outcome.dynamic_count().to_string()),
            ("Failed feeds", failed.to_string()),
            ("Bytes", written.bytes.to_string()),
        ],
    );
    log::success(&format!("Sitemap saved to {}", written.key));

    Ok(outcome)
}
