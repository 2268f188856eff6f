// src/pipeline/robots.rs

use crate::error::Result;
use crate::models::Config;
use crate::services::RobotsPolicy;
use crate::storage::{SiteStorage, WriteMetadata};
use crate::utils::log;

/// Storage key of the robots policy.
pub const ROBOTS_KEY: &str = "robots.txt";

/// Render the robots policy and write it to storage.
pub async fn run_robots(config: &Config, storage: &dyn SiteStorage) -> Result<WriteMetadata> {
    log::header("Robots policy");

    let policy = RobotsPolicy::for_site(&config.site);
    let written = storage
        .write_document(ROBOTS_KEY, policy.render().as_bytes())
        .await?;

    log::sub_item(&format!("{} user-agent groups", policy.rules.len()));
    log::sub_item(&format!("Sitemap: {}", policy.sitemap));
    log::success(&format!("Robots policy saved to {}", written.key));

    Ok(written)
}
