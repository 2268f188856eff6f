// src/pipeline/page.rs

use crate::error::Result;
use crate::models::Config;
use crate::services::{ContentClient, Page, PageService};
use crate::utils::log;

/// Resolve `target` (path plus optional query) into page data.
pub async fn run_page(config: &Config, client: ContentClient, target: &str) -> Result<Page> {
    log::debug(&format!("Resolving {target}"));

    let service = PageService::new(client, config.site.clone());
    match service.resolve(target).await {
        Ok(page) => {
            log::debug(&format!(
                "{} (revalidate {}s)",
                page.meta.title,
                page.freshness.revalidate().as_secs()
            ));
            Ok(page)
        }
        Err(e) => {
            log::warn(&format!("{target}: {e}"));
            Err(e)
        }
    }
}
