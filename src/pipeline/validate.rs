// src/pipeline/validate.rs

use std::path::Path;

use crate::config::{config_path, load_validated};
use crate::error::Result;
use crate::models::Config;
use crate::utils::log;

/// Validate the effective configuration of `storage_dir`.
pub fn run_validate(storage_dir: &Path) -> Result<Config> {
    log::header("Validating configuration");

    match load_validated(storage_dir) {
        Ok(config) => {
            log::success(&format!(
                "Config OK ({})",
                config_path(storage_dir).display()
            ));
            log::sub_item(&format!("API: {}", config.api.base_url()));
            if !config.api.is_configured() {
                log::sub_item("API URL not configured, using the local default");
            }
            log::sub_item(&format!("Site: {}", config.site.base_url));
            log::sub_item(&format!("Environment: {:?}", config.site.environment));
            log::sub_item(&format!(
                "Sitemap feed timeout: {}s",
                config.sitemap.feed_timeout_secs
            ));
            log::sub_item(&format!("Ticker interval: {}ms", config.ticker.interval_ms));
            Ok(config)
        }
        Err(e) => {
            log::error(&format!("Validation failed: {e}"));
            Err(e)
        }
    }
}
