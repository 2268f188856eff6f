// src/config.rs

//! Configuration loading utilities.
//!
//! Resolves the effective configuration of a run: `config.toml` from the
//! storage directory (defaults when absent), overlaid with environment
//! variables.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::Config;

/// File name of the configuration inside the storage directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Path of the configuration file inside `storage_dir`.
pub fn config_path(storage_dir: &Path) -> PathBuf {
    storage_dir.join(CONFIG_FILE)
}

/// Load the effective configuration.
///
/// Falls back to defaults if the file is missing or invalid.
pub fn load_config(storage_dir: &Path) -> Config {
    let path = config_path(storage_dir);
    let mut config = if path.exists() {
        Config::load_or_default(&path)
    } else {
        log::debug!("No config at {}, using defaults", path.display());
        Config::default()
    };
    config.apply_env();
    config
}

/// Load the configuration strictly: a present but unreadable file is an error,
/// and the result must pass validation.
pub fn load_validated(storage_dir: &Path) -> Result<Config> {
    let path = config_path(storage_dir);
    let mut config = if path.exists() {
        Config::load(&path)?
    } else {
        Config::default()
    };
    config.apply_env();
    config.validate()?;
    Ok(config)
}
