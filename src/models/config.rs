//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Environment variable holding the content API base URL.
pub const ENV_API_URL: &str = "NEWSROOM_API_URL";
/// Environment variable selecting `production` or `development`.
pub const ENV_ENVIRONMENT: &str = "NEWSROOM_ENV";
/// Environment variable overriding the public site URL.
pub const ENV_SITE_URL: &str = "NEWSROOM_SITE_URL";

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Content API connection settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Public site identity
    #[serde(default)]
    pub site: SiteConfig,

    /// Sitemap generation settings
    #[serde(default)]
    pub sitemap: SitemapConfig,

    /// Breaking news ticker settings
    #[serde(default)]
    pub ticker: TickerConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Overlay settings from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_vars(|key| std::env::var(key).ok());
    }

    /// Overlay settings from an arbitrary variable lookup.
    pub fn apply_vars(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = non_empty(ENV_API_URL) {
            self.api.base_url = Some(url.trim().to_string());
        }
        if let Some(env) = non_empty(ENV_ENVIRONMENT) {
            self.site.environment = Environment::parse(&env);
        }
        if let Some(url) = non_empty(ENV_SITE_URL) {
            self.site.base_url = url.trim().to_string();
        }
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.api.user_agent.trim().is_empty() {
            return Err(AppError::validation("api.user_agent is empty"));
        }
        if self.api.timeout_secs == 0 {
            return Err(AppError::validation("api.timeout_secs must be > 0"));
        }
        url::Url::parse(self.api.base_url())
            .map_err(|e| AppError::validation(format!("api.base_url is invalid: {e}")))?;
        url::Url::parse(&self.site.base_url)
            .map_err(|e| AppError::validation(format!("site.base_url is invalid: {e}")))?;
        if self.site.name.trim().is_empty() {
            return Err(AppError::validation("site.name is empty"));
        }
        if self.sitemap.feed_timeout_secs == 0 {
            return Err(AppError::validation(
                "sitemap.feed_timeout_secs must be > 0",
            ));
        }
        if self.sitemap.article_limit == 0 {
            return Err(AppError::validation("sitemap.article_limit must be > 0"));
        }
        if self.ticker.interval_ms == 0 {
            return Err(AppError::validation("ticker.interval_ms must be > 0"));
        }
        Ok(())
    }
}

/// Content API connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the content API; unset means the local placeholder
    #[serde(default)]
    pub base_url: Option<String>,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// The effective base URL, falling back to the local placeholder.
    pub fn base_url(&self) -> &str {
        self.configured_url().unwrap_or(defaults::LOCAL_API_URL)
    }

    /// Whether a non-blank base URL was explicitly configured.
    pub fn is_configured(&self) -> bool {
        self.configured_url().is_some()
    }

    fn configured_url(&self) -> Option<&str> {
        self.base_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    /// Parse an environment name; anything but "production"/"prod" is development.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }
}

/// Public site identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Publication name used in titles and structured data
    #[serde(default = "defaults::site_name")]
    pub name: String,

    /// Public origin of the website (no trailing slash needed)
    #[serde(default = "defaults::site_url")]
    pub base_url: String,

    /// Deployment environment
    #[serde(default)]
    pub environment: Environment,
}

impl SiteConfig {
    /// Join a root-relative path onto the public origin.
    pub fn url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        match path {
            "" | "/" => base.to_string(),
            p if p.starts_with('/') => format!("{base}{p}"),
            p => format!("{base}/{p}"),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: defaults::site_name(),
            base_url: defaults::site_url(),
            environment: Environment::default(),
        }
    }
}

/// Sitemap generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SitemapConfig {
    /// Maximum number of articles requested for the sitemap
    #[serde(default = "defaults::article_limit")]
    pub article_limit: u32,

    /// Timeout applied to each sitemap feed in seconds
    #[serde(default = "defaults::feed_timeout")]
    pub feed_timeout_secs: u64,

    /// Output file name, relative to the storage directory
    #[serde(default = "defaults::sitemap_file")]
    pub file_name: String,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            article_limit: defaults::article_limit(),
            feed_timeout_secs: defaults::feed_timeout(),
            file_name: defaults::sitemap_file(),
        }
    }
}

/// Breaking news ticker settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickerConfig {
    /// Rotation interval in milliseconds
    #[serde(default = "defaults::ticker_interval")]
    pub interval_ms: u64,
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            interval_ms: defaults::ticker_interval(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum level for operator output (debug, info, warn, error)
    #[serde(default = "defaults::log_level")]
    pub level: String,

    /// Print per-feed details while generating documents
    #[serde(default)]
    pub show_progress: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
            show_progress: false,
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Socket address to bind
    #[serde(default = "defaults::bind_addr")]
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: defaults::bind_addr(),
        }
    }
}

mod defaults {
    pub const LOCAL_API_URL: &str = "http://localhost:8000/api";

    // API defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; newsroom/0.1)".into()
    }
    pub fn timeout() -> u64 {
        30
    }

    // Site defaults
    pub fn site_name() -> String {
        "The Central Report".into()
    }
    pub fn site_url() -> String {
        "https://centralsreport.com".into()
    }

    // Sitemap defaults
    pub fn article_limit() -> u32 {
        1000
    }
    pub fn feed_timeout() -> u64 {
        10
    }
    pub fn sitemap_file() -> String {
        "sitemap.xml".into()
    }

    pub fn ticker_interval() -> u64 {
        4000
    }

    pub fn log_level() -> String {
        "info".into()
    }

    pub fn bind_addr() -> String {
        "0.0.0.0:3000".into()
    }
}
