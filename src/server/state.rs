use std::sync::Arc;

use crate::error::Result;
use crate::models::Config;
use crate::services::{ContentClient, PageService, RobotsPolicy};

/// Shared state of the HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub client: ContentClient,
    pub pages: Arc<PageService>,
    /// Rendered once; the policy only depends on configuration
    pub robots: Arc<String>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let client = ContentClient::new(&config.api)?;
        Ok(Self::with_client(config, client))
    }

    pub fn with_client(config: Config, client: ContentClient) -> Self {
        let pages = PageService::new(client.clone(), config.site.clone());
        let robots = RobotsPolicy::for_site(&config.site).render();
        Self {
            config: Arc::new(config),
            client,
            pages: Arc::new(pages),
            robots: Arc::new(robots),
        }
    }
}
