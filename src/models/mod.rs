// src/models/mod.rs

//! Domain models for the newsroom crate.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod config;
mod content;
mod listing;
mod route;
mod sitemap;

// Re-export all public types
pub use config::{
    ApiConfig, Config, ENV_API_URL, ENV_ENVIRONMENT, ENV_SITE_URL, Environment, LoggingConfig,
    ServerConfig, SiteConfig, SitemapConfig, TickerConfig,
};
pub use content::{Article, Author, Category, Homepage, Tag};
pub use listing::{Listing, ListingShape};
pub use route::{Route, StaticPage};
pub use sitemap::{ChangeFrequency, SitemapEntry, render_xml};

#[cfg(test)]
pub(crate) use content::fixtures;
