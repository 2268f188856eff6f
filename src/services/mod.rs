//! Service layer for the newsroom application.
//!
//! This module contains the business logic for:
//! - Content API access (`ContentClient`)
//! - Sitemap aggregation (`SitemapAggregator`)
//! - Breaking news rotation (`BreakingNewsTicker`)
//! - Page resolution and SEO metadata (`PageService`, `SeoBuilder`)
//! - Crawler policy (`RobotsPolicy`)

pub mod content;
pub mod pages;
pub mod robots;
pub mod seo;
pub mod sitemap;
pub mod ticker;

pub use content::{ArticleQuery, ContentClient, Fallback, Freshness};
pub use pages::{Page, PageBody, PageService};
pub use robots::RobotsPolicy;
pub use seo::{PageMeta, SeoBuilder};
pub use sitemap::{FeedStatus, SitemapAggregator, SitemapOutcome};
pub use ticker::BreakingNewsTicker;
