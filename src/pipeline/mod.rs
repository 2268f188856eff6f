//! Pipeline entry points for newsroom operations.
//!
//! - `run_sitemap`: Aggregate feeds and write `sitemap.xml`
//! - `run_robots`: Write `robots.txt`
//! - `run_page`: Resolve a single page route
//! - `run_ticker`: Rotate the homepage's breaking news headlines
//! - `run_validate`: Check the effective configuration

pub mod page;
pub mod robots;
pub mod sitemap;
pub mod ticker;
pub mod validate;

pub use page::run_page;
pub use robots::run_robots;
pub use sitemap::run_sitemap;
pub use ticker::run_ticker;
pub use validate::run_validate;
