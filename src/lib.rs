// src/lib.rs

//! Newsroom site data library
//!
//! Fetches editorial content from the content API and turns it into page
//! data, SEO metadata, a sitemap and a robots policy.

pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
#[cfg(feature = "server")]
pub mod server;
pub mod services;
pub mod storage;
pub mod utils;
