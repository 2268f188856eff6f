// src/pipeline/ticker.rs

use crate::error::Result;
use crate::models::{Config, TickerConfig};
use crate::services::{BreakingNewsTicker, ContentClient, Fallback};
use crate::utils::log;

/// Rotate the homepage's breaking news headlines for `ticks` intervals.
///
/// Returns every headline shown, starting with the initial one.
pub async fn run_ticker(config: &Config, client: ContentClient, ticks: usize) -> Result<Vec<String>> {
    log::header("Breaking news");

    let homepage = client.homepage().await.or_empty("homepage");
    let headlines: Vec<String> = homepage
        .breaking_news
        .into_iter()
        .map(|article| article.title)
        .collect();

    log::info(&format!(
        "{} headlines, rotating every {}ms",
        headlines.len(),
        config.ticker.interval_ms
    ));
    Ok(rotate(headlines, &config.ticker, ticks).await)
}

/// Drive a ticker over `headlines` and collect what it shows.
pub async fn rotate(headlines: Vec<String>, config: &TickerConfig, ticks: usize) -> Vec<String> {
    let ticker = BreakingNewsTicker::from_config(headlines, config);
    let mut rx = ticker.subscribe();
    let mut shown = Vec::new();

    let Some(first) = ticker.current() else {
        log::warn("No breaking news");
        return shown;
    };
    log::sub_item(&format!("[0] {first}"));
    shown.push(first.clone());

    if !ticker.is_running() {
        return shown;
    }

    for _ in 0..ticks {
        if rx.changed().await.is_err() {
            break;
        }
        let index = *rx.borrow_and_update();
        if let Some(headline) = ticker.items().get(index) {
            log::sub_item(&format!("[{index}] {headline}"));
            shown.push(headline.clone());
        }
    }

    shown
}
