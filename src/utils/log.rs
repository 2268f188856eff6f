// src/utils/log.rs

//! Pipeline layout for CLI runs: headers, numbered steps, indented items and
//! summaries.
//!
//! Every line goes through the `log` facade, so the installed logger decides
//! formatting and filtering. Library code calls the `log` macros directly.

use log::LevelFilter;

/// Width of the rule drawn around headers.
const RULE_WIDTH: usize = 60;

/// Parse a configured level name. Unknown names mean `Info`.
pub fn level_filter(level: &str) -> LevelFilter {
    level.trim().parse().unwrap_or(LevelFilter::Info)
}

/// Apply a configured level (`"debug"`, `"warn"`, ...) to the `log` facade.
pub fn init(level: &str) {
    log::set_max_level(level_filter(level));
}

pub fn debug(message: &str) {
    log::debug!("{message}");
}

pub fn info(message: &str) {
    log::info!("{message}");
}

pub fn warn(message: &str) {
    log::warn!("{message}");
}

pub fn error(message: &str) {
    log::error!("{message}");
}

/// A finished stage, marked with a check.
pub fn success(message: &str) {
    log::info!("✓ {message}");
}

/// `[2/3] message`
pub fn step(step_num: usize, total: usize, message: &str) {
    log::info!("{}", step_line(step_num, total, message));
}

pub fn header(title: &str) {
    let rule = "═".repeat(RULE_WIDTH);
    log::info!("{rule}");
    log::info!("  {title}");
    log::info!("{rule}");
}

pub fn sub_item(message: &str) {
    log::info!("    {message}");
}

/// Titled block of aligned `key: value` lines.
pub fn summary(title: &str, items: &[(&str, String)]) {
    log::info!("[SUMMARY] {title}");
    for line in summary_lines(items) {
        log::info!("{line}");
    }
}

fn step_line(step_num: usize, total: usize, message: &str) -> String {
    format!("[{step_num}/{total}] {message}")
}

fn summary_lines(items: &[(&str, String)]) -> Vec<String> {
    let width = items.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    items
        .iter()
        .map(|(key, value)| format!("    {:<width$}  {value}", format!("{key}:"), width = width + 1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_filter() {
        assert_eq!(level_filter("debug"), LevelFilter::Debug);
        assert_eq!(level_filter(" WARN "), LevelFilter::Warn);
        assert_eq!(level_filter("off"), LevelFilter::Off);
        assert_eq!(level_filter("loud"), LevelFilter::Info);
    }

    #[test]
    fn test_step_line() {
        assert_eq!(step_line(2, 3, "Fetching feeds"), "[2/3] Fetching feeds");
    }

    #[test]
    fn test_summary_aligns_values() {
        let lines = summary_lines(&[("Total", "9".to_string()), ("Static", "6".to_string())]);
        assert_eq!(lines, vec!["    Total:   9", "    Static:  6"]);
    }
}
