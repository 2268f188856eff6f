// src/utils/pagination.rs

//! Page math for listing pages.

use serde::Serialize;

/// Fixed number of articles per listing page.
pub const PAGE_SIZE: u64 = 12;

/// Number of pages needed for `count` items: `ceil(count / PAGE_SIZE)`.
pub fn page_count(count: u64) -> u64 {
    count.div_ceil(PAGE_SIZE)
}

/// Parse a `page` query value.
///
/// Missing, non-numeric, zero or negative input all yield page 1. Pages past
/// the last one are kept as requested; the API answers them with an empty list.
pub fn parse_page(raw: Option<&str>) -> u64 {
    raw.and_then(|s| s.trim().parse::<u64>().ok())
        .filter(|&page| page >= 1)
        .unwrap_or(1)
}

/// Zero-based offset of the first item on `page`.
pub fn offset(page: u64) -> u64 {
    page.saturating_sub(1) * PAGE_SIZE
}

/// Pagination state for one rendered listing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    /// Requested page (1-based)
    pub current: u64,
    /// Total number of pages
    pub page_count: u64,
    /// Total number of items across all pages
    pub total: u64,
    /// Zero-based index of the first item on the current page
    pub offset: u64,
}

impl Pagination {
    pub fn new(current: u64, total: u64) -> Self {
        let current = current.max(1);
        Self {
            current,
            page_count: page_count(total),
            total,
            offset: offset(current),
        }
    }

    /// Whether a "previous" link renders.
    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    /// Whether a "next" link renders.
    pub fn has_next(&self) -> bool {
        self.current < self.page_count
    }

    /// Page numbers offered for direct navigation.
    pub fn pages(&self) -> impl Iterator<Item = u64> {
        1..=self.page_count
    }

    /// Controls only render when there is more than one page.
    pub fn is_visible(&self) -> bool {
        self.page_count > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count_is_ceiling() {
        for count in 0..200u64 {
            let expected = (count + PAGE_SIZE - 1) / PAGE_SIZE;
            assert_eq!(page_count(count), expected, "count={count}");
        }
        assert_eq!(page_count(0), 0);
        assert_eq!(page_count(12), 1);
        assert_eq!(page_count(13), 2);
        assert_eq!(page_count(25), 3);
    }

    #[test]
    fn test_parse_page_defaults_to_one() {
        assert_eq!(parse_page(None), 1);
        assert_eq!(parse_page(Some("")), 1);
        assert_eq!(parse_page(Some("abc")), 1);
        assert_eq!(parse_page(Some("2abc")), 1);
        assert_eq!(parse_page(Some("-3")), 1);
        assert_eq!(parse_page(Some("0")), 1);
        assert_eq!(parse_page(Some("1.5")), 1);
        assert_eq!(parse_page(Some(" 4 ")), 4);
        assert_eq!(parse_page(Some("99")), 99);
    }

    #[test]
    fn test_offset() {
        assert_eq!(offset(1), 0);
        assert_eq!(offset(3), 24);
        assert_eq!(offset(0), 0);
    }

    #[test]
    fn test_links_for_middle_page() {
        let p = Pagination::new(2, 25);
        assert_eq!(p.page_count, 3);
        assert!(p.has_previous());
        assert!(p.has_next());
        assert_eq!(p.pages().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert!(p.is_visible());
    }

    #[test]
    fn test_first_and_last_page() {
        let first = Pagination::new(1, 25);
        assert!(!first.has_previous());
        assert!(first.has_next());

        let last = Pagination::new(3, 25);
        assert!(last.has_previous());
        assert!(!last.has_next());
    }

    #[test]
    fn test_zero_count_renders_nothing() {
        let p = Pagination::new(1, 0);
        assert_eq!(p.page_count, 0);
        assert!(!p.is_visible());
        assert!(!p.has_next());
        assert!(!p.has_previous());
        assert_eq!(p.pages().count(), 0);
        assert_eq!(p.offset, 0);
    }

    #[test]
    fn test_page_past_end_is_kept() {
        let p = Pagination::new(4, 25);
        assert_eq!(p.current, 4);
        assert!(!p.has_next());
        assert!(p.has_previous());
        assert_eq!(p.offset, 36);
    }
}
