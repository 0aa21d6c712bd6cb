//! # Pagination Model
//!
//! Computes which page links the pagination line shows: a window of pages
//! around the active one, margin pages at both ends, and break markers for
//! the gaps in between.

use std::collections::BTreeSet;

/// Number of pages shown around the active page
pub const PAGE_RANGE_DISPLAYED: u32 = 5;

/// Number of pages always shown at each end
pub const MARGIN_PAGES_DISPLAYED: u32 = 1;

/// Highest page the search endpoint will serve
pub const MAX_API_PAGE: u32 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Break,
}

/// Last page that can be requested for a response with `total_pages`
pub fn max_requestable_page(total_pages: u32) -> u32 {
    total_pages.clamp(1, MAX_API_PAGE)
}

/// Page links for `page_count` pages with `current` active (both 1-indexed)
pub fn page_items(page_count: u32, current: u32, range: u32, margin: u32) -> Vec<PageItem> {
    if page_count == 0 {
        return Vec::new();
    }

    let current = current.clamp(1, page_count);
    let range = range.clamp(1, page_count);

    let mut start = current.saturating_sub(range / 2).max(1);
    let mut end = start + range - 1;
    if end > page_count {
        end = page_count;
        start = end + 1 - range;
    }

    let mut pages: BTreeSet<u32> = (start..=end).collect();
    pages.extend(1..=margin.min(page_count));
    pages.extend(page_count.saturating_sub(margin) + 1..=page_count);

    let mut items = Vec::with_capacity(pages.len() + 2);
    let mut previous: Option<u32> = None;
    for page in pages {
        if let Some(prev) = previous {
            match page - prev {
                1 => {}
                // A gap of a single page shows that page instead of a break
                2 => items.push(PageItem::Page(prev + 1)),
                _ => items.push(PageItem::Break),
            }
        }
        items.push(PageItem::Page(page));
        previous = Some(page);
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Break, Page};

    fn items(count: u32, current: u32) -> Vec<PageItem> {
        page_items(count, current, PAGE_RANGE_DISPLAYED, MARGIN_PAGES_DISPLAYED)
    }

    #[test]
    fn few_pages_should_all_be_listed() {
        assert_eq!(items(3, 1), vec![Page(1), Page(2), Page(3)]);
    }

    #[test]
    fn first_page_should_show_leading_window() {
        assert_eq!(
            items(10, 1),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Break, Page(10)]
        );
    }

    #[test]
    fn middle_page_should_have_breaks_on_both_sides() {
        assert_eq!(
            items(20, 10),
            vec![
                Page(1),
                Break,
                Page(8),
                Page(9),
                Page(10),
                Page(11),
                Page(12),
                Break,
                Page(20)
            ]
        );
    }

    #[test]
    fn single_page_gap_should_show_page() {
        assert_eq!(
            items(10, 5),
            vec![
                Page(1),
                Page(2),
                Page(3),
                Page(4),
                Page(5),
                Page(6),
                Page(7),
                Break,
                Page(10)
            ]
        );
    }

    #[test]
    fn last_page_should_show_trailing_window() {
        assert_eq!(
            items(10, 10),
            vec![Page(1), Break, Page(6), Page(7), Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn zero_pages_should_yield_nothing() {
        assert!(items(0, 1).is_empty());
    }

    #[test]
    fn requestable_page_should_be_capped() {
        assert_eq!(max_requestable_page(3), 3);
        assert_eq!(max_requestable_page(0), 1);
        assert_eq!(max_requestable_page(1200), MAX_API_PAGE);
    }
}
