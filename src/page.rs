//! Pagination arithmetic for result display.
//!
//! Pure helpers shared by anything rendering result lists: fixed page size,
//! 1-based page numbers, and the windowed row of page buttons shown in
//! navigation. Out-of-range pages are rejected rather than wrapped.

use std::ops::Range;

/// Results shown per page.
pub const RESULTS_PER_PAGE: usize = 50;

/// Maximum numbered page buttons in the navigation window.
pub const MAX_PAGE_BUTTONS: usize = 7;

/// Number of pages needed for `result_count` results. Zero results means
/// zero pages.
pub fn total_pages(result_count: usize) -> usize {
    result_count.div_ceil(RESULTS_PER_PAGE)
}

/// The index range of results on a 1-based `page`, or `None` when the page
/// is out of range (page 0, or past the last page).
pub fn page_bounds(page: usize, result_count: usize) -> Option<Range<usize>> {
    if page == 0 || page > total_pages(result_count) {
        return None;
    }
    let start = (page - 1) * RESULTS_PER_PAGE;
    Some(start..result_count.min(start + RESULTS_PER_PAGE))
}

/// The inclusive 1-based range of numbered page buttons around `current`.
///
/// The window is centered on `current`, clamped to `1..=total`, then
/// re-anchored at the right edge so it always spans [`MAX_PAGE_BUTTONS`]
/// pages when that many exist. Callers render a leading "1 …" when the
/// window starts past the first page and a trailing "… total" when it ends
/// before the last; both are implied by the returned bounds.
pub fn button_window(current: usize, total: usize) -> (usize, usize) {
    if total == 0 {
        return (1, 0);
    }
    let start = current.saturating_sub(MAX_PAGE_BUTTONS / 2).max(1);
    let end = (start + MAX_PAGE_BUTTONS - 1).min(total);
    let start = (end + 1).saturating_sub(MAX_PAGE_BUTTONS).max(1);
    (start, end)
}
