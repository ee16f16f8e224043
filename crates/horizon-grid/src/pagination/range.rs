//! Page marker range computation.
//!
//! [`compute_page_markers`] turns a current page, a page count and a sibling
//! count into the sequence of page numbers and [`PageMarker::Dots`]
//! placeholders shown between the Previous and Next controls of a page strip.
//!
//! # Example
//!
//! ```
//! use horizon_grid::pagination::{compute_page_markers, PageMarker};
//!
//! let markers = compute_page_markers(5, 20, 2);
//! assert_eq!(markers[0], PageMarker::Page(1));
//! assert_eq!(markers[1], PageMarker::Dots);
//! assert_eq!(markers.last(), Some(&PageMarker::Page(20)));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default number of pages shown on each side of the current page.
pub const DEFAULT_SIBLING_COUNT: usize = 2;

/// A single unit of a page strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PageMarker {
    /// A 1-based page number.
    Page(usize),
    /// A collapsed run of hidden pages.
    Dots,
}

impl PageMarker {
    /// The page number, or `None` for dots.
    pub fn page(&self) -> Option<usize> {
        match self {
            PageMarker::Page(page) => Some(*page),
            PageMarker::Dots => None,
        }
    }

    /// Returns `true` for the dots placeholder.
    pub fn is_dots(&self) -> bool {
        matches!(self, PageMarker::Dots)
    }
}

impl fmt::Display for PageMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageMarker::Page(page) => write!(f, "{page}"),
            PageMarker::Dots => f.write_str("..."),
        }
    }
}

/// Number of marker slots a strip may use for the given sibling count.
///
/// Current page, its siblings on both sides, first, last and two dots.
pub fn slot_budget(sibling_count: usize) -> usize {
    sibling_count.saturating_mul(2).saturating_add(5)
}

fn pages(start: usize, end: usize) -> impl Iterator<Item = PageMarker> {
    (start..=end).map(PageMarker::Page)
}

/// Compute the page markers for a page strip.
///
/// `current_page` is 1-based and is clamped into `[1, total_page_count]`.
/// A `total_page_count` of 0 yields an empty sequence.
///
/// The result is ascending once dots are removed, never repeats a page,
/// holds at most two dots and at most [`slot_budget`] markers.
pub fn compute_page_markers(
    current_page: usize,
    total_page_count: usize,
    sibling_count: usize,
) -> Vec<PageMarker> {
    if total_page_count == 0 {
        return Vec::new();
    }

    let budget = slot_budget(sibling_count);
    if total_page_count <= budget {
        return pages(1, total_page_count).collect();
    }

    let current = current_page.clamp(1, total_page_count);
    let left_sibling = current.saturating_sub(sibling_count).max(1);
    let right_sibling = current
        .saturating_add(sibling_count)
        .min(total_page_count);

    let show_left_dots = left_sibling > 2;
    let show_right_dots = right_sibling < total_page_count - 1;

    // Leading or trailing block that fills the budget minus first/last and one dots.
    let block = sibling_count.saturating_mul(2).saturating_add(3);

    match (show_left_dots, show_right_dots) {
        (false, true) => pages(1, block)
            .chain([PageMarker::Dots, PageMarker::Page(total_page_count)])
            .collect(),
        (true, false) => [PageMarker::Page(1), PageMarker::Dots]
            .into_iter()
            .chain(pages(total_page_count - (block - 1), total_page_count))
            .collect(),
        (true, true) => [PageMarker::Page(1), PageMarker::Dots]
            .into_iter()
            .chain(pages(left_sibling, right_sibling))
            .chain([PageMarker::Dots, PageMarker::Page(total_page_count)])
            .collect(),
        (false, false) => pages(1, total_page_count).collect(),
    }
}
