//! Page strip control.
//!
//! [`Paginator`] pairs the marker sequence from
//! [`compute_page_markers`](super::compute_page_markers) with Previous/Next
//! buttons, the "Showing X-Y of Z" summary and page-change notification.
//!
//! # Example
//!
//! ```
//! use horizon_grid::pagination::{PageButton, Paginator};
//!
//! let paginator = Paginator::new(95).with_page_size(10);
//! assert_eq!(paginator.page_count(), 10);
//!
//! paginator.page_changed.connect(|page| println!("now on page {page}"));
//! assert!(paginator.next());
//! assert_eq!(paginator.current_page(), 2);
//! assert_eq!(paginator.showing_range().to_string(), "Showing 11-20 of 95");
//!
//! let buttons = paginator.buttons();
//! assert!(matches!(buttons[0], PageButton::Previous { target: Some(1) }));
//! ```

use std::fmt;

use horizon_grid_core::logging::targets;
use horizon_grid_core::{Property, Signal};

use super::range::{DEFAULT_SIBLING_COUNT, PageMarker, compute_page_markers, slot_budget};

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Number of pages needed for `total_rows` rows.
///
/// Returns 0 when there are no rows or `page_size` is 0.
pub fn page_count(total_rows: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_rows.div_ceil(page_size)
}

/// One button of a rendered page strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageButton {
    /// Go to the previous page. `target` is `None` on the first page.
    Previous { target: Option<usize> },
    /// A numbered page.
    Page { page: usize, current: bool },
    /// Hidden pages. Always inert.
    Dots,
    /// Go to the next page. `target` is `None` on the last page.
    Next { target: Option<usize> },
}

impl PageButton {
    /// The page this button navigates to, if any.
    pub fn target_page(&self) -> Option<usize> {
        match self {
            PageButton::Previous { target } | PageButton::Next { target } => *target,
            PageButton::Page { page, .. } => Some(*page),
            PageButton::Dots => None,
        }
    }

    /// Returns `true` if activating the button does nothing.
    pub fn is_disabled(&self) -> bool {
        self.target_page().is_none()
    }

    /// Returns `true` for the button of the current page.
    pub fn is_current(&self) -> bool {
        matches!(self, PageButton::Page { current: true, .. })
    }

    /// Text label of the button.
    pub fn label(&self) -> String {
        match self {
            PageButton::Previous { .. } => "Previous".to_string(),
            PageButton::Page { page, .. } => page.to_string(),
            PageButton::Dots => PageMarker::Dots.to_string(),
            PageButton::Next { .. } => "Next".to_string(),
        }
    }
}

/// The 1-based row range shown on the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowingRange {
    /// First row on the page.
    pub start: usize,
    /// Last row on the page.
    pub end: usize,
    /// Total row count, or `None` when only a lower bound is known.
    pub total: Option<usize>,
}

impl ShowingRange {
    /// Compute the range for `current_page` (1-based).
    ///
    /// The end is capped at `total_rows`. Page 1 always starts at row 1, so
    /// an empty result set reads `1-0`.
    pub fn compute(current_page: usize, page_size: usize, total_rows: usize) -> (usize, usize) {
        let current = current_page.max(1);
        if current == 1 {
            return (1, page_size.min(total_rows));
        }
        let start = (current - 1).saturating_mul(page_size).saturating_add(1);
        let end = current.saturating_mul(page_size).min(total_rows);
        (start, end)
    }
}

impl fmt::Display for ShowingRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Showing {}-{}", self.start, self.end)?;
        if let Some(total) = self.total {
            write!(f, " of {total}")?;
        }
        Ok(())
    }
}

/// A page strip control over a known (or approximate) row count.
///
/// The paginator keeps its current page and emits
/// [`page_changed`](Self::page_changed) with the new 1-based page whenever
/// navigation actually moves to another page.
///
/// # Approximate mode
///
/// When the caller only knows a lower bound on the row count, the strip hints
/// that more pages may follow by ending with a dots marker, and the summary
/// omits the total.
pub struct Paginator {
    current_page: Property<usize>,
    total_rows: usize,
    page_size: usize,
    sibling_count: usize,
    approximate: bool,

    /// Emitted with the new 1-based page after navigation.
    pub page_changed: Signal<usize>,
}

impl Paginator {
    /// Create a paginator over `total_rows` rows, positioned on page 1.
    pub fn new(total_rows: usize) -> Self {
        Self {
            current_page: Property::new(1),
            total_rows,
            page_size: DEFAULT_PAGE_SIZE,
            sibling_count: DEFAULT_SIBLING_COUNT,
            approximate: false,
            page_changed: Signal::new(),
        }
    }

    /// Set the page size using builder pattern.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the sibling count using builder pattern.
    pub fn with_sibling_count(mut self, sibling_count: usize) -> Self {
        self.sibling_count = sibling_count;
        self
    }

    /// Set the initial 1-based page using builder pattern.
    pub fn with_current_page(self, page: usize) -> Self {
        self.current_page.set_silent(page.max(1));
        self
    }

    /// Enable approximate mode using builder pattern.
    pub fn with_approximate(mut self, approximate: bool) -> Self {
        self.approximate = approximate;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The current 1-based page.
    pub fn current_page(&self) -> usize {
        self.current_page.get()
    }

    /// Total (or lower-bound) row count.
    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    /// Update the row count. The current page is kept within range.
    pub fn set_total_rows(&mut self, total_rows: usize) {
        self.total_rows = total_rows;
        self.clamp_current_page();
    }

    /// Rows per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Update the page size. The current page is kept within range.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size;
        self.clamp_current_page();
    }

    /// Pages shown on each side of the current page.
    pub fn sibling_count(&self) -> usize {
        self.sibling_count
    }

    /// Returns `true` in approximate mode.
    pub fn is_approximate(&self) -> bool {
        self.approximate
    }

    /// Number of pages.
    pub fn page_count(&self) -> usize {
        page_count(self.total_rows, self.page_size)
    }

    /// Returns `false` when there is nothing to paginate.
    pub fn is_visible(&self) -> bool {
        self.page_count() > 0
    }

    /// Returns `true` when more rows than counted are likely to exist.
    ///
    /// Only meaningful in approximate mode: the count fills every page
    /// exactly, so the source probably stopped counting.
    pub fn likely_more_pages(&self) -> bool {
        self.approximate && self.total_rows >= self.page_count().saturating_mul(self.page_size)
    }

    // =========================================================================
    // Strip
    // =========================================================================

    /// Page markers for the current state.
    pub fn markers(&self) -> Vec<PageMarker> {
        let mut markers =
            compute_page_markers(self.current_page(), self.page_count(), self.sibling_count);
        // Collapsed strips already use the whole budget and end with the last page.
        if self.likely_more_pages()
            && !markers.is_empty()
            && markers.len() < slot_budget(self.sibling_count)
        {
            markers.push(PageMarker::Dots);
        }
        markers
    }

    /// The full strip: Previous, markers, Next.
    pub fn buttons(&self) -> Vec<PageButton> {
        let current = self.current_page();
        let mut buttons = Vec::with_capacity(slot_budget(self.sibling_count).saturating_add(2));
        buttons.push(PageButton::Previous {
            target: self.previous_target(),
        });
        buttons.extend(self.markers().into_iter().map(|marker| match marker {
            PageMarker::Page(page) => PageButton::Page {
                page,
                current: page == current,
            },
            PageMarker::Dots => PageButton::Dots,
        }));
        buttons.push(PageButton::Next {
            target: self.next_target(),
        });
        buttons
    }

    /// The row range shown on the current page.
    pub fn showing_range(&self) -> ShowingRange {
        let (start, end) = ShowingRange::compute(self.current_page(), self.page_size, self.total_rows);
        ShowingRange {
            start,
            end,
            total: (!self.approximate).then_some(self.total_rows),
        }
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Move to `page`, clamped into the valid range.
    ///
    /// Returns `true` and emits `page_changed` if the page changed.
    pub fn select_page(&self, page: usize) -> bool {
        let page = page.clamp(1, self.page_count().max(1));
        if self.current_page.set(page) {
            tracing::debug!(target: targets::PAGINATION, page, "page changed");
            self.page_changed.emit(page);
            true
        } else {
            false
        }
    }

    /// Go to the previous page. Does nothing on the first page.
    pub fn previous(&self) -> bool {
        match self.previous_target() {
            Some(page) => self.select_page(page),
            None => false,
        }
    }

    /// Go to the next page. Does nothing on the last page.
    pub fn next(&self) -> bool {
        match self.next_target() {
            Some(page) => self.select_page(page),
            None => false,
        }
    }

    /// Activate a strip button. Disabled buttons are inert.
    pub fn activate(&self, button: &PageButton) -> bool {
        match button.target_page() {
            Some(page) => self.select_page(page),
            None => {
                tracing::trace!(target: targets::PAGINATION, ?button, "inert button");
                false
            }
        }
    }

    fn previous_target(&self) -> Option<usize> {
        let current = self.current_page();
        (current > 1).then(|| current - 1)
    }

    fn next_target(&self) -> Option<usize> {
        let current = self.current_page();
        (current < self.page_count()).then(|| current + 1)
    }

    fn clamp_current_page(&self) {
        let max = self.page_count().max(1);
        if self.current_page() > max {
            self.current_page.set_silent(max);
        }
    }
}

impl fmt::Debug for Paginator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Paginator")
            .field("current_page", &self.current_page())
            .field("total_rows", &self.total_rows)
            .field("page_size", &self.page_size)
            .field("sibling_count", &self.sibling_count)
            .field("approximate", &self.approximate)
            .finish()
    }
}

static_assertions::assert_impl_all!(Paginator: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(1, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(11, 0), 0);
    }

    #[test]
    fn test_hidden_without_rows() {
        let paginator = Paginator::new(0);
        assert!(!paginator.is_visible());
        assert!(paginator.markers().is_empty());
    }

    #[test]
    fn test_showing_range_pages() {
        assert_eq!(ShowingRange::compute(1, 10, 95), (1, 10));
        assert_eq!(ShowingRange::compute(3, 10, 95), (21, 30));
        assert_eq!(ShowingRange::compute(10, 10, 95), (91, 95));
        assert_eq!(ShowingRange::compute(1, 10, 4), (1, 4));
        assert_eq!(ShowingRange::compute(1, 10, 0), (1, 0));
    }

    #[test]
    fn test_showing_text() {
        let paginator = Paginator::new(95).with_current_page(10);
        assert_eq!(paginator.showing_range().to_string(), "Showing 91-95 of 95");

        let approximate = Paginator::new(100).with_approximate(true);
        assert_eq!(approximate.showing_range().to_string(), "Showing 1-10");
    }

    #[test]
    fn test_navigation_emits_only_on_change() {
        let paginator = Paginator::new(30);
        let emitted = Arc::new(AtomicUsize::new(0));
        let emitted_clone = emitted.clone();
        paginator.page_changed.connect(move |_| {
            emitted_clone.fetch_add(1, Ordering::SeqCst);
        });

        assert!(!paginator.previous());
        assert!(paginator.next());
        assert!(paginator.next());
        assert!(!paginator.next());
        assert_eq!(paginator.current_page(), 3);
        assert_eq!(emitted.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_select_page_clamps() {
        let paginator = Paginator::new(30);
        assert!(paginator.select_page(99));
        assert_eq!(paginator.current_page(), 3);
        assert!(paginator.select_page(0));
        assert_eq!(paginator.current_page(), 1);
    }

    #[test]
    fn test_dots_button_is_inert() {
        let paginator = Paginator::new(200).with_current_page(10);
        let dots: Vec<_> = paginator
            .buttons()
            .into_iter()
            .filter(|b| *b == PageButton::Dots)
            .collect();
        assert_eq!(dots.len(), 2);
        assert!(dots.iter().all(PageButton::is_disabled));
        assert!(!paginator.activate(&PageButton::Dots));
        assert_eq!(paginator.current_page(), 10);
    }

    #[test]
    fn test_current_button_marked() {
        let paginator = Paginator::new(50).with_current_page(3);
        let current: Vec<_> = paginator
            .buttons()
            .into_iter()
            .filter(PageButton::is_current)
            .collect();
        assert_eq!(current, vec![PageButton::Page { page: 3, current: true }]);
    }

    #[test]
    fn test_approximate_hint_dots() {
        // 40 rows fill 4 pages exactly, so more probably exist.
        let paginator = Paginator::new(40).with_approximate(true);
        assert!(paginator.likely_more_pages());
        let markers = paginator.markers();
        assert_eq!(markers.last(), Some(&PageMarker::Dots));
        assert_eq!(markers.len(), 5);

        let partial = Paginator::new(41).with_approximate(true);
        assert!(!partial.likely_more_pages());
        assert_eq!(partial.markers().last(), Some(&PageMarker::Page(5)));
    }

    #[test]
    fn test_approximate_hint_respects_budget() {
        let paginator = Paginator::new(1000).with_approximate(true).with_current_page(50);
        let markers = paginator.markers();
        assert_eq!(markers.len(), slot_budget(DEFAULT_SIBLING_COUNT));
        assert_eq!(markers.iter().filter(|m| m.is_dots()).count(), 2);
    }

    #[test]
    fn test_set_total_rows_clamps_current_page() {
        let mut paginator = Paginator::new(100).with_current_page(10);
        paginator.set_total_rows(25);
        assert_eq!(paginator.current_page(), 3);
        paginator.set_page_size(50);
        assert_eq!(paginator.current_page(), 1);
    }

    #[test]
    fn test_button_labels() {
        let paginator = Paginator::new(20);
        let labels: Vec<_> = paginator.buttons().iter().map(PageButton::label).collect();
        assert_eq!(labels, vec!["Previous", "1", "2", "Next"]);
    }
}
