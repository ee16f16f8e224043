//! Range paginator.
//!
//! - [`compute_page_markers`]: the pure marker computation
//! - [`Paginator`]: a page strip control with Previous/Next buttons,
//!   navigation and change notification
//! - [`ShowingRange`]: the "Showing X-Y of Z" summary

mod paginator;
mod range;

pub use paginator::{DEFAULT_PAGE_SIZE, PageButton, Paginator, ShowingRange, page_count};
pub use range::{DEFAULT_SIBLING_COUNT, PageMarker, compute_page_markers, slot_budget};
