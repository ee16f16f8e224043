//! Horizon Grid - data table and pagination components.
//!
//! Two framework-neutral building blocks for data-heavy dashboards:
//!
//! - [`pagination`]: the windowed page-marker computation with `...`
//!   placeholders, and a [`Paginator`](pagination::Paginator) strip control
//! - [`table`]: a generic [`Table<T>`](table::Table) with columns, sorting,
//!   selection, expansion, client or server-driven pagination and change
//!   notification through signals
//!
//! [`settings::GridSettings`] carries injectable presentation defaults, and
//! the core crate is re-exported as [`core`] for signals and controlled state.
//!
//! # Example
//!
//! ```
//! use horizon_grid::pagination::{PageMarker, compute_page_markers};
//!
//! let markers = compute_page_markers(5, 20, 2);
//! assert_eq!(markers.first(), Some(&PageMarker::Page(1)));
//! assert_eq!(markers[1], PageMarker::Dots);
//! assert_eq!(markers.last(), Some(&PageMarker::Page(20)));
//! ```

pub mod error;
pub mod pagination;
pub mod settings;
pub mod table;

pub use error::{Error, Result};

/// Signals, properties and logging targets.
pub mod core {
    pub use horizon_grid_core::*;
}
