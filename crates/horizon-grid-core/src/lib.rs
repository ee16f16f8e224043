//! Core systems for Horizon Grid.
//!
//! This crate provides the foundational pieces shared by the grid components:
//!
//! - **Signal/Slot System**: Type-safe change notification
//! - **Property System**: Values with change detection
//! - **Controlled State**: State owned either by a component or by its caller
//! - **Logging**: Target names for `tracing` filters
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_grid_core::Signal;
//!
//! let selection_changed = Signal::<Vec<String>>::new();
//!
//! let conn_id = selection_changed.connect(|ids| {
//!     println!("{} rows selected", ids.len());
//! });
//!
//! selection_changed.emit(vec!["row-1".to_string()]);
//! selection_changed.disconnect(conn_id);
//! ```
//!
//! # Controlled State Example
//!
//! ```
//! use horizon_grid_core::{ControlledState, Signal};
//!
//! struct Pager {
//!     page: ControlledState<usize>,
//!     page_changed: Signal<usize>,
//! }
//!
//! impl Pager {
//!     fn go_to(&self, page: usize) {
//!         if self.page.request(page) {
//!             self.page_changed.emit(page);
//!         }
//!     }
//! }
//!
//! let pager = Pager { page: ControlledState::external(0), page_changed: Signal::new() };
//! pager.go_to(3);
//! // The caller owns the page and has not pushed it back yet.
//! assert_eq!(pager.page.get(), 0);
//! ```

pub mod logging;
pub mod property;
pub mod signal;

pub use property::{ControlledState, Property, StateOwner};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
