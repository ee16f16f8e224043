//! Generic data table.
//!
//! [`Table<T>`] turns a `Vec<T>` plus a list of [`ColumnDef`]s into a row
//! model with selection, expansion, sorting, pagination and column sizing,
//! and renders it into a framework-neutral [`RenderedTable`].
//!
//! # Core Types
//!
//! - `ColumnDef`: id, accessor, header and cell renderers, sizing hints
//! - `CellValue`: the value an accessor yields, ordered for sorting
//! - `Row` / `RowModel`: rows of one render, with sub-rows attached
//! - `TableOptions`: builder-style configuration
//! - `PaginationState`, `SortingState`, `RowSelectionState`, `ExpandedState`:
//!   serializable interaction state
//!
//! # Controlled State
//!
//! Every piece of interaction state is either owned by the table or
//! controlled by the caller. Passing an initial `sorting_state`,
//! `row_selection_state` or `expanded` in the options makes that state
//! controlled; manual pagination makes the pagination state controlled.
//!
//! User interactions always emit the requested value through the matching
//! signal. Table-owned state is updated first. Controlled state is left
//! untouched until the caller pushes the value back with
//! [`Table::set_pagination_state`], [`Table::set_sorting_state`] and friends,
//! typically after fetching the matching page from a server.
//!
//! # Example
//!
//! ```
//! use horizon_grid::table::{ColumnDef, Table, TableOptions};
//!
//! struct Host {
//!     name: String,
//!     open_ports: i64,
//! }
//!
//! let hosts = vec![
//!     Host { name: "db-1".into(), open_ports: 3 },
//!     Host { name: "web-1".into(), open_ports: 12 },
//! ];
//! let columns = vec![
//!     ColumnDef::accessor("name", |h: &Host| h.name.clone()).with_header_text("Host"),
//!     ColumnDef::accessor("ports", |h: &Host| h.open_ports).with_header_text("Open ports"),
//! ];
//! let options = TableOptions::new()
//!     .with_sorting(true)
//!     .with_row_selection(true)
//!     .with_row_id(|h: &Host| h.name.clone());
//!
//! let mut table = Table::new(hosts, columns, options)?;
//! table.toggle_sorting("ports")?;
//! table.toggle_row_selected("web-1");
//!
//! let rendered = table.render();
//! assert_eq!(rendered.row_ids(), vec!["web-1", "db-1"]);
//! assert!(rendered.rows[0].selected);
//! # Ok::<(), horizon_grid::Error>(())
//! ```

mod column;
mod grid;
mod options;
mod render;
mod row;
mod selection;
mod sorting;
mod state;
mod value;

pub use column::{
    Accessor, CellRenderer, ColumnDef, ColumnSizing, EXPANDER_COLUMN_ID, HeaderContext,
    HeaderRenderer, SELECTION_COLUMN_ID, expander_column, selection_column,
};
pub use grid::{Table, render};
pub use options::{
    DEFAULT_NO_DATA_TEXT, Density, RowIdFn, RowPredicate, SubComponentRenderer, SubRowsFn,
    TableOptions,
};
pub use render::{
    PaginationStrip, RenderedCell, RenderedHeader, RenderedRow, RenderedTable, SortIndicator,
};
pub use row::{Cell, Row, RowModel};
pub use selection::{CheckState, SubSelection};
pub use sorting::{auto_sort_direction, next_sort_direction};
pub use state::{
    ColumnSort, ExpandedState, PaginationState, RowSelectionState, SortDirection, SortingState,
};
pub use value::CellValue;
