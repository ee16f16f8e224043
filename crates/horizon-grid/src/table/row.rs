//! Row model.
//!
//! A [`Row`] wraps one item of the table's data together with the state the
//! table tracks for it: its id, depth, expansion and selection. Rows are
//! rebuilt from the current data and state on every
//! [`Table::row_model`](super::Table::row_model) call and borrow the data
//! they wrap.

use std::fmt;

use super::column::ColumnDef;
use super::selection::{CheckState, SubSelection};
use super::value::CellValue;

/// One row of a table.
pub struct Row<'a, T> {
    original: &'a T,
    id: String,
    index: usize,
    depth: usize,
    parent_id: Option<String>,
    sub_rows: Vec<Row<'a, T>>,
    can_expand: bool,
    expanded: bool,
    can_select: bool,
    selected: bool,
    sub_selection: SubSelection,
    columns: &'a [ColumnDef<T>],
}

/// Everything a row knows about itself apart from its sub-rows.
pub(crate) struct RowParts<'a, T> {
    pub original: &'a T,
    pub id: String,
    pub index: usize,
    pub depth: usize,
    pub parent_id: Option<String>,
    pub can_expand: bool,
    pub expanded: bool,
    pub can_select: bool,
    pub selected: bool,
    pub columns: &'a [ColumnDef<T>],
}

impl<'a, T> Row<'a, T> {
    pub(crate) fn new(parts: RowParts<'a, T>, sub_rows: Vec<Row<'a, T>>) -> Self {
        let sub_selection = SubSelection::of(&sub_rows);
        Self {
            original: parts.original,
            id: parts.id,
            index: parts.index,
            depth: parts.depth,
            parent_id: parts.parent_id,
            sub_rows,
            can_expand: parts.can_expand,
            expanded: parts.expanded && parts.can_expand,
            can_select: parts.can_select,
            selected: parts.selected,
            sub_selection,
            columns: parts.columns,
        }
    }

    /// The wrapped data item.
    pub fn original(&self) -> &'a T {
        self.original
    }

    /// Row id, unique within a table.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Position within the parent's data (top-level data for root rows).
    pub fn index(&self) -> usize {
        self.index
    }

    /// Nesting depth. Root rows have depth 0.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Id of the parent row for sub-rows.
    pub fn parent_id(&self) -> Option<&str> {
        self.parent_id.as_deref()
    }

    /// Nested rows.
    pub fn sub_rows(&self) -> &[Row<'a, T>] {
        &self.sub_rows
    }

    pub(crate) fn sub_rows_mut(&mut self) -> &mut Vec<Row<'a, T>> {
        &mut self.sub_rows
    }

    /// Returns `true` if the row can be expanded.
    pub fn can_expand(&self) -> bool {
        self.can_expand
    }

    /// Returns `true` if the row is expanded.
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Returns `true` if the row can be selected.
    pub fn can_select(&self) -> bool {
        self.can_select
    }

    /// Returns `true` if the row's own id is selected.
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Selection status of the row's descendants.
    pub fn sub_selection(&self) -> SubSelection {
        self.sub_selection
    }

    /// State of the row's selection checkbox.
    ///
    /// Partially checked while some but not all descendants are selected.
    pub fn check_state(&self) -> CheckState {
        if self.sub_selection == SubSelection::Some {
            CheckState::PartiallyChecked
        } else if self.selected {
            CheckState::Checked
        } else {
            CheckState::Unchecked
        }
    }

    /// Value of the given column for this row.
    pub fn value(&self, column_id: &str) -> Option<CellValue> {
        self.columns
            .iter()
            .find(|column| column.id() == column_id)
            .map(|column| column.value(self.original))
    }

    /// One cell per column, in column order.
    ///
    /// Values are computed on each call.
    pub fn visible_cells(&self) -> Vec<Cell<'_, 'a, T>> {
        self.columns
            .iter()
            .map(|column| Cell {
                row: self,
                column,
                value: column.value(self.original),
            })
            .collect()
    }

    pub(crate) fn push_visible<'r>(&'r self, out: &mut Vec<&'r Row<'a, T>>) {
        out.push(self);
        if self.expanded {
            for sub_row in &self.sub_rows {
                sub_row.push_visible(out);
            }
        }
    }

    pub(crate) fn for_each<'r, F>(&'r self, f: &mut F)
    where
        F: FnMut(&'r Row<'a, T>),
    {
        f(self);
        for sub_row in &self.sub_rows {
            sub_row.for_each(f);
        }
    }
}

impl<T> fmt::Debug for Row<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Row")
            .field("id", &self.id)
            .field("index", &self.index)
            .field("depth", &self.depth)
            .field("expanded", &self.expanded)
            .field("selected", &self.selected)
            .field("sub_rows", &self.sub_rows.len())
            .finish()
    }
}

/// The value of one column for one row.
pub struct Cell<'r, 'a, T> {
    row: &'r Row<'a, T>,
    column: &'a ColumnDef<T>,
    value: CellValue,
}

impl<'r, 'a, T> Cell<'r, 'a, T> {
    /// The row this cell belongs to.
    pub fn row(&self) -> &'r Row<'a, T> {
        self.row
    }

    /// The column this cell belongs to.
    pub fn column(&self) -> &'a ColumnDef<T> {
        self.column
    }

    /// Id of the cell's column.
    pub fn column_id(&self) -> &'a str {
        self.column.id()
    }

    /// The accessor value. `CellValue::None` for display columns.
    pub fn value(&self) -> &CellValue {
        &self.value
    }

    /// Cell text from the column's cell renderer.
    pub fn render(&self) -> String {
        self.column.render_cell(self)
    }
}

/// The rows of one render: sorted and paginated root rows with their
/// sub-rows attached.
pub struct RowModel<'a, T> {
    rows: Vec<Row<'a, T>>,
}

impl<'a, T> RowModel<'a, T> {
    pub(crate) fn new(rows: Vec<Row<'a, T>>) -> Self {
        Self { rows }
    }

    /// Root rows of the current page.
    pub fn rows(&self) -> &[Row<'a, T>] {
        &self.rows
    }

    /// Rows in render order: each root row followed by the sub-rows of
    /// expanded rows.
    pub fn visible_rows(&self) -> Vec<&Row<'a, T>> {
        let mut out = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            row.push_visible(&mut out);
        }
        out
    }

    /// Returns `true` when nothing would be rendered.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Find a row of this model by id, searching sub-rows too.
    pub fn find(&self, id: &str) -> Option<&Row<'a, T>> {
        find_row(&self.rows, id)
    }
}

pub(crate) fn find_row<'r, 'a, T>(rows: &'r [Row<'a, T>], id: &str) -> Option<&'r Row<'a, T>> {
    rows.iter().find_map(|row| {
        if row.id == id {
            Some(row)
        } else {
            find_row(&row.sub_rows, id)
        }
    })
}
