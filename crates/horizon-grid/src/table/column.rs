//! Column definitions.
//!
//! Columns are generic over the row type and read values through plain
//! closures:
//!
//! ```
//! use horizon_grid::table::ColumnDef;
//!
//! struct Finding {
//!     cve: String,
//!     score: f64,
//! }
//!
//! let columns: Vec<ColumnDef<Finding>> = vec![
//!     ColumnDef::accessor("cve", |f: &Finding| f.cve.clone()).with_header_text("CVE"),
//!     ColumnDef::accessor("score", |f: &Finding| f.score)
//!         .with_header_text("Score")
//!         .with_size(80.0)
//!         .with_cell(|cell| format!("{:.1}", cell.value().as_float().unwrap_or_default())),
//! ];
//! assert_eq!(columns[1].sizing().size, 80.0);
//! ```

use std::fmt;
use std::sync::Arc;

use super::row::Cell;
use super::selection::CheckState;
use super::state::SortDirection;
use super::value::CellValue;

/// Extracts a column's value from a row.
pub type Accessor<T> = Arc<dyn Fn(&T) -> CellValue + Send + Sync>;

/// Renders a cell as text.
pub type CellRenderer<T> = Arc<dyn Fn(&Cell<'_, '_, T>) -> String + Send + Sync>;

/// Renders a column header as text.
pub type HeaderRenderer = Arc<dyn Fn(&HeaderContext<'_>) -> String + Send + Sync>;

/// Id of the column produced by [`expander_column`].
pub const EXPANDER_COLUMN_ID: &str = "expander";

/// Id of the column produced by [`selection_column`].
pub const SELECTION_COLUMN_ID: &str = "selection";

const DEFAULT_COLUMN_SIZE: f32 = 150.0;
const MINIMUM_COLUMN_SIZE: f32 = 20.0;

/// Width hints of a column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnSizing {
    /// Smallest allowed width.
    pub min_size: f32,
    /// Initial width.
    pub size: f32,
    /// Largest allowed width.
    pub max_size: f32,
}

impl Default for ColumnSizing {
    fn default() -> Self {
        Self {
            min_size: MINIMUM_COLUMN_SIZE,
            size: DEFAULT_COLUMN_SIZE,
            max_size: f32::MAX,
        }
    }
}

impl ColumnSizing {
    /// Clamp a width into `[min_size, max_size]`.
    pub fn clamp(&self, size: f32) -> f32 {
        size.max(self.min_size).min(self.max_size)
    }

    /// The initial width, clamped.
    pub fn initial(&self) -> f32 {
        self.clamp(self.size)
    }
}

/// What a header renderer sees.
#[derive(Debug, Clone, Copy)]
pub struct HeaderContext<'a> {
    /// Id of the column.
    pub column_id: &'a str,
    /// Current sort of the column.
    pub sort: Option<SortDirection>,
    /// Whether clicking the header toggles sorting.
    pub can_sort: bool,
    /// Select-all state over the rendered rows.
    pub page_selection: CheckState,
}

/// Definition of one table column.
///
/// Accessor columns produce a [`CellValue`] per row and can be sorted.
/// Display columns only render (for example row controls) and never sort.
pub struct ColumnDef<T> {
    id: String,
    accessor: Option<Accessor<T>>,
    header: Option<HeaderRenderer>,
    cell: Option<CellRenderer<T>>,
    sizing: ColumnSizing,
    enable_sorting: bool,
    enable_resizing: bool,
    sort_desc_first: Option<bool>,
}

impl<T: 'static> ColumnDef<T> {
    /// Create a column whose value is read by `accessor`.
    pub fn accessor<F, V>(id: impl Into<String>, accessor: F) -> Self
    where
        F: Fn(&T) -> V + Send + Sync + 'static,
        V: Into<CellValue>,
    {
        Self {
            accessor: Some(Arc::new(move |row: &T| accessor(row).into())),
            ..Self::display(id)
        }
    }

    /// Create a column without a value.
    pub fn display(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            accessor: None,
            header: None,
            cell: None,
            sizing: ColumnSizing::default(),
            enable_sorting: true,
            enable_resizing: true,
            sort_desc_first: None,
        }
    }

    /// Use fixed header text using builder pattern.
    pub fn with_header_text(self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.with_header(move |_| text.clone())
    }

    /// Set the header renderer using builder pattern.
    pub fn with_header<F>(mut self, header: F) -> Self
    where
        F: Fn(&HeaderContext<'_>) -> String + Send + Sync + 'static,
    {
        self.header = Some(Arc::new(header));
        self
    }

    /// Set the cell renderer using builder pattern.
    pub fn with_cell<F>(mut self, cell: F) -> Self
    where
        F: Fn(&Cell<'_, '_, T>) -> String + Send + Sync + 'static,
    {
        self.cell = Some(Arc::new(cell));
        self
    }

    /// Set the initial width using builder pattern.
    pub fn with_size(mut self, size: f32) -> Self {
        self.sizing.size = size;
        self
    }

    /// Set the minimum width using builder pattern.
    pub fn with_min_size(mut self, min_size: f32) -> Self {
        self.sizing.min_size = min_size;
        self
    }

    /// Set the maximum width using builder pattern.
    pub fn with_max_size(mut self, max_size: f32) -> Self {
        self.sizing.max_size = max_size;
        self
    }

    /// Enable or disable sorting using builder pattern.
    pub fn with_sorting(mut self, enabled: bool) -> Self {
        self.enable_sorting = enabled;
        self
    }

    /// Enable or disable resizing using builder pattern.
    pub fn with_resizing(mut self, enabled: bool) -> Self {
        self.enable_resizing = enabled;
        self
    }

    /// Choose whether the first click sorts descending using builder pattern.
    ///
    /// Without this, text columns start ascending and all others descending.
    pub fn with_sort_desc_first(mut self, desc_first: bool) -> Self {
        self.sort_desc_first = Some(desc_first);
        self
    }
}

impl<T> ColumnDef<T> {
    /// Column id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns `true` for accessor columns.
    pub fn has_accessor(&self) -> bool {
        self.accessor.is_some()
    }

    /// Width hints.
    pub fn sizing(&self) -> ColumnSizing {
        self.sizing
    }

    /// Returns `true` if the column itself allows sorting.
    pub fn can_sort(&self) -> bool {
        self.enable_sorting && self.accessor.is_some()
    }

    /// Returns `true` if the column itself allows resizing.
    pub fn can_resize(&self) -> bool {
        self.enable_resizing
    }

    /// Explicit first sort direction preference, if set.
    pub fn sort_desc_first(&self) -> Option<bool> {
        self.sort_desc_first
    }

    /// Value of this column for `row`.
    pub fn value(&self, row: &T) -> CellValue {
        match &self.accessor {
            Some(accessor) => accessor(row),
            None => CellValue::None,
        }
    }

    /// Header text. Accessor columns default to their id.
    pub fn render_header(&self, context: &HeaderContext<'_>) -> String {
        match &self.header {
            Some(header) => header(context),
            None if self.accessor.is_some() => self.id.clone(),
            None => String::new(),
        }
    }

    /// Cell text. Defaults to the cell value's display form.
    pub fn render_cell(&self, cell: &Cell<'_, '_, T>) -> String {
        match &self.cell {
            Some(render) => render(cell),
            None => cell.value().to_string(),
        }
    }
}

impl<T> fmt::Debug for ColumnDef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDef")
            .field("id", &self.id)
            .field("has_accessor", &self.accessor.is_some())
            .field("sizing", &self.sizing)
            .field("enable_sorting", &self.enable_sorting)
            .field("enable_resizing", &self.enable_resizing)
            .finish()
    }
}

/// A column with an expand/collapse control for expandable rows.
///
/// Never sortable or resizable.
pub fn expander_column<T: 'static>() -> ColumnDef<T> {
    ColumnDef::display(EXPANDER_COLUMN_ID)
        .with_cell(|cell| {
            let row = cell.row();
            match (row.can_expand(), row.is_expanded()) {
                (false, _) => String::new(),
                (true, true) => "[-]".to_string(),
                (true, false) => "[+]".to_string(),
            }
        })
        .with_size(40.0)
        .with_sorting(false)
        .with_resizing(false)
}

/// A checkbox column for row selection.
///
/// The header shows the select-all state of the rendered rows. Never
/// sortable or resizable.
pub fn selection_column<T: 'static>() -> ColumnDef<T> {
    ColumnDef::display(SELECTION_COLUMN_ID)
        .with_header(|context| context.page_selection.symbol().to_string())
        .with_cell(|cell| cell.row().check_state().symbol().to_string())
        .with_size(40.0)
        .with_sorting(false)
        .with_resizing(false)
}
