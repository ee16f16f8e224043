//! Table configuration.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::pagination::{DEFAULT_PAGE_SIZE, DEFAULT_SIBLING_COUNT};
use crate::settings::GridSettings;

use super::row::Row;
use super::state::{ExpandedState, RowSelectionState, SortingState};

/// Computes a row's id.
pub type RowIdFn<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

/// A yes/no decision about a row.
pub type RowPredicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// Returns a row's nested rows.
pub type SubRowsFn<T> = Arc<dyn Fn(&T) -> &[T] + Send + Sync>;

/// Renders the detail area shown under an expanded row.
pub type SubComponentRenderer<T> = Arc<dyn Fn(&Row<'_, T>) -> String + Send + Sync>;

/// Default text shown when there are no rows.
pub const DEFAULT_NO_DATA_TEXT: &str = "No data";

/// Row and header density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    /// Compact.
    Sm,
    /// Regular.
    #[default]
    Md,
}

/// Options for a [`Table`](super::Table).
///
/// Passing an initial `sorting_state`, `row_selection_state` or `expanded`
/// makes that state controlled by the caller, as does manual pagination for
/// the pagination state. See the [`table`](super) module docs.
pub struct TableOptions<T> {
    pub(crate) enable_row_selection: bool,
    pub(crate) row_selection_predicate: Option<RowPredicate<T>>,
    pub(crate) enable_sub_row_selection: bool,
    pub(crate) row_selection_state: Option<RowSelectionState>,
    pub(crate) get_row_id: Option<RowIdFn<T>>,

    pub(crate) enable_pagination: bool,
    pub(crate) manual_pagination: bool,
    pub(crate) page_index: usize,
    pub(crate) page_size: usize,
    pub(crate) total_rows: usize,
    pub(crate) approximate_pagination: bool,
    pub(crate) sibling_count: usize,

    pub(crate) enable_sorting: bool,
    pub(crate) manual_sorting: bool,
    pub(crate) sorting_state: Option<SortingState>,

    pub(crate) get_row_can_expand: Option<RowPredicate<T>>,
    pub(crate) render_sub_component: Option<SubComponentRenderer<T>>,
    pub(crate) get_sub_rows: Option<SubRowsFn<T>>,
    pub(crate) expanded: Option<ExpandedState>,

    pub(crate) striped: bool,
    pub(crate) enable_column_resizing: bool,
    pub(crate) density: Density,
    pub(crate) no_data_text: String,
}

impl<T> Default for TableOptions<T> {
    fn default() -> Self {
        Self {
            enable_row_selection: false,
            row_selection_predicate: None,
            enable_sub_row_selection: true,
            row_selection_state: None,
            get_row_id: None,
            enable_pagination: false,
            manual_pagination: false,
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
            total_rows: 0,
            approximate_pagination: false,
            sibling_count: DEFAULT_SIBLING_COUNT,
            enable_sorting: false,
            manual_sorting: false,
            sorting_state: None,
            get_row_can_expand: None,
            render_sub_component: None,
            get_sub_rows: None,
            expanded: None,
            striped: false,
            enable_column_resizing: false,
            density: Density::default(),
            no_data_text: DEFAULT_NO_DATA_TEXT.to_string(),
        }
    }
}

impl<T> TableOptions<T> {
    /// Default options: no selection, pagination, sorting or resizing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Options seeded from injected settings.
    pub fn from_settings(settings: &GridSettings) -> Self {
        Self::new().with_settings(settings)
    }

    /// Apply settings using builder pattern.
    pub fn with_settings(mut self, settings: &GridSettings) -> Self {
        self.page_size = settings.page_size;
        self.sibling_count = settings.sibling_count;
        self.density = settings.density;
        self.striped = settings.striped;
        self.no_data_text = settings.no_data_text.clone();
        self.approximate_pagination = settings.approximate_pagination;
        self.enable_column_resizing = settings.enable_column_resizing;
        self
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Enable row selection using builder pattern.
    pub fn with_row_selection(mut self, enabled: bool) -> Self {
        self.enable_row_selection = enabled;
        self
    }

    /// Restrict which rows can be selected using builder pattern.
    pub fn with_row_selection_predicate<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.row_selection_predicate = Some(Arc::new(predicate));
        self
    }

    /// Whether selecting a row selects its sub-rows, using builder pattern.
    pub fn with_sub_row_selection(mut self, enabled: bool) -> Self {
        self.enable_sub_row_selection = enabled;
        self
    }

    /// Make row selection controlled, starting from `state`.
    pub fn with_row_selection_state(mut self, state: RowSelectionState) -> Self {
        self.row_selection_state = Some(state);
        self
    }

    /// Derive row ids from the data using builder pattern.
    ///
    /// Without this, ids are positional (`"0"`, `"1"`, sub-rows `"0.1"`), so
    /// selection follows positions rather than items.
    pub fn with_row_id<F>(mut self, get_row_id: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.get_row_id = Some(Arc::new(get_row_id));
        self
    }

    // =========================================================================
    // Pagination
    // =========================================================================

    /// Enable client-side pagination using builder pattern.
    pub fn with_pagination(mut self, enabled: bool) -> Self {
        self.enable_pagination = enabled;
        self
    }

    /// Enable manual (server-driven) pagination over `total_rows` rows.
    ///
    /// The table then renders exactly the rows it is given and reports page
    /// changes without applying them.
    pub fn with_manual_pagination(mut self, total_rows: usize) -> Self {
        self.enable_pagination = true;
        self.manual_pagination = true;
        self.total_rows = total_rows;
        self
    }

    /// Set the initial 0-based page index using builder pattern.
    pub fn with_page_index(mut self, page_index: usize) -> Self {
        self.page_index = page_index;
        self
    }

    /// Set the page size using builder pattern.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Treat the total row count as a lower bound using builder pattern.
    pub fn with_approximate_pagination(mut self, approximate: bool) -> Self {
        self.approximate_pagination = approximate;
        self
    }

    /// Set the page strip sibling count using builder pattern.
    pub fn with_sibling_count(mut self, sibling_count: usize) -> Self {
        self.sibling_count = sibling_count;
        self
    }

    // =========================================================================
    // Sorting
    // =========================================================================

    /// Enable sorting using builder pattern.
    pub fn with_sorting(mut self, enabled: bool) -> Self {
        self.enable_sorting = enabled;
        self
    }

    /// Report sort changes without reordering rows, using builder pattern.
    pub fn with_manual_sorting(mut self, manual: bool) -> Self {
        self.enable_sorting = self.enable_sorting || manual;
        self.manual_sorting = manual;
        self
    }

    /// Make sorting controlled, starting from `state`.
    pub fn with_sorting_state(mut self, state: SortingState) -> Self {
        self.sorting_state = Some(state);
        self
    }

    // =========================================================================
    // Expansion
    // =========================================================================

    /// Decide which rows can expand using builder pattern.
    ///
    /// Without this, rows with sub-rows can expand.
    pub fn with_row_can_expand<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.get_row_can_expand = Some(Arc::new(predicate));
        self
    }

    /// Render a detail area under expanded rows using builder pattern.
    pub fn with_sub_component<F>(mut self, render: F) -> Self
    where
        F: Fn(&Row<'_, T>) -> String + Send + Sync + 'static,
    {
        self.render_sub_component = Some(Arc::new(render));
        self
    }

    /// Read nested rows from the data using builder pattern.
    pub fn with_sub_rows<F>(mut self, get_sub_rows: F) -> Self
    where
        F: Fn(&T) -> &[T] + Send + Sync + 'static,
    {
        self.get_sub_rows = Some(Arc::new(get_sub_rows));
        self
    }

    /// Make expansion controlled, starting from `state`.
    pub fn with_expanded(mut self, state: ExpandedState) -> Self {
        self.expanded = Some(state);
        self
    }

    // =========================================================================
    // Presentation
    // =========================================================================

    /// Alternate row backgrounds using builder pattern.
    pub fn with_striped(mut self, striped: bool) -> Self {
        self.striped = striped;
        self
    }

    /// Enable column resizing using builder pattern.
    pub fn with_column_resizing(mut self, enabled: bool) -> Self {
        self.enable_column_resizing = enabled;
        self
    }

    /// Set the density using builder pattern.
    pub fn with_density(mut self, density: Density) -> Self {
        self.density = density;
        self
    }

    /// Set the empty-table text using builder pattern.
    pub fn with_no_data_text(mut self, text: impl Into<String>) -> Self {
        self.no_data_text = text.into();
        self
    }

    // =========================================================================
    // Getters
    // =========================================================================

    /// Returns `true` if row selection is enabled.
    pub fn row_selection_enabled(&self) -> bool {
        self.enable_row_selection
    }

    /// Returns `true` if pagination is enabled.
    pub fn pagination_enabled(&self) -> bool {
        self.enable_pagination
    }

    /// Returns `true` for manual pagination.
    pub fn is_manual_pagination(&self) -> bool {
        self.enable_pagination && self.manual_pagination
    }

    /// Returns `true` if sorting is enabled.
    pub fn sorting_enabled(&self) -> bool {
        self.enable_sorting
    }

    /// Returns `true` for manual sorting.
    pub fn is_manual_sorting(&self) -> bool {
        self.enable_sorting && self.manual_sorting
    }

    /// Returns `true` if column resizing is enabled.
    pub fn column_resizing_enabled(&self) -> bool {
        self.enable_column_resizing
    }

    /// Row density.
    pub fn density(&self) -> Density {
        self.density
    }

    /// Returns `true` for striped rows.
    pub fn is_striped(&self) -> bool {
        self.striped
    }

    /// Empty-table text.
    pub fn no_data_text(&self) -> &str {
        &self.no_data_text
    }
}

impl<T> fmt::Debug for TableOptions<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableOptions")
            .field("enable_row_selection", &self.enable_row_selection)
            .field("enable_pagination", &self.enable_pagination)
            .field("manual_pagination", &self.manual_pagination)
            .field("page_index", &self.page_index)
            .field("page_size", &self.page_size)
            .field("total_rows", &self.total_rows)
            .field("enable_sorting", &self.enable_sorting)
            .field("manual_sorting", &self.manual_sorting)
            .field("striped", &self.striped)
            .field("density", &self.density)
            .finish_non_exhaustive()
    }
}
