//! The table state machine.

use std::collections::{BTreeSet, HashMap, HashSet};

use horizon_grid_core::logging::{span_names, targets};
use horizon_grid_core::{ControlledState, Signal};

use crate::error::{Error, Result};
use crate::pagination::{PageButton, Paginator, page_count};

use super::column::{ColumnDef, HeaderContext};
use super::options::TableOptions;
use super::render::{PaginationStrip, RenderedCell, RenderedHeader, RenderedRow, RenderedTable};
use super::row::{Row, RowModel, RowParts, find_row};
use super::selection::{CheckState, check_state_of, mutate_row_selected};
use super::sorting::{auto_sort_direction, next_sort_direction, sort_rows};
use super::state::{
    ExpandedState, PaginationState, RowSelectionState, SortDirection, SortingState,
};

/// A data table over rows of type `T`.
///
/// The table owns its data, columns and options plus the interaction state:
/// pagination, sorting, row selection, expansion and column widths. Each
/// piece of interaction state is either owned by the table or controlled by
/// the caller (see the [module docs](super)).
///
/// Transition methods return `true` when they requested a change, in which
/// case the matching signal has been emitted with the requested value.
pub struct Table<T> {
    data: Vec<T>,
    columns: Vec<ColumnDef<T>>,
    options: TableOptions<T>,
    column_sizes: HashMap<String, f32>,

    pagination: ControlledState<PaginationState>,
    sorting: ControlledState<SortingState>,
    row_selection: ControlledState<RowSelectionState>,
    expanded: ControlledState<ExpandedState>,

    /// Emitted with the requested pagination state.
    pub pagination_changed: Signal<PaginationState>,
    /// Emitted with the requested sorting state.
    pub sorting_changed: Signal<SortingState>,
    /// Emitted with the requested row selection.
    pub row_selection_changed: Signal<RowSelectionState>,
    /// Emitted with the requested expanded state.
    pub expanded_changed: Signal<ExpandedState>,
    /// Emitted with a column id and its new width.
    pub column_resized: Signal<(String, f32)>,
}

impl<T> Table<T> {
    /// Create a table.
    ///
    /// Fails on duplicate column ids or a page size of 0.
    pub fn new(data: Vec<T>, columns: Vec<ColumnDef<T>>, options: TableOptions<T>) -> Result<Self> {
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.id()) {
                tracing::warn!(target: targets::TABLE, column = column.id(), "duplicate column id");
                return Err(Error::duplicate_column(column.id()));
            }
        }
        if options.page_size == 0 {
            tracing::warn!(target: targets::TABLE, "page size must be positive");
            return Err(Error::InvalidPageSize(0));
        }

        let initial_page = PaginationState::new(options.page_index, options.page_size);
        let pagination = if options.is_manual_pagination() {
            ControlledState::external(initial_page)
        } else {
            ControlledState::internal(initial_page)
        };
        let sorting = ControlledState::from_option(options.sorting_state.clone(), SortingState::new());
        let row_selection = ControlledState::from_option(
            options.row_selection_state.clone(),
            RowSelectionState::new(),
        );
        let expanded = ControlledState::from_option(options.expanded.clone(), ExpandedState::none());

        tracing::debug!(
            target: targets::TABLE,
            rows = data.len(),
            columns = columns.len(),
            manual_pagination = options.is_manual_pagination(),
            manual_sorting = options.is_manual_sorting(),
            "table created"
        );

        Ok(Self {
            data,
            columns,
            options,
            column_sizes: HashMap::new(),
            pagination,
            sorting,
            row_selection,
            expanded,
            pagination_changed: Signal::new(),
            sorting_changed: Signal::new(),
            row_selection_changed: Signal::new(),
            expanded_changed: Signal::new(),
            column_resized: Signal::new(),
        })
    }

    // =========================================================================
    // Data and columns
    // =========================================================================

    /// The table's data.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Replace the data.
    ///
    /// With client pagination the page index returns to 0, and table-owned
    /// expansion is cleared. Selection is kept: ids that still exist stay
    /// selected.
    pub fn set_data(&mut self, data: Vec<T>) {
        tracing::debug!(target: targets::TABLE, rows = data.len(), "data replaced");
        self.data = data;
        if !self.pagination.is_controlled() {
            let state = self.pagination.get();
            self.request_pagination(PaginationState { page_index: 0, ..state });
        }
        if !self.expanded.is_controlled() {
            self.request_expanded(ExpandedState::none());
        }
    }

    /// Update the total row count reported by the server.
    pub fn set_total_rows(&mut self, total_rows: usize) {
        self.options.total_rows = total_rows;
    }

    /// Column definitions in render order.
    pub fn columns(&self) -> &[ColumnDef<T>] {
        &self.columns
    }

    /// Find a column by id.
    pub fn column(&self, id: &str) -> Option<&ColumnDef<T>> {
        self.columns.iter().find(|column| column.id() == id)
    }

    /// The table's options.
    pub fn options(&self) -> &TableOptions<T> {
        &self.options
    }

    // =========================================================================
    // Pagination
    // =========================================================================

    /// Current pagination state.
    pub fn pagination_state(&self) -> PaginationState {
        self.pagination.get()
    }

    /// Push the pagination state, for manual pagination after a page change
    /// was reported. Returns `true` if the state changed.
    pub fn set_pagination_state(&mut self, state: PaginationState) -> Result<bool> {
        if state.page_size == 0 {
            return Err(Error::InvalidPageSize(0));
        }
        Ok(self.pagination.sync(state))
    }

    /// Rows counted by the paginator: the data length in client mode, the
    /// reported total in manual mode.
    pub fn total_row_count(&self) -> usize {
        if self.options.is_manual_pagination() {
            self.options.total_rows
        } else {
            self.data.len()
        }
    }

    /// Number of pages.
    ///
    /// `None` when pagination is disabled, or when a manual table has not been
    /// told its total yet.
    pub fn page_count(&self) -> Option<usize> {
        if !self.options.enable_pagination {
            return None;
        }
        if self.options.is_manual_pagination() && self.options.total_rows == 0 {
            return None;
        }
        Some(page_count(self.total_row_count(), self.pagination.get().page_size))
    }

    /// Returns `true` if there is a previous page.
    pub fn can_previous_page(&self) -> bool {
        self.options.enable_pagination && self.pagination.get().page_index > 0
    }

    /// Returns `true` if there is a next page. Always `true` while the page
    /// count is unknown.
    pub fn can_next_page(&self) -> bool {
        let index = self.pagination.get().page_index;
        match self.page_count() {
            Some(count) => index.saturating_add(1) < count,
            None => self.options.is_manual_pagination(),
        }
    }

    /// Go to a 0-based page, clamped to the last page when the page count is
    /// known.
    pub fn set_page_index(&mut self, page_index: usize) -> bool {
        if !self.options.enable_pagination {
            return false;
        }
        let page_index = match self.page_count() {
            Some(count) => page_index.min(count.saturating_sub(1)),
            None => page_index,
        };
        let state = self.pagination.get();
        self.request_pagination(PaginationState { page_index, ..state })
    }

    /// Go to the previous page.
    pub fn previous_page(&mut self) -> bool {
        if !self.can_previous_page() {
            return false;
        }
        let index = self.pagination.get().page_index;
        self.set_page_index(index - 1)
    }

    /// Go to the next page.
    pub fn next_page(&mut self) -> bool {
        if !self.can_next_page() {
            return false;
        }
        let index = self.pagination.get().page_index;
        self.set_page_index(index.saturating_add(1))
    }

    /// Go to the first page.
    pub fn first_page(&mut self) -> bool {
        self.set_page_index(0)
    }

    /// Go to the last page. Does nothing while the page count is unknown.
    pub fn last_page(&mut self) -> bool {
        match self.page_count() {
            Some(count) => self.set_page_index(count.saturating_sub(1)),
            None => false,
        }
    }

    /// Change the page size, keeping the current top row on screen.
    pub fn set_page_size(&mut self, page_size: usize) -> Result<bool> {
        if page_size == 0 {
            tracing::warn!(target: targets::TABLE, "page size must be positive");
            return Err(Error::InvalidPageSize(0));
        }
        let top_row = self.pagination.get().first_row_index();
        Ok(self.request_pagination(PaginationState::new(top_row / page_size, page_size)))
    }

    /// A page strip for the current state, or `None` without pagination.
    pub fn paginator(&self) -> Option<Paginator> {
        if !self.options.enable_pagination {
            return None;
        }
        let state = self.pagination.get();
        Some(
            Paginator::new(self.total_row_count())
                .with_page_size(state.page_size)
                .with_sibling_count(self.options.sibling_count)
                .with_approximate(self.options.approximate_pagination)
                .with_current_page(state.page_index.saturating_add(1)),
        )
    }

    /// Activate a button of the rendered page strip.
    pub fn activate_page_button(&mut self, button: &PageButton) -> bool {
        match button.target_page() {
            Some(page) => self.set_page_index(page.saturating_sub(1)),
            None => false,
        }
    }

    fn request_pagination(&self, state: PaginationState) -> bool {
        if !self.pagination.request(state) {
            return false;
        }
        tracing::debug!(
            target: targets::TABLE,
            page_index = state.page_index,
            page_size = state.page_size,
            controlled = self.pagination.is_controlled(),
            "pagination change"
        );
        self.pagination_changed.emit(state);
        true
    }

    // =========================================================================
    // Sorting
    // =========================================================================

    /// Current sorting state.
    pub fn sorting_state(&self) -> SortingState {
        self.sorting.get()
    }

    /// Push the sorting state. Returns `true` if it changed.
    pub fn set_sorting_state(&mut self, state: SortingState) -> bool {
        self.sorting.sync(state)
    }

    /// Returns `true` if clicking the column's header toggles sorting.
    pub fn can_sort(&self, column_id: &str) -> bool {
        self.options.enable_sorting && self.column(column_id).is_some_and(ColumnDef::can_sort)
    }

    /// Sort direction of a column.
    pub fn sort_direction(&self, column_id: &str) -> Option<SortDirection> {
        self.sorting.with(|sorting| sorting.direction(column_id))
    }

    /// Advance a column's sort: unsorted, first direction, reversed, unsorted.
    ///
    /// Sorting by one column replaces any other column's sort. Non-sortable
    /// columns are ignored; unknown columns are an error.
    pub fn toggle_sorting(&mut self, column_id: &str) -> Result<bool> {
        let column = self
            .column(column_id)
            .ok_or_else(|| Error::unknown_column(column_id))?;
        if !self.options.enable_sorting || !column.can_sort() {
            tracing::trace!(target: targets::TABLE, column = column_id, "column not sortable");
            return Ok(false);
        }

        let first = match column.sort_desc_first() {
            Some(true) => SortDirection::Descending,
            Some(false) => SortDirection::Ascending,
            None => auto_sort_direction(self.data.first().map(|row| column.value(row)).as_ref()),
        };
        let current = self.sorting.with(|sorting| {
            sorting
                .first()
                .filter(|sort| sort.id == column_id)
                .map(|sort| sort.direction())
        });
        let next = match next_sort_direction(current, first) {
            Some(direction) => SortingState::single(column_id, direction),
            None => SortingState::new(),
        };
        Ok(self.request_sorting(next))
    }

    /// Remove all sorting.
    pub fn clear_sorting(&mut self) -> bool {
        self.request_sorting(SortingState::new())
    }

    fn request_sorting(&self, state: SortingState) -> bool {
        if !self.sorting.request(state.clone()) {
            return false;
        }
        tracing::debug!(
            target: targets::TABLE,
            sorting = ?state,
            controlled = self.sorting.is_controlled(),
            "sorting change"
        );
        self.sorting_changed.emit(state);
        true
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Current row selection.
    pub fn row_selection_state(&self) -> RowSelectionState {
        self.row_selection.get()
    }

    /// Push the row selection. Returns `true` if it changed.
    pub fn set_row_selection_state(&mut self, state: RowSelectionState) -> bool {
        self.row_selection.sync(state)
    }

    /// Returns `true` if the row id is selected.
    pub fn is_row_selected(&self, row_id: &str) -> bool {
        self.row_selection.with(|selection| selection.is_selected(row_id))
    }

    /// Flip a row's selection.
    pub fn toggle_row_selected(&mut self, row_id: &str) -> bool {
        let selected = self.is_row_selected(row_id);
        self.set_row_selected(row_id, !selected)
    }

    /// Select or deselect a row, cascading to its sub-rows when sub-row
    /// selection is enabled.
    ///
    /// Unknown rows and rows that cannot be selected are ignored.
    pub fn set_row_selected(&mut self, row_id: &str, selected: bool) -> bool {
        if !self.options.enable_row_selection {
            return false;
        }
        let next = {
            let rows = self.core_rows();
            let Some(row) = find_row(&rows, row_id) else {
                tracing::trace!(target: targets::TABLE, row = row_id, "unknown row");
                return false;
            };
            if !row.can_select() {
                return false;
            }
            let mut next = self.row_selection.get();
            mutate_row_selected(&mut next, row, selected, self.options.enable_sub_row_selection);
            next
        };
        self.request_row_selection(next)
    }

    /// Select or deselect every rendered row: the current page and the
    /// sub-rows of expanded rows. Other ids are left alone.
    pub fn toggle_all_page_rows_selected(&mut self, selected: bool) -> bool {
        if !self.options.enable_row_selection {
            return false;
        }
        let next = {
            let model = self.row_model();
            let mut next = self.row_selection.get();
            for row in model.visible_rows() {
                if !selected {
                    next.deselect(row.id());
                } else if row.can_select() {
                    next.select(row.id());
                }
            }
            next
        };
        self.request_row_selection(next)
    }

    /// Header checkbox click: select the page unless it is fully selected.
    pub fn toggle_page_selection(&mut self) -> bool {
        let select = !self.is_all_page_rows_selected();
        self.toggle_all_page_rows_selected(select)
    }

    /// Select-all state of the rendered rows.
    pub fn page_check_state(&self) -> CheckState {
        let model = self.row_model();
        check_state_of(&model.visible_rows())
    }

    /// Returns `true` when every selectable rendered row is selected.
    pub fn is_all_page_rows_selected(&self) -> bool {
        self.page_check_state() == CheckState::Checked
    }

    /// Returns `true` when some but not all rendered rows are selected.
    pub fn is_some_page_rows_selected(&self) -> bool {
        self.page_check_state() == CheckState::PartiallyChecked
    }

    /// Data items whose row ids are selected, in data order.
    pub fn selected_data(&self) -> Vec<&T> {
        let rows = self.core_rows();
        let mut selected = Vec::new();
        for row in &rows {
            row.for_each(&mut |row| {
                if row.is_selected() {
                    selected.push(row.original());
                }
            });
        }
        selected
    }

    fn request_row_selection(&self, state: RowSelectionState) -> bool {
        if !self.row_selection.request(state.clone()) {
            return false;
        }
        tracing::debug!(
            target: targets::TABLE,
            selected = state.len(),
            controlled = self.row_selection.is_controlled(),
            "row selection change"
        );
        self.row_selection_changed.emit(state);
        true
    }

    // =========================================================================
    // Expansion
    // =========================================================================

    /// Current expanded state.
    pub fn expanded_state(&self) -> ExpandedState {
        self.expanded.get()
    }

    /// Push the expanded state. Returns `true` if it changed.
    pub fn set_expanded_state(&mut self, state: ExpandedState) -> bool {
        self.expanded.sync(state)
    }

    /// Returns `true` if the row can expand and is expanded.
    pub fn is_row_expanded(&self, row_id: &str) -> bool {
        let rows = self.core_rows();
        find_row(&rows, row_id).is_some_and(Row::is_expanded)
    }

    /// Flip a row's expansion. Rows that cannot expand are ignored.
    pub fn toggle_row_expanded(&mut self, row_id: &str) -> bool {
        let expanded = self.is_row_expanded(row_id);
        self.set_row_expanded(row_id, !expanded)
    }

    /// Expand or collapse a row. Rows that cannot expand are ignored.
    pub fn set_row_expanded(&mut self, row_id: &str, expanded: bool) -> bool {
        let next = {
            let rows = self.core_rows();
            match find_row(&rows, row_id) {
                Some(row) if row.can_expand() => {}
                _ => {
                    tracing::trace!(target: targets::TABLE, row = row_id, "row cannot expand");
                    return false;
                }
            }
            match (self.expanded.get(), expanded) {
                (ExpandedState::All, true) => return false,
                (ExpandedState::All, false) => {
                    let mut ids = BTreeSet::new();
                    for row in &rows {
                        row.for_each(&mut |row| {
                            if row.can_expand() && row.id() != row_id {
                                ids.insert(row.id().to_string());
                            }
                        });
                    }
                    ExpandedState::Rows(ids)
                }
                (ExpandedState::Rows(mut ids), true) => {
                    ids.insert(row_id.to_string());
                    ExpandedState::Rows(ids)
                }
                (ExpandedState::Rows(mut ids), false) => {
                    ids.remove(row_id);
                    ExpandedState::Rows(ids)
                }
            }
        };
        self.request_expanded(next)
    }

    /// Returns `true` when every expandable row is expanded.
    pub fn is_all_rows_expanded(&self) -> bool {
        if self.expanded.with(ExpandedState::is_all) {
            return true;
        }
        let rows = self.core_rows();
        let mut any = false;
        let mut all = true;
        for row in &rows {
            row.for_each(&mut |row| {
                if row.can_expand() {
                    any = true;
                    all &= row.is_expanded();
                }
            });
        }
        any && all
    }

    /// Expand every row, or collapse all when everything is expanded.
    pub fn toggle_all_rows_expanded(&mut self) -> bool {
        let next = if self.is_all_rows_expanded() {
            ExpandedState::none()
        } else {
            ExpandedState::All
        };
        self.request_expanded(next)
    }

    fn request_expanded(&self, state: ExpandedState) -> bool {
        if !self.expanded.request(state.clone()) {
            return false;
        }
        tracing::debug!(
            target: targets::TABLE,
            expanded = ?state,
            controlled = self.expanded.is_controlled(),
            "expanded change"
        );
        self.expanded_changed.emit(state);
        true
    }

    // =========================================================================
    // Column sizing
    // =========================================================================

    /// Current width of a column.
    pub fn column_size(&self, column_id: &str) -> Option<f32> {
        let column = self.column(column_id)?;
        Some(
            self.column_sizes
                .get(column_id)
                .copied()
                .unwrap_or_else(|| column.sizing().initial()),
        )
    }

    /// Returns `true` if the column shows a resize handle.
    pub fn can_resize_column(&self, column_id: &str) -> bool {
        self.options.enable_column_resizing
            && self.column(column_id).is_some_and(ColumnDef::can_resize)
    }

    /// Resize a column, clamped to its size limits. Returns the applied width.
    pub fn resize_column(&mut self, column_id: &str, size: f32) -> Result<f32> {
        let sizing = self
            .column(column_id)
            .ok_or_else(|| Error::unknown_column(column_id))?
            .sizing();
        if !self.can_resize_column(column_id) {
            tracing::warn!(target: targets::TABLE, column = column_id, "column is not resizable");
            return Err(Error::not_resizable(column_id));
        }

        let size = sizing.clamp(size);
        if self.column_size(column_id) != Some(size) {
            self.column_sizes.insert(column_id.to_string(), size);
            tracing::debug!(target: targets::TABLE, column = column_id, size, "column resized");
            self.column_resized.emit((column_id.to_string(), size));
        }
        Ok(size)
    }

    /// Drop a column's width override. Returns `true` if the width changed.
    pub fn reset_column_size(&mut self, column_id: &str) -> Result<bool> {
        let initial = self
            .column(column_id)
            .ok_or_else(|| Error::unknown_column(column_id))?
            .sizing()
            .initial();
        match self.column_sizes.remove(column_id) {
            Some(previous) if previous != initial => {
                self.column_resized.emit((column_id.to_string(), initial));
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    // =========================================================================
    // Row model
    // =========================================================================

    /// Every row in data order, with sub-rows attached, before sorting and
    /// pagination.
    pub fn core_rows(&self) -> Vec<Row<'_, T>> {
        let selection = self.row_selection.get();
        let expanded = self.expanded.get();
        self.build_rows(&self.data, None, 0, &selection, &expanded)
    }

    /// The rows to render: sorted in client sorting mode and sliced to the
    /// current page in client pagination mode. Manual modes use the data as
    /// given.
    pub fn row_model(&self) -> RowModel<'_, T> {
        let _span = tracing::trace_span!(target: targets::TABLE, span_names::ROW_MODEL).entered();
        let mut rows = self.core_rows();

        if self.options.enable_sorting && !self.options.manual_sorting {
            let sorting = self.sorting.get();
            sort_rows(&mut rows, &sorting, &self.columns);
        }

        if self.options.enable_pagination && !self.options.manual_pagination {
            let state = self.pagination.get();
            let start = state.first_row_index().min(rows.len());
            let end = start.saturating_add(state.page_size).min(rows.len());
            rows.truncate(end);
            rows.drain(..start);
        }

        RowModel::new(rows)
    }

    fn build_rows<'a>(
        &'a self,
        items: &'a [T],
        parent_id: Option<&str>,
        depth: usize,
        selection: &RowSelectionState,
        expanded: &ExpandedState,
    ) -> Vec<Row<'a, T>> {
        items
            .iter()
            .enumerate()
            .map(|(index, original)| {
                let id = match (&self.options.get_row_id, parent_id) {
                    (Some(get_row_id), _) => get_row_id(original),
                    (None, Some(parent)) => format!("{parent}.{index}"),
                    (None, None) => index.to_string(),
                };
                let children: &'a [T] = match &self.options.get_sub_rows {
                    Some(get_sub_rows) => get_sub_rows(original),
                    None => &[],
                };
                let sub_rows = self.build_rows(children, Some(id.as_str()), depth + 1, selection, expanded);
                let can_expand = match &self.options.get_row_can_expand {
                    Some(predicate) => predicate(original),
                    None => !children.is_empty(),
                };
                let can_select = self.options.enable_row_selection
                    && self
                        .options
                        .row_selection_predicate
                        .as_ref()
                        .is_none_or(|predicate| predicate(original));

                Row::new(
                    RowParts {
                        original,
                        selected: selection.is_selected(&id),
                        expanded: expanded.is_expanded(&id),
                        id,
                        index,
                        depth,
                        parent_id: parent_id.map(str::to_string),
                        can_expand,
                        can_select,
                        columns: &self.columns,
                    },
                    sub_rows,
                )
            })
            .collect()
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Render the current state.
    pub fn render(&self) -> RenderedTable {
        let _span = tracing::trace_span!(target: targets::TABLE, span_names::RENDER).entered();
        let model = self.row_model();
        let visible = model.visible_rows();
        let page_selection = check_state_of(&visible);

        let headers: Vec<RenderedHeader> = self
            .columns
            .iter()
            .map(|column| {
                let sort = self.sort_direction(column.id());
                let can_sort = self.options.enable_sorting && column.can_sort();
                let context = HeaderContext {
                    column_id: column.id(),
                    sort,
                    can_sort,
                    page_selection,
                };
                RenderedHeader {
                    id: column.id().to_string(),
                    label: column.render_header(&context),
                    width: self
                        .column_size(column.id())
                        .unwrap_or_else(|| column.sizing().initial()),
                    sort: sort.into(),
                    can_sort,
                    can_resize: self.can_resize_column(column.id()),
                }
            })
            .collect();

        let rows = visible
            .iter()
            .enumerate()
            .map(|(position, &row)| {
                let cells = row
                    .visible_cells()
                    .iter()
                    .zip(&headers)
                    .map(|(cell, header)| RenderedCell {
                        column_id: cell.column_id().to_string(),
                        text: cell.render(),
                        width: header.width,
                    })
                    .collect();
                let sub_component = match &self.options.render_sub_component {
                    Some(render) if row.is_expanded() => Some(render(row)),
                    _ => None,
                };
                RenderedRow {
                    id: row.id().to_string(),
                    depth: row.depth(),
                    cells,
                    selected: row.is_selected(),
                    check_state: row.check_state(),
                    expanded: row.is_expanded(),
                    striped: self.options.striped && position % 2 == 1,
                    sub_component,
                }
            })
            .collect();

        let pagination = self
            .paginator()
            .filter(Paginator::is_visible)
            .map(|paginator| PaginationStrip {
                buttons: paginator.buttons(),
                summary: paginator.showing_range(),
            });

        RenderedTable {
            headers,
            rows,
            no_data: model
                .is_empty()
                .then(|| self.options.no_data_text.clone()),
            pagination,
            density: self.options.density,
            striped: self.options.striped,
        }
    }
}

impl<T> std::fmt::Debug for Table<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Table")
            .field("rows", &self.data.len())
            .field("columns", &self.columns)
            .field("options", &self.options)
            .field("pagination", &self.pagination)
            .field("sorting", &self.sorting)
            .field("row_selection", &self.row_selection)
            .field("expanded", &self.expanded)
            .finish_non_exhaustive()
    }
}

/// Build a table and render it once.
pub fn render<T>(
    data: Vec<T>,
    columns: Vec<ColumnDef<T>>,
    options: TableOptions<T>,
) -> Result<RenderedTable> {
    Ok(Table::new(data, columns, options)?.render())
}

static_assertions::assert_impl_all!(Table<String>: Send, Sync);
