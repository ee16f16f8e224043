//! Serializable table state.
//!
//! These are the values a [`Table`](super::Table) reports through its
//! signals and accepts back from a caller that controls them. They serialize
//! in the same shape web clients use for query strings and saved views:
//!
//! ```
//! use horizon_grid::table::{PaginationState, RowSelectionState, SortingState, SortDirection};
//!
//! let pagination = PaginationState::new(2, 25);
//! assert_eq!(
//!     serde_json::to_string(&pagination).unwrap(),
//!     r#"{"pageIndex":2,"pageSize":25}"#
//! );
//!
//! let sorting = SortingState::single("severity", SortDirection::Descending);
//! assert_eq!(
//!     serde_json::to_string(&sorting).unwrap(),
//!     r#"[{"id":"severity","desc":true}]"#
//! );
//!
//! let mut selection = RowSelectionState::new();
//! selection.select("node-1");
//! assert_eq!(serde_json::to_string(&selection).unwrap(), r#"{"node-1":true}"#);
//! ```

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::pagination::DEFAULT_PAGE_SIZE;

// ============================================================================
// Pagination
// ============================================================================

/// Current page (0-based) and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationState {
    /// 0-based page index.
    pub page_index: usize,
    /// Rows per page.
    pub page_size: usize,
}

impl PaginationState {
    /// Create a pagination state.
    pub fn new(page_index: usize, page_size: usize) -> Self {
        Self {
            page_index,
            page_size,
        }
    }

    /// Index of the first row on the current page.
    pub fn first_row_index(&self) -> usize {
        self.page_index.saturating_mul(self.page_size)
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}

// ============================================================================
// Sorting
// ============================================================================

/// Sort direction of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    /// Returns `true` for descending order.
    pub fn is_descending(&self) -> bool {
        matches!(self, SortDirection::Descending)
    }

    /// The opposite direction.
    pub fn reversed(&self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    fn from_desc(desc: bool) -> Self {
        if desc {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        }
    }
}

/// Sort of a single column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnSort {
    /// Column id.
    pub id: String,
    /// `true` for descending order.
    pub desc: bool,
}

impl ColumnSort {
    /// Create a column sort.
    pub fn new(id: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            id: id.into(),
            desc: direction.is_descending(),
        }
    }

    /// Direction of this sort.
    pub fn direction(&self) -> SortDirection {
        SortDirection::from_desc(self.desc)
    }
}

/// Ordered list of column sorts. Earlier entries take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SortingState(Vec<ColumnSort>);

impl SortingState {
    /// No sorting.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sort by a single column.
    pub fn single(id: impl Into<String>, direction: SortDirection) -> Self {
        Self(vec![ColumnSort::new(id, direction)])
    }

    /// Append a tie-breaking column sort using builder pattern.
    pub fn then_by(mut self, id: impl Into<String>, direction: SortDirection) -> Self {
        self.0.push(ColumnSort::new(id, direction));
        self
    }

    /// Returns `true` when nothing is sorted.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The primary sort.
    pub fn first(&self) -> Option<&ColumnSort> {
        self.0.first()
    }

    /// All sorts in precedence order.
    pub fn entries(&self) -> &[ColumnSort] {
        &self.0
    }

    /// Direction of the given column, if it is sorted.
    pub fn direction(&self, column_id: &str) -> Option<SortDirection> {
        self.0
            .iter()
            .find(|sort| sort.id == column_id)
            .map(ColumnSort::direction)
    }
}

impl From<Vec<ColumnSort>> for SortingState {
    fn from(sorts: Vec<ColumnSort>) -> Self {
        Self(sorts)
    }
}

// ============================================================================
// Row selection
// ============================================================================

/// Selected row ids.
///
/// Serializes as a map of id to `true`. Deselected ids are removed rather
/// than stored as `false`, and `false` entries are dropped on deserialize.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, bool>", into = "BTreeMap<String, bool>")]
pub struct RowSelectionState {
    ids: BTreeSet<String>,
}

impl RowSelectionState {
    /// Nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the row is selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Select a row. Returns `true` if it was not selected before.
    pub fn select(&mut self, id: impl Into<String>) -> bool {
        self.ids.insert(id.into())
    }

    /// Deselect a row. Returns `true` if it was selected before.
    pub fn deselect(&mut self, id: &str) -> bool {
        self.ids.remove(id)
    }

    /// Set a row's selection explicitly.
    pub fn set(&mut self, id: &str, selected: bool) {
        if selected {
            self.ids.insert(id.to_string());
        } else {
            self.ids.remove(id);
        }
    }

    /// Number of selected rows.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` when nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected ids in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Deselect everything.
    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

impl From<BTreeMap<String, bool>> for RowSelectionState {
    fn from(map: BTreeMap<String, bool>) -> Self {
        Self {
            ids: map
                .into_iter()
                .filter_map(|(id, selected)| selected.then_some(id))
                .collect(),
        }
    }
}

impl From<RowSelectionState> for BTreeMap<String, bool> {
    fn from(state: RowSelectionState) -> Self {
        state.ids.into_iter().map(|id| (id, true)).collect()
    }
}

impl<S: Into<String>> FromIterator<S> for RowSelectionState {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

// ============================================================================
// Expansion
// ============================================================================

/// Which rows are expanded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ExpandedRepr", into = "ExpandedRepr")]
pub enum ExpandedState {
    /// Every expandable row is expanded.
    All,
    /// Only the listed rows are expanded.
    Rows(BTreeSet<String>),
}

impl Default for ExpandedState {
    fn default() -> Self {
        ExpandedState::Rows(BTreeSet::new())
    }
}

impl ExpandedState {
    /// Nothing expanded.
    pub fn none() -> Self {
        Self::default()
    }

    /// Returns `true` if the row is expanded.
    pub fn is_expanded(&self, id: &str) -> bool {
        match self {
            ExpandedState::All => true,
            ExpandedState::Rows(ids) => ids.contains(id),
        }
    }

    /// Returns `true` for [`ExpandedState::All`].
    pub fn is_all(&self) -> bool {
        matches!(self, ExpandedState::All)
    }

    /// Returns `true` when no row is expanded.
    pub fn is_empty(&self) -> bool {
        matches!(self, ExpandedState::Rows(ids) if ids.is_empty())
    }
}

impl<S: Into<String>> FromIterator<S> for ExpandedState {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        ExpandedState::Rows(iter.into_iter().map(Into::into).collect())
    }
}

/// Wire shape: `true` or a map of id to `true`.
#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum ExpandedRepr {
    Flag(bool),
    Rows(BTreeMap<String, bool>),
}

impl From<ExpandedRepr> for ExpandedState {
    fn from(repr: ExpandedRepr) -> Self {
        match repr {
            ExpandedRepr::Flag(true) => ExpandedState::All,
            ExpandedRepr::Flag(false) => ExpandedState::none(),
            ExpandedRepr::Rows(map) => map
                .into_iter()
                .filter_map(|(id, expanded)| expanded.then_some(id))
                .collect(),
        }
    }
}

impl From<ExpandedState> for ExpandedRepr {
    fn from(state: ExpandedState) -> Self {
        match state {
            ExpandedState::All => ExpandedRepr::Flag(true),
            ExpandedState::Rows(ids) => {
                ExpandedRepr::Rows(ids.into_iter().map(|id| (id, true)).collect())
            }
        }
    }
}
