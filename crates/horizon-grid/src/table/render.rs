//! Framework-neutral render output.
//!
//! A [`RenderedTable`] is everything a host needs to draw one frame of a
//! table: header cells, body rows in display order, the empty-state text and
//! the pagination strip. Its [`Display`](fmt::Display) impl produces a plain
//! text rendering, which the example and tests use.

use std::fmt;

use crate::pagination::{PageButton, ShowingRange};

use super::options::Density;
use super::selection::CheckState;
use super::state::SortDirection;

/// Sort indicator shown in a header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortIndicator {
    /// Not sorted.
    #[default]
    Unsorted,
    /// Sorted ascending.
    Ascending,
    /// Sorted descending.
    Descending,
}

impl SortIndicator {
    /// Plain-text arrow, empty when unsorted.
    pub fn symbol(&self) -> &'static str {
        match self {
            SortIndicator::Unsorted => "",
            SortIndicator::Ascending => " ^",
            SortIndicator::Descending => " v",
        }
    }
}

impl From<Option<SortDirection>> for SortIndicator {
    fn from(direction: Option<SortDirection>) -> Self {
        match direction {
            None => SortIndicator::Unsorted,
            Some(SortDirection::Ascending) => SortIndicator::Ascending,
            Some(SortDirection::Descending) => SortIndicator::Descending,
        }
    }
}

/// One header cell.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedHeader {
    /// Column id.
    pub id: String,
    /// Header text.
    pub label: String,
    /// Current width.
    pub width: f32,
    /// Sort indicator.
    pub sort: SortIndicator,
    /// Whether clicking the header toggles sorting.
    pub can_sort: bool,
    /// Whether a resize handle is shown.
    pub can_resize: bool,
}

/// One body cell.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedCell {
    /// Column id.
    pub column_id: String,
    /// Cell text.
    pub text: String,
    /// Width of the cell's column.
    pub width: f32,
}

/// One body row.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedRow {
    /// Row id.
    pub id: String,
    /// Nesting depth.
    pub depth: usize,
    /// Cells in column order.
    pub cells: Vec<RenderedCell>,
    /// Whether the row's own id is selected.
    pub selected: bool,
    /// State of the row's checkbox.
    pub check_state: CheckState,
    /// Whether the row is expanded.
    pub expanded: bool,
    /// Odd row of a striped table.
    pub striped: bool,
    /// Detail area rendered under an expanded row.
    pub sub_component: Option<String>,
}

impl RenderedRow {
    /// Text of the cell in the given column.
    pub fn cell_text(&self, column_id: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|cell| cell.column_id == column_id)
            .map(|cell| cell.text.as_str())
    }
}

/// The pagination strip under a table.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationStrip {
    /// Previous, page markers, Next.
    pub buttons: Vec<PageButton>,
    /// "Showing X-Y of Z" summary.
    pub summary: ShowingRange,
}

/// The output of one table render.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedTable {
    /// Header cells in column order.
    pub headers: Vec<RenderedHeader>,
    /// Body rows in display order.
    pub rows: Vec<RenderedRow>,
    /// Empty-state text, set when there are no rows.
    pub no_data: Option<String>,
    /// Pagination strip, set when pagination is enabled and there are pages.
    pub pagination: Option<PaginationStrip>,
    /// Density hint.
    pub density: Density,
    /// Whether odd rows are striped.
    pub striped: bool,
}

impl RenderedTable {
    /// Find a rendered row by id.
    pub fn row(&self, id: &str) -> Option<&RenderedRow> {
        self.rows.iter().find(|row| row.id == id)
    }

    /// Find a header by column id.
    pub fn header(&self, id: &str) -> Option<&RenderedHeader> {
        self.headers.iter().find(|header| header.id == id)
    }

    /// Ids of the rendered rows, in order.
    pub fn row_ids(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.id.as_str()).collect()
    }
}

impl fmt::Display for RenderedTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header: Vec<String> = self
            .headers
            .iter()
            .map(|header| format!("{}{}", header.label, header.sort.symbol()))
            .collect();
        writeln!(f, "{}", header.join(" | "))?;

        if let Some(text) = &self.no_data {
            writeln!(f, "{text}")?;
        }

        for row in &self.rows {
            let cells: Vec<&str> = row.cells.iter().map(|cell| cell.text.as_str()).collect();
            writeln!(f, "{}{}", "  ".repeat(row.depth), cells.join(" | "))?;
            if let Some(detail) = &row.sub_component {
                for line in detail.lines() {
                    writeln!(f, "{}    {line}", "  ".repeat(row.depth))?;
                }
            }
        }

        if let Some(strip) = &self.pagination {
            let labels: Vec<String> = strip
                .buttons
                .iter()
                .map(|button| match button {
                    PageButton::Page { current: true, .. } => format!("[{}]", button.label()),
                    _ => button.label(),
                })
                .collect();
            writeln!(f, "{}  {}", labels.join(" "), strip.summary)?;
        }
        Ok(())
    }
}
