//! Row selection rules.
//!
//! Selection is keyed by row id in a [`RowSelectionState`]. Selecting a row
//! can cascade to its sub-rows, and a parent's checkbox reflects how many of
//! its descendants are selected.

use super::row::Row;
use super::state::RowSelectionState;

/// Check state of a selection checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CheckState {
    /// Not selected.
    #[default]
    Unchecked,
    /// Some but not all of the covered rows are selected.
    PartiallyChecked,
    /// Selected.
    Checked,
}

impl CheckState {
    /// Returns `true` if checked fully or partially.
    pub fn is_checked(&self) -> bool {
        !matches!(self, CheckState::Unchecked)
    }

    /// Plain-text checkbox.
    pub fn symbol(&self) -> &'static str {
        match self {
            CheckState::Unchecked => "[ ]",
            CheckState::PartiallyChecked => "[-]",
            CheckState::Checked => "[x]",
        }
    }
}

/// How many selectable descendants of a row are selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SubSelection {
    /// None, or the row has no sub-rows.
    #[default]
    None,
    /// Some but not all.
    Some,
    /// All of them.
    All,
}

impl SubSelection {
    /// Status of a list of sub-rows, taking their own descendants into account.
    pub(crate) fn of<T>(sub_rows: &[Row<'_, T>]) -> Self {
        if sub_rows.is_empty() {
            return SubSelection::None;
        }

        let mut all = true;
        let mut some = false;
        for sub_row in sub_rows {
            if sub_row.can_select() {
                if sub_row.is_selected() {
                    some = true;
                } else {
                    all = false;
                }
            }
            if !sub_row.sub_rows().is_empty() {
                match sub_row.sub_selection() {
                    SubSelection::All => some = true,
                    SubSelection::Some => {
                        some = true;
                        all = false;
                    }
                    SubSelection::None => all = false,
                }
            }
        }

        if all && some {
            SubSelection::All
        } else if some {
            SubSelection::Some
        } else {
            SubSelection::None
        }
    }
}

/// Select or deselect `row`, optionally cascading to all of its descendants.
///
/// Only selectable rows are added. Deselection always removes the id.
pub(crate) fn mutate_row_selected<T>(
    selection: &mut RowSelectionState,
    row: &Row<'_, T>,
    selected: bool,
    include_sub_rows: bool,
) {
    if selected {
        if row.can_select() {
            selection.select(row.id());
        }
    } else {
        selection.deselect(row.id());
    }

    if include_sub_rows {
        for sub_row in row.sub_rows() {
            mutate_row_selected(selection, sub_row, selected, true);
        }
    }
}

/// Check state of a select-all control covering `rows`.
pub(crate) fn check_state_of<T>(rows: &[&Row<'_, T>]) -> CheckState {
    let selectable: Vec<_> = rows.iter().filter(|row| row.can_select()).collect();
    if selectable.is_empty() {
        return CheckState::Unchecked;
    }
    if selectable.iter().all(|row| row.is_selected()) {
        return CheckState::Checked;
    }
    if selectable
        .iter()
        .any(|row| row.is_selected() || row.sub_selection() != SubSelection::None)
    {
        CheckState::PartiallyChecked
    } else {
        CheckState::Unchecked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::row::RowParts;

    fn leaf<'a>(original: &'a u32, id: &str, selected: bool) -> Row<'a, u32> {
        Row::new(
            RowParts {
                original,
                id: id.to_string(),
                index: 0,
                depth: 1,
                parent_id: None,
                can_expand: false,
                expanded: false,
                can_select: true,
                selected,
                columns: &[],
            },
            Vec::new(),
        )
    }

    fn parent<'a>(original: &'a u32, children: Vec<Row<'a, u32>>) -> Row<'a, u32> {
        Row::new(
            RowParts {
                original,
                id: "p".to_string(),
                index: 0,
                depth: 0,
                parent_id: None,
                can_expand: true,
                expanded: false,
                can_select: true,
                selected: false,
                columns: &[],
            },
            children,
        )
    }

    #[test]
    fn test_sub_selection_status() {
        let value = 0u32;
        let none = parent(&value, vec![leaf(&value, "a", false), leaf(&value, "b", false)]);
        assert_eq!(none.sub_selection(), SubSelection::None);
        assert_eq!(none.check_state(), CheckState::Unchecked);

        let some = parent(&value, vec![leaf(&value, "a", true), leaf(&value, "b", false)]);
        assert_eq!(some.sub_selection(), SubSelection::Some);
        assert_eq!(some.check_state(), CheckState::PartiallyChecked);

        let all = parent(&value, vec![leaf(&value, "a", true), leaf(&value, "b", true)]);
        assert_eq!(all.sub_selection(), SubSelection::All);
    }

    #[test]
    fn test_cascade_select_and_deselect() {
        let value = 0u32;
        let row = parent(&value, vec![leaf(&value, "a", false), leaf(&value, "b", false)]);

        let mut selection = RowSelectionState::new();
        mutate_row_selected(&mut selection, &row, true, true);
        assert_eq!(selection.ids().collect::<Vec<_>>(), vec!["a", "b", "p"]);

        mutate_row_selected(&mut selection, &row, false, false);
        assert_eq!(selection.ids().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_check_state_of_rows() {
        let value = 0u32;
        let a = leaf(&value, "a", true);
        let b = leaf(&value, "b", false);
        assert_eq!(check_state_of(&[&a, &b]), CheckState::PartiallyChecked);
        assert_eq!(check_state_of(&[&a]), CheckState::Checked);
        assert_eq!(check_state_of(&[&b]), CheckState::Unchecked);
        assert_eq!(check_state_of::<u32>(&[]), CheckState::Unchecked);
    }
}
