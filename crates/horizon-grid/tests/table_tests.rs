//! Integration tests for the data table.

use std::sync::Arc;

use horizon_grid::Error;
use horizon_grid::settings::GridSettings;
use horizon_grid::table::{
    CheckState, ColumnDef, Density, ExpandedState, PaginationState, RowSelectionState,
    SortDirection, SortIndicator, SortingState, Table, TableOptions, expander_column,
    selection_column,
};
use parking_lot::Mutex;

#[derive(Debug, Clone)]
struct Image {
    name: String,
    critical: i64,
    layers: Vec<Image>,
}

fn image(name: &str, critical: i64) -> Image {
    Image {
        name: name.to_string(),
        critical,
        layers: Vec::new(),
    }
}

fn images(count: usize) -> Vec<Image> {
    (0..count)
        .map(|i| image(&format!("img-{i:02}"), (i as i64 * 5) % 13))
        .collect()
}

fn columns() -> Vec<ColumnDef<Image>> {
    vec![
        ColumnDef::accessor("name", |i: &Image| i.name.clone()).with_header_text("Image"),
        ColumnDef::accessor("critical", |i: &Image| i.critical).with_header_text("Critical"),
    ]
}

fn by_name() -> TableOptions<Image> {
    TableOptions::new().with_row_id(|i: &Image| i.name.clone())
}

/// Records every value a signal emits.
fn recorder<T: Clone + Send + 'static>() -> (Arc<Mutex<Vec<T>>>, impl Fn(&T) + Send + Sync) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_clone = seen.clone();
    (seen, move |value: &T| seen_clone.lock().push(value.clone()))
}

// ============================================================================
// Selection and sorting
// ============================================================================

#[test]
fn test_selection_survives_manual_resort() {
    let data = vec![image("alpine", 1), image("debian", 7), image("ubuntu", 3)];
    let options = by_name()
        .with_row_selection(true)
        .with_manual_sorting(true);
    let mut table = Table::new(data.clone(), columns(), options).unwrap();

    assert!(table.toggle_row_selected("debian"));
    assert!(table.toggle_sorting("critical").unwrap());

    // Manual sorting never reorders; the caller re-supplies sorted data.
    assert_eq!(table.render().row_ids(), vec!["alpine", "debian", "ubuntu"]);
    let mut sorted = data;
    sorted.sort_by(|a, b| b.critical.cmp(&a.critical));
    table.set_data(sorted);

    let rendered = table.render();
    assert_eq!(rendered.row_ids(), vec!["debian", "ubuntu", "alpine"]);
    assert!(rendered.row("debian").is_some_and(|row| row.selected));
    assert!(!rendered.row("alpine").is_some_and(|row| row.selected));
    assert_eq!(table.selected_data().len(), 1);
}

#[test]
fn test_numeric_sort_cycle() {
    let options = by_name().with_sorting(true);
    let mut table = Table::new(images(6), columns(), options).unwrap();
    let (seen, slot) = recorder::<SortingState>();
    table.sorting_changed.connect(slot);

    table.toggle_sorting("critical").unwrap();
    assert_eq!(table.sort_direction("critical"), Some(SortDirection::Descending));
    let criticals: Vec<i64> = table
        .row_model()
        .rows()
        .iter()
        .map(|row| row.original().critical)
        .collect();
    assert!(criticals.windows(2).all(|pair| pair[0] >= pair[1]));
    assert_eq!(
        table.render().header("critical").map(|h| h.sort),
        Some(SortIndicator::Descending)
    );

    table.toggle_sorting("critical").unwrap();
    assert_eq!(table.sort_direction("critical"), Some(SortDirection::Ascending));

    table.toggle_sorting("critical").unwrap();
    assert_eq!(table.sort_direction("critical"), None);
    assert_eq!(table.render().row_ids()[0], "img-00");

    assert_eq!(seen.lock().len(), 3);
    assert!(seen.lock()[2].is_empty());
}

#[test]
fn test_sort_desc_first_override() {
    let columns = vec![
        ColumnDef::accessor("name", |i: &Image| i.name.clone()).with_sort_desc_first(true),
    ];
    let mut table = Table::new(images(3), columns, by_name().with_sorting(true)).unwrap();
    table.toggle_sorting("name").unwrap();
    assert_eq!(table.render().row_ids(), vec!["img-02", "img-01", "img-00"]);
}

#[test]
fn test_sorting_another_column_replaces_sort() {
    let mut table = Table::new(images(4), columns(), by_name().with_sorting(true)).unwrap();
    table.toggle_sorting("critical").unwrap();
    table.toggle_sorting("name").unwrap();
    assert_eq!(
        table.sorting_state(),
        SortingState::single("name", SortDirection::Ascending)
    );
    assert_eq!(table.sort_direction("critical"), None);
}

#[test]
fn test_missing_values_sort_last_both_ways() {
    let scores = vec![None, Some(3_i64), Some(7)];
    let columns = vec![ColumnDef::accessor("score", |s: &Option<i64>| *s)];
    let mut table = Table::new(scores, columns, TableOptions::new().with_sorting(true)).unwrap();

    table.toggle_sorting("score").unwrap();
    assert_eq!(table.sort_direction("score"), Some(SortDirection::Descending));
    assert_eq!(table.render().row_ids(), vec!["2", "1", "0"]);

    table.toggle_sorting("score").unwrap();
    assert_eq!(table.sort_direction("score"), Some(SortDirection::Ascending));
    assert_eq!(table.render().row_ids(), vec!["1", "2", "0"]);
}

#[test]
fn test_nan_scores_keep_numeric_order() {
    let cvss: Vec<f64> = (0..200)
        .map(|i| if i % 3 == 0 { f64::NAN } else { ((i * 37) % 100) as f64 / 10.0 })
        .collect();
    let columns = vec![ColumnDef::accessor("cvss", |score: &f64| *score)];
    let options = TableOptions::new().with_sorting(true);
    let mut table = Table::new(cvss.clone(), columns, options).unwrap();

    table.toggle_sorting("cvss").unwrap();
    assert_eq!(table.sort_direction("cvss"), Some(SortDirection::Descending));
    let sorted: Vec<f64> = table
        .render()
        .row_ids()
        .iter()
        .map(|id| cvss[id.parse::<usize>().unwrap()])
        .collect();

    let (numbers, missing) = sorted.split_at(sorted.iter().take_while(|s| !s.is_nan()).count());
    assert_eq!(numbers.len(), 133);
    assert!(numbers.windows(2).all(|pair| pair[0] >= pair[1]));
    assert!(missing.iter().all(|s| s.is_nan()));
}

#[test]
fn test_controlled_sorting_waits_for_caller() {
    let options = by_name()
        .with_sorting(true)
        .with_sorting_state(SortingState::new());
    let mut table = Table::new(images(4), columns(), options).unwrap();
    let (seen, slot) = recorder::<SortingState>();
    table.sorting_changed.connect(slot);

    assert!(table.toggle_sorting("name").unwrap());
    assert!(table.sorting_state().is_empty());
    let requested = seen.lock()[0].clone();
    assert_eq!(requested, SortingState::single("name", SortDirection::Ascending));

    assert!(table.set_sorting_state(requested));
    assert_eq!(table.sort_direction("name"), Some(SortDirection::Ascending));
}

#[test]
fn test_controlled_selection_waits_for_caller() {
    let options = by_name()
        .with_row_selection(true)
        .with_row_selection_state(RowSelectionState::new());
    let mut table = Table::new(images(3), columns(), options).unwrap();
    let (seen, slot) = recorder::<RowSelectionState>();
    table.row_selection_changed.connect(slot);

    assert!(table.toggle_row_selected("img-01"));
    assert!(!table.is_row_selected("img-01"));

    let requested = seen.lock()[0].clone();
    table.set_row_selection_state(requested);
    assert!(table.is_row_selected("img-01"));
}

#[test]
fn test_select_all_only_touches_current_page() {
    let options = by_name()
        .with_row_selection(true)
        .with_pagination(true)
        .with_page_size(10);
    let mut table = Table::new(images(25), columns(), options).unwrap();

    assert!(table.toggle_all_page_rows_selected(true));
    let selection = table.row_selection_state();
    assert_eq!(selection.len(), 10);
    assert!(selection.ids().all(|id| id < "img-10"));
    assert!(table.is_all_page_rows_selected());

    table.next_page();
    assert_eq!(table.page_check_state(), CheckState::Unchecked);
    table.toggle_row_selected("img-12");
    assert!(table.is_some_page_rows_selected());

    table.toggle_all_page_rows_selected(false);
    assert_eq!(table.row_selection_state().len(), 10);
    assert!(!table.is_row_selected("img-12"));
    assert!(table.is_row_selected("img-03"));
}

#[test]
fn test_selection_keyed_by_position_without_row_id() {
    let options = TableOptions::new().with_row_selection(true);
    let mut table = Table::new(images(3), columns(), options).unwrap();
    table.toggle_row_selected("1");
    assert_eq!(table.selected_data()[0].name, "img-01");

    // Positional ids follow the position, not the item.
    table.set_data(vec![image("zeta", 0), image("eta", 0)]);
    assert_eq!(table.selected_data()[0].name, "eta");
}

// ============================================================================
// Pagination
// ============================================================================

#[test]
fn test_manual_page_change_keeps_data() {
    let options = by_name().with_manual_pagination(95).with_page_size(10);
    let mut table = Table::new(images(10), columns(), options).unwrap();
    let (seen, slot) = recorder::<PaginationState>();
    table.pagination_changed.connect(slot);

    let before = table.render();
    assert_eq!(table.page_count(), Some(10));
    assert!(table.next_page());

    assert_eq!(*seen.lock(), vec![PaginationState::new(1, 10)]);
    assert_eq!(table.pagination_state().page_index, 0);
    assert_eq!(table.render().row_ids(), before.row_ids());

    // The caller acknowledges the page; rows stay whatever was supplied.
    table.set_pagination_state(PaginationState::new(1, 10)).unwrap();
    let after = table.render();
    assert_eq!(after.row_ids(), before.row_ids());
    let summary = after.pagination.map(|strip| strip.summary.to_string());
    assert_eq!(summary.as_deref(), Some("Showing 11-20 of 95"));
}

#[test]
fn test_manual_unknown_total() {
    let options = by_name().with_manual_pagination(0);
    let mut table = Table::new(images(10), columns(), options).unwrap();
    assert_eq!(table.page_count(), None);
    assert!(table.can_next_page());
    assert!(!table.last_page());
    assert!(table.render().pagination.is_none());

    table.set_total_rows(30);
    assert_eq!(table.page_count(), Some(3));
}

#[test]
fn test_page_button_drives_client_pagination() {
    let options = by_name().with_pagination(true).with_page_size(5);
    let mut table = Table::new(images(50), columns(), options).unwrap();
    let strip = table.render().pagination.unwrap();
    let last = strip.buttons[strip.buttons.len() - 2];
    assert_eq!(last.target_page(), Some(10));

    assert!(table.activate_page_button(&last));
    let rendered = table.render();
    assert_eq!(rendered.rows.len(), 5);
    assert_eq!(rendered.row_ids()[0], "img-45");
}

#[test]
fn test_pagination_hidden_without_rows() {
    let options = by_name().with_pagination(true);
    let rendered = Table::new(Vec::new(), columns(), options).unwrap().render();
    assert!(rendered.pagination.is_none());
    assert_eq!(rendered.no_data.as_deref(), Some("No data"));
}

// ============================================================================
// Expansion and sub-rows
// ============================================================================

fn nested() -> Vec<Image> {
    let mut base = image("base", 2);
    base.layers = vec![image("base/libc", 1), image("base/openssl", 4)];
    vec![base, image("app", 0)]
}

fn nested_options() -> TableOptions<Image> {
    TableOptions::<Image>::new()
        .with_row_selection(true)
        .with_sub_rows(|image| image.layers.as_slice())
}

#[test]
fn test_sub_row_ids_and_expansion() {
    let mut cols = columns();
    cols.insert(0, expander_column());
    let mut table = Table::new(nested(), cols, nested_options()).unwrap();

    let rendered = table.render();
    assert_eq!(rendered.row_ids(), vec!["0", "1"]);
    assert_eq!(rendered.rows[0].cell_text("expander"), Some("[+]"));
    assert_eq!(rendered.rows[1].cell_text("expander"), Some(""));

    assert!(!table.toggle_row_expanded("1"));
    assert!(table.toggle_row_expanded("0"));
    let rendered = table.render();
    assert_eq!(rendered.row_ids(), vec!["0", "0.0", "0.1", "1"]);
    assert_eq!(rendered.rows[1].depth, 1);
    assert_eq!(rendered.rows[0].cell_text("expander"), Some("[-]"));

    assert!(table.toggle_row_expanded("0"));
    assert_eq!(table.render().rows.len(), 2);
}

#[test]
fn test_toggle_all_rows_expanded() {
    let mut table = Table::new(nested(), columns(), nested_options()).unwrap();
    assert!(table.toggle_all_rows_expanded());
    assert_eq!(table.expanded_state(), ExpandedState::All);
    assert!(table.is_all_rows_expanded());

    // Collapsing one row turns "all" into an explicit list.
    assert!(table.set_row_expanded("0", false));
    assert_eq!(table.expanded_state(), ExpandedState::none());

    table.toggle_all_rows_expanded();
    assert!(table.toggle_all_rows_expanded());
    assert!(table.expanded_state().is_empty());
}

#[test]
fn test_sub_row_selection_cascades() {
    let mut cols = columns();
    cols.insert(0, selection_column());
    let mut table = Table::new(nested(), cols, nested_options()).unwrap();

    table.toggle_row_selected("0");
    let selection = table.row_selection_state();
    assert_eq!(selection.ids().collect::<Vec<_>>(), vec!["0", "0.0", "0.1"]);

    table.toggle_row_expanded("0");
    table.toggle_row_selected("0.1");
    let rendered = table.render();
    assert_eq!(rendered.row("0").map(|row| row.check_state), Some(CheckState::PartiallyChecked));
    assert_eq!(rendered.row("0.1").and_then(|row| row.cell_text("selection")), Some("[ ]"));
    assert_eq!(rendered.headers[0].label, "[-]");
}

#[test]
fn test_sub_row_selection_disabled() {
    let options = nested_options().with_sub_row_selection(false);
    let mut table = Table::new(nested(), columns(), options).unwrap();
    table.toggle_row_selected("0");
    assert_eq!(table.row_selection_state().ids().collect::<Vec<_>>(), vec!["0"]);
}

#[test]
fn test_sub_component_and_predicate() {
    let options = by_name()
        .with_row_can_expand(|i: &Image| i.critical > 0)
        .with_sub_component(|row| format!("{} critical findings", row.original().critical));
    let mut table = Table::new(
        vec![image("alpine", 0), image("debian", 7)],
        columns(),
        options,
    )
    .unwrap();

    assert!(!table.toggle_row_expanded("alpine"));
    assert!(table.toggle_row_expanded("debian"));
    let rendered = table.render();
    assert_eq!(rendered.row("alpine").and_then(|r| r.sub_component.clone()), None);
    assert_eq!(
        rendered.row("debian").and_then(|r| r.sub_component.clone()).as_deref(),
        Some("7 critical findings")
    );
}

#[test]
fn test_controlled_expansion() {
    let options = nested_options().with_expanded(ExpandedState::none());
    let mut table = Table::new(nested(), columns(), options).unwrap();
    let (seen, slot) = recorder::<ExpandedState>();
    table.expanded_changed.connect(slot);

    assert!(table.toggle_row_expanded("0"));
    assert!(!table.is_row_expanded("0"));
    let requested = seen.lock()[0].clone();
    assert!(requested.is_expanded("0"));

    table.set_expanded_state(requested);
    assert!(table.is_row_expanded("0"));
}

// ============================================================================
// Column sizing and settings
// ============================================================================

#[test]
fn test_resize_handle_only_on_resizable_columns() {
    let cols = vec![
        selection_column(),
        ColumnDef::accessor("name", |i: &Image| i.name.clone()),
        ColumnDef::accessor("critical", |i: &Image| i.critical).with_resizing(false),
    ];
    let options = by_name().with_column_resizing(true).with_row_selection(true);
    let mut table = Table::new(images(2), cols, options).unwrap();

    let handles: Vec<bool> = table.render().headers.iter().map(|h| h.can_resize).collect();
    assert_eq!(handles, vec![false, true, false]);

    let selection_before = table.row_selection_state();
    assert_eq!(table.resize_column("name", 240.0).unwrap(), 240.0);
    assert!(matches!(
        table.resize_column("critical", 240.0),
        Err(Error::ColumnNotResizable(_))
    ));
    assert!(matches!(
        table.resize_column("missing", 240.0),
        Err(Error::UnknownColumn(_))
    ));
    assert_eq!(table.render().rows[0].cells[1].width, 240.0);
    assert_eq!(table.row_selection_state(), selection_before);
}

#[test]
fn test_settings_seed_options() {
    let settings = GridSettings {
        page_size: 4,
        striped: true,
        density: Density::Sm,
        no_data_text: "Nothing scanned yet".to_string(),
        ..GridSettings::default()
    };
    let options = TableOptions::from_settings(&settings).with_pagination(true);
    let table = Table::new(images(10), columns(), options).unwrap();
    let rendered = table.render();
    assert_eq!(rendered.rows.len(), 4);
    assert_eq!(rendered.density, Density::Sm);
    assert!(rendered.rows[1].striped);

    let empty = Table::new(Vec::new(), columns(), TableOptions::from_settings(&settings))
        .unwrap()
        .render();
    assert_eq!(empty.no_data.as_deref(), Some("Nothing scanned yet"));
}

#[test]
fn test_render_text() {
    let options = by_name().with_pagination(true).with_page_size(2);
    let table = Table::new(images(3), columns(), options).unwrap();
    let text = table.render().to_string();
    assert!(text.starts_with("Image | Critical\n"));
    assert!(text.contains("img-00 | 0\n"));
    assert!(text.ends_with("Showing 1-2 of 3\n"));
}
