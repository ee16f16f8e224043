//! Horizon Grid Scan Results Demo
//!
//! Drives a server-paginated table of vulnerability findings:
//! - Manual pagination and sorting against an in-memory "server"
//! - Expandable rows with a detail sub-component
//! - Row selection that survives re-fetches
//!
//! Run with: RUST_LOG=horizon_grid=debug cargo run -p horizon-grid --example scan_results

use std::sync::Arc;

use horizon_grid::Result;
use horizon_grid::pagination::PageButton;
use horizon_grid::settings::GridSettings;
use horizon_grid::table::{
    CellValue, ColumnDef, PaginationState, SortingState, Table, TableOptions, expander_column,
    selection_column,
};
use parking_lot::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
struct Finding {
    cve: String,
    package: String,
    severity: f64,
    fixed_in: Option<String>,
}

/// What a scan service would return for one page.
struct FindingsPage {
    rows: Vec<Finding>,
    total: usize,
}

/// In-memory stand-in for the findings endpoint.
struct FindingsService {
    findings: Vec<Finding>,
}

impl FindingsService {
    fn new() -> Self {
        const PACKAGES: [&str; 6] = ["openssl", "zlib", "curl", "glibc", "busybox", "libxml2"];
        let findings = (0..137)
            .map(|i| Finding {
                cve: format!("CVE-2024-{:04}", 1000 + i),
                package: PACKAGES[i % PACKAGES.len()].to_string(),
                severity: ((i * 37) % 100) as f64 / 10.0,
                fixed_in: (i % 3 != 0).then(|| format!("1.{}.{}", i % 7, i % 5)),
            })
            .collect();
        Self { findings }
    }

    fn fetch(&self, pagination: PaginationState, sorting: &SortingState) -> FindingsPage {
        let mut rows = self.findings.clone();
        if let Some(sort) = sorting.first() {
            let key = |f: &Finding| match sort.id.as_str() {
                "severity" => CellValue::from(f.severity),
                "package" => CellValue::from(f.package.as_str()),
                _ => CellValue::from(f.cve.as_str()),
            };
            rows.sort_by(|a, b| {
                let ordering = key(a).compare(&key(b));
                if sort.desc { ordering.reverse() } else { ordering }
            });
        }
        let start = pagination.first_row_index().min(rows.len());
        let end = (start + pagination.page_size).min(rows.len());
        FindingsPage {
            total: self.findings.len(),
            rows: rows[start..end].to_vec(),
        }
    }
}

fn columns() -> Vec<ColumnDef<Finding>> {
    vec![
        selection_column(),
        expander_column(),
        ColumnDef::accessor("cve", |f: &Finding| f.cve.clone()).with_header_text("CVE"),
        ColumnDef::accessor("package", |f: &Finding| f.package.clone())
            .with_header_text("Package"),
        ColumnDef::accessor("severity", |f: &Finding| f.severity)
            .with_header_text("Severity")
            .with_size(90.0)
            .with_cell(|cell| format!("{:.1}", cell.value().as_float().unwrap_or_default())),
    ]
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = GridSettings::from_toml_str(
        r#"
        page_size = 8
        sibling_count = 1
        striped = true
        no_data_text = "No findings"
        "#,
    )?;

    let service = FindingsService::new();
    let first = service.fetch(PaginationState::new(0, settings.page_size), &SortingState::new());

    let options = TableOptions::<Finding>::from_settings(&settings)
        .with_manual_pagination(first.total)
        .with_sorting_state(SortingState::new())
        .with_manual_sorting(true)
        .with_row_selection(true)
        .with_row_id(|f: &Finding| f.cve.clone())
        .with_row_can_expand(|_| true)
        .with_sub_component(|row| {
            let finding = row.original();
            match &finding.fixed_in {
                Some(version) => {
                    format!("{} is fixed in {} {}", finding.cve, finding.package, version)
                }
                None => format!("{} has no fix yet", finding.cve),
            }
        });
    let mut table = Table::new(first.rows, columns(), options)?;

    // Controlled state: record what the user asked for, then fetch and push it back.
    let requested_page = Arc::new(Mutex::new(None));
    let requested_sort = Arc::new(Mutex::new(None));
    {
        let requested_page = requested_page.clone();
        table.pagination_changed.connect(move |state| {
            *requested_page.lock() = Some(*state);
        });
        let requested_sort = requested_sort.clone();
        table.sorting_changed.connect(move |state| {
            *requested_sort.lock() = Some(state.clone());
        });
    }
    table.row_selection_changed.connect(|selection| {
        tracing::info!(selected = selection.len(), "selection changed");
    });

    println!("{}", table.render());

    table.toggle_row_selected("CVE-2024-1001");
    table.toggle_sorting("severity")?;
    refresh(&mut table, &service, &requested_page, &requested_sort)?;
    if let Some(top) = table.data().first().map(|f| f.cve.clone()) {
        table.toggle_row_expanded(&top);
    }
    println!("{}", table.render());

    // Click the "Next" button of the rendered strip twice.
    for _ in 0..2 {
        let next = table.render().pagination.and_then(|strip| {
            strip
                .buttons
                .into_iter()
                .find(|button| matches!(button, PageButton::Next { .. }))
        });
        if let Some(button) = next {
            table.activate_page_button(&button);
            refresh(&mut table, &service, &requested_page, &requested_sort)?;
        }
    }
    println!("{}", table.render());

    println!(
        "Selected ids: {:?}",
        table.row_selection_state().ids().collect::<Vec<_>>()
    );
    Ok(())
}

/// Apply pending requests the way a host would after a server round trip.
fn refresh(
    table: &mut Table<Finding>,
    service: &FindingsService,
    requested_page: &Mutex<Option<PaginationState>>,
    requested_sort: &Mutex<Option<SortingState>>,
) -> Result<()> {
    let mut pagination = table.pagination_state();
    let mut sorting = table.sorting_state();
    if let Some(state) = requested_sort.lock().take() {
        sorting = state;
        pagination.page_index = 0;
    }
    if let Some(state) = requested_page.lock().take() {
        pagination = state;
    }

    let page = service.fetch(pagination, &sorting);
    table.set_data(page.rows);
    table.set_total_rows(page.total);
    table.set_sorting_state(sorting);
    table.set_pagination_state(pagination)?;
    Ok(())
}
