//! Logging facilities for Horizon Grid.
//!
//! Horizon Grid uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! use tracing_subscriber::EnvFilter;
//!
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter(EnvFilter::new("horizon_grid=debug"))
//!         .init();
//! }
//! ```
//!
//! The constants in [`targets`] name the subsystems so they can be used in
//! filter directives.

/// Span names used throughout Horizon Grid for tracing.
pub mod span_names {
    /// Signal emission span.
    pub const SIGNAL: &str = "horizon_grid::signal";
    /// Row model computation span.
    pub const ROW_MODEL: &str = "horizon_grid::row_model";
    /// Table render span.
    pub const RENDER: &str = "horizon_grid::render";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core target.
    pub const CORE: &str = "horizon_grid_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_grid_core::signal";
    /// Property and controlled state target.
    pub const PROPERTY: &str = "horizon_grid_core::property";
    /// Grid crate target.
    pub const GRID: &str = "horizon_grid";
    /// Range paginator and pagination control target.
    pub const PAGINATION: &str = "horizon_grid::pagination";
    /// Data table target.
    pub const TABLE: &str = "horizon_grid::table";
    /// Settings loading target.
    pub const SETTINGS: &str = "horizon_grid::settings";
}
