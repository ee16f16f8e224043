//! Grid settings.
//!
//! [`GridSettings`] holds the presentation defaults a host application
//! injects into its tables: page size, strip width, density, striping,
//! empty-state text. Settings are plain serde data and can be persisted as
//! TOML or JSON. Missing keys fall back to their defaults.
//!
//! ```
//! use horizon_grid::settings::GridSettings;
//! use horizon_grid::table::Density;
//!
//! let settings = GridSettings::from_toml_str(
//!     r#"
//!     page_size = 25
//!     density = "sm"
//!     "#,
//! )?;
//! assert_eq!(settings.page_size, 25);
//! assert_eq!(settings.density, Density::Sm);
//! assert_eq!(settings.sibling_count, 2);
//! # Ok::<(), horizon_grid::Error>(())
//! ```

use std::fs;
use std::io::Write;
use std::path::Path;

use horizon_grid_core::logging::targets;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::pagination::{DEFAULT_PAGE_SIZE, DEFAULT_SIBLING_COUNT};
use crate::table::{DEFAULT_NO_DATA_TEXT, Density};

/// Presentation defaults for tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    /// Rows per page.
    pub page_size: usize,
    /// Pages shown on each side of the current page in the strip.
    pub sibling_count: usize,
    /// Row density.
    pub density: Density,
    /// Alternate row backgrounds.
    pub striped: bool,
    /// Text shown when a table has no rows.
    pub no_data_text: String,
    /// Treat row counts as lower bounds.
    pub approximate_pagination: bool,
    /// Show column resize handles.
    pub enable_column_resizing: bool,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            sibling_count: DEFAULT_SIBLING_COUNT,
            density: Density::default(),
            striped: false,
            no_data_text: DEFAULT_NO_DATA_TEXT.to_string(),
            approximate_pagination: false,
            enable_column_resizing: false,
        }
    }
}

impl GridSettings {
    /// Parse settings from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let settings: Self = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Parse settings from a JSON string.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file.
    pub fn load_toml(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = read_text(path)?;
        let settings = Self::from_toml_str(&content)?;
        tracing::debug!(target: targets::SETTINGS, path = %path.display(), "settings loaded");
        Ok(settings)
    }

    /// Load settings from a JSON file.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = read_text(path)?;
        let settings = Self::from_json_str(&content)?;
        tracing::debug!(target: targets::SETTINGS, path = %path.display(), "settings loaded");
        Ok(settings)
    }

    /// Serialize as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Save settings to a TOML file.
    ///
    /// The file is replaced atomically.
    pub fn save_toml(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = self.to_toml_string()?;
        atomic_write(path.as_ref(), content.as_bytes())
    }

    /// Save settings to a JSON file.
    ///
    /// The file is replaced atomically.
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        atomic_write(path.as_ref(), content.as_bytes())
    }

    /// Check values that deserialize fine but cannot drive a table.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            tracing::warn!(target: targets::SETTINGS, "page_size must be at least 1");
            return Err(Error::InvalidPageSize(self.page_size));
        }
        Ok(())
    }
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    // Same directory, so the final rename stays on one filesystem.
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = tempfile::NamedTempFile::new_in(parent).map_err(|e| Error::io(path, e))?;
    file.write_all(content).map_err(|e| Error::io(path, e))?;
    file.persist(path).map_err(|e| Error::io(path, e.error))?;
    tracing::debug!(target: targets::SETTINGS, path = %path.display(), "settings saved");
    Ok(())
}
