//! Error types for the grid components.

use std::path::PathBuf;

/// Result type alias for grid operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when configuring or driving a grid.
///
/// Interactions on well-formed tables never fail on data; these errors cover
/// configuration mistakes and programmatic misuse only.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Two columns share the same id.
    #[error("Duplicate column id '{0}'")]
    DuplicateColumn(String),

    /// No column with the given id exists.
    #[error("Unknown column '{0}'")]
    UnknownColumn(String),

    /// The column cannot be resized, or resizing is disabled for the table.
    #[error("Column '{0}' cannot be resized")]
    ColumnNotResizable(String),

    /// A page size of zero was supplied.
    #[error("Invalid page size {0}: must be at least 1")]
    InvalidPageSize(usize),

    /// Settings file I/O error.
    #[error("Failed to access settings file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML settings could not be parsed.
    #[error("Invalid TOML settings: {0}")]
    Toml(#[from] toml::de::Error),

    /// Settings could not be written as TOML.
    #[error("Failed to serialize settings as TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// JSON settings could not be parsed or written.
    #[error("Invalid JSON settings: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a duplicate column error.
    pub fn duplicate_column(id: impl Into<String>) -> Self {
        Self::DuplicateColumn(id.into())
    }

    /// Create an unknown column error.
    pub fn unknown_column(id: impl Into<String>) -> Self {
        Self::UnknownColumn(id.into())
    }

    /// Create a column-not-resizable error.
    pub fn not_resizable(id: impl Into<String>) -> Self {
        Self::ColumnNotResizable(id.into())
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::duplicate_column("severity").to_string(),
            "Duplicate column id 'severity'"
        );
        assert_eq!(Error::unknown_column("cve").to_string(), "Unknown column 'cve'");
        assert_eq!(
            Error::InvalidPageSize(0).to_string(),
            "Invalid page size 0: must be at least 1"
        );
    }

    #[test]
    fn test_io_error_keeps_source() {
        let err = Error::io(
            "grid.toml",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert!(err.to_string().contains("grid.toml"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
