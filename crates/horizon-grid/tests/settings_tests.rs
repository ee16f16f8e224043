//! Integration tests for settings persistence.

use horizon_grid::Error;
use horizon_grid::settings::GridSettings;
use horizon_grid::table::Density;

fn custom() -> GridSettings {
    GridSettings {
        page_size: 20,
        sibling_count: 1,
        density: Density::Sm,
        striped: true,
        no_data_text: "No findings".to_string(),
        approximate_pagination: true,
        enable_column_resizing: true,
    }
}

#[test]
fn test_toml_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grid.toml");

    custom().save_toml(&path).unwrap();
    let loaded = GridSettings::load_toml(&path).unwrap();
    assert_eq!(loaded, custom());
}

#[test]
fn test_json_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grid.json");

    custom().save_json(&path).unwrap();
    assert_eq!(GridSettings::load_json(&path).unwrap(), custom());
}

#[test]
fn test_save_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grid.toml");
    std::fs::write(&path, "page_size = 99").unwrap();

    GridSettings::default().save_toml(&path).unwrap();
    assert_eq!(GridSettings::load_toml(&path).unwrap(), GridSettings::default());
}

#[test]
fn test_partial_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grid.toml");
    std::fs::write(&path, "striped = true\n").unwrap();

    let loaded = GridSettings::load_toml(&path).unwrap();
    assert!(loaded.striped);
    assert_eq!(loaded.page_size, 10);
    assert_eq!(loaded.density, Density::Md);
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let err = GridSettings::load_toml(&path).unwrap_err();
    assert!(matches!(err, Error::Io { path: p, .. } if p == path));
}

#[test]
fn test_invalid_file_contents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grid.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(GridSettings::load_json(&path), Err(Error::Json(_))));

    std::fs::write(&path, r#"{"page_size": 0}"#).unwrap();
    assert!(matches!(
        GridSettings::load_json(&path),
        Err(Error::InvalidPageSize(0))
    ));
}
