use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{RawRow, RawTable, SCHEMA, column_names};

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// Why the store could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("No data: '{}' is empty", .0.display())]
    EmptyData(PathBuf),

    #[error("Parsing error in '{}': {detail}", .path.display())]
    ParseError { path: PathBuf, detail: String },
}

impl LoadError {
    fn parse(path: &Path, detail: impl ToString) -> Self {
        LoadError::ParseError {
            path: path.to_path_buf(),
            detail: detail.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the store at `path` into a [`RawTable`].
///
/// The header must be exactly the schema columns, in schema order; a missing,
/// extra, duplicated or reordered column is a [`LoadError::ParseError`].
/// Empty cells become `None` and are left for the cleaning stage. A file
/// with no bytes, only whitespace, or only a header has no data and yields
/// [`LoadError::EmptyData`].
pub fn load_store(path: &Path) -> Result<RawTable, LoadError> {
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::parse(path, format!("reading file: {e}")),
    })?;

    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(LoadError::EmptyData(path.to_path_buf()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(bytes.as_slice());

    let columns: Vec<String> = reader
        .headers()
        .map_err(|e| LoadError::parse(path, e))?
        .iter()
        .map(|h| h.to_string())
        .collect();

    for (name, _) in SCHEMA {
        if !columns.iter().any(|c| c == name) {
            return Err(LoadError::parse(
                path,
                format!("missing column '{name}' (header: {columns:?})"),
            ));
        }
    }

    if columns != column_names() {
        return Err(LoadError::parse(
            path,
            format!(
                "unexpected header {columns:?}, expected {:?}",
                column_names()
            ),
        ));
    }

    let rows = reader
        .deserialize::<RawRow>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| LoadError::parse(path, e))?;

    if rows.is_empty() {
        return Err(LoadError::EmptyData(path.to_path_buf()));
    }

    let table = RawTable { rows, columns };
    let (n_rows, n_cols) = table.shape();
    log::info!("Loaded '{}': {n_rows} rows, {n_cols} columns", path.display());
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_store(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("flights.csv");
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = load_store(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, LoadError::NotFound(_)));
        assert!(err.to_string().starts_with("File not found"));
    }

    #[test]
    fn zero_byte_file_is_empty_data() {
        let dir = TempDir::new().unwrap();
        let path = write_store(&dir, "");
        assert!(matches!(load_store(&path), Err(LoadError::EmptyData(_))));
    }

    #[test]
    fn whitespace_only_file_is_empty_data() {
        let dir = TempDir::new().unwrap();
        let path = write_store(&dir, "\n  \n");
        assert!(matches!(load_store(&path), Err(LoadError::EmptyData(_))));
    }

    #[test]
    fn header_without_rows_is_empty_data() {
        let dir = TempDir::new().unwrap();
        let path = write_store(&dir, "year,month,passengers\n");
        assert!(matches!(load_store(&path), Err(LoadError::EmptyData(_))));
    }

    #[test]
    fn missing_passengers_column_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write_store(&dir, "year,month\n2000,January\n");
        match load_store(&path) {
            Err(LoadError::ParseError { detail, .. }) => assert!(detail.contains("passengers")),
            other => panic!("expected ParseError, got {other:?}"),
        }
    }

    #[test]
    fn ragged_row_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write_store(
            &dir,
            "year,month,passengers\n2000,January,210\n2000,February,205,999\n",
        );
        let err = load_store(&path).unwrap_err();
        assert!(matches!(err, LoadError::ParseError { .. }));
        assert!(err.to_string().contains("Parsing error"));
    }

    #[test]
    fn non_numeric_count_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write_store(&dir, "year,month,passengers\n2000,January,lots\n");
        assert!(matches!(load_store(&path), Err(LoadError::ParseError { .. })));
    }

    #[test]
    fn empty_cells_load_as_missing() {
        let dir = TempDir::new().unwrap();
        let path = write_store(
            &dir,
            "year,month,passengers\n2000,January,\n,February,205\n2000,March,190\n",
        );
        let table = load_store(&path).unwrap();
        assert_eq!(table.shape(), (3, 3));
        assert_eq!(table.rows[0].passengers, None);
        assert_eq!(table.rows[1].year, None);
        assert_eq!(
            table.rows[2],
            RawRow {
                year: Some(2000),
                month: Some("March".into()),
                passengers: Some(190),
            }
        );
    }

    #[test]
    fn extra_column_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write_store(
            &dir,
            "year,month,passengers,note\n2000,January,210,x\n2000,February,205,\n",
        );
        match load_store(&path) {
            Err(LoadError::ParseError { detail, .. }) => assert!(detail.contains("note")),
            other => panic!("expected ParseError, got {other:?}"),
        }
    }

    #[test]
    fn duplicated_column_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write_store(&dir, "year,month,passengers,year\n2000,January,210,2000\n");
        assert!(matches!(load_store(&path), Err(LoadError::ParseError { .. })));
    }

    #[test]
    fn reordered_columns_are_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write_store(&dir, "passengers,year,month\n210,2000,January\n");
        assert!(matches!(load_store(&path), Err(LoadError::ParseError { .. })));
    }

    #[test]
    fn loaded_columns_match_schema() {
        let dir = TempDir::new().unwrap();
        let path = write_store(&dir, "year,month,passengers\n2000,January,210\n");
        let table = load_store(&path).unwrap();
        assert_eq!(table.columns, column_names());
        assert_eq!(table.shape(), (1, SCHEMA.len()));
    }
}
