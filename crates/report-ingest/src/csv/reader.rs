//! Delimited-text loading into a [`Table`].

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use report_model::{CellValue, Column, Table};
use tracing::debug;

use super::header::normalize_headers;
use crate::error::{IngestError, Result};
use crate::infer::infer_cell;
use crate::options::LoadOptions;

/// Load a CSV file with default options.
pub fn load(path: &Path) -> Result<Table> {
    load_with_options(path, &LoadOptions::default())
}

/// Load a delimited file.
///
/// The first record is the header row; every later record must have the same
/// number of fields. Nothing is returned unless the whole file parses.
pub fn load_with_options(path: &Path, options: &LoadOptions) -> Result<Table> {
    let file = File::open(path).map_err(|e| IngestError::open(path, e))?;
    let table = load_reader(file, path, options)?;
    debug!(
        path = %path.display(),
        rows = table.row_count(),
        columns = table.column_count(),
        "loaded table"
    );
    Ok(table)
}

/// Load from any byte source. `source` only names the input in errors.
pub fn load_reader<R: Read>(reader: R, source: &Path, options: &LoadOptions) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut records = reader.records();

    let header = match records.next() {
        Some(record) => record.map_err(|e| IngestError::from_csv(source, e))?,
        None => {
            return Err(IngestError::MalformedSource {
                path: source.to_path_buf(),
                line: 1,
                reason: "no header row".to_string(),
            });
        }
    };
    let names = normalize_headers(header.iter());
    let mut cells: Vec<Vec<CellValue>> = vec![Vec::new(); names.len()];

    for record in records {
        let record = record.map_err(|e| IngestError::from_csv(source, e))?;
        check_width(&record, names.len(), source)?;
        for (column, raw) in cells.iter_mut().zip(record.iter()) {
            column.push(infer_cell(raw, options));
        }
    }

    let columns = names
        .into_iter()
        .zip(cells)
        .map(|(name, values)| Column::new(name, values))
        .collect();
    Table::from_columns(columns).map_err(|e| IngestError::InvalidTable {
        path: source.to_path_buf(),
        source: e,
    })
}

fn check_width(record: &StringRecord, expected: usize, source: &Path) -> Result<()> {
    if record.len() == expected {
        return Ok(());
    }
    Err(IngestError::MalformedSource {
        path: source.to_path_buf(),
        line: record.position().map_or(0, csv::Position::line),
        reason: format!("expected {expected} fields, found {}", record.len()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_load_basic() {
        let file = create_temp_csv("Product,Revenue\nLaptop,100\nMouse,300\n");
        let table = load(file.path()).unwrap();

        assert_eq!(table.column_names().collect::<Vec<_>>(), vec!["Product", "Revenue"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.cell(1, 1), Some(&CellValue::Number(300.0)));
    }

    #[test]
    fn test_load_quoted_fields() {
        let file = create_temp_csv("Name,Note\n\"Smith, J\",\"said \"\"hi\"\"\"\n");
        let table = load(file.path()).unwrap();

        assert_eq!(table.cell(0, 0), Some(&CellValue::Text("Smith, J".to_string())));
        assert_eq!(table.cell(0, 1), Some(&CellValue::Text("said \"hi\"".to_string())));
    }

    #[test]
    fn test_load_header_only() {
        let file = create_temp_csv("Revenue,Product\n");
        let table = load(file.path()).unwrap();

        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count(), 2);
    }

    #[test]
    fn test_load_empty_file() {
        let file = create_temp_csv("");
        let result = load(file.path());

        assert!(matches!(result, Err(IngestError::MalformedSource { .. })));
    }

    #[test]
    fn test_short_row_is_malformed() {
        let file = create_temp_csv("A,B,C\n1,2,3\n4,5\n");
        let err = load(file.path()).unwrap_err();

        match err {
            IngestError::MalformedSource { line, reason, .. } => {
                assert_eq!(line, 3);
                assert_eq!(reason, "expected 3 fields, found 2");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_long_row_is_malformed() {
        let file = create_temp_csv("A,B\n1,2,3\n");
        let result = load(file.path());

        assert!(matches!(result, Err(IngestError::MalformedSource { .. })));
    }

    #[test]
    fn test_semicolon_delimiter() {
        let options = LoadOptions::default().with_delimiter(b';');
        let file = create_temp_csv("A;B\n1;x\n");
        let table = load_with_options(file.path(), &options).unwrap();

        assert_eq!(table.column_count(), 2);
        assert_eq!(table.cell(0, 1), Some(&CellValue::Text("x".to_string())));
    }

    #[test]
    fn test_load_reader_from_bytes() {
        let data = "A,B\n1,\n".as_bytes();
        let table = load_reader(data, Path::new("<memory>"), &LoadOptions::default()).unwrap();

        assert_eq!(table.cell(0, 1), Some(&CellValue::Missing));
        assert_eq!(table.missing_count(), 1);
    }

    #[test]
    fn test_invalid_utf8_is_malformed() {
        let data: &[u8] = b"A,B\n1,\xff\xfe\n";
        let result = load_reader(data, Path::new("<memory>"), &LoadOptions::default());

        assert!(matches!(result, Err(IngestError::MalformedSource { .. })));
    }
}
