use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;

use crate::error::{Result, TableError};

/// A single parsed cell.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Number(f64),
    Text(String),
    Date(NaiveDate),
    Missing,
}

impl CellValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
            Self::Date(value) => write!(f, "{}", value.format("%Y-%m-%d")),
            Self::Missing => Ok(()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Column {
    pub name: String,
    pub cells: Vec<CellValue>,
}

impl Column {
    pub fn new(name: impl Into<String>, cells: Vec<CellValue>) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// True when every non-missing cell holds a number.
    pub fn is_numeric(&self) -> bool {
        self.cells
            .iter()
            .all(|cell| matches!(cell, CellValue::Number(_) | CellValue::Missing))
    }

    pub fn missing_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_missing()).count()
    }
}

/// Column-oriented, read-only view of a parsed source.
///
/// Constructed once through [`Table::from_columns`], which checks that every
/// column has the same length and that names are unique.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Table {
    columns: Vec<Column>,
    row_count: usize,
}

impl Table {
    pub fn from_columns(columns: Vec<Column>) -> Result<Self> {
        let row_count = columns.first().map_or(0, Column::len);
        let mut seen = BTreeSet::new();
        for column in &columns {
            if !seen.insert(column.name.as_str()) {
                return Err(TableError::DuplicateColumn {
                    name: column.name.clone(),
                });
            }
            if column.len() != row_count {
                return Err(TableError::RaggedColumn {
                    name: column.name.clone(),
                    expected: row_count,
                    found: column.len(),
                });
            }
        }
        Ok(Self { columns, row_count })
    }

    /// A table with the given headers and no rows.
    pub fn empty(names: &[&str]) -> Result<Self> {
        Self::from_columns(
            names
                .iter()
                .map(|name| Column::new(*name, Vec::new()))
                .collect(),
        )
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|column| column.name.as_str())
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&CellValue> {
        self.columns.get(column).and_then(|c| c.cells.get(row))
    }

    /// Cells of one row, in column order. Empty when `index` is out of range.
    pub fn row(&self, index: usize) -> impl Iterator<Item = &CellValue> {
        let in_range = index < self.row_count;
        self.columns
            .iter()
            .filter(move |_| in_range)
            .map(move |column| &column.cells[index])
    }

    pub fn missing_count(&self) -> usize {
        self.columns.iter().map(Column::missing_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(values: &[f64]) -> Vec<CellValue> {
        values.iter().copied().map(CellValue::Number).collect()
    }

    #[test]
    fn rejects_ragged_columns() {
        let result = Table::from_columns(vec![
            Column::new("A", numbers(&[1.0, 2.0])),
            Column::new("B", numbers(&[1.0])),
        ]);
        assert_eq!(
            result,
            Err(TableError::RaggedColumn {
                name: "B".to_string(),
                expected: 2,
                found: 1,
            })
        );
    }

    #[test]
    fn rejects_duplicate_names() {
        let result = Table::from_columns(vec![
            Column::new("A", numbers(&[1.0])),
            Column::new("A", numbers(&[2.0])),
        ]);
        assert!(matches!(result, Err(TableError::DuplicateColumn { .. })));
    }

    #[test]
    fn row_walks_columns_in_order() {
        let table = Table::from_columns(vec![
            Column::new("A", numbers(&[1.0, 2.0])),
            Column::new("B", vec![CellValue::Text("x".into()), CellValue::Missing]),
        ])
        .unwrap();

        let second: Vec<String> = table.row(1).map(ToString::to_string).collect();
        assert_eq!(second, vec!["2", ""]);
        assert_eq!(table.row(5).count(), 0);
        assert_eq!(table.missing_count(), 1);
        assert_eq!(table.column_names().collect::<Vec<_>>(), vec!["A", "B"]);
    }

    #[test]
    fn numeric_column_ignores_missing_cells() {
        let column = Column::new("Revenue", vec![CellValue::Number(1.5), CellValue::Missing]);
        assert!(column.is_numeric());

        let mixed = Column::new("Revenue", vec![CellValue::Number(1.5), "n/a".into()]);
        assert!(!mixed.is_numeric());
    }

    #[test]
    fn display_formats_each_kind() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 3).unwrap();
        assert_eq!(CellValue::Number(5.0).to_string(), "5");
        assert_eq!(CellValue::Number(216.5).to_string(), "216.5");
        assert_eq!(CellValue::Date(date).to_string(), "2025-01-03");
        assert_eq!(CellValue::Missing.to_string(), "");
    }
}
