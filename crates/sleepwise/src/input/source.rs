//! Loaded tables and their source metadata.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SleepwiseError};
use crate::record::{FieldValue, Record};

/// Metadata about the source data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Detected format (csv, tsv, etc.).
    pub format: String,
    /// Number of data rows (excluding header).
    pub row_count: usize,
    /// Number of columns.
    pub column_count: usize,
    /// When the file was loaded.
    pub loaded_at: DateTime<Utc>,
}

impl SourceMetadata {
    /// Create metadata for a file that has been loaded.
    pub fn new(
        path: PathBuf,
        hash: String,
        size_bytes: u64,
        format: String,
        row_count: usize,
        column_count: usize,
    ) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            file,
            path,
            hash,
            size_bytes,
            format,
            row_count,
            column_count,
            loaded_at: Utc::now(),
        }
    }
}

/// Tabular health data, one user per row.
#[derive(Debug, Clone)]
pub struct DataTable {
    /// Column headers.
    pub headers: Vec<String>,
    /// Row data as strings (row-major order).
    pub rows: Vec<Vec<String>>,
    /// The delimiter used.
    pub delimiter: u8,
}

impl DataTable {
    /// Create a new data table.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>, delimiter: u8) -> Self {
        Self {
            headers,
            rows,
            delimiter,
        }
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Get the number of rows (excluding header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get a column by name.
    pub fn column_by_name(&self, name: &str) -> Option<Vec<&str>> {
        let index = self.headers.iter().position(|h| h == name)?;
        Some(
            self.rows
                .iter()
                .map(|row| row.get(index).map(|s| s.as_str()).unwrap_or(""))
                .collect(),
        )
    }

    /// Get a specific cell value.
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(col).map(|s| s.as_str()))
    }

    /// Build the record for a row. Missing-value cells are left out of the record.
    pub fn record(&self, row: usize) -> Result<Record> {
        let cells = self.rows.get(row).ok_or(SleepwiseError::RowOutOfRange {
            row,
            rows: self.rows.len(),
        })?;
        Ok(self.to_record(cells))
    }

    /// Iterate records for every row, in row order.
    pub fn records(&self) -> impl Iterator<Item = Record> + '_ {
        self.rows.iter().map(|cells| self.to_record(cells))
    }

    fn to_record(&self, cells: &[String]) -> Record {
        self.headers
            .iter()
            .zip(cells)
            .filter_map(|(header, cell)| {
                FieldValue::parse(cell).map(|value| (header.clone(), value))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::FieldLookup;

    fn table() -> DataTable {
        DataTable::new(
            vec![
                "Person ID".to_string(),
                "Sleep Duration".to_string(),
                "Sleep Disorder".to_string(),
            ],
            vec![
                vec!["1".to_string(), "6.1".to_string(), "None".to_string()],
                vec!["2".to_string(), "".to_string(), "Insomnia".to_string()],
            ],
            b',',
        )
    }

    #[test]
    fn test_record_for_row() {
        let record = table().record(0).unwrap();
        assert_eq!(record.number("Sleep Duration"), Ok(6.1));
        assert_eq!(record.get("Sleep Disorder"), Some(&FieldValue::from("None")));
    }

    #[test]
    fn test_empty_cells_are_absent() {
        let record = table().record(1).unwrap();
        assert!(!record.contains("Sleep Duration"));
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn test_row_out_of_range() {
        let err = table().record(5).unwrap_err();
        assert!(matches!(err, SleepwiseError::RowOutOfRange { row: 5, rows: 2 }));
    }

    #[test]
    fn test_records_iterates_all_rows() {
        assert_eq!(table().records().count(), 2);
    }

    #[test]
    fn test_column_by_name() {
        let t = table();
        assert_eq!(t.column_by_name("Sleep Disorder"), Some(vec!["None", "Insomnia"]));
        assert_eq!(t.column_by_name("Absent"), None);
    }
}
