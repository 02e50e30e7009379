//! In-memory tables loaded from headerless CSV files.
//!
//! Schemas are supplied externally (the source files carry no header row),
//! and the original/perturbed tables of a dataset correspond row-for-row by
//! position. Tables are read once and never mutated afterwards, except for
//! the single trailing-row trim used to restore alignment.

use std::path::{Path, PathBuf};

use csv::ReaderBuilder;

use crate::error::ReportError;

/// An ordered sequence of rows sharing one column schema.
#[derive(Debug, Clone)]
pub struct Table {
    source: PathBuf,
    schema: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Reads a headerless, comma-delimited CSV file against an externally
    /// supplied schema.
    ///
    /// Fails if the file is missing or unreadable, or if any row's field
    /// count differs from the schema length. The reader is configured
    /// flexible so the field count check below is the authoritative one and
    /// can report the exact row.
    pub fn load(path: &Path, schema: &[&str]) -> Result<Self, ReportError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)
            .map_err(|e| ReportError::load(path, e.to_string()))?;

        let mut rows = Vec::new();
        for (idx, record) in reader.records().enumerate() {
            let record = record.map_err(|e| ReportError::load(path, e.to_string()))?;
            if record.len() != schema.len() {
                return Err(ReportError::load(
                    path,
                    format!(
                        "row {} has {} fields, expected {}",
                        idx + 1,
                        record.len(),
                        schema.len()
                    ),
                ));
            }
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self {
            source: path.to_path_buf(),
            schema: schema.iter().map(|&s| s.to_string()).collect(),
            rows,
        })
    }

    /// Builds a table directly from rows, for tests and fixtures.
    #[must_use]
    pub fn from_rows(schema: &[&str], rows: Vec<Vec<String>>) -> Self {
        Self {
            source: PathBuf::new(),
            schema: schema.iter().map(|&s| s.to_string()).collect(),
            rows,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Removes the last row, if any.
    pub fn trim_last_row(&mut self) {
        self.rows.pop();
    }

    /// Extracts a named column as floats.
    ///
    /// Fields that are empty or not parseable as numbers become NaN and
    /// propagate through downstream arithmetic rather than being dropped.
    pub fn numeric_column(&self, column: &str) -> Result<Vec<f64>, ReportError> {
        let idx = self
            .schema
            .iter()
            .position(|c| c == column)
            .ok_or_else(|| {
                ReportError::load(&self.source, format!("column '{column}' not in schema"))
            })?;

        Ok(self
            .rows
            .iter()
            .map(|row| row[idx].trim().parse::<f64>().unwrap_or(f64::NAN))
            .collect())
    }
}

/// An (original, perturbed) pair of tables for one dataset.
#[derive(Debug)]
pub struct DatasetPair {
    pub original: Table,
    pub perturbed: Table,
}

impl DatasetPair {
    /// Restores row correspondence between the two tables.
    ///
    /// When `trim_trailing_row` is set, exactly one trailing row is removed
    /// from both tables first; the source files of that dataset carry a
    /// known trailing artifact row. This is an artifact trim, not a general
    /// re-alignment: row counts that still differ afterwards are an error.
    pub fn align(&mut self, dataset: &str, trim_trailing_row: bool) -> Result<(), ReportError> {
        if trim_trailing_row {
            self.original.trim_last_row();
            self.perturbed.trim_last_row();
        }

        if self.original.len() != self.perturbed.len() {
            return Err(ReportError::Alignment {
                dataset: dataset.to_string(),
                original_rows: self.original.len(),
                perturbed_rows: self.perturbed.len(),
            });
        }

        Ok(())
    }
}
