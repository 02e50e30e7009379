//! Error taxonomy for the accuracy report.
//!
//! Every failure is terminal for the run: the report has no partial-success
//! mode, so errors carry enough context (dataset, column, path) to identify
//! the offending input before the process exits non-zero.

use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort the report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The file is missing, unreadable, or a row does not match the schema.
    #[error("failed to load {path}: {reason}")]
    Load { path: PathBuf, reason: String },

    /// Original and perturbed row counts still differ after trimming.
    #[error(
        "dataset '{dataset}' is misaligned: original has {original_rows} rows, \
         perturbed has {perturbed_rows}"
    )]
    Alignment {
        dataset: String,
        original_rows: usize,
        perturbed_rows: usize,
    },

    /// Descriptive statistics are undefined for an empty column.
    #[error("column '{column}' is empty")]
    EmptyColumn { column: String },

    /// Error metrics require columns of identical length.
    #[error(
        "column '{column}' length mismatch: original has {original_len} values, \
         perturbed has {perturbed_len}"
    )]
    LengthMismatch {
        column: String,
        original_len: usize,
        perturbed_len: usize,
    },
}

impl ReportError {
    /// Builds a `Load` error for the given path.
    pub fn load(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Load {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_message_names_path() {
        let err = ReportError::load("input/EmployeeSalaries.csv", "no such file");
        assert_eq!(
            err.to_string(),
            "failed to load input/EmployeeSalaries.csv: no such file"
        );
    }

    #[test]
    fn alignment_message_names_dataset_and_counts() {
        let err = ReportError::Alignment {
            dataset: "Students".to_string(),
            original_rows: 1000,
            perturbed_rows: 999,
        };
        let msg = err.to_string();
        assert!(msg.contains("Students"));
        assert!(msg.contains("1000"));
        assert!(msg.contains("999"));
    }
}
