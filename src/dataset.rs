//! Built-in dataset definitions.
//!
//! The report covers two fixed dataset pairs. Their files carry no header
//! row, so the schemas live here; the perturbed schema is the input schema
//! prefixed by the `time` column the perturbation filter prepends.

use std::path::Path;

use crate::error::ReportError;
use crate::table::{DatasetPair, Table};

/// A dataset pair known to the report.
#[derive(Debug)]
pub struct DatasetSpec {
    /// Display name used in report headers and error messages.
    pub name: &'static str,
    /// File name of the original table, under the input directory.
    pub input_file: &'static str,
    /// File name of the perturbed table, under the output directory.
    pub output_file: &'static str,
    /// Schema of the original table, in file order.
    pub input_columns: &'static [&'static str],
    /// Schema of the perturbed table, in file order.
    pub output_columns: &'static [&'static str],
    /// Numeric columns subject to statistics and error metrics.
    pub numeric_columns: &'static [&'static str],
    /// Whether both files carry a trailing artifact row to discard.
    pub trim_trailing_row: bool,
    /// Bin count for the original-vs-perturbed overlay histograms.
    pub overlay_bins: usize,
    /// Bin count for the error-distribution histograms.
    pub error_bins: usize,
}

pub const SALARIES: DatasetSpec = DatasetSpec {
    name: "Salaries",
    input_file: "EmployeeSalaries.csv",
    output_file: "EmployeeSalaries.perturbed.csv",
    input_columns: &[
        "Department",
        "Department_Name",
        "Division",
        "Gender",
        "Base_Salary",
        "Overtime_Pay",
        "Longevity_Pay",
        "Grade",
    ],
    output_columns: &[
        "time",
        "Department",
        "Department_Name",
        "Division",
        "Gender",
        "Base_Salary",
        "Overtime_Pay",
        "Longevity_Pay",
        "Grade",
    ],
    numeric_columns: &["Base_Salary"],
    trim_trailing_row: false,
    overlay_bins: 250,
    error_bins: 250,
};

pub const STUDENTS: DatasetSpec = DatasetSpec {
    name: "Students",
    input_file: "StudentsPerformance.csv",
    output_file: "StudentsPerformance.perturbed.csv",
    input_columns: &[
        "gender",
        "race_ethnicity",
        "parental_education",
        "lunch",
        "test_preparation",
        "math_score",
        "reading_score",
        "writing_score",
    ],
    output_columns: &[
        "time",
        "gender",
        "race_ethnicity",
        "parental_education",
        "lunch",
        "test_preparation",
        "math_score",
        "reading_score",
        "writing_score",
    ],
    numeric_columns: &["math_score", "reading_score", "writing_score"],
    trim_trailing_row: true,
    overlay_bins: 100,
    error_bins: 50,
};

/// All dataset pairs, in report order.
#[must_use]
pub const fn all() -> [&'static DatasetSpec; 2] {
    [&SALARIES, &STUDENTS]
}

impl DatasetSpec {
    /// Loads and aligns this dataset's pair from the given directories.
    pub fn load_pair(
        &self,
        input_dir: &Path,
        output_dir: &Path,
    ) -> Result<DatasetPair, ReportError> {
        let original = Table::load(&input_dir.join(self.input_file), self.input_columns)?;
        let perturbed = Table::load(&output_dir.join(self.output_file), self.output_columns)?;

        let mut pair = DatasetPair {
            original,
            perturbed,
        };
        pair.align(self.name, self.trim_trailing_row)?;
        Ok(pair)
    }
}
