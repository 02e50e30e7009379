//! Report assembly and console rendering.
//!
//! A `DatasetReport` bundles everything the renderer needs for one dataset
//! pair: per-column summary statistics, error metrics, and the raw series
//! for the histogram figures. Text output order is fixed: dataset header,
//! then per-column original/perturbed mean and std, then per-column
//! MAE/MSE/RMSE.

use colored::Colorize;
use serde::Serialize;

use crate::dataset::DatasetSpec;
use crate::error::ReportError;
use crate::stats::{column_stats, differences, error_metrics, ColumnStats, ErrorMetrics};
use crate::table::DatasetPair;

/// Summary and series for one numeric column.
#[derive(Debug, Serialize)]
pub struct ColumnReport {
    pub column: String,
    pub original: ColumnStats,
    pub perturbed: ColumnStats,
    pub metrics: ErrorMetrics,
    /// Original values, kept for the overlay histogram.
    #[serde(skip)]
    pub original_values: Vec<f64>,
    /// Perturbed values, kept for the overlay histogram.
    #[serde(skip)]
    pub perturbed_values: Vec<f64>,
    /// Elementwise errors, kept for the error-distribution histogram.
    #[serde(skip)]
    pub errors: Vec<f64>,
}

/// Full report for one dataset pair.
#[derive(Debug, Serialize)]
pub struct DatasetReport {
    pub dataset: String,
    pub rows: usize,
    pub columns: Vec<ColumnReport>,
}

/// Computes statistics and error metrics for every numeric column of the
/// dataset.
///
/// The pair must already be aligned; the per-column length check still
/// backstops the positional correspondence.
pub fn build_report(spec: &DatasetSpec, pair: &DatasetPair) -> Result<DatasetReport, ReportError> {
    let mut columns = Vec::with_capacity(spec.numeric_columns.len());

    for &column in spec.numeric_columns {
        let original_values = pair.original.numeric_column(column)?;
        let perturbed_values = pair.perturbed.numeric_column(column)?;

        columns.push(ColumnReport {
            column: column.to_string(),
            original: column_stats(column, &original_values)?,
            perturbed: column_stats(column, &perturbed_values)?,
            metrics: error_metrics(column, &original_values, &perturbed_values)?,
            errors: differences(column, &original_values, &perturbed_values)?,
            original_values,
            perturbed_values,
        });
    }

    Ok(DatasetReport {
        dataset: spec.name.to_string(),
        rows: pair.original.len(),
        columns,
    })
}

/// Formats one `Original ... - Mean: x, Std: y` line, two decimal places.
#[must_use]
pub fn format_stats_line(label: &str, column: &str, stats: ColumnStats) -> String {
    format!(
        "{label} {column} - Mean: {:.2}, Std: {:.2}",
        stats.mean, stats.std
    )
}

/// Formats one per-column `MAE / MSE / RMSE` line, two decimal places.
#[must_use]
pub fn format_metrics_line(column: &str, metrics: ErrorMetrics) -> String {
    format!(
        "{column} - MAE: {:.2}, MSE: {:.2}, RMSE: {:.2}",
        metrics.mae, metrics.mse, metrics.rmse
    )
}

/// Prints the report to stdout in the fixed order.
pub fn print_report(report: &DatasetReport) {
    println!(
        "{} ({} rows)",
        format!("{} Dataset:", report.dataset).bold(),
        report.rows
    );
    for col in &report.columns {
        println!(
            "  {}",
            format_stats_line("Original", &col.column, col.original)
        );
        println!(
            "  {}",
            format_stats_line("Perturbed", &col.column, col.perturbed)
        );
    }
    for col in &report.columns {
        println!("  {}", format_metrics_line(&col.column, col.metrics));
    }
    println!();
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::dataset::SALARIES;
    use crate::table::Table;

    fn salary_rows(salaries: &[&str], with_time: bool) -> Vec<Vec<String>> {
        salaries
            .iter()
            .map(|&s| {
                let mut row = vec![
                    "ABS".to_string(),
                    "Alcohol Beverage Services".to_string(),
                    "Administration".to_string(),
                    "F".to_string(),
                    s.to_string(),
                    "0".to_string(),
                    "0".to_string(),
                    "M3".to_string(),
                ];
                if with_time {
                    row.insert(0, "1690000000.0".to_string());
                }
                row
            })
            .collect()
    }

    fn salary_pair(original: &[&str], perturbed: &[&str]) -> DatasetPair {
        DatasetPair {
            original: Table::from_rows(SALARIES.input_columns, salary_rows(original, false)),
            perturbed: Table::from_rows(SALARIES.output_columns, salary_rows(perturbed, true)),
        }
    }

    #[test]
    fn report_on_salary_fixture() {
        let pair = salary_pair(
            &["50000", "60000", "70000"],
            &["50010", "59990", "70005"],
        );
        let report = build_report(&SALARIES, &pair).unwrap();

        assert_eq!(report.dataset, "Salaries");
        assert_eq!(report.rows, 3);
        assert_eq!(report.columns.len(), 1);

        let col = &report.columns[0];
        assert_eq!(col.column, "Base_Salary");
        assert!((col.original.mean - 60_000.0).abs() < 1e-9);
        assert!((col.metrics.mae - 25.0 / 3.0).abs() < 1e-9);
        assert!((col.metrics.mse - 75.0).abs() < 1e-9);
        assert_eq!(col.errors, vec![-10.0, 10.0, -5.0]);
    }

    #[test]
    fn stats_line_uses_two_decimals() {
        let stats = ColumnStats {
            mean: 3.0,
            std: 2.5f64.sqrt(),
        };
        assert_eq!(
            format_stats_line("Original", "math_score", stats),
            "Original math_score - Mean: 3.00, Std: 1.58"
        );
    }

    #[test]
    fn metrics_line_uses_two_decimals() {
        let metrics = ErrorMetrics {
            mae: 25.0 / 3.0,
            mse: 75.0,
            rmse: 75.0f64.sqrt(),
        };
        assert_eq!(
            format_metrics_line("Base_Salary", metrics),
            "Base_Salary - MAE: 8.33, MSE: 75.00, RMSE: 8.66"
        );
    }

    #[test]
    fn report_serializes_without_raw_series() {
        let pair = salary_pair(&["100", "200"], &["101", "199"]);
        let report = build_report(&SALARIES, &pair).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        let col = &json["columns"][0];
        assert!(col.get("original_values").is_none());
        assert!(col.get("errors").is_none());
        assert!(col["metrics"]["rmse"].is_number());
    }
}
