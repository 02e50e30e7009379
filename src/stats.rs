//! Descriptive statistics and pointwise error metrics.
//!
//! Pure, deterministic reductions over numeric columns. NaN elements
//! propagate into the results rather than being dropped.

#![allow(clippy::cast_precision_loss)]

use serde::Serialize;

use crate::error::ReportError;

/// Mean and sample standard deviation of one column.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ColumnStats {
    pub mean: f64,
    pub std: f64,
}

/// Pointwise error metrics between an original and a perturbed column.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ErrorMetrics {
    /// Mean absolute error.
    pub mae: f64,
    /// Mean squared error.
    pub mse: f64,
    /// Root mean squared error, `sqrt(mse)`.
    pub rmse: f64,
}

/// Computes the arithmetic mean and sample standard deviation (N-1).
///
/// A single-element column has an undefined sample variance and yields a
/// NaN std rather than an error.
pub fn column_stats(column: &str, values: &[f64]) -> Result<ColumnStats, ReportError> {
    if values.is_empty() {
        return Err(ReportError::EmptyColumn {
            column: column.to_string(),
        });
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);

    Ok(ColumnStats {
        mean,
        std: variance.sqrt(),
    })
}

/// Computes MAE, MSE and RMSE over the elementwise differences
/// `original[i] - perturbed[i]`.
///
/// The columns must have identical length and index order; correspondence
/// is positional, there is no join key.
pub fn error_metrics(
    column: &str,
    original: &[f64],
    perturbed: &[f64],
) -> Result<ErrorMetrics, ReportError> {
    if original.len() != perturbed.len() {
        return Err(ReportError::LengthMismatch {
            column: column.to_string(),
            original_len: original.len(),
            perturbed_len: perturbed.len(),
        });
    }
    if original.is_empty() {
        return Err(ReportError::EmptyColumn {
            column: column.to_string(),
        });
    }

    let n = original.len() as f64;
    let mut abs_sum = 0.0;
    let mut sq_sum = 0.0;
    for (a, b) in original.iter().zip(perturbed) {
        let diff = a - b;
        abs_sum += diff.abs();
        sq_sum += diff * diff;
    }

    let mse = sq_sum / n;
    Ok(ErrorMetrics {
        mae: abs_sum / n,
        mse,
        rmse: mse.sqrt(),
    })
}

/// Elementwise differences `original[i] - perturbed[i]`, for the
/// error-distribution histograms.
pub fn differences(
    column: &str,
    original: &[f64],
    perturbed: &[f64],
) -> Result<Vec<f64>, ReportError> {
    if original.len() != perturbed.len() {
        return Err(ReportError::LengthMismatch {
            column: column.to_string(),
            original_len: original.len(),
            perturbed_len: perturbed.len(),
        });
    }

    Ok(original
        .iter()
        .zip(perturbed)
        .map(|(a, b)| a - b)
        .collect())
}
