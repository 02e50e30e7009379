//! Histogram figures, rendered as SVG files.
//!
//! Two figure kinds: an overlaid original-vs-perturbed histogram per numeric
//! column, and a single grid of error-distribution histograms with one
//! subplot per column. Bins are counted here; plotters only draws the bars.

#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use std::path::Path;

use anyhow::Result;
use plotters::prelude::*;

/// One subplot of the error-distribution grid.
#[derive(Debug)]
pub struct ErrorPanel {
    pub column: String,
    pub errors: Vec<f64>,
    pub bins: usize,
}

/// Bin counts over `[min, max]`; values outside the range or non-finite are
/// skipped, the max endpoint lands in the last bin.
fn histogram_counts(values: &[f64], min: f64, max: f64, bin_width: f64) -> Vec<(f64, usize)> {
    if bin_width <= 0.0 {
        return Vec::new();
    }
    let bins = ((max - min) / bin_width).ceil().max(1.0) as usize;
    let mut counts = vec![0usize; bins];
    for &value in values {
        if !value.is_finite() || value < min || value > max {
            continue;
        }
        let idx = (((value - min) / bin_width).floor() as usize).min(bins - 1);
        counts[idx] += 1;
    }
    (0..bins)
        .map(|i| (min + i as f64 * bin_width, counts[i]))
        .collect()
}

/// Finite min/max across all series, widened when degenerate so the bin
/// width stays positive.
fn value_range(series: &[&[f64]]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for values in series {
        for &v in *values {
            if v.is_finite() {
                min = min.min(v);
                max = max.max(v);
            }
        }
    }
    if min > max {
        return (0.0, 1.0);
    }
    if (max - min).abs() < f64::EPSILON {
        return (min - 0.5, max + 0.5);
    }
    (min, max)
}

fn bars<'a>(
    counts: &'a [(f64, usize)],
    bin_width: f64,
    style: ShapeStyle,
) -> impl Iterator<Item = Rectangle<(f64, f64)>> + 'a {
    counts.iter().map(move |&(bin_start, count)| {
        Rectangle::new(
            [(bin_start, 0.0), (bin_start + bin_width, count as f64)],
            style,
        )
    })
}

/// Renders one overlaid histogram of original vs. perturbed values.
pub fn render_overlay_histogram(
    out_path: &Path,
    column: &str,
    original: &[f64],
    perturbed: &[f64],
    bins: usize,
) -> Result<()> {
    let (min, max) = value_range(&[original, perturbed]);
    let bin_width = (max - min) / bins.max(1) as f64;

    let original_counts = histogram_counts(original, min, max, bin_width);
    let perturbed_counts = histogram_counts(perturbed, min, max, bin_width);
    let y_max = original_counts
        .iter()
        .chain(&perturbed_counts)
        .map(|&(_, count)| count as f64)
        .fold(1.0f64, f64::max);

    let root = SVGBackend::new(out_path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(format!("{column}: Original vs Perturbed"), ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(min..max, 0.0f64..(y_max * 1.1))?;

    chart
        .configure_mesh()
        .x_desc(column)
        .y_desc("Frequency")
        .draw()?;

    chart
        .draw_series(bars(&original_counts, bin_width, BLUE.mix(0.5).filled()))?
        .label("Original")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], BLUE.mix(0.5).filled()));
    chart
        .draw_series(bars(&perturbed_counts, bin_width, RED.mix(0.5).filled()))?
        .label("Perturbed")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], RED.mix(0.5).filled()));

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;

    root.present()?;
    Ok(())
}

/// Renders the error-distribution grid, one subplot per column, two columns
/// of panels per row.
pub fn render_error_grid(out_path: &Path, panels: &[ErrorPanel]) -> Result<()> {
    if panels.is_empty() {
        return Ok(());
    }
    let grid_rows = panels.len().div_ceil(2);

    let root = SVGBackend::new(out_path, (1200, 400 * grid_rows as u32)).into_drawing_area();
    root.fill(&WHITE)?;
    let areas = root.split_evenly((grid_rows, 2));

    for (panel, area) in panels.iter().zip(areas.iter()) {
        let (min, max) = value_range(&[&panel.errors]);
        let bin_width = (max - min) / panel.bins.max(1) as f64;
        let counts = histogram_counts(&panel.errors, min, max, bin_width);
        let y_max = counts
            .iter()
            .map(|&(_, count)| count as f64)
            .fold(1.0f64, f64::max);

        let mut chart = ChartBuilder::on(area)
            .caption(
                format!("Error Distribution for {}", panel.column),
                ("sans-serif", 18),
            )
            .margin(10)
            .x_label_area_size(35)
            .y_label_area_size(50)
            .build_cartesian_2d(min..max, 0.0f64..(y_max * 1.1))?;

        chart
            .configure_mesh()
            .x_desc("error")
            .y_desc("Frequency")
            .draw()?;

        chart.draw_series(bars(&counts, bin_width, BLUE.mix(0.6).filled()))?;
    }

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_include_both_endpoints() {
        let counts = histogram_counts(&[0.0, 1.0], 0.0, 1.0, 0.5);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0].1, 1);
        assert_eq!(counts[1].1, 1);
    }

    #[test]
    fn counts_skip_out_of_range_and_nan() {
        let counts = histogram_counts(&[0.1, 0.6, 1.5, -0.2, f64::NAN], 0.0, 1.0, 0.5);
        let total: usize = counts.iter().map(|&(_, c)| c).sum();
        assert_eq!(total, 2);
    }

    #[test]
    fn range_widens_constant_series() {
        let (min, max) = value_range(&[&[5.0, 5.0]]);
        assert!(min < 5.0 && max > 5.0);
    }

    #[test]
    fn range_ignores_nan() {
        let (min, max) = value_range(&[&[f64::NAN, 2.0], &[1.0]]);
        assert!((min - 1.0).abs() < f64::EPSILON);
        assert!((max - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn overlay_histogram_writes_svg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Base_Salary.svg");
        let original = [50_000.0, 60_000.0, 70_000.0];
        let perturbed = [50_010.0, 59_990.0, 70_005.0];
        render_overlay_histogram(&path, "Base_Salary", &original, &perturbed, 10).unwrap();
        assert!(path.metadata().unwrap().len() > 0);
    }

    #[test]
    fn error_grid_writes_svg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("errors.svg");
        let panels = vec![
            ErrorPanel {
                column: "math_score".to_string(),
                errors: vec![-1.0, 0.5, 2.0],
                bins: 5,
            },
            ErrorPanel {
                column: "reading_score".to_string(),
                errors: vec![0.0, 0.0, 1.0],
                bins: 5,
            },
            ErrorPanel {
                column: "writing_score".to_string(),
                errors: vec![-2.0, 2.0],
                bins: 5,
            },
        ];
        render_error_grid(&path, &panels).unwrap();
        assert!(path.metadata().unwrap().len() > 0);
    }
}
