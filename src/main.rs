//! dp-accuracy-report: CLI entry point.
//!
//! Runs the report pipeline strictly in sequence: load both tables of each
//! dataset pair, restore row alignment, compute statistics and error
//! metrics, print the text report, then render the histogram figures.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use dp_accuracy_report::dataset;
use dp_accuracy_report::plot::{render_error_grid, render_overlay_histogram, ErrorPanel};
use dp_accuracy_report::report::{build_report, print_report, DatasetReport};

#[derive(Parser)]
#[command(name = "dp-accuracy-report")]
#[command(about = "Accuracy report for differential-privacy perturbed datasets")]
#[command(version)]
struct Cli {
    /// Directory containing the original input CSV files.
    #[arg(long, default_value = "input")]
    input: PathBuf,

    /// Directory containing the perturbed output CSV files.
    #[arg(long, default_value = "output")]
    output: PathBuf,

    /// Directory for the rendered histogram SVG files.
    #[arg(long, default_value = "plots")]
    plots: PathBuf,

    /// Optional path to write the report summary as JSON.
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    println!("{}", "dp-accuracy-report".bold());
    println!("  Input:  {}", cli.input.display());
    println!("  Output: {}", cli.output.display());
    println!("  Plots:  {}", cli.plots.display());
    println!();

    let mut reports = Vec::new();
    for spec in dataset::all() {
        let pair = spec.load_pair(&cli.input, &cli.output)?;
        let report = build_report(spec, &pair)?;
        print_report(&report);
        reports.push((spec, report));
    }

    render_figures(&cli.plots, &reports)?;

    if let Some(path) = &cli.json {
        write_json_summary(path, &reports)?;
        println!("Wrote JSON summary to {}", path.display());
    }

    Ok(())
}

/// Renders one overlay histogram per numeric column and a single grid of
/// error-distribution histograms covering every column of both datasets.
fn render_figures(
    plots_dir: &PathBuf,
    reports: &[(&dataset::DatasetSpec, DatasetReport)],
) -> anyhow::Result<()> {
    fs::create_dir_all(plots_dir)?;

    let mut panels = Vec::new();
    for (spec, report) in reports {
        for col in &report.columns {
            let path = plots_dir.join(format!("{}_{}.svg", spec.name, col.column));
            render_overlay_histogram(
                &path,
                &col.column,
                &col.original_values,
                &col.perturbed_values,
                spec.overlay_bins,
            )?;
            println!("Wrote {}", path.display());

            panels.push(ErrorPanel {
                column: col.column.clone(),
                errors: col.errors.clone(),
                bins: spec.error_bins,
            });
        }
    }

    let grid_path = plots_dir.join("error_distributions.svg");
    render_error_grid(&grid_path, &panels)?;
    println!("Wrote {}", grid_path.display());
    Ok(())
}

fn write_json_summary(
    path: &PathBuf,
    reports: &[(&dataset::DatasetSpec, DatasetReport)],
) -> anyhow::Result<()> {
    let summaries: Vec<&DatasetReport> = reports.iter().map(|(_, r)| r).collect();
    let json = serde_json::to_string_pretty(&summaries)?;
    fs::write(path, json)?;
    Ok(())
}
