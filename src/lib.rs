//! dp-accuracy-report: accuracy report for differential-privacy perturbed
//! datasets.
//!
//! Compares original CSV tables against their perturbed counterparts,
//! computing per-column summary statistics and error metrics (MAE, MSE,
//! RMSE) and rendering before/after histograms. The perturbation mechanism
//! itself is an external collaborator; this crate only measures what it did
//! to the data.

pub mod dataset;
pub mod error;
pub mod plot;
pub mod report;
pub mod stats;
pub mod table;
