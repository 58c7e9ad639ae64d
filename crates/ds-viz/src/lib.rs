//! # ds-viz
//!
//! Visualization data artifacts for demystat.
//!
//! This crate is intentionally dependency-light and focuses on emitting
//! plot-friendly structures (parallel arrays instead of nested objects).
//! Each builder pairs one probability computation with the numbers needed
//! to draw it; rendering lives elsewhere.

#![warn(clippy::all)]

/// Bar charts over a discrete support with a highlighted index range.
pub mod mass;

/// Density curves with a shaded area under the curve.
pub mod density;

pub use density::DensityChartArtifact;
pub use mass::MassChartArtifact;
