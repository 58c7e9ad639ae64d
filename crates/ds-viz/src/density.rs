//! Density-curve artifacts for the Gaussian.

use ds_core::{Error, Result};
use rand::Rng;
use rand_distr::Distribution;
use serde::{Deserialize, Serialize};

/// Number of draws spanning the curve domain.
pub const CURVE_DRAWS: usize = 1000;

/// Number of grid points rasterizing the shaded region.
pub const SHADE_POINTS: usize = 513;

/// Density curve over a sorted sample with one shaded region under it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DensityChartArtifact {
    /// Artifact schema identifier.
    pub schema_version: String,
    /// Chart title.
    pub title: String,
    /// X axis label.
    pub x_label: String,
    /// Y axis label.
    pub y_label: String,
    /// Sorted draws spanning the curve domain.
    pub curve_x: Vec<f64>,
    /// PDF evaluated at `curve_x`.
    pub curve_y: Vec<f64>,
    /// Left edge of the shaded region.
    pub shade_from: f64,
    /// Right edge of the shaded region.
    pub shade_to: f64,
    /// Shade grid positions (empty when the region is empty).
    pub shade_x: Vec<f64>,
    /// PDF evaluated at `shade_x`.
    pub shade_y: Vec<f64>,
}

fn sorted_draws<R: Rng + ?Sized>(rng: &mut R, mu: f64, sigma: f64) -> Result<Vec<f64>> {
    let normal = rand_distr::Normal::new(mu, sigma)
        .map_err(|e| Error::Computation(format!("normal({}, {}): {}", mu, sigma, e)))?;
    let mut xs: Vec<f64> = (0..CURVE_DRAWS).map(|_| normal.sample(rng)).collect();
    xs.sort_by(|a, b| a.total_cmp(b));
    Ok(xs)
}

fn pdf_at(xs: &[f64], mu: f64, sigma: f64) -> Result<Vec<f64>> {
    xs.iter().map(|&x| ds_prob::normal::pdf(x, mu, sigma)).collect()
}

fn shade_grid(from: f64, to: f64, mu: f64, sigma: f64) -> Result<(Vec<f64>, Vec<f64>)> {
    if !from.is_finite() || !to.is_finite() || to <= from {
        return Ok((Vec::new(), Vec::new()));
    }
    let step = (to - from) / (SHADE_POINTS - 1) as f64;
    let xs: Vec<f64> = (0..SHADE_POINTS).map(|i| from + step * i as f64).collect();
    let ys = pdf_at(&xs, mu, sigma)?;
    Ok((xs, ys))
}

fn artifact(
    title: &str,
    curve_x: Vec<f64>,
    curve_y: Vec<f64>,
    shade_from: f64,
    shade_to: f64,
    shade_x: Vec<f64>,
    shade_y: Vec<f64>,
) -> DensityChartArtifact {
    DensityChartArtifact {
        schema_version: "demystat_density_chart_v1".to_string(),
        title: title.to_string(),
        x_label: "x".to_string(),
        y_label: "Probability".to_string(),
        curve_x,
        curve_y,
        shade_from,
        shade_to,
        shade_x,
        shade_y,
    }
}

/// Density curve for `N(mu, sigma)` shaded from the sample minimum to `x`,
/// or from `x` to the sample maximum for the upper tail.
pub fn cdf_shade<R: Rng + ?Sized>(
    rng: &mut R,
    x: f64,
    mu: f64,
    sigma: f64,
    upper: bool,
) -> Result<DensityChartArtifact> {
    let curve_x = sorted_draws(rng, mu, sigma)?;
    let curve_y = pdf_at(&curve_x, mu, sigma)?;
    let lo = curve_x.first().copied().unwrap_or(mu);
    let hi = curve_x.last().copied().unwrap_or(mu);
    let (from, to) = if upper { (x, hi) } else { (lo, x) };
    let (shade_x, shade_y) = shade_grid(from, to, mu, sigma)?;
    Ok(artifact("Cumulative Density Function", curve_x, curve_y, from, to, shade_x, shade_y))
}

/// Density curve for `N(mu, sigma)` shaded between `interval[0]` and
/// `interval[1]`.
pub fn interval_shade<R: Rng + ?Sized>(
    rng: &mut R,
    interval: &[f64],
    mu: f64,
    sigma: f64,
) -> Result<DensityChartArtifact> {
    if interval.len() != 2 {
        return Err(Error::Validation(format!(
            "interval must be a two-element pair, got {} elements",
            interval.len()
        )));
    }
    let curve_x = sorted_draws(rng, mu, sigma)?;
    let curve_y = pdf_at(&curve_x, mu, sigma)?;
    let (from, to) = (interval[0], interval[1]);
    let (shade_x, shade_y) = shade_grid(from, to, mu, sigma)?;
    Ok(artifact("Cumulative Density Function", curve_x, curve_y, from, to, shade_x, shade_y))
}

/// Density curve for `N(mu, sigma)` shaded from the sample minimum to the
/// quantile at `prob`.
pub fn ppf_shade<R: Rng + ?Sized>(
    rng: &mut R,
    prob: f64,
    mu: f64,
    sigma: f64,
) -> Result<DensityChartArtifact> {
    let v = ds_prob::normal::ppf(prob, mu, sigma)?;
    let curve_x = sorted_draws(rng, mu, sigma)?;
    let curve_y = pdf_at(&curve_x, mu, sigma)?;
    let from = curve_x.first().copied().unwrap_or(mu);
    let (shade_x, shade_y) = shade_grid(from, v, mu, sigma)?;
    Ok(artifact("Percent Point Function", curve_x, curve_y, from, v, shade_x, shade_y))
}
