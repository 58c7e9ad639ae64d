//! Bar-chart artifacts for the binomial support.

use ds_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Bar chart over the discrete support `0..=n` with an inclusive
/// highlighted index range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MassChartArtifact {
    /// Artifact schema identifier.
    pub schema_version: String,
    /// Chart title.
    pub title: String,
    /// X axis label.
    pub x_label: String,
    /// Y axis label.
    pub y_label: String,
    /// Discrete support `0..=n`.
    pub support: Vec<u64>,
    /// Bar heights aligned with `support` (PMF or CDF values).
    pub heights: Vec<f64>,
    /// First highlighted support value (inclusive).
    pub highlight_lo: u64,
    /// Last highlighted support value (inclusive). `highlight_lo >
    /// highlight_hi` encodes an empty highlight.
    pub highlight_hi: u64,
}

impl MassChartArtifact {
    /// Whether the support value `k` falls in the highlighted range.
    pub fn is_highlighted(&self, k: u64) -> bool {
        self.highlight_lo <= k && k <= self.highlight_hi
    }
}

fn artifact(
    title: &str,
    n: u64,
    heights: Vec<f64>,
    highlight_lo: u64,
    highlight_hi: u64,
) -> MassChartArtifact {
    MassChartArtifact {
        schema_version: "demystat_mass_chart_v1".to_string(),
        title: title.to_string(),
        x_label: "x".to_string(),
        y_label: "Probability".to_string(),
        support: (0..=n).collect(),
        heights,
        highlight_lo,
        highlight_hi,
    }
}

/// PMF bar chart for `Binom(n, p)` with bar `x` highlighted.
pub fn pmf_chart(x: u64, n: u64, p: f64) -> Result<MassChartArtifact> {
    if x > n {
        return Err(Error::Validation(format!("x must be <= n, got x={} n={}", x, n)));
    }
    let heights = ds_prob::binomial::support_pmf(n, p)?;
    Ok(artifact("Probability Mass Function", n, heights, x, x))
}

/// CDF bar chart for `Binom(n, p)`.
///
/// Bars `0..=x` are highlighted, or `x+1..=n` for the upper tail (nothing is
/// highlighted when `upper` and `x == n`).
pub fn cdf_chart(x: u64, n: u64, p: f64, upper: bool) -> Result<MassChartArtifact> {
    if x > n {
        return Err(Error::Validation(format!("x must be <= n, got x={} n={}", x, n)));
    }
    let heights = ds_prob::binomial::support_cdf(n, p)?;
    let (lo, hi) = if upper { (x + 1, n) } else { (0, x) };
    Ok(artifact("Cumulative Density Function", n, heights, lo, hi))
}

/// CDF bar chart for an interval `[lo, hi]`.
///
/// The highlighted bars run `lo..=hi` inclusive even though the summed
/// probability excludes `lo`.
pub fn interval_chart(interval: &[u64], n: u64, p: f64) -> Result<MassChartArtifact> {
    ds_prob::binomial::cdf_interval(interval, n, p)?;
    let heights = ds_prob::binomial::support_cdf(n, p)?;
    Ok(artifact("Cumulative Density Function", n, heights, interval[0], interval[1]))
}
