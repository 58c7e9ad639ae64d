//! Gaussian distribution teaching helper.

use ds_core::Result;
use ds_viz_render::config::VizConfig;
use ds_viz_render::theme::BuiltinTheme;

use crate::plot::{self, PlotOptions};

/// Explainable Gaussian (normal) distribution helper.
///
/// Holds no per-call state; the charts sample the distribution afresh on
/// every visualized call.
#[derive(Debug, Clone, Default)]
pub struct Gaussian {
    config: VizConfig,
}

impl Gaussian {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific chart configuration instead of the default theme.
    pub fn with_config(config: VizConfig) -> Self {
        Self { config }
    }

    /// Use a built-in theme by name (`"classroom"`, `"minimal"`).
    pub fn with_theme(name: &str) -> Self {
        Self::with_config(BuiltinTheme::parse(name).base_config())
    }

    /// Cumulative probability `Φ((x - mu) / sigma)`, or its complement when
    /// `upper`.
    ///
    /// The chart shades the area under the density curve from the sample
    /// minimum to `x` (or from `x` to the sample maximum for the upper
    /// tail).
    pub fn cdf(&self, x: f64, mu: f64, sigma: f64, opts: &PlotOptions, upper: bool) -> Result<f64> {
        let prob = if upper {
            ds_prob::normal::cdf_upper(x, mu, sigma)?
        } else {
            ds_prob::normal::cdf(x, mu, sigma)?
        };
        if opts.visualize {
            let mut rng = rand::rng();
            match ds_viz::density::cdf_shade(&mut rng, x, mu, sigma, upper) {
                Ok(art) => plot::emit_density(&self.config, opts, &art, "gaussian_cdf"),
                Err(e) => log::warn!("cdf chart skipped: {}", e),
            }
        }
        Ok(prob)
    }

    /// Cumulative probability `Φ(hi) - Φ(lo)` for a two-element interval
    /// `[lo, hi]`; the chart shades the area between the two bounds.
    pub fn cdf2(&self, interval: &[f64], mu: f64, sigma: f64, opts: &PlotOptions) -> Result<f64> {
        let prob = ds_prob::normal::cdf_interval(interval, mu, sigma)?;
        if opts.visualize {
            let mut rng = rand::rng();
            match ds_viz::density::interval_shade(&mut rng, interval, mu, sigma) {
                Ok(art) => plot::emit_density(&self.config, opts, &art, "gaussian_cdf_interval"),
                Err(e) => log::warn!("cdf2 chart skipped: {}", e),
            }
        }
        Ok(prob)
    }

    /// Percent point function: the value `v` with `Φ((v - mu) / sigma) =
    /// prob`; the chart shades the area from the sample minimum to `v`.
    pub fn ppf(&self, prob: f64, mu: f64, sigma: f64, opts: &PlotOptions) -> Result<f64> {
        let value = ds_prob::normal::ppf(prob, mu, sigma)?;
        if opts.visualize {
            let mut rng = rand::rng();
            match ds_viz::density::ppf_shade(&mut rng, prob, mu, sigma) {
                Ok(art) => plot::emit_density(&self.config, opts, &art, "gaussian_ppf"),
                Err(e) => log::warn!("ppf chart skipped: {}", e),
            }
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn cdf_and_complement() {
        let g = Gaussian::new();
        let lower = g.cdf(512.0, 520.0, 112.0, &PlotOptions::off(), false).unwrap();
        let upper = g.cdf(512.0, 520.0, 112.0, &PlotOptions::off(), true).unwrap();
        assert_eq!(lower + upper, 1.0);
        assert_abs_diff_eq!(lower, 0.4716, epsilon = 1e-3);
    }

    #[test]
    fn ppf_inverts_cdf() {
        let g = Gaussian::new();
        let p = g.cdf(530.0, 520.0, 112.0, &PlotOptions::off(), false).unwrap();
        let v = g.ppf(p, 520.0, 112.0, &PlotOptions::off()).unwrap();
        assert_abs_diff_eq!(v, 530.0, epsilon = 1e-6);
    }
}
