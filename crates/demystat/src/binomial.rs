//! Binomial distribution teaching helper.

use ds_core::Result;
use ds_viz_render::config::VizConfig;
use ds_viz_render::theme::BuiltinTheme;

use crate::plot::{self, PlotOptions};

/// Explainable binomial distribution helper.
///
/// Each instance keeps the by-products of its most recent call: the values
/// computed across the support and the population moments. They are
/// overwritten on every call and carry no cross-call meaning.
#[derive(Debug, Clone, Default)]
pub struct Binomial {
    /// Values computed across the support `0..=n` by the last call: PMF
    /// values after [`pmf`](Self::pmf), CDF values after
    /// [`cdf`](Self::cdf) / [`cdf2`](Self::cdf2).
    pub probabilities: Vec<f64>,
    /// Population mean `n*p` from the last call.
    pub mean: Option<f64>,
    /// Population variance `n*p*(1-p)` from the last call.
    pub var: Option<f64>,
    config: VizConfig,
}

impl Binomial {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific chart configuration instead of the default theme.
    pub fn with_config(config: VizConfig) -> Self {
        Self { config, ..Self::default() }
    }

    /// Use a built-in theme by name (`"classroom"`, `"minimal"`).
    pub fn with_theme(name: &str) -> Self {
        Self::with_config(BuiltinTheme::parse(name).base_config())
    }

    /// Probability mass `P(X = x)` for `X ~ Binom(n, p)`.
    ///
    /// With `opts.visualize`, draws the PMF bar chart over `0..=n` with bar
    /// `x` highlighted.
    pub fn pmf(&mut self, x: u64, n: u64, p: f64, opts: &PlotOptions) -> Result<f64> {
        let prob = ds_prob::binomial::pmf(x, n, p)?;
        self.cache(ds_prob::binomial::support_pmf(n, p)?, n, p)?;
        if opts.visualize {
            match ds_viz::mass::pmf_chart(x, n, p) {
                Ok(art) => plot::emit_mass(&self.config, opts, &art, "binomial_pmf"),
                Err(e) => log::warn!("pmf chart skipped: {}", e),
            }
        }
        Ok(prob)
    }

    /// Cumulative probability `P(X <= x)`, or `1 - P(X <= x)` when `upper`.
    ///
    /// The chart shows the CDF across the support with bars `0..=x`
    /// highlighted (`x+1..=n` for the upper tail).
    pub fn cdf(&mut self, x: u64, n: u64, p: f64, opts: &PlotOptions, upper: bool) -> Result<f64> {
        let prob = if upper {
            ds_prob::binomial::cdf_upper(x, n, p)?
        } else {
            ds_prob::binomial::cdf(x, n, p)?
        };
        self.cache(ds_prob::binomial::support_cdf(n, p)?, n, p)?;
        if opts.visualize {
            match ds_viz::mass::cdf_chart(x, n, p, upper) {
                Ok(art) => plot::emit_mass(&self.config, opts, &art, "binomial_cdf"),
                Err(e) => log::warn!("cdf chart skipped: {}", e),
            }
        }
        Ok(prob)
    }

    /// Cumulative probability `P(lo < X <= hi)` for a two-element interval
    /// `[lo, hi]`.
    ///
    /// The lower bound is exclusive and the upper inclusive, so the result
    /// is `cdf(hi) - cdf(lo)`; the chart still highlights bars `lo..=hi`.
    /// Anything other than a two-element interval is rejected.
    pub fn cdf2(&mut self, interval: &[u64], n: u64, p: f64, opts: &PlotOptions) -> Result<f64> {
        let prob = ds_prob::binomial::cdf_interval(interval, n, p)?;
        self.cache(ds_prob::binomial::support_cdf(n, p)?, n, p)?;
        if opts.visualize {
            match ds_viz::mass::interval_chart(interval, n, p) {
                Ok(art) => plot::emit_mass(&self.config, opts, &art, "binomial_cdf_interval"),
                Err(e) => log::warn!("cdf2 chart skipped: {}", e),
            }
        }
        Ok(prob)
    }

    fn cache(&mut self, values: Vec<f64>, n: u64, p: f64) -> Result<()> {
        let (mean, var) = ds_prob::binomial::mean_var(n, p)?;
        self.probabilities = values;
        self.mean = Some(mean);
        self.var = Some(var);
        Ok(())
    }
}
