//! # demystat
//!
//! Explainable probability distributions for teaching.
//!
//! Every operation pairs a probability computation (delegated to `statrs`
//! through `ds-prob`) with an optional chart: a bar chart over the binomial
//! support, or a Gaussian density curve with a shaded area. Charts are
//! written as SVG next to the caller (or into `PlotOptions::dir`), and chart
//! failures never affect the computed value.
//!
//! ```
//! use demystat::{Binomial, Gaussian, PlotOptions};
//!
//! let mut b = Binomial::new();
//! let p = b.pmf(4, 6, 0.83, &PlotOptions::off())?;
//! assert!((p - 0.2057).abs() < 1e-3);
//!
//! let g = Gaussian::new();
//! let c = g.cdf(512.0, 520.0, 112.0, &PlotOptions::off(), false)?;
//! assert!((c - 0.4716).abs() < 1e-3);
//! # Ok::<(), demystat::Error>(())
//! ```

pub mod binomial;
pub mod gaussian;
pub mod plot;

pub use binomial::Binomial;
pub use ds_core::{Error, Result};
pub use gaussian::Gaussian;
pub use plot::PlotOptions;
