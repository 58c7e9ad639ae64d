//! Per-call plot options and the best-effort SVG sink.

use std::path::{Path, PathBuf};

use ds_viz::{DensityChartArtifact, MassChartArtifact};
use ds_viz_render::color::Color;
use ds_viz_render::config::VizConfig;
use ds_viz_render::output::svg::save_svg;

/// Per-call plotting options.
///
/// The default visualizes into the current directory, matching the
/// compute-and-show behavior of the teaching API.
#[derive(Debug, Clone)]
pub struct PlotOptions {
    /// Render a chart alongside the computed value.
    pub visualize: bool,
    /// Fill color for highlighted bars / the shaded area (`#rrggbb` or a
    /// color name). `None` keeps the theme default.
    pub fill_color: Option<String>,
    /// Directory the SVG is written into.
    pub out_dir: PathBuf,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self { visualize: true, fill_color: None, out_dir: PathBuf::from(".") }
    }
}

impl PlotOptions {
    /// Compute only; skip the chart.
    pub fn off() -> Self {
        Self { visualize: false, ..Self::default() }
    }

    /// Set the fill color for the highlighted region.
    pub fn fill(mut self, color: impl Into<String>) -> Self {
        self.fill_color = Some(color.into());
        self
    }

    /// Set the output directory.
    pub fn dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.out_dir = dir.into();
        self
    }
}

/// Apply the per-call fill color on top of the base configuration.
fn resolve_config(base: &VizConfig, opts: &PlotOptions, mass: bool) -> VizConfig {
    let mut cfg = base.clone();
    if let Some(name) = &opts.fill_color {
        match Color::parse(name) {
            Some(c) => {
                if mass {
                    cfg.colors.highlight = c;
                } else {
                    cfg.colors.shade = c;
                }
            }
            None => log::warn!("unknown fill color {:?}; using theme default", name),
        }
    }
    cfg
}

pub(crate) fn emit_mass(
    base: &VizConfig,
    opts: &PlotOptions,
    artifact: &MassChartArtifact,
    stem: &str,
) {
    let cfg = resolve_config(base, opts, true);
    match ds_viz_render::plots::mass::render(artifact, &cfg) {
        Ok(svg) => write_svg(&svg, &opts.out_dir, stem),
        Err(e) => log::warn!("{} chart render failed: {}", stem, e),
    }
}

pub(crate) fn emit_density(
    base: &VizConfig,
    opts: &PlotOptions,
    artifact: &DensityChartArtifact,
    stem: &str,
) {
    let cfg = resolve_config(base, opts, false);
    match ds_viz_render::plots::density::render(artifact, &cfg) {
        Ok(svg) => write_svg(&svg, &opts.out_dir, stem),
        Err(e) => log::warn!("{} chart render failed: {}", stem, e),
    }
}

fn write_svg(svg: &str, dir: &Path, stem: &str) {
    let path = dir.join(format!("{stem}.svg"));
    if let Err(e) = save_svg(svg, &path) {
        log::warn!("could not write {}: {}", path.display(), e);
    }
}
