//! # ds-viz-render
//!
//! SVG rendering for demystat chart artifacts.
//!
//! Artifacts come in as serialized numbers (see `ds-viz`); this crate turns
//! them into standalone SVG documents. No font is embedded; text uses a
//! generic sans-serif family and approximate metrics.

pub mod canvas;
pub mod color;
pub mod config;
pub mod layout;
pub mod output;
pub mod plots;
pub mod primitives;
pub mod text;
pub mod theme;

use config::VizConfig;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("unknown artifact kind: {0}")]
    UnknownKind(String),
    #[error("deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),
    #[error("config error: {0}")]
    Config(String),
    #[error("layout error: {0}")]
    Layout(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RenderError>;

/// Render an artifact JSON to SVG string.
pub fn render_svg(artifact_json: &str, kind: &str, config: &VizConfig) -> Result<String> {
    match kind {
        "mass" => {
            let art: ds_viz::MassChartArtifact = serde_json::from_str(artifact_json)?;
            plots::mass::render(&art, config)
        }
        "density" => {
            let art: ds_viz::DensityChartArtifact = serde_json::from_str(artifact_json)?;
            plots::density::render(&art, config)
        }
        other => Err(RenderError::UnknownKind(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_svg_dispatches_mass() {
        let art = ds_viz::mass::pmf_chart(2, 5, 0.5).unwrap();
        let json = serde_json::to_string(&art).unwrap();
        let svg = render_svg(&json, "mass", &VizConfig::default()).unwrap();
        assert!(svg.starts_with("<svg"));
    }

    #[test]
    fn render_svg_rejects_unknown_kind() {
        assert!(matches!(
            render_svg("{}", "pie", &VizConfig::default()),
            Err(RenderError::UnknownKind(_))
        ));
    }

    #[test]
    fn render_svg_rejects_bad_json() {
        assert!(matches!(
            render_svg("not json", "mass", &VizConfig::default()),
            Err(RenderError::Deserialize(_))
        ));
    }
}
