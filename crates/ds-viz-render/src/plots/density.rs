use ds_viz::DensityChartArtifact;

use crate::canvas::Canvas;
use crate::config::VizConfig;
use crate::layout::axes::Axis;
use crate::layout::margins::PlotArea;
use crate::plots::axes_draw::{draw_axes, draw_title};
use crate::primitives::{LineStyle, Style};

pub fn render(artifact: &DensityChartArtifact, config: &VizConfig) -> crate::Result<String> {
    if artifact.curve_x.is_empty() {
        return Ok(empty_svg());
    }
    if artifact.curve_y.len() != artifact.curve_x.len()
        || artifact.shade_y.len() != artifact.shade_x.len()
    {
        return Err(crate::RenderError::Layout("curve/shade length mismatch".into()));
    }

    let fig_w = config.figure.width;
    let fig_h = config.figure.height;
    let mut canvas = Canvas::new(fig_w, fig_h);

    let x_min = artifact.curve_x.first().copied().unwrap_or(0.0);
    let x_max = artifact.curve_x.last().copied().unwrap_or(1.0);
    let x_axis = Axis::auto_linear(x_min, x_max, 8).with_label(artifact.x_label.as_str());

    let y_data_max = artifact.curve_y.iter().copied().fold(0.0_f64, f64::max);
    let y_axis =
        Axis::auto_linear(0.0, y_data_max.max(1e-12), 5).with_label(artifact.y_label.as_str());

    let area = PlotArea::auto(fig_w, fig_h, Some(&y_axis), Some(&x_axis), true, config);
    draw_title(&mut canvas, &area, &artifact.title, config);
    draw_axes(&mut canvas, &area, &x_axis, &y_axis, config);

    // Shaded region first, under the curve stroke.
    if artifact.shade_x.len() >= 2 {
        let px: Vec<f64> = artifact
            .shade_x
            .iter()
            .map(|&x| x_axis.data_to_pixel(x, area.left, area.right()))
            .collect();
        let py_hi: Vec<f64> = artifact
            .shade_y
            .iter()
            .map(|&y| y_axis.data_to_pixel(y.max(0.0), area.bottom(), area.top))
            .collect();
        let py_lo = vec![area.bottom(); px.len()];
        canvas.fill_between(&px, &py_lo, &py_hi, &Style::filled(config.colors.shade));
    }

    let points: Vec<(f64, f64)> = artifact
        .curve_x
        .iter()
        .zip(artifact.curve_y.iter())
        .map(|(&x, &y)| {
            let px = x_axis.data_to_pixel(x, area.left, area.right());
            let py = y_axis.data_to_pixel(y.max(0.0), area.bottom(), area.top);
            (px, py)
        })
        .collect();
    canvas.polyline(&points, &LineStyle::solid(config.colors.curve, 1.5));

    Ok(canvas.finish_svg())
}

fn empty_svg() -> String {
    r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="50"><text x="10" y="30">No density data</text></svg>"#.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn cdf_artifact() -> DensityChartArtifact {
        let mut rng = StdRng::seed_from_u64(11);
        ds_viz::density::cdf_shade(&mut rng, 512.0, 520.0, 112.0, false).unwrap()
    }

    #[test]
    fn renders_curve_and_shade() {
        let cfg = VizConfig::default();
        let svg = render(&cdf_artifact(), &cfg).unwrap();
        assert!(svg.contains("<polyline"));
        let shade = cfg.colors.shade.to_svg_fill();
        assert!(svg.contains(&format!("fill=\"{}\"", shade)));
        assert!(svg.contains("Cumulative Density Function"));
    }

    #[test]
    fn empty_curve_renders_placeholder() {
        let mut art = cdf_artifact();
        art.curve_x.clear();
        art.curve_y.clear();
        let svg = render(&art, &VizConfig::default()).unwrap();
        assert!(svg.contains("No density data"));
    }

    #[test]
    fn empty_shade_omits_fill_path() {
        let mut art = cdf_artifact();
        art.shade_x.clear();
        art.shade_y.clear();
        let cfg = VizConfig::default();
        let svg = render(&art, &cfg).unwrap();
        let shade = cfg.colors.shade.to_svg_fill();
        assert!(!svg.contains(&format!("fill=\"{}\"", shade)));
    }

    #[test]
    fn rejects_mismatched_curve() {
        let mut art = cdf_artifact();
        art.curve_y.pop();
        assert!(render(&art, &VizConfig::default()).is_err());
    }
}
