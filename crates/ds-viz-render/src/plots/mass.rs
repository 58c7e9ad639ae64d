use ds_viz::MassChartArtifact;

use crate::canvas::Canvas;
use crate::config::VizConfig;
use crate::layout::axes::Axis;
use crate::layout::margins::PlotArea;
use crate::plots::axes_draw::{draw_axes, draw_title};
use crate::primitives::Style;

/// Bars span 80% of a unit slot, matching the usual discrete-bar look.
const BAR_HALF_WIDTH: f64 = 0.4;

pub fn render(artifact: &MassChartArtifact, config: &VizConfig) -> crate::Result<String> {
    if artifact.support.is_empty() {
        return Err(crate::RenderError::Layout("empty support".into()));
    }
    if artifact.heights.len() != artifact.support.len() {
        return Err(crate::RenderError::Layout(format!(
            "support/heights length mismatch: {} vs {}",
            artifact.support.len(),
            artifact.heights.len()
        )));
    }

    let fig_w = config.figure.width;
    let fig_h = config.figure.height;
    let mut canvas = Canvas::new(fig_w, fig_h);

    let n = artifact.support.last().copied().unwrap_or(0);
    let x_axis = Axis::integer(n).with_label(artifact.x_label.as_str());

    let y_data_max = artifact.heights.iter().copied().fold(0.0_f64, f64::max);
    let y_axis =
        Axis::auto_linear(0.0, y_data_max.max(1e-12), 5).with_label(artifact.y_label.as_str());

    let area = PlotArea::auto(fig_w, fig_h, Some(&y_axis), Some(&x_axis), true, config);
    draw_title(&mut canvas, &area, &artifact.title, config);
    draw_axes(&mut canvas, &area, &x_axis, &y_axis, config);

    for (i, &k) in artifact.support.iter().enumerate() {
        let h = artifact.heights[i].clamp(0.0, y_axis.max);
        let center = k as f64;
        let x0 = x_axis.data_to_pixel(center - BAR_HALF_WIDTH, area.left, area.right());
        let x1 = x_axis.data_to_pixel(center + BAR_HALF_WIDTH, area.left, area.right());
        let y_top = y_axis.data_to_pixel(h, area.bottom(), area.top);
        let color = if artifact.is_highlighted(k) {
            config.colors.highlight
        } else {
            config.colors.bar
        };
        canvas.rect(x0, y_top, x1 - x0, area.bottom() - y_top, &Style::filled(color));
    }

    Ok(canvas.finish_svg())
}
