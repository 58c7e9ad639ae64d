//! Approximate text metrics.
//!
//! No font is embedded in the output; widths are estimated from
//! per-character advance ratios typical of a humanist sans-serif. Margins
//! computed from these estimates only need to be roughly right.

#[derive(Debug, Clone, Copy)]
pub struct TextMetrics {
    pub width: f64,
    pub height: f64,
    pub ascent: f64,
}

/// Estimate text width and height in points.
pub fn measure_text(text: &str, size_pt: f64) -> TextMetrics {
    let width: f64 = text.chars().map(advance_ratio).sum::<f64>() * size_pt;
    TextMetrics { width, height: size_pt * 1.25, ascent: size_pt * 0.97 }
}

fn advance_ratio(ch: char) -> f64 {
    match ch {
        'i' | 'j' | 'l' | 'I' | '.' | ',' | '\'' | '|' | ':' | ';' => 0.28,
        'f' | 't' | 'r' | ' ' | '(' | ')' | '[' | ']' | '-' => 0.36,
        'm' | 'w' | 'M' | 'W' => 0.85,
        '0'..='9' => 0.55,
        'A'..='Z' => 0.66,
        _ => 0.52,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wider_text_measures_wider() {
        let narrow = measure_text("ill", 12.0);
        let wide = measure_text("WWW", 12.0);
        assert!(wide.width > narrow.width);
    }

    #[test]
    fn width_scales_with_size() {
        let small = measure_text("Probability", 8.0);
        let large = measure_text("Probability", 16.0);
        assert!((large.width - 2.0 * small.width).abs() < 1e-9);
        assert!(large.ascent > 0.0);
    }
}
