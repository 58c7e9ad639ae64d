use crate::config::*;

/// Built-in theme presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinTheme {
    /// Large figure and fonts sized for projection in a classroom.
    Classroom,
    /// Compact figure for embedding in notes.
    Minimal,
}

impl BuiltinTheme {
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "minimal" => Self::Minimal,
            _ => Self::Classroom,
        }
    }

    pub fn base_config(self) -> VizConfig {
        match self {
            Self::Classroom => classroom(),
            Self::Minimal => minimal(),
        }
    }
}

fn classroom() -> VizConfig {
    VizConfig {
        theme: "classroom".into(),
        figure: FigureConfig::default(),
        font: FontConfig::default(),
        axes: AxesConfig::default(),
        grid: GridConfig::default(),
        colors: ColorsConfig::default(),
    }
}

fn minimal() -> VizConfig {
    VizConfig {
        theme: "minimal".into(),
        figure: FigureConfig { width: 432.0, height: 259.2 },
        font: FontConfig { size: 9.0, title_size: 11.0, label_size: 10.0, tick_size: 8.0 },
        axes: AxesConfig {
            tick_direction: "out".into(),
            show_top_ticks: false,
            show_right_ticks: false,
            tick_length: 3.0,
            minor_tick_length: 1.5,
        },
        grid: GridConfig { show: false, ..GridConfig::default() },
        colors: ColorsConfig::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_falls_back_to_classroom() {
        assert_eq!(BuiltinTheme::parse("minimal"), BuiltinTheme::Minimal);
        assert_eq!(BuiltinTheme::parse("unknown"), BuiltinTheme::Classroom);
    }

    #[test]
    fn minimal_is_smaller() {
        let c = classroom();
        let m = minimal();
        assert!(m.figure.width < c.figure.width);
        assert!(m.font.size < c.font.size);
    }
}
