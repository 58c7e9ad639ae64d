use serde::Deserialize;

use crate::color::Color;
use crate::theme::BuiltinTheme;

/// Top-level visualization configuration (YAML or programmatic).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VizConfig {
    pub theme: String,
    pub figure: FigureConfig,
    pub font: FontConfig,
    pub axes: AxesConfig,
    pub grid: GridConfig,
    pub colors: ColorsConfig,
}

impl Default for VizConfig {
    fn default() -> Self {
        BuiltinTheme::Classroom.base_config()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FigureConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            width: 1080.0, // 15" * 72
            height: 432.0, // 6" * 72
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub size: f64,
    pub title_size: f64,
    pub label_size: f64,
    pub tick_size: f64,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self { size: 12.0, title_size: 14.5, label_size: 12.0, tick_size: 10.0 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AxesConfig {
    pub tick_direction: String,
    pub show_top_ticks: bool,
    pub show_right_ticks: bool,
    pub tick_length: f64,
    pub minor_tick_length: f64,
}

impl Default for AxesConfig {
    fn default() -> Self {
        Self {
            tick_direction: "out".into(),
            show_top_ticks: false,
            show_right_ticks: false,
            tick_length: 3.5,
            minor_tick_length: 2.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub show: bool,
    pub color: Color,
    pub alpha: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { show: false, color: Color::hex("#CBD5E1"), alpha: 0.55 }
    }
}

/// Base chart colors. The per-call fill color overrides `highlight` (bar
/// charts) or `shade` (density charts).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ColorsConfig {
    pub bar: Color,
    pub curve: Color,
    pub highlight: Color,
    pub shade: Color,
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            bar: Color::hex("#1F77B4"),
            curve: Color::hex("#1F77B4"),
            highlight: Color::hex("#FFA500"),
            shade: Color::hex("#ADD8E6"),
        }
    }
}

/// Resolve a VizConfig from optional YAML string.
/// Priority: user YAML overrides → theme base config.
pub fn resolve_config(user_yaml: Option<&str>) -> crate::Result<VizConfig> {
    match user_yaml {
        None => Ok(VizConfig::default()),
        Some(yaml) => {
            let config: VizConfig = serde_yaml_ng::from_str(yaml)
                .map_err(|e| crate::RenderError::Config(e.to_string()))?;
            Ok(config)
        }
    }
}
