use std::fmt;

use serde::de::{self, Deserialize, Deserializer};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn hex(s: &str) -> Self {
        let s = s.strip_prefix('#').unwrap_or(s);
        if s.len() < 6 {
            return Self::rgb(0, 0, 0);
        }
        let r = u8::from_str_radix(&s[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&s[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&s[4..6], 16).unwrap_or(0);
        Self { r, g, b, a: 1.0 }
    }

    /// Parse a `#rrggbb` hex string or a supported color name.
    pub fn parse(s: &str) -> Option<Self> {
        let t = s.trim();
        if let Some(hex) = t.strip_prefix('#') {
            if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                return None;
            }
            return Some(Self::hex(t));
        }
        named(t)
    }

    pub const fn with_alpha(mut self, a: f64) -> Self {
        self.a = a;
        self
    }

    pub fn to_svg_fill(&self) -> String {
        if (self.a - 1.0).abs() < 1e-6 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({},{},{},{:.3})", self.r, self.g, self.b, self.a)
        }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// CSS basic names plus the defaults the teaching API hands out.
fn named(s: &str) -> Option<Color> {
    let c = match s.to_ascii_lowercase().as_str() {
        "black" => Color::rgb(0x00, 0x00, 0x00),
        "white" => Color::rgb(0xff, 0xff, 0xff),
        "red" => Color::rgb(0xff, 0x00, 0x00),
        "green" => Color::rgb(0x00, 0x80, 0x00),
        "blue" => Color::rgb(0x00, 0x00, 0xff),
        "yellow" => Color::rgb(0xff, 0xff, 0x00),
        "cyan" => Color::rgb(0x00, 0xff, 0xff),
        "magenta" => Color::rgb(0xff, 0x00, 0xff),
        "gray" | "grey" => Color::rgb(0x80, 0x80, 0x80),
        "orange" => Color::rgb(0xff, 0xa5, 0x00),
        "purple" => Color::rgb(0x80, 0x00, 0x80),
        "pink" => Color::rgb(0xff, 0xc0, 0xcb),
        "brown" => Color::rgb(0xa5, 0x2a, 0x2a),
        "gold" => Color::rgb(0xff, 0xd7, 0x00),
        "lightblue" => Color::rgb(0xad, 0xd8, 0xe6),
        "lightgreen" => Color::rgb(0x90, 0xee, 0x90),
        "steelblue" => Color::rgb(0x46, 0x82, 0xb4),
        _ => return None,
    };
    Some(c)
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_svg_fill())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::parse(&s).ok_or_else(|| de::Error::custom(format!("unknown color: {}", s)))
    }
}
