use crate::domain::market_data::Chain;

/// Smoothing factor applied to every chart line.
pub const LINE_TENSION: f64 = 0.4;

/// Value Object - Color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
    }

    pub fn with_alpha(&self, alpha: f32) -> Self {
        Self { a: alpha, ..*self }
    }

    /// CSS `rgba(...)` form consumed by the canvas context.
    pub fn to_css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
            self.a
        )
    }
}

/// Value Object - static styling for one chain's line, a fixed lookup keyed
/// by chain identity with no further configuration surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStyle {
    pub chain: Chain,
    pub color: Color,
    pub fill_color: Color,
    pub tension: f64,
    pub fill: bool,
}

impl SeriesStyle {
    pub fn for_chain(chain: Chain) -> Self {
        let color = match chain {
            Chain::Ethereum => Color::rgb8(75, 192, 192),
            Chain::Polygon => Color::rgb8(153, 102, 255),
        };

        Self { chain, color, fill_color: color.with_alpha(0.2), tension: LINE_TENSION, fill: true }
    }

    /// Legend text shown above the chart.
    pub fn legend_label(&self) -> String {
        format!("{} Price (USD)", self.chain)
    }
}
