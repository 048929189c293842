//! Colours as the canvas wants them

use std::fmt;

/// Straight (non-premultiplied) RGBA with a float alpha
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same colour, different alpha (clamped to [0, 1])
    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// CSS `rgba(...)` string
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, self.a)
    }
}

/// Pale lavender used for stars
pub const STAR_COLOR: Rgba = Rgba::new(200, 180, 255, 1.0);
/// Cool blue for grid lines and pulses
pub const GRID_COLOR: Rgba = Rgba::new(120, 160, 255, 1.0);
