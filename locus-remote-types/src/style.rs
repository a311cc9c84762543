use serde::{Deserialize, Serialize};

use crate::Color;

/// Stroke style of a track or polyline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    /// Color of the line.
    pub color: Color,
    /// Width of the line in pixels.
    pub width: f32,
}

impl LineStyle {
    /// Creates a new style.
    pub fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: Color::RED,
            width: 5.0,
        }
    }
}
