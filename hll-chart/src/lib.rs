//! Inline SVG line charts for the Hullulahti availability pages.
//!
//! Two chart variants exist:
//! - `minute::SpacesChart`: x axis is evenly spaced minute offsets
//! - `morning::MorningChart`: x axis is wall-clock time over the
//!   06:00-09:00 Helsinki window
//!
//! Both emit a complete `<svg>` document string that is embedded
//! directly into the rendered page. No drawing context outlives a
//! render: each call builds the string and returns it.

pub mod minute;
pub mod morning;
pub mod scale;
pub mod svg;

/// Shared chart geometry: canvas size and margins in SVG user units.
#[derive(Debug, Clone, Copy)]
pub struct Geometry {
    pub width: f64,
    pub height: f64,
    pub margin_top: f64,
    pub margin_right: f64,
    pub margin_bottom: f64,
    pub margin_left: f64,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 240.0,
            margin_top: 10.0,
            margin_right: 40.0,
            margin_bottom: 30.0,
            margin_left: 40.0,
        }
    }
}

impl Geometry {
    /// Horizontal extent of the plot area, left to right.
    pub fn x_range(&self) -> (f64, f64) {
        (self.margin_left, self.width - self.margin_right)
    }

    /// Vertical extent of the plot area, bottom to top (SVG y grows down,
    /// so the larger coordinate comes first).
    pub fn y_range(&self) -> (f64, f64) {
        (self.height - self.margin_bottom, self.margin_top)
    }
}
