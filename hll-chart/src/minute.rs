//! Evenly spaced minute-axis availability chart.
//!
//! Point `i` of the data sits at `i * data_interval` minutes on the x
//! axis; point 0 is the current reading. The y domain always includes 0.

use crate::scale::{extent_with_zero, LinearScale};
use crate::svg::{self, AxisTick};
use crate::Geometry;

/// Target tick count for the bottom (minutes) axis.
const X_TICK_COUNT: usize = 7;

/// Target tick count for the left (spaces) axis.
const Y_TICK_COUNT: usize = 10;

pub struct SpacesChart {
    data: Vec<u32>,
    data_interval: u32,
    geometry: Geometry,
}

impl SpacesChart {
    /// Chart over `data` at the default 10-minute interval.
    pub fn new(data: Vec<u32>) -> Self {
        Self {
            data,
            data_interval: 10,
            geometry: Geometry::default(),
        }
    }

    /// Override the minute interval between consecutive points.
    pub fn with_interval(mut self, minutes: u32) -> Self {
        self.data_interval = minutes;
        self
    }

    /// Render to an SVG document string, or `None` for an empty series.
    pub fn to_svg(&self) -> Option<String> {
        if self.data.is_empty() {
            return None;
        }
        let g = &self.geometry;
        let last_minute = (self.data.len() as u32 - 1) * self.data_interval;
        let x = LinearScale::new((0.0, last_minute as f64), g.x_range());
        let y = LinearScale::new(extent_with_zero(&self.data), g.y_range());

        let points: Vec<(f64, f64)> = self
            .data
            .iter()
            .enumerate()
            .map(|(i, &d)| {
                (
                    x.scale((i as u32 * self.data_interval) as f64),
                    y.scale(d as f64),
                )
            })
            .collect();

        let x_ticks: Vec<AxisTick> = x
            .ticks(X_TICK_COUNT)
            .into_iter()
            .map(|v| AxisTick {
                position: x.scale(v),
                label: format!("{}", v as i64),
            })
            .collect();
        // Integer labels only; fractional space counts make no sense
        let y_ticks: Vec<AxisTick> = y
            .ticks(Y_TICK_COUNT)
            .into_iter()
            .filter(|v| v.fract() == 0.0)
            .map(|v| AxisTick {
                position: y.scale(v),
                label: format!("{}", v as i64),
            })
            .collect();

        let mut content = String::new();
        content.push_str(&svg::bottom_axis(
            g.height - g.margin_bottom,
            g.margin_left,
            g.width - g.margin_right,
            &x_ticks,
        ));
        content.push_str(&svg::left_axis(
            g.margin_left,
            g.margin_top,
            g.height - g.margin_bottom,
            &y_ticks,
        ));
        content.push_str(&svg::line_element(&points));
        content.push_str(&svg::markers(&points));

        Some(svg::document(g.width, g.height, &content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_series_renders_nothing() {
        assert_eq!(SpacesChart::new(vec![]).to_svg(), None);
    }

    #[test]
    fn test_markers_span_the_plot_area() {
        // 7 points at 10-minute steps: first at the left margin (x=40),
        // last at width - right margin (x=360)
        let svg = SpacesChart::new(vec![52, 48, 44, 40, 36, 30, 25])
            .to_svg()
            .unwrap();
        assert_eq!(svg.matches("<circle").count(), 7);
        assert!(svg.contains(r#"<circle cx="40""#));
        assert!(svg.contains(r#"<circle cx="360""#));
    }

    #[test]
    fn test_minute_axis_ticks_cover_the_hour() {
        let svg = SpacesChart::new(vec![52, 48, 44, 40, 36, 30, 25])
            .to_svg()
            .unwrap();
        assert!(svg.contains(">0</text>"));
        assert!(svg.contains(">60</text>"));
    }

    #[test]
    fn test_y_axis_includes_zero_even_for_high_counts() {
        let svg = SpacesChart::new(vec![120, 125, 130]).to_svg().unwrap();
        // A zero tick sits at the bottom of the plot area (y=210)
        assert!(svg.contains(r#"translate(0,210)"><line stroke="currentColor" x2="-6"/><text fill="currentColor" x="-9" dy="0.32em">0</text>"#));
    }

    #[test]
    fn test_flat_zero_series_still_renders() {
        let svg = SpacesChart::new(vec![0, 0, 0]).to_svg().unwrap();
        assert!(svg.contains("<path"));
    }
}
