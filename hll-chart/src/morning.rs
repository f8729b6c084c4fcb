//! Wall-clock morning chart over the 06:00-09:00 Helsinki window.
//!
//! The x axis maps real wall-clock times through their UTC timestamps;
//! point `i` of the data sits at window start + 30i minutes. Tick labels
//! render local time-of-day.

use chrono::{DateTime, TimeZone};
use chrono_tz::Tz;

use crate::scale::{extent_with_zero, LinearScale};
use crate::svg::{self, AxisTick};
use crate::Geometry;

/// Target tick count for the bottom (time) axis.
const X_TICK_COUNT: i64 = 7;

/// Target tick count for the left (spaces) axis.
const Y_TICK_COUNT: usize = 10;

/// Seconds between consecutive data points.
const POINT_STEP_SECONDS: i64 = 30 * 60;

/// Candidate tick intervals in seconds: 1, 5, 15, 30 minutes, 1 hour.
const TIME_TICK_INTERVALS: [i64; 5] = [60, 300, 900, 1800, 3600];

pub struct MorningChart {
    data: Vec<u32>,
    window: (DateTime<Tz>, DateTime<Tz>),
    geometry: Geometry,
}

impl MorningChart {
    /// Chart over `data`, with `window` giving the (06:00, 09:00) local
    /// bounds used as the x domain.
    pub fn new(data: Vec<u32>, window: (DateTime<Tz>, DateTime<Tz>)) -> Self {
        Self {
            data,
            window,
            geometry: Geometry::default(),
        }
    }

    /// Render to an SVG document string, or `None` for an empty series
    /// or an inverted window.
    pub fn to_svg(&self) -> Option<String> {
        let (start, end) = self.window;
        if self.data.is_empty() || end <= start {
            return None;
        }
        let g = &self.geometry;
        let tz = start.timezone();
        let (t0, t1) = (start.timestamp(), end.timestamp());
        let x = LinearScale::new((t0 as f64, t1 as f64), g.x_range());
        let y = LinearScale::new(extent_with_zero(&self.data), g.y_range());

        let points: Vec<(f64, f64)> = self
            .data
            .iter()
            .enumerate()
            .map(|(i, &d)| {
                let t = t0 + i as i64 * POINT_STEP_SECONDS;
                (x.scale(t as f64), y.scale(d as f64))
            })
            .collect();

        let x_ticks: Vec<AxisTick> = time_ticks(t0, t1, X_TICK_COUNT)
            .into_iter()
            .filter_map(|t| {
                let label = tz.timestamp_opt(t, 0).single()?.format("%H:%M").to_string();
                Some(AxisTick {
                    position: x.scale(t as f64),
                    label,
                })
            })
            .collect();
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

/// Tick timestamps for [t0, t1]: multiples of the smallest candidate
/// interval that yields at most `count` ticks.
fn time_ticks(t0: i64, t1: i64, count: i64) -> Vec<i64> {
    let span = t1 - t0;
    let target = span / count.max(1);
    let interval = TIME_TICK_INTERVALS
        .iter()
        .copied()
        .find(|&i| i >= target)
        .unwrap_or(3600);
    let first = t0.div_euclid(interval) * interval;
    let first = if first < t0 { first + interval } else { first };
    (0..)
        .map(|n| first + n * interval)
        .take_while(|&t| t <= t1)
        .collect()
}
