//! Linear domain-to-range mapping and tick generation.

/// Maps a numeric domain onto a pixel range, like `d3.scaleLinear`.
///
/// The domain may be ascending or equal-endpoint; range endpoints may run
/// in either direction (the y axis maps an ascending domain onto a
/// descending pixel range).
#[derive(Debug, Clone, Copy)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f64,
    r1: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            d0: domain.0,
            d1: domain.1,
            r0: range.0,
            r1: range.1,
        }
    }

    /// Map a domain value to its range coordinate.
    pub fn scale(&self, value: f64) -> f64 {
        if self.d1 == self.d0 {
            // Degenerate domain: collapse to the middle of the range
            return (self.r0 + self.r1) / 2.0;
        }
        let t = (value - self.d0) / (self.d1 - self.d0);
        self.r0 + t * (self.r1 - self.r0)
    }

    /// Round values covering the domain at a "nice" step (1, 2, or 5
    /// times a power of ten), roughly `count` of them. Same contract as
    /// d3's `ticks`.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.d0, self.d1, count)
    }
}

/// Tick step for the interval [start, stop] targeting `count` ticks.
fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count.max(1) as f64;
    if step <= 0.0 || !step.is_finite() {
        return 0.0;
    }
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * 10f64.powf(power)
}

/// Nice tick values covering [start, stop], ascending.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    let step = tick_step(start, stop, count);
    if step <= 0.0 {
        return Vec::new();
    }
    let first = (start / step).ceil() as i64;
    let last = (stop / step).floor() as i64;
    (first..=last).map(|i| i as f64 * step).collect()
}

/// Extent of `data` with 0 always included, matching the original's
/// `extent([0, ...data])`: the lower bound is 0 for non-negative counts.
pub fn extent_with_zero(data: &[u32]) -> (f64, f64) {
    let max = data.iter().copied().max().unwrap_or(0);
    (0.0, max as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_maps_linearly() {
        let x = LinearScale::new((0.0, 60.0), (40.0, 360.0));
        assert_eq!(x.scale(0.0), 40.0);
        assert_eq!(x.scale(60.0), 360.0);
        assert_eq!(x.scale(30.0), 200.0);
    }

    #[test]
    fn test_scale_inverted_range() {
        let y = LinearScale::new((0.0, 100.0), (210.0, 10.0));
        assert_eq!(y.scale(0.0), 210.0);
        assert_eq!(y.scale(100.0), 10.0);
    }

    #[test]
    fn test_degenerate_domain_collapses_to_midpoint() {
        let y = LinearScale::new((0.0, 0.0), (210.0, 10.0));
        assert_eq!(y.scale(0.0), 110.0);
    }

    #[test]
    fn test_ticks_are_nice_and_include_zero() {
        let t = ticks(0.0, 141.0, 10);
        assert_eq!(t.first().copied(), Some(0.0));
        assert_eq!(t.last().copied(), Some(140.0));
        assert!(t.iter().all(|v| v % 10.0 == 0.0));
    }

    #[test]
    fn test_ticks_minute_axis() {
        assert_eq!(
            ticks(0.0, 60.0, 7),
            vec![0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0]
        );
    }

    #[test]
    fn test_empty_domain_yields_no_ticks() {
        assert!(ticks(0.0, 0.0, 7).is_empty());
    }

    #[test]
    fn test_extent_lower_bound_is_always_zero() {
        assert_eq!(extent_with_zero(&[120, 130, 141]), (0.0, 141.0));
        assert_eq!(extent_with_zero(&[]), (0.0, 0.0));
    }
}
