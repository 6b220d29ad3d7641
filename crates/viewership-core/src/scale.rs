// File: crates/viewership-core/src/scale.rs
// Summary: Linear domain -> pixel scales and the horizontal/vertical mapping pair.

use crate::config::Layout;
use crate::range::AxisLimits;
use crate::record::Record;

/// Affine map from `domain` to `range`. Either pair may be reversed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// `range_lo + (v - domain_lo) / (domain_hi - domain_lo) * (range_hi - range_lo)`.
    /// A zero-width domain maps everything to the middle of the range.
    #[inline]
    pub fn map(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span == 0.0 {
            return r0 + (r1 - r0) * 0.5;
        }
        r0 + (v - d0) / span * (r1 - r0)
    }

    #[inline]
    pub fn invert(&self, px: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = r1 - r0;
        if span == 0.0 {
            return d0 + (d1 - d0) * 0.5;
        }
        d0 + (px - r0) / span * (d1 - d0)
    }

    /// Domain endpoints in ascending order.
    pub fn extent(&self) -> (f64, f64) {
        let (a, b) = self.domain;
        if a <= b { (a, b) } else { (b, a) }
    }

    /// Step between ticks when asking for roughly `count` of them.
    pub fn tick_step(&self, count: usize) -> f64 {
        let (lo, hi) = self.extent();
        nice_step(hi - lo, count)
    }

    /// Evenly spaced ticks (1, 2 or 5 times a power of ten) inside the domain, ascending.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (lo, hi) = self.extent();
        if count == 0 || !(hi - lo).is_finite() {
            return Vec::new();
        }
        if lo == hi {
            return vec![lo];
        }
        let step = nice_step(hi - lo, count);
        if step < 1.0 {
            // divide by the inverse step so decimals stay exact (0.2 * 3 != 0.6)
            let inv = (1.0 / step).round();
            let first = (lo * inv).ceil() as i64;
            let last = (hi * inv).floor() as i64;
            (first..=last).map(|i| i as f64 / inv).collect()
        } else {
            let first = (lo / step).ceil() as i64;
            let last = (hi / step).floor() as i64;
            (first..=last).map(|i| i as f64 * step).collect()
        }
    }
}

/// Round `span / count` to 1, 2, 5 or 10 times a power of ten.
pub fn nice_step(span: f64, count: usize) -> f64 {
    let raw = span.abs() / count.max(1) as f64;
    if raw == 0.0 || !raw.is_finite() {
        return 1.0;
    }
    let base = 10f64.powi(raw.log10().floor() as i32);
    let error = raw / base;
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * base
}

/// Horizontal (year) and vertical (average viewers) scales for one render pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleMapping {
    pub x_scale: LinearScale,
    pub y_scale: LinearScale,
}

impl ScaleMapping {
    /// Pads the year domain by `year_padding` on both sides and the viewer domain by
    /// `viewers_padding`; the viewer domain is reversed so larger values sit higher.
    pub fn build(limits: &AxisLimits, layout: &Layout) -> Self {
        let plot = &layout.plot;
        let x_scale = LinearScale::new(
            (limits.year_min - layout.year_padding, limits.year_max + layout.year_padding),
            (plot.left, plot.right),
        );
        let y_scale = LinearScale::new(
            (limits.view_max + layout.viewers_padding, limits.view_min - layout.viewers_padding),
            (plot.top, plot.bottom),
        );
        Self { x_scale, y_scale }
    }

    /// Horizontal center of a record's bar.
    pub fn x(&self, record: &Record) -> f64 {
        self.x_scale.map(record.year_value())
    }

    /// Top of a record's bar.
    pub fn y(&self, record: &Record) -> f64 {
        self.y_scale.map(record.avg_viewers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn endpoints_map_exactly() {
        let s = LinearScale::new((2019.0, 2022.0), (50.0, 750.0));
        assert_relative_eq!(s.map(2019.0), 50.0);
        assert_relative_eq!(s.map(2022.0), 750.0);
        assert_relative_eq!(s.invert(400.0), 2020.5);
    }

    #[test]
    fn degenerate_domain_maps_to_midpoint() {
        let s = LinearScale::new((3.0, 3.0), (0.0, 100.0));
        assert_eq!(s.map(3.0), 50.0);
    }

    #[test]
    fn nice_steps() {
        assert_eq!(nice_step(3.0, 10), 0.2);
        assert_eq!(nice_step(16.0, 10), 2.0);
        assert_eq!(nice_step(100.0, 10), 10.0);
        assert_eq!(nice_step(35.0, 10), 5.0);
    }

    #[test]
    fn ticks_for_reversed_domain_are_ascending() {
        let s = LinearScale::new((12.0, 0.0), (50.0, 450.0));
        assert_eq!(s.ticks(10), vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0]);
    }

    #[test]
    fn overflowing_span_has_no_ticks() {
        let s = LinearScale::new((1e308, -1e308), (50.0, 450.0));
        assert!(s.ticks(10).is_empty());
    }

    #[test]
    fn fractional_ticks_are_exact() {
        let s = LinearScale::new((0.0, 1.0), (0.0, 100.0));
        let t = s.ticks(5);
        assert_eq!(t, vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    }
}
