//! Self-adjusting calibration and linear remapping.
//!
//! [`CalibrationRange`] remembers the lowest and highest samples seen and only
//! ever widens. Two remap functions are provided and are intentionally kept
//! apart:
//!
//! - [`map_saturating`] clamps to its endpoints outside `lo..hi` and works in
//!   integers, truncating toward zero.
//! - [`map_proportional`] scales without clamping in `f32`, truncating toward
//!   zero, like Arduino's `map`.
//!
//! Neither function fixes a direction. Passing a larger `at_low` than
//! `at_high` inverts the mapping, which is how the blink loop turns darkness
//! into a long delay.

use crate::sensor::SensorResolution;

/// Maps `val` from `lo..=hi` onto `at_low..=at_high`, clamping outside the range.
///
/// Returns exactly `at_low` when `val <= lo` and exactly `at_high` when
/// `val >= hi`. A degenerate range (`hi <= lo`) therefore never divides.
pub fn map_saturating(val: u16, lo: u16, hi: u16, at_low: i32, at_high: i32) -> i32 {
    if val <= lo {
        return at_low;
    }
    if val >= hi {
        return at_high;
    }

    let offset = i64::from(val - lo);
    let span = i64::from(hi - lo);
    let out_span = i64::from(at_high) - i64::from(at_low);
    (i64::from(at_low) + offset * out_span / span) as i32
}

/// Scales `x` from `in_min..in_max` onto `out_min..out_max` without clamping.
///
/// Values outside the input range extrapolate. Returns `out_min` when the
/// input range is empty.
pub fn map_proportional(x: i32, in_min: i32, in_max: i32, out_min: i32, out_max: i32) -> i32 {
    if in_max == in_min {
        return out_min;
    }
    let scale = (out_max as f32 - out_min as f32) / (in_max as f32 - in_min as f32);
    ((x as f32 - in_min as f32) * scale + out_min as f32) as i32
}

/// The observed `[low, high]` range of a noisy analog source.
///
/// Uninitialized until the first sample. Bounds then only widen, for the
/// lifetime of the value: a single outlier permanently stretches the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalibrationRange {
    bounds: Option<(u16, u16)>,
    full_scale: u16,
}

impl CalibrationRange {
    /// Creates an uninitialized range for a sensor of the given width.
    pub const fn new(resolution: SensorResolution) -> Self {
        Self {
            bounds: None,
            full_scale: resolution.full_scale(),
        }
    }

    /// Current `(low, high)` bounds, or `None` before the first sample.
    pub fn bounds(&self) -> Option<(u16, u16)> {
        self.bounds
    }

    /// Returns true once a sample has been observed.
    pub fn is_initialized(&self) -> bool {
        self.bounds.is_some()
    }

    /// Widens the range to include `sample`.
    ///
    /// The first sample seeds both bounds and then pushes `high` one code up
    /// (or `low` one code down at full scale) so that `low < high`. Samples
    /// above full scale are saturated first; the saturated sample is returned.
    pub fn observe(&mut self, sample: u16) -> u16 {
        let sample = sample.min(self.full_scale);
        self.bounds = Some(match self.bounds {
            None if sample < self.full_scale => (sample, sample + 1),
            None => (sample.saturating_sub(1), sample),
            Some((low, high)) => (low.min(sample), high.max(sample)),
        });
        sample
    }

    /// Maps `sample` against the current bounds without widening them.
    ///
    /// Returns `at_low` while uninitialized.
    pub fn remap(&self, sample: u16, at_low: i32, at_high: i32) -> i32 {
        match self.bounds {
            Some((low, high)) => map_saturating(sample, low, high, at_low, at_high),
            None => at_low,
        }
    }

    /// Observes `sample`, then maps it against the widened bounds.
    pub fn calibrate(&mut self, sample: u16, at_low: i32, at_high: i32) -> i32 {
        let sample = self.observe(sample);
        self.remap(sample, at_low, at_high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ten_bit() -> CalibrationRange {
        CalibrationRange::new(SensorResolution::new(10).unwrap())
    }

    #[test]
    fn saturating_below_min_returns_low_output() {
        assert_eq!(map_saturating(0, 10, 100, 5, 10), 5);
    }

    #[test]
    fn saturating_endpoints_are_exact_regardless_of_other_bound() {
        for hi in [11u16, 50, 1000, u16::MAX] {
            assert_eq!(map_saturating(10, 10, hi, 500, 50), 500);
            assert_eq!(map_saturating(3, 10, hi, 500, 50), 500);
        }
        for lo in [0u16, 10, 99] {
            assert_eq!(map_saturating(100, lo, 100, 500, 50), 50);
            assert_eq!(map_saturating(200, lo, 100, 500, 50), 50);
        }
    }

    #[test]
    fn saturating_interpolates_linearly() {
        assert_eq!(map_saturating(55, 10, 100, 0, 90), 45);
        assert_eq!(map_saturating(55, 10, 100, 90, 0), 45);
        assert_eq!(map_saturating(20, 10, 100, 5, 10), 5);
        assert_eq!(map_saturating(28, 10, 100, 5, 10), 6);
    }

    #[test]
    fn saturating_degenerate_range_does_not_divide() {
        assert_eq!(map_saturating(40, 40, 40, 500, 50), 500);
        assert_eq!(map_saturating(41, 40, 40, 500, 50), 50);
        assert_eq!(map_saturating(40, 50, 30, 500, 50), 500);
    }

    #[test]
    fn proportional_matches_arduino_map() {
        assert_eq!(map_proportional(512, 0, 1023, 0, 255), 127);
        assert_eq!(map_proportional(0, 0, 10, 500, 50), 500);
        assert_eq!(map_proportional(10, 0, 10, 500, 50), 50);
    }

    #[test]
    fn proportional_extrapolates_outside_range() {
        assert_eq!(map_proportional(20, 0, 10, 0, 100), 200);
        assert_eq!(map_proportional(-5, 0, 10, 0, 100), -50);
    }

    #[test]
    fn proportional_degenerate_range_returns_out_min() {
        assert_eq!(map_proportional(7, 3, 3, 500, 50), 500);
    }

    #[test]
    fn first_sample_seeds_a_non_empty_range() {
        let mut range = ten_bit();
        assert!(!range.is_initialized());
        range.observe(50);
        assert_eq!(range.bounds(), Some((50, 51)));
    }

    #[test]
    fn first_sample_at_full_scale_widens_downward() {
        let mut range = ten_bit();
        range.observe(1023);
        assert_eq!(range.bounds(), Some((1022, 1023)));
    }

    #[test]
    fn samples_above_full_scale_saturate() {
        let mut range = ten_bit();
        assert_eq!(range.observe(4000), 1023);
        range.observe(100);
        assert_eq!(range.bounds(), Some((100, 1023)));
    }

    #[test]
    fn range_only_widens() {
        let mut range = ten_bit();
        for sample in [50, 10, 90, 30] {
            range.observe(sample);
        }
        assert_eq!(range.bounds(), Some((10, 90)));

        range.observe(60);
        assert_eq!(range.bounds(), Some((10, 90)));
    }

    #[test]
    fn remap_hits_endpoints_and_interior() {
        let mut range = ten_bit();
        for sample in [50, 10, 90, 30] {
            range.observe(sample);
        }
        assert_eq!(range.remap(10, 500, 50), 500);
        assert_eq!(range.remap(90, 500, 50), 50);

        let mid = range.remap(50, 500, 50);
        assert!(mid < 500 && mid > 50);
        assert!(range.remap(30, 500, 50) > mid);
    }

    #[test]
    fn remap_before_any_sample_returns_low_output() {
        assert_eq!(ten_bit().remap(300, 500, 50), 500);
    }

    #[test]
    fn calibrate_widens_then_maps() {
        let mut range = ten_bit();
        // Seed at 200 gives (200, 201); 200 sits on the low bound.
        assert_eq!(range.calibrate(200, 500, 50), 500);
        // A new maximum is the high bound by definition.
        assert_eq!(range.calibrate(800, 500, 50), 50);
        assert_eq!(range.calibrate(100, 500, 50), 500);
        assert_eq!(range.bounds(), Some((100, 800)));
    }
}
