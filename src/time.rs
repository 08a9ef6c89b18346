//! Timing primitives for blocking animations.

use embedded_hal::delay::DelayNs;

/// A blocking pause used between pin transitions.
///
/// Stored in microseconds so that halving an odd millisecond value stays exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnimationDelay(u32);

impl AnimationDelay {
    /// Zero-length delay.
    pub const ZERO: Self = AnimationDelay(0);

    /// Creates a delay from microseconds.
    #[inline]
    pub const fn from_micros(micros: u32) -> Self {
        AnimationDelay(micros)
    }

    /// Creates a delay from milliseconds, saturating at `u32::MAX` microseconds.
    #[inline]
    pub const fn from_millis(millis: u32) -> Self {
        AnimationDelay(millis.saturating_mul(1_000))
    }

    /// Returns the delay in microseconds.
    #[inline]
    pub const fn as_micros(&self) -> u32 {
        self.0
    }

    /// Returns the delay in whole milliseconds (truncated).
    #[inline]
    pub const fn as_millis(&self) -> u32 {
        self.0 / 1_000
    }

    /// Half of this delay, used by the bounce patterns.
    #[inline]
    pub const fn half(self) -> Self {
        AnimationDelay(self.0 / 2)
    }

    /// Twice this delay, used while the outside-in pattern lights pairs.
    #[inline]
    pub const fn double(self) -> Self {
        self.times(2)
    }

    /// This delay repeated `n` times (saturating).
    #[inline]
    pub const fn times(self, n: u32) -> Self {
        AnimationDelay(self.0.saturating_mul(n))
    }

    /// Blocks on `delay` for this duration. A zero delay issues no call.
    #[inline]
    pub fn wait<D: DelayNs>(self, delay: &mut D) {
        if self.0 > 0 {
            delay.delay_us(self.0);
        }
    }
}
