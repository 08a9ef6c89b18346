//! The pattern library.
//!
//! Every pattern animates the first `value` lines of an [`OutputLineSequence`]
//! and blocks until it is finished. A `value` of zero is a no-op: no pin is
//! touched and no delay is issued.
//!
//! # Panics
//! All patterns index the output sequence directly, so `value` must not exceed
//! the number of output lines. [`PatternController`](crate::PatternController)
//! checks this once at construction; direct callers are responsible for it.

use crate::outputs::OutputLineSequence;
use crate::time::AnimationDelay;
use crate::types::PatternMode;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

/// Drives an output sequence through timed patterns.
///
/// # Type Parameters
/// * `O` - Output pin type
/// * `D` - Blocking delay provider
/// * `M` - Number of output lines
pub struct Animator<O: OutputPin, D: DelayNs, const M: usize> {
    outputs: OutputLineSequence<O, M>,
    delay: D,
    step: AnimationDelay,
}

impl<O: OutputPin, D: DelayNs, const M: usize> Animator<O, D, M> {
    /// Creates an animator pacing every pattern with `step`.
    pub fn new(outputs: OutputLineSequence<O, M>, delay: D, step: AnimationDelay) -> Self {
        Self {
            outputs,
            delay,
            step,
        }
    }

    /// The base delay shared by all patterns.
    pub fn step(&self) -> AnimationDelay {
        self.step
    }

    /// Number of output lines available.
    pub const fn line_count(&self) -> usize {
        M
    }

    /// Blocks for `duration` without touching any pin.
    pub fn hold(&mut self, duration: AnimationDelay) {
        duration.wait(&mut self.delay);
    }

    /// Drives every output low.
    pub fn clear(&mut self) -> Result<(), O::Error> {
        self.outputs.all_low()
    }

    /// Gives the outputs and the delay back.
    pub fn release(self) -> (OutputLineSequence<O, M>, D) {
        (self.outputs, self.delay)
    }

    /// Lights `0..value` in order one step apart, then darkens them in the same order.
    pub fn sequential(&mut self, value: usize) -> Result<(), O::Error> {
        if value == 0 {
            return Ok(());
        }
        let step = self.step;
        self.sweep(0..value, true, step)?;
        self.sweep(0..value, false, step)
    }

    /// Lights `0..value` forward at half-step spacing, then darkens them back to front.
    pub fn bounce(&mut self, value: usize) -> Result<(), O::Error> {
        if value == 0 {
            return Ok(());
        }
        let half = self.step.half();
        self.sweep(0..value, true, half)?;
        self.sweep((0..value).rev(), false, half)
    }

    /// Lights `0..value` back to front at half-step spacing, then darkens them forward.
    pub fn reverse_bounce(&mut self, value: usize) -> Result<(), O::Error> {
        if value == 0 {
            return Ok(());
        }
        let half = self.step.half();
        self.sweep((0..value).rev(), true, half)?;
        self.sweep(0..value, false, half)
    }

    /// Lights mirrored pairs from both ends toward the center, holding a double
    /// step after each pair, then darkens the same pairs one step apart.
    ///
    /// With an odd `value` the middle line pairs with itself.
    pub fn outside_in(&mut self, value: usize) -> Result<(), O::Error> {
        if value == 0 {
            return Ok(());
        }
        let pairs = value.div_ceil(2);
        let (double, single) = (self.step.double(), self.step);
        self.pairs((0..pairs).map(|i| (i, value - i - 1)), true, double)?;
        self.pairs((0..pairs).map(|i| (i, value - i - 1)), false, single)
    }

    /// Lights mirrored pairs from the center outward one step apart, then
    /// darkens them in the same order.
    pub fn inside_out(&mut self, value: usize) -> Result<(), O::Error> {
        if value == 0 {
            return Ok(());
        }
        let (left_mid, right_mid) = ((value - 1) / 2, value / 2);
        let step = self.step;
        self.pairs((0..=left_mid).map(|i| (left_mid - i, right_mid + i)), true, step)?;
        self.pairs((0..=left_mid).map(|i| (left_mid - i, right_mid + i)), false, step)
    }

    fn sweep<R>(&mut self, indices: R, high: bool, spacing: AnimationDelay) -> Result<(), O::Error>
    where
        R: Iterator<Item = usize>,
    {
        for index in indices {
            self.outputs.set(index, high)?;
            spacing.wait(&mut self.delay);
        }
        Ok(())
    }

    fn pairs<R>(&mut self, pairs: R, high: bool, spacing: AnimationDelay) -> Result<(), O::Error>
    where
        R: Iterator<Item = (usize, usize)>,
    {
        for (left, right) in pairs {
            self.outputs.set(left, high)?;
            self.outputs.set(right, high)?;
            spacing.wait(&mut self.delay);
        }
        Ok(())
    }
}

impl PatternMode {
    /// Plays this mode's pattern for `value` on `animator`.
    pub fn animate<O, D, const M: usize>(
        self,
        value: usize,
        animator: &mut Animator<O, D, M>,
    ) -> Result<(), O::Error>
    where
        O: OutputPin,
        D: DelayNs,
    {
        match self {
            PatternMode::Sequential => animator.sequential(value),
            PatternMode::Bounce => animator.bounce(value),
            PatternMode::ReverseBounce => animator.reverse_bounce(value),
            PatternMode::OutsideIn => animator.outside_in(value),
            PatternMode::InsideOut => animator.inside_out(value),
        }
    }
}
