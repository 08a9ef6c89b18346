//! Ordered output lines driven by the patterns.

use embedded_hal::digital::OutputPin;

/// `M` indicator lines whose index order is the traversal order of every pattern.
pub struct OutputLineSequence<O: OutputPin, const M: usize> {
    lines: [O; M],
}

impl<O: OutputPin, const M: usize> OutputLineSequence<O, M> {
    /// Takes ownership of `lines` in traversal order.
    pub fn new(lines: [O; M]) -> Self {
        Self { lines }
    }

    /// Drives line `index` high or low.
    ///
    /// # Panics
    /// If `index >= M`.
    #[inline]
    pub fn set(&mut self, index: usize, high: bool) -> Result<(), O::Error> {
        let line = &mut self.lines[index];
        if high { line.set_high() } else { line.set_low() }
    }

    /// Drives every line low.
    pub fn all_low(&mut self) -> Result<(), O::Error> {
        self.lines.iter_mut().try_for_each(|line| line.set_low())
    }

    /// Number of lines.
    pub const fn len(&self) -> usize {
        M
    }

    /// Returns true if there are no lines.
    pub const fn is_empty(&self) -> bool {
        M == 0
    }

    /// Gives the lines back.
    pub fn release(self) -> [O; M] {
        self.lines
    }
}
