//! Switch bank decoding.
//!
//! Lines are weighted by position: line 0 is the least significant bit.

use crate::types::ConfigError;
use embedded_hal::digital::InputPin;

/// Folds a boolean vector into an integer, index 0 being the least significant bit.
///
/// Only the first 32 entries contribute.
pub fn decode_bits(bits: &[bool]) -> u32 {
    bits.iter()
        .take(u32::BITS as usize)
        .enumerate()
        .filter(|(_, set)| **set)
        .fold(0, |total, (i, _)| total | (1 << i))
}

/// An ordered bank of `N` digital inputs.
///
/// The order is fixed when the set is built and never changes.
pub struct InputLineSet<I: InputPin, const N: usize> {
    lines: [I; N],
}

impl<I: InputPin, const N: usize> InputLineSet<I, N> {
    /// Takes ownership of `lines`, least significant line first.
    ///
    /// # Errors
    /// [`ConfigError::TooManyInputLines`] if `N` is 32 or more.
    pub fn new(lines: [I; N]) -> Result<Self, ConfigError> {
        if N >= u32::BITS as usize {
            return Err(ConfigError::TooManyInputLines { lines: N });
        }
        Ok(Self { lines })
    }

    /// Reads every line once and returns the weighted sum.
    pub fn decode(&mut self) -> Result<u32, I::Error> {
        let mut total = 0;
        for (i, line) in self.lines.iter_mut().enumerate() {
            if line.is_high()? {
                total |= 1 << i;
            }
        }
        Ok(total)
    }

    /// Largest value [`decode`](Self::decode) can return: `2^N - 1`.
    pub const fn max_value(&self) -> u32 {
        ((1u64 << N) - 1) as u32
    }

    /// Number of lines in the bank.
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns true for an empty bank, which always decodes to zero.
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Gives the lines back.
    pub fn release(self) -> [I; N] {
        self.lines
    }
}
