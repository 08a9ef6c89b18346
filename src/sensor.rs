//! Analog sensor abstraction.

use crate::types::ConfigError;

/// Sample width of an analog converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorResolution {
    bits: u8,
}

impl SensorResolution {
    /// Creates a resolution of `bits` bits.
    ///
    /// # Errors
    /// [`ConfigError::InvalidResolution`] unless `1 <= bits <= 16`.
    pub const fn new(bits: u8) -> Result<Self, ConfigError> {
        if bits == 0 || bits > 16 {
            return Err(ConfigError::InvalidResolution { bits });
        }
        Ok(Self { bits })
    }

    /// Sample width in bits.
    pub const fn bits(&self) -> u8 {
        self.bits
    }

    /// Largest code the converter produces.
    pub const fn full_scale(&self) -> u16 {
        ((1u32 << self.bits) - 1) as u16
    }
}

/// Trait for abstracting an analog input channel.
///
/// Implement this for your converter. Any one-time converter setup happens
/// before the value is handed to the crate.
pub trait AnalogSensor {
    /// Error type of a failed conversion.
    type Error;

    /// Takes one sample, right-aligned, no wider than [`resolution`](Self::resolution).
    fn sample(&mut self) -> Result<u16, Self::Error>;

    /// Sample width of this channel.
    fn resolution(&self) -> SensorResolution;
}
