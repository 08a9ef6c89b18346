//! Light-paced blinking.
//!
//! [`LightBlinker`] samples an analog light sensor, widens its
//! [`CalibrationRange`], and turns the sample into the on-time of a single
//! indicator. The delay runs opposite to the light level by configuration:
//! the dark end of the range maps to [`BlinkConfig::slowest_ms`] and the
//! bright end to [`BlinkConfig::fastest_ms`], so brighter light blinks faster.

use crate::calibration::CalibrationRange;
use crate::sensor::AnalogSensor;
use crate::time::AnimationDelay;
use crate::types::LineError;
use core::convert::Infallible;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

/// Blink timing in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlinkConfig {
    /// On-time at the darkest observed sample.
    pub slowest_ms: u32,

    /// On-time at the brightest observed sample.
    pub fastest_ms: u32,

    /// Off-time after every blink.
    pub off_ms: u32,
}

impl Default for BlinkConfig {
    fn default() -> Self {
        Self {
            slowest_ms: 500,
            fastest_ms: 50,
            off_ms: 100,
        }
    }
}

/// Blinks one output at a rate set by an auto-calibrated analog sensor.
pub struct LightBlinker<S, O, D>
where
    S: AnalogSensor,
    O: OutputPin,
    D: DelayNs,
{
    config: BlinkConfig,
    sensor: S,
    led: O,
    delay: D,
    range: CalibrationRange,
}

impl<S, O, D> LightBlinker<S, O, D>
where
    S: AnalogSensor,
    O: OutputPin,
    D: DelayNs,
{
    /// Creates a blinker with an uninitialized range sized to the sensor.
    pub fn new(config: BlinkConfig, sensor: S, led: O, delay: D) -> Self {
        let range = CalibrationRange::new(sensor.resolution());
        Self {
            config,
            sensor,
            led,
            delay,
            range,
        }
    }

    /// Samples once, then blinks for the remapped on-time and the fixed off-time.
    ///
    /// Returns the on-time used, in milliseconds.
    pub fn step(&mut self) -> Result<u32, LineError<S::Error, O::Error>> {
        let sample = self.sensor.sample().map_err(LineError::Input)?;
        let on_ms = self.on_time(sample);

        #[cfg(feature = "defmt")]
        defmt::trace!("sample {} range {} on {}ms", sample, self.range.bounds(), on_ms);

        self.led.set_high().map_err(LineError::Output)?;
        AnimationDelay::from_millis(on_ms).wait(&mut self.delay);
        self.led.set_low().map_err(LineError::Output)?;
        AnimationDelay::from_millis(self.config.off_ms).wait(&mut self.delay);

        Ok(on_ms)
    }

    /// Loops [`step`](Self::step) until a hardware error occurs.
    pub fn run(&mut self) -> Result<Infallible, LineError<S::Error, O::Error>> {
        loop {
            self.step()?;
        }
    }

    /// The calibration range observed so far.
    pub fn range(&self) -> &CalibrationRange {
        &self.range
    }

    /// The configuration in use.
    pub fn config(&self) -> &BlinkConfig {
        &self.config
    }

    /// Gives the hardware back.
    pub fn release(self) -> (S, O, D) {
        (self.sensor, self.led, self.delay)
    }

    fn on_time(&mut self, sample: u16) -> u32 {
        let slowest = saturate_i32(self.config.slowest_ms);
        let fastest = saturate_i32(self.config.fastest_ms);
        let on_ms = self.range.calibrate(sample, slowest, fastest);
        u32::try_from(on_ms).unwrap_or(0)
    }
}

fn saturate_i32(ms: u32) -> i32 {
    i32::try_from(ms).unwrap_or(i32::MAX)
}
