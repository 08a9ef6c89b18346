//! Shared test infrastructure for pin-animator integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::{Cell, RefCell};
use core::convert::Infallible;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, ErrorKind, ErrorType, InputPin, OutputPin};
use pin_animator::{AnalogSensor, SensorResolution};
use std::rc::Rc;

// ============================================================================
// Event Log
// ============================================================================

/// One observable hardware interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Output line driven high (`true`) or low (`false`)
    Pin(usize, bool),
    /// Blocking delay in microseconds
    Delay(u32),
}

pub const LOG_CAPACITY: usize = 2048;

/// Event log shared by every mock wired into one test
#[derive(Clone, Default)]
pub struct EventLog(Rc<RefCell<heapless::Vec<Event, LOG_CAPACITY>>>);

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, event: Event) {
        self.0
            .borrow_mut()
            .push(event)
            .expect("event log capacity exceeded");
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().iter().copied().collect()
    }

    /// Pin transitions only, as `(line, high)`
    pub fn pin_events(&self) -> Vec<(usize, bool)> {
        self.0
            .borrow()
            .iter()
            .filter_map(|event| match event {
                Event::Pin(line, high) => Some((*line, *high)),
                Event::Delay(_) => None,
            })
            .collect()
    }

    /// Delays only, in microseconds
    pub fn delays(&self) -> Vec<u32> {
        self.0
            .borrow()
            .iter()
            .filter_map(|event| match event {
                Event::Delay(us) => Some(*us),
                Event::Pin(..) => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }
}

// ============================================================================
// Mock Output Pins
// ============================================================================

/// Output pin that records every transition into the shared log
pub struct MockOutputPin {
    line: usize,
    log: EventLog,
}

impl MockOutputPin {
    pub fn new(line: usize, log: &EventLog) -> Self {
        Self {
            line,
            log: log.clone(),
        }
    }
}

impl ErrorType for MockOutputPin {
    type Error = Infallible;
}

impl OutputPin for MockOutputPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.log.push(Event::Pin(self.line, false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.log.push(Event::Pin(self.line, true));
        Ok(())
    }
}

/// Builds `M` recording output pins numbered `0..M`
pub fn output_pins<const M: usize>(log: &EventLog) -> [MockOutputPin; M] {
    core::array::from_fn(|line| MockOutputPin::new(line, log))
}

/// Error reported by the failing mocks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockPinError;

impl digital::Error for MockPinError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Output pin whose every write fails
pub struct FailingOutputPin;

impl ErrorType for FailingOutputPin {
    type Error = MockPinError;
}

impl OutputPin for FailingOutputPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Err(MockPinError)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Err(MockPinError)
    }
}

// ============================================================================
// Mock Input Pins
// ============================================================================

/// Switch input whose level can be changed from the test while owned by the crate
#[derive(Clone)]
pub struct MockSwitch {
    level: Rc<Cell<bool>>,
}

impl MockSwitch {
    pub fn new(high: bool) -> Self {
        Self {
            level: Rc::new(Cell::new(high)),
        }
    }

    pub fn set(&self, high: bool) {
        self.level.set(high);
    }
}

impl ErrorType for MockSwitch {
    type Error = Infallible;
}

impl InputPin for MockSwitch {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.level.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.level.get())
    }
}

/// Builds a switch bank from a bit vector, index 0 least significant
pub fn switches<const N: usize>(bits: [bool; N]) -> [MockSwitch; N] {
    bits.map(MockSwitch::new)
}

/// Input pin whose every read fails
pub struct FailingSwitch;

impl ErrorType for FailingSwitch {
    type Error = MockPinError;
}

impl InputPin for FailingSwitch {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Err(MockPinError)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Err(MockPinError)
    }
}

// ============================================================================
// Mock Delay
// ============================================================================

/// Delay that returns immediately and records the requested duration
pub struct MockDelay {
    log: EventLog,
}

impl MockDelay {
    pub fn new(log: &EventLog) -> Self {
        Self { log: log.clone() }
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.log.push(Event::Delay(ns / 1_000));
    }

    fn delay_us(&mut self, us: u32) {
        self.log.push(Event::Delay(us));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.log.push(Event::Delay(ms * 1_000));
    }
}

// ============================================================================
// Mock Analog Sensor
// ============================================================================

/// Sensor that replays a fixed script of samples, repeating the last one
pub struct ScriptedSensor {
    samples: heapless::Vec<u16, 64>,
    next: usize,
    resolution: SensorResolution,
}

impl ScriptedSensor {
    pub fn new(samples: &[u16], bits: u8) -> Self {
        Self {
            samples: heapless::Vec::from_slice(samples).expect("too many scripted samples"),
            next: 0,
            resolution: SensorResolution::new(bits).expect("invalid test resolution"),
        }
    }
}

impl AnalogSensor for ScriptedSensor {
    type Error = Infallible;

    fn sample(&mut self) -> Result<u16, Self::Error> {
        let index = self.next.min(self.samples.len() - 1);
        self.next += 1;
        Ok(self.samples[index])
    }

    fn resolution(&self) -> SensorResolution {
        self.resolution
    }
}

/// Sensor whose every conversion fails
pub struct FailingSensor;

impl AnalogSensor for FailingSensor {
    type Error = MockPinError;

    fn sample(&mut self) -> Result<u16, Self::Error> {
        Err(MockPinError)
    }

    fn resolution(&self) -> SensorResolution {
        SensorResolution::new(10).expect("10 bits is valid")
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Replays pin transitions and returns the final level of each of `M` lines
pub fn final_levels<const M: usize>(pin_events: &[(usize, bool)]) -> [bool; M] {
    let mut levels = [false; M];
    for (line, high) in pin_events {
        levels[*line] = *high;
    }
    levels
}

pub const STEP_US: u32 = 25_000;
pub const HALF_US: u32 = 12_500;
pub const DOUBLE_US: u32 = 50_000;
