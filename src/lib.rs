#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`InputLineSet`**: An ordered switch bank decoded into an integer, line 0 least significant
//! - **`OutputLineSequence`**: Ordered indicator lines; index order is the traversal order
//! - **`Animator`**: Plays the five blocking patterns over an output sequence
//! - **`PatternMode`**: Which pattern is active (`Sequential`, `Bounce`, `ReverseBounce`, `OutsideIn`, `InsideOut`)
//! - **`ModeScheduler`**: Advances the active mode every `mode_cadence` iterations
//! - **`PatternController`**: The decode, play, sleep loop tying the above together
//! - **`CalibrationRange`**: Running min/max of an analog source that only widens
//! - **`LightBlinker`**: Blinks one indicator with an on-time remapped from a light sensor
//! - **`AnalogSensor`**: Trait to implement for your ADC channel
//!
//! Digital lines and delays use the `embedded-hal` 1.0 traits (`InputPin`,
//! `OutputPin`, `DelayNs`). Hardware errors are never handled here; they are
//! returned wrapped in [`LineError`].

pub mod time;
pub mod types;
pub mod decoder;
pub mod outputs;
pub mod pattern;
pub mod scheduler;
pub mod sensor;
pub mod calibration;
pub mod blink;

pub use blink::{BlinkConfig, LightBlinker};
pub use calibration::{CalibrationRange, map_proportional, map_saturating};
pub use decoder::{InputLineSet, decode_bits};
pub use outputs::OutputLineSequence;
pub use pattern::Animator;
pub use scheduler::{AnimationConfig, Iteration, ModeScheduler, PatternController};
pub use sensor::{AnalogSensor, SensorResolution};
pub use time::AnimationDelay;
pub use types::{ConfigError, LineError, PatternMode};
