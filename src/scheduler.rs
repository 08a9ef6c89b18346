//! Mode cycling and the switch-driven control loop.
//!
//! Provides [`ModeScheduler`], which picks the active [`PatternMode`] from a
//! loop counter, and [`PatternController`], which runs the
//! decode-dispatch-sleep loop on top of it.

use crate::decoder::InputLineSet;
use crate::pattern::Animator;
use crate::time::AnimationDelay;
use crate::types::{ConfigError, LineError, PatternMode};
use core::convert::Infallible;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

/// Timing and cadence for the pattern loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnimationConfig {
    /// Base delay shared by all patterns.
    pub step: AnimationDelay,

    /// Pause taken instead of a pattern when the switches read zero.
    pub idle: AnimationDelay,

    /// Pause after every iteration, in multiples of `step`.
    pub gap_steps: u32,

    /// Completed iterations between mode changes.
    pub mode_cadence: u32,
}

impl AnimationConfig {
    /// The pause taken after every iteration.
    pub const fn gap(&self) -> AnimationDelay {
        self.step.times(self.gap_steps)
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            step: AnimationDelay::from_millis(25),
            idle: AnimationDelay::from_millis(100),
            gap_steps: 8,
            mode_cadence: 10,
        }
    }
}

/// Selects the active pattern from the number of completed iterations.
///
/// Starts on [`PatternMode::Sequential`] and advances after every
/// `cadence` iterations, wrapping after the last mode. Never terminates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModeScheduler {
    loops: u64,
    cadence: u32,
}

impl ModeScheduler {
    /// Creates a scheduler that advances every `cadence` iterations.
    ///
    /// # Errors
    /// [`ConfigError::ZeroModeCadence`] if `cadence` is zero.
    pub fn new(cadence: u32) -> Result<Self, ConfigError> {
        if cadence == 0 {
            return Err(ConfigError::ZeroModeCadence);
        }
        Ok(Self { loops: 0, cadence })
    }

    /// The mode for the current iteration.
    pub fn active(&self) -> PatternMode {
        PatternMode::for_iteration(self.loops, self.cadence)
    }

    /// Iterations completed so far.
    pub fn loops(&self) -> u64 {
        self.loops
    }

    /// Records a completed iteration.
    ///
    /// Returns the new mode if this iteration crossed a cadence boundary.
    pub fn complete_iteration(&mut self) -> Option<PatternMode> {
        self.loops = self.loops.wrapping_add(1);
        if self.loops % self.cadence as u64 == 0 {
            Some(self.active())
        } else {
            None
        }
    }
}

/// What one pass through the control loop did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Iteration {
    /// Decoded switch value.
    pub value: u32,

    /// Mode that was active during the iteration.
    pub mode: PatternMode,

    /// Whether a pattern ran (false when the value was zero).
    pub played: bool,

    /// Mode entered at the end of the iteration, if it changed.
    pub transitioned_to: Option<PatternMode>,
}

/// Reads the switch bank and plays the active pattern, forever.
///
/// # Type Parameters
/// * `I` - Input pin type of the switch bank
/// * `O` - Output pin type of the indicators
/// * `D` - Blocking delay provider
/// * `N` - Number of switch lines
/// * `M` - Number of indicator lines
pub struct PatternController<I, O, D, const N: usize, const M: usize>
where
    I: InputPin,
    O: OutputPin,
    D: DelayNs,
{
    config: AnimationConfig,
    inputs: InputLineSet<I, N>,
    animator: Animator<O, D, M>,
    scheduler: ModeScheduler,
}

impl<I, O, D, const N: usize, const M: usize> PatternController<I, O, D, N, M>
where
    I: InputPin,
    O: OutputPin,
    D: DelayNs,
{
    /// Builds a controller, checking that every decodable value fits the outputs.
    ///
    /// The animator's step delay is replaced by `config.step`.
    ///
    /// # Errors
    /// * [`ConfigError::ValueRangeExceedsOutputs`] if `2^N - 1 > M`
    /// * [`ConfigError::ZeroModeCadence`] if `config.mode_cadence` is zero
    pub fn new(
        config: AnimationConfig,
        inputs: InputLineSet<I, N>,
        animator: Animator<O, D, M>,
    ) -> Result<Self, ConfigError> {
        let max_value = inputs.max_value();
        if max_value as usize > M {
            return Err(ConfigError::ValueRangeExceedsOutputs {
                max_value,
                outputs: M,
            });
        }
        let scheduler = ModeScheduler::new(config.mode_cadence)?;
        let (outputs, delay) = animator.release();

        Ok(Self {
            config,
            inputs,
            animator: Animator::new(outputs, delay, config.step),
            scheduler,
        })
    }

    /// Runs one iteration: decode, play or idle, count, then sleep the gap.
    pub fn step(&mut self) -> Result<Iteration, LineError<I::Error, O::Error>> {
        let value = self.inputs.decode().map_err(LineError::Input)?;
        let mode = self.scheduler.active();

        let played = value != 0;
        if played {
            mode.animate(value as usize, &mut self.animator)
                .map_err(LineError::Output)?;
        } else {
            self.animator.hold(self.config.idle);
        }

        let transitioned_to = self.scheduler.complete_iteration();
        if let Some(_next) = transitioned_to {
            #[cfg(feature = "defmt")]
            defmt::info!("Mode: {} ({})", _next, _next.index());
        }

        self.animator.hold(self.config.gap());

        Ok(Iteration {
            value,
            mode,
            played,
            transitioned_to,
        })
    }

    /// Loops [`step`](Self::step) until a hardware error occurs.
    pub fn run(&mut self) -> Result<Infallible, LineError<I::Error, O::Error>> {
        loop {
            self.step()?;
        }
    }

    /// The mode that the next iteration will play.
    pub fn active_mode(&self) -> PatternMode {
        self.scheduler.active()
    }

    /// The scheduler state.
    pub fn scheduler(&self) -> &ModeScheduler {
        &self.scheduler
    }

    /// The configuration in use.
    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    /// Gives the hardware back.
    pub fn release(self) -> (InputLineSet<I, N>, Animator<O, D, M>) {
        (self.inputs, self.animator)
    }
}
