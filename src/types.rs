//! Core types shared by the pattern engine and the blink loop.

/// The animation played for a decoded switch value.
///
/// Modes are visited in declaration order, wrapping from `InsideOut` back to
/// `Sequential`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PatternMode {
    /// Light forward one by one, then darken forward one by one.
    #[default]
    Sequential,

    /// Light forward, then darken from the far end back.
    Bounce,

    /// Light from the far end back, then darken forward.
    ReverseBounce,

    /// Light symmetric pairs converging on the center.
    OutsideIn,

    /// Light symmetric pairs expanding from the center.
    InsideOut,
}

impl PatternMode {
    /// Every mode, in cycle order.
    pub const ALL: [PatternMode; 5] = [
        PatternMode::Sequential,
        PatternMode::Bounce,
        PatternMode::ReverseBounce,
        PatternMode::OutsideIn,
        PatternMode::InsideOut,
    ];

    /// Number of modes in the cycle.
    pub const COUNT: usize = Self::ALL.len();

    /// Position of this mode within [`PatternMode::ALL`].
    pub const fn index(self) -> usize {
        match self {
            PatternMode::Sequential => 0,
            PatternMode::Bounce => 1,
            PatternMode::ReverseBounce => 2,
            PatternMode::OutsideIn => 3,
            PatternMode::InsideOut => 4,
        }
    }

    /// The mode that follows this one.
    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::COUNT]
    }

    /// The mode active after `loops` completed iterations when advancing every
    /// `cadence` iterations.
    ///
    /// A zero cadence never advances.
    pub const fn for_iteration(loops: u64, cadence: u32) -> Self {
        if cadence == 0 {
            return Self::ALL[0];
        }
        let advances = loops / cadence as u64;
        Self::ALL[(advances % Self::COUNT as u64) as usize]
    }
}

/// Configuration rejected at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// The switch bank can encode values beyond the last output line.
    ValueRangeExceedsOutputs {
        /// Largest value the inputs can decode to.
        max_value: u32,
        /// Number of output lines available.
        outputs: usize,
    },

    /// The switch bank is too wide to decode into a `u32`.
    TooManyInputLines {
        /// Number of input lines supplied.
        lines: usize,
    },

    /// Mode cadence of zero iterations.
    ZeroModeCadence,

    /// Analog resolution outside 1..=16 bits.
    InvalidResolution {
        /// Requested width.
        bits: u8,
    },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ValueRangeExceedsOutputs { max_value, outputs } => {
                write!(
                    f,
                    "inputs decode up to {} but only {} output lines are configured",
                    max_value, outputs
                )
            }
            ConfigError::TooManyInputLines { lines } => {
                write!(f, "{} input lines exceed the 31-line decoder limit", lines)
            }
            ConfigError::ZeroModeCadence => {
                write!(f, "mode cadence must be at least one iteration")
            }
            ConfigError::InvalidResolution { bits } => {
                write!(f, "analog resolution of {} bits is outside 1..=16", bits)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// A hardware error from one side of a control loop.
///
/// `In` is the error of whatever the loop samples (switches or the analog
/// sensor), `Out` the error of the indicator pins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineError<In, Out> {
    /// Reading an input failed.
    Input(In),

    /// Driving an output failed.
    Output(Out),
}

impl<In: core::fmt::Debug, Out: core::fmt::Debug> core::fmt::Display for LineError<In, Out> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LineError::Input(err) => write!(f, "input line error: {:?}", err),
            LineError::Output(err) => write!(f, "output line error: {:?}", err),
        }
    }
}

#[cfg(feature = "std")]
impl<In: core::fmt::Debug, Out: core::fmt::Debug> std::error::Error for LineError<In, Out> {}
