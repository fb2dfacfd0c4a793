//! Unit types for the controller's quantities.
//!
//! Provides type-safe representations of step positions, PWM amplitudes,
//! bridge polarity patterns and frequencies so that table indices and raw
//! register values cannot be mixed up.

use serde::Deserialize;

use crate::error::ConfigError;

/// Position within one electrical cycle (0 to 31).
///
/// The value always stays in range: stepping forward from 31 wraps to 0 and
/// stepping backward from 0 wraps to 31.
///
/// The two high bits select the bridge polarity ([`quadrant`](Self::quadrant)),
/// the four low bits select the amplitude ([`subindex`](Self::subindex)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepIndex(u8);

impl StepIndex {
    /// Number of microsteps in one electrical cycle.
    pub const CYCLE: u8 = 32;

    /// Number of microsteps between two full steps.
    pub const STEPS_PER_QUADRANT: u8 = 8;

    /// First position of the cycle.
    pub const ZERO: Self = Self(0);

    /// Create a new step index with validation.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidStepIndex` if the value is 32 or more.
    pub fn new(value: u8) -> Result<Self, ConfigError> {
        if value < Self::CYCLE {
            Ok(Self(value))
        } else {
            Err(ConfigError::InvalidStepIndex(value))
        }
    }

    /// Create a step index, wrapping the value into the cycle.
    #[inline]
    pub const fn wrapping(value: u8) -> Self {
        Self(value % Self::CYCLE)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// The following microstep, wrapping 31 to 0.
    #[inline]
    pub const fn next(self) -> Self {
        Self((self.0 + 1) % Self::CYCLE)
    }

    /// The preceding microstep, wrapping 0 to 31.
    #[inline]
    pub const fn prev(self) -> Self {
        Self((self.0 + Self::CYCLE - 1) % Self::CYCLE)
    }

    /// Quadrant of the cycle (0 to 3), selecting the polarity pattern.
    #[inline]
    pub const fn quadrant(self) -> usize {
        (self.0 >> 3) as usize
    }

    /// Position in the amplitude table (0 to 15).
    #[inline]
    pub const fn subindex(self) -> usize {
        (self.0 & 0x0F) as usize
    }

    /// Whether this index sits on a full mechanical step (0, 8, 16 or 24).
    #[inline]
    pub const fn is_full_step(self) -> bool {
        self.0 % Self::STEPS_PER_QUADRANT == 0
    }

    /// Iterate over every index of the cycle in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..Self::CYCLE).map(Self)
    }
}

impl TryFrom<u8> for StepIndex {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StepIndex> for u8 {
    fn from(index: StepIndex) -> Self {
        index.0
    }
}

/// PWM amplitude on the 0 to 32 duty scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Amplitude(u8);

impl Amplitude {
    /// Full duty.
    pub const MAX: Self = Self(32);

    /// Half duty, used to hold the rotor at rest.
    pub const HALF: Self = Self(16);

    /// Create an amplitude, saturating at [`Amplitude::MAX`].
    #[inline]
    pub const fn new(value: u8) -> Self {
        if value > Self::MAX.0 {
            Self::MAX
        } else {
            Self(value)
        }
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }
}

/// Bridge switch pattern; bit `n` drives bridge input `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Polarity(u8);

impl Polarity {
    /// Number of bridge inputs driven by a pattern.
    pub const WIDTH: u8 = 4;

    /// Create a polarity pattern, keeping only the four low bits.
    #[inline]
    pub const fn new(bits: u8) -> Self {
        Self(bits & 0x0F)
    }

    /// Get the raw bit pattern.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether bridge input `bit` is driven high.
    #[inline]
    pub const fn is_set(self, bit: u8) -> bool {
        bit < Self::WIDTH && self.0 & (1 << bit) != 0
    }
}

/// Frequency in hertz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Hertz(pub u32);

impl Hertz {
    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Period of one cycle in nanoseconds, or `u32::MAX` for 0 Hz.
    #[inline]
    pub const fn period_ns(self) -> u32 {
        if self.0 == 0 {
            u32::MAX
        } else {
            1_000_000_000 / self.0
        }
    }
}
