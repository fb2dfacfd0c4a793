//! Step clock divider.

use crate::config::DEFAULT_STEP_DIVISOR;
use crate::error::{ConfigError, Result};

/// Counts hardware ticks and emits one logical TICK per `divisor` of them.
///
/// The TICK is emitted on the hardware tick that finds the counter at 0, so
/// the very first hardware tick after reset produces a TICK.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepClockDivider {
    /// Hardware ticks seen in the current cycle (0 to divisor - 1).
    counter: u8,
    /// Hardware ticks per logical TICK.
    divisor: u8,
}

impl StepClockDivider {
    /// Create a divider emitting one TICK every `divisor` hardware ticks.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidStepDivisor` if `divisor` is 0 or above 255.
    pub fn new(divisor: u16) -> Result<Self> {
        match u8::try_from(divisor) {
            Ok(d) if d > 0 => Ok(Self {
                counter: 0,
                divisor: d,
            }),
            _ => Err(ConfigError::InvalidStepDivisor(divisor).into()),
        }
    }

    /// Account for one hardware tick.
    ///
    /// Returns `true` when a logical TICK must be dispatched.
    #[inline]
    pub fn on_hardware_tick(&mut self) -> bool {
        let fire = self.counter == 0;
        self.counter += 1;
        if self.counter >= self.divisor {
            self.counter = 0;
        }
        fire
    }

    /// Current counter value.
    #[inline]
    pub fn counter(&self) -> u8 {
        self.counter
    }

    /// Hardware ticks per logical TICK.
    #[inline]
    pub fn divisor(&self) -> u8 {
        self.divisor
    }

    /// Restart the cycle so the next hardware tick emits a TICK.
    #[inline]
    pub fn reset(&mut self) {
        self.counter = 0;
    }
}

impl Default for StepClockDivider {
    fn default() -> Self {
        Self {
            counter: 0,
            divisor: DEFAULT_STEP_DIVISOR as u8,
        }
    }
}
