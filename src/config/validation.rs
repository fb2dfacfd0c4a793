//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::{DriveConfig, SystemConfig};

/// Validate a system configuration.
///
/// Checks:
/// - Timer frequencies are non-zero
/// - Step divisors are in 1-255 so the divider counter fits a byte
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    for (_, drive) in config.drives.iter() {
        validate_drive(drive)?;
    }

    Ok(())
}

/// Validate a single drive configuration.
pub fn validate_drive(config: &DriveConfig) -> Result<()> {
    if config.timer_frequency.0 == 0 {
        return Err(Error::Config(ConfigError::InvalidTimerFrequency(
            config.timer_frequency.0,
        )));
    }

    if config.step_divisor == 0 || config.step_divisor > u8::MAX as u16 {
        return Err(Error::Config(ConfigError::InvalidStepDivisor(
            config.step_divisor,
        )));
    }

    Ok(())
}
