//! Builder pattern for StepperDrive.

use crate::clock::StepClockDivider;
use crate::config::units::Hertz;
use crate::config::{validate_drive, DriveConfig, SystemConfig, DEFAULT_STEP_DIVISOR};
use crate::error::{ConfigError, DriveError, Error, Result};

use super::driver::StepperDrive;
use super::output::OutputDriver;

/// Builder for creating StepperDrive instances.
pub struct StepperDriveBuilder<O>
where
    O: OutputDriver,
{
    output: Option<O>,
    name: Option<heapless::String<32>>,
    step_divisor: u16,
    timer_frequency: Option<Hertz>,
}

impl<O> Default for StepperDriveBuilder<O>
where
    O: OutputDriver,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<O> StepperDriveBuilder<O>
where
    O: OutputDriver,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            output: None,
            name: None,
            step_divisor: DEFAULT_STEP_DIVISOR,
            timer_frequency: None,
        }
    }

    /// Set the output driver.
    pub fn output(mut self, output: O) -> Self {
        self.output = Some(output);
        self
    }

    /// Set the drive name.
    pub fn name(mut self, name: &str) -> Self {
        self.name = heapless::String::try_from(name).ok();
        self
    }

    /// Set hardware ticks per logical TICK.
    pub fn step_divisor(mut self, divisor: u16) -> Self {
        self.step_divisor = divisor;
        self
    }

    /// Set the rate of the periodic hardware interrupt.
    pub fn timer_frequency(mut self, frequency: Hertz) -> Self {
        self.timer_frequency = Some(frequency);
        self
    }

    /// Configure from a DriveConfig.
    pub fn from_drive_config(mut self, config: &DriveConfig) -> Self {
        self.name = Some(config.name.clone());
        self.step_divisor = config.step_divisor;
        self.timer_frequency = Some(config.timer_frequency);
        self
    }

    /// Configure from SystemConfig by drive name.
    pub fn from_config(self, config: &SystemConfig, drive_name: &str) -> Result<Self> {
        let drive_config = config.drive(drive_name).ok_or_else(|| {
            Error::Config(ConfigError::DriveNotFound(
                heapless::String::try_from(drive_name).unwrap_or_default(),
            ))
        })?;

        validate_drive(drive_config)?;
        Ok(self.from_drive_config(drive_config))
    }

    /// Build the StepperDrive.
    ///
    /// The drive starts stopped at step index 0; call
    /// [`StepperDrive::start`] to apply the initial holding output.
    ///
    /// # Errors
    ///
    /// Returns an error if no output driver was set or the step divisor is
    /// outside 1-255.
    pub fn build(self) -> Result<StepperDrive<O>> {
        let output = self
            .output
            .ok_or(Error::Drive(DriveError::MissingOutput))?;

        let divider = StepClockDivider::new(self.step_divisor)?;

        let name = self.name.unwrap_or_else(|| {
            let mut name = heapless::String::new();
            let _ = name.push_str("drive");
            name
        });

        Ok(StepperDrive::new(output, divider, self.timer_frequency, name))
    }
}
