//! Error types for microstep-drive.
//!
//! Provides unified error handling across configuration, output and drive
//! management. Unhandled (state, event) pairs in the motion controller are
//! not errors; they are silent no-ops.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all microstep-drive operations.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Failure while applying a waveform to the hardware
    Output(OutputError),
    /// Drive setup or access error
    Drive(DriveError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Drive name not found in configuration
    DriveNotFound(heapless::String<32>),
    /// Step divisor outside 1-255
    InvalidStepDivisor(u16),
    /// Timer frequency must be > 0
    InvalidTimerFrequency(u32),
    /// Step index outside 0-31
    InvalidStepIndex(u8),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Output driver errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputError {
    /// GPIO pin operation failed
    PinError,
    /// PWM duty update failed
    PwmError,
}

/// Drive setup and access errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriveError {
    /// An interrupt entry point ran before a drive was installed
    NotInstalled,
    /// The builder was finished without an output driver
    MissingOutput,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Output(e) => write!(f, "Output error: {}", e),
            Error::Drive(e) => write!(f, "Drive error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::DriveNotFound(name) => write!(f, "Drive '{}' not found", name),
            ConfigError::InvalidStepDivisor(v) => {
                write!(f, "Invalid step divisor: {}. Must be 1-255", v)
            }
            ConfigError::InvalidTimerFrequency(v) => {
                write!(f, "Invalid timer frequency: {} Hz. Must be > 0", v)
            }
            ConfigError::InvalidStepIndex(v) => {
                write!(f, "Invalid step index: {}. Must be 0-31", v)
            }
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputError::PinError => write!(f, "GPIO pin operation failed"),
            OutputError::PwmError => write!(f, "PWM duty update failed"),
        }
    }
}

impl fmt::Display for DriveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriveError::NotInstalled => write!(f, "No drive installed"),
            DriveError::MissingOutput => write!(f, "Output driver not set"),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<OutputError> for Error {
    fn from(e: OutputError) -> Self {
        Error::Output(e)
    }
}

impl From<DriveError> for Error {
    fn from(e: DriveError) -> Self {
        Error::Drive(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for OutputError {}

#[cfg(feature = "std")]
impl std::error::Error for DriveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_nests_cause() {
        let err = Error::from(ConfigError::InvalidStepDivisor(0));
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid step divisor: 0. Must be 1-255"
        );
        assert_eq!(
            Error::from(DriveError::NotInstalled).to_string(),
            "Drive error: No drive installed"
        );
    }

    #[cfg(feature = "defmt")]
    #[test]
    fn test_errors_are_defmt_formattable() {
        fn assert_format<T: defmt::Format>() {}
        assert_format::<Error>();
        assert_format::<ConfigError>();
        assert_format::<OutputError>();
        assert_format::<DriveError>();
    }
}
