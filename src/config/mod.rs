//! Configuration module for microstep-drive.
//!
//! Provides types for loading and validating drive configurations from TOML
//! files (with `std` feature) or pre-parsed data.

mod drive;
mod system;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use drive::{DriveConfig, DEFAULT_STEP_DIVISOR};
pub use system::SystemConfig;
pub use validation::{validate_config, validate_drive};

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Amplitude, Hertz, Polarity, StepIndex};
