//! # microstep-drive
//!
//! Interrupt-driven microstepping controller for two-winding stepper motors
//! on a half-bridge driver, with embedded-hal 1.0 support.
//!
//! ## Features
//!
//! - **32-position microstepping**: cosine amplitude table with per-quadrant bridge patterns
//! - **Clean stops**: braking always runs out to a full mechanical step before holding
//! - **Step clock divider**: derives the step rate from a fast periodic timer
//! - **Interrupt-safe**: critical-section wrapper for handlers at different priorities
//! - **embedded-hal 1.0**: `SetDutyCycle` for amplitude, `OutputPin` for the bridge inputs
//! - **no_std compatible**: Core library works without standard library
//! - **Configuration-driven**: Define drives in TOML files
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use microstep_drive::{BridgeOutput, SharedDrive, StepperDriveBuilder};
//!
//! static DRIVE: SharedDrive<Bridge> = SharedDrive::new();
//!
//! let output = BridgeOutput::new(pwm, in1, in2, in3, in4);
//! let drive = StepperDriveBuilder::new()
//!     .name("table")
//!     .output(output)
//!     .step_divisor(26)
//!     .build()?;
//!
//! DRIVE.install(drive);
//! DRIVE.start()?;
//!
//! // In the timer interrupt:
//! DRIVE.on_timer_interrupt()?;
//! // In the button interrupts:
//! DRIVE.on_advance_edge()?;
//! DRIVE.on_retreat_edge()?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

// Core modules
pub mod clock;
pub mod config;
pub mod drive;
pub mod error;
pub mod motion;
pub mod waveform;

// Re-exports for ergonomic API
pub use clock::StepClockDivider;
pub use config::{validate_config, DriveConfig, SystemConfig};
pub use drive::{BridgeOutput, OutputDriver, SharedDrive, StepperDrive, StepperDriveBuilder};
pub use error::{Error, Result};
pub use motion::{transition, Direction, Event, MotionController, MotorState, Transition};
pub use waveform::{moving_waveform, parking_waveform, Waveform};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{Amplitude, Hertz, Polarity, StepIndex};
