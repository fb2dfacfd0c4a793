//! Step clock module for microstep-drive.
//!
//! Derates the periodic hardware interrupt to the motor's step rate.

mod divider;

pub use divider::StepClockDivider;
