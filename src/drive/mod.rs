//! Drive module for microstep-drive.
//!
//! Ties the step clock divider, the motion controller and the bridge output
//! together, and provides the interrupt-safe wrapper used from handlers.

mod builder;
mod driver;
mod output;
mod shared;

pub use builder::StepperDriveBuilder;
pub use driver::StepperDrive;
pub use output::{BridgeOutput, OutputDriver};
pub use shared::SharedDrive;
