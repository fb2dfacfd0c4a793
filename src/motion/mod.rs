//! Motion module for microstep-drive.
//!
//! Provides the motion state machine: events, states, the pure transition
//! function and the controller owning state and step index.

mod controller;
mod event;
mod machine;
mod state;

pub use controller::MotionController;
pub use event::Event;
pub use machine::{transition, Transition};
pub use state::{Direction, MotorState};
