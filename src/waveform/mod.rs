//! Waveform module for microstep-drive.
//!
//! Maps a step index to the PWM amplitude and bridge polarity to apply.

mod generator;
mod tables;

pub use generator::{moving_waveform, parking_waveform, Waveform};
pub use tables::{AMPLITUDE_TABLE, MOVING_POLARITY_TABLE, PARKING_POLARITY_TABLE};
