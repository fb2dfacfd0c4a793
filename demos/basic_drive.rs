//! Basic drive example.
//!
//! Runs the controller against an in-memory output: start, advance for a
//! while, then retreat and watch the motor run out to the next full step.
//!
//! Real firmware calls the same entry points from its timer and GPIO
//! interrupts instead of from a loop.

use microstep_drive::{
    error::OutputError, Hertz, MotorState, OutputDriver, StepperDriveBuilder, Waveform,
};

/// Output printing every waveform it receives.
struct ConsoleOutput;

impl OutputDriver for ConsoleOutput {
    fn set_output(&mut self, waveform: Waveform) -> Result<(), OutputError> {
        println!(
            "  duty {:>2}/32  bridge {:04b}",
            waveform.amplitude.value(),
            waveform.polarity.bits()
        );
        Ok(())
    }
}

fn main() {
    println!("=== Basic Drive Example ===\n");

    let mut drive = StepperDriveBuilder::new()
        .name("demo_drive")
        .output(ConsoleOutput)
        .timer_frequency(Hertz(31_250))
        .step_divisor(26)
        .build()
        .expect("Failed to build drive");

    println!("Drive created: {}", drive.name());
    println!(
        "Step rate: {:.1} microsteps/s",
        drive.step_rate_hz().unwrap_or_default()
    );

    println!("\nStartup:");
    drive.start().expect("Failed to apply startup output");

    println!("\nAdvance:");
    drive.advance().expect("Advance failed");
    // Ten microsteps worth of hardware ticks.
    for _ in 0..10 * 26 {
        drive.on_timer_tick().expect("Tick failed");
    }
    println!("Now at step {} ({:?})", drive.step_index().value(), drive.state());

    println!("\nRetreat (brake to the next full step):");
    drive.retreat().expect("Retreat failed");
    while drive.state() != MotorState::Stopped {
        drive.on_timer_tick().expect("Tick failed");
    }
    println!(
        "Parked at step {} ({:?})",
        drive.step_index().value(),
        drive.state()
    );
}
