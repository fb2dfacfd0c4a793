//! Stepper drive.
//!
//! Generic over the output driver so the same controller runs against real
//! embedded-hal peripherals or an in-memory recorder.

use crate::clock::StepClockDivider;
use crate::config::units::{Hertz, StepIndex};
use crate::error::Result;
use crate::motion::{Event, MotionController, MotorState};
use crate::waveform::{parking_waveform, Waveform};

use super::output::OutputDriver;

/// One microstepping drive: step clock divider, motion controller and output.
///
/// All entry points are O(1) and never block, so they can be called straight
/// from interrupt handlers. Use [`SharedDrive`](super::SharedDrive) when the
/// entry points run at different interrupt priorities.
pub struct StepperDrive<O: OutputDriver> {
    /// Where waveforms are applied.
    output: O,

    /// Derates the hardware timer to the step rate.
    divider: StepClockDivider,

    /// State machine and step index.
    controller: MotionController,

    /// Last waveform successfully applied.
    last_output: Option<Waveform>,

    /// Rate of the hardware timer, if known.
    timer_frequency: Option<Hertz>,

    /// Drive name for logging/debugging.
    name: heapless::String<32>,
}

impl<O: OutputDriver> StepperDrive<O> {
    /// Create a new drive, stopped at step index 0.
    pub(crate) fn new(
        output: O,
        divider: StepClockDivider,
        timer_frequency: Option<Hertz>,
        name: heapless::String<32>,
    ) -> Self {
        Self {
            output,
            divider,
            controller: MotionController::new(),
            last_output: None,
            timer_frequency,
            name,
        }
    }

    /// Startup hook: return to rest at step index 0 and apply the holding output.
    ///
    /// Call once the peripherals are configured and before enabling interrupts.
    pub fn start(&mut self) -> Result<Waveform> {
        self.controller.reset();
        self.divider.reset();

        let waveform = parking_waveform(StepIndex::ZERO);
        self.apply(waveform)?;
        Ok(waveform)
    }

    /// Periodic hardware tick entry point.
    ///
    /// Dispatches a TICK once every `divisor` calls and returns the output it
    /// applied, if any.
    pub fn on_timer_tick(&mut self) -> Result<Option<Waveform>> {
        if self.divider.on_hardware_tick() {
            self.dispatch(Event::Tick)
        } else {
            Ok(None)
        }
    }

    /// ADVANCE command entry point.
    pub fn advance(&mut self) -> Result<Option<Waveform>> {
        self.dispatch(Event::Advance)
    }

    /// RETREAT command entry point.
    pub fn retreat(&mut self) -> Result<Option<Waveform>> {
        self.dispatch(Event::Retreat)
    }

    /// STOP command entry point.
    ///
    /// Brakes to the next full step in whichever direction the motor runs.
    pub fn stop(&mut self) -> Result<Option<Waveform>> {
        self.dispatch(Event::Stop)
    }

    /// Feed one event to the state machine and apply the resulting output.
    ///
    /// The new state is committed before the output is written, so a failed
    /// write leaves the step index in step with the commanded position.
    pub fn dispatch(&mut self, event: Event) -> Result<Option<Waveform>> {
        match self.controller.handle(event) {
            Some(waveform) => {
                self.apply(waveform)?;
                Ok(Some(waveform))
            }
            None => Ok(None),
        }
    }

    fn apply(&mut self, waveform: Waveform) -> Result<()> {
        #[cfg(feature = "defmt")]
        defmt::trace!(
            "{}: duty {} pattern {:b}",
            self.name.as_str(),
            waveform.amplitude.value(),
            waveform.polarity.bits()
        );

        self.output.set_output(waveform)?;
        self.last_output = Some(waveform);
        Ok(())
    }

    /// Get the drive name.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Current state of the motion state machine.
    #[inline]
    pub fn state(&self) -> MotorState {
        self.controller.state()
    }

    /// Current step index.
    #[inline]
    pub fn step_index(&self) -> StepIndex {
        self.controller.step_index()
    }

    /// The motion controller.
    #[inline]
    pub fn controller(&self) -> &MotionController {
        &self.controller
    }

    /// The step clock divider.
    #[inline]
    pub fn divider(&self) -> &StepClockDivider {
        &self.divider
    }

    /// Last waveform applied to the output.
    #[inline]
    pub fn last_output(&self) -> Option<Waveform> {
        self.last_output
    }

    /// Logical TICK rate, if the timer frequency is known.
    pub fn step_rate_hz(&self) -> Option<f32> {
        self.timer_frequency
            .map(|f| f.value() as f32 / self.divider.divisor() as f32)
    }

    /// Borrow the output driver.
    #[inline]
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Mutably borrow the output driver.
    #[inline]
    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    /// Consume the drive and return the output driver.
    pub fn release(self) -> O {
        self.output
    }
}
