//! Motion controller - owns the state machine's mutable data.

use crate::config::units::StepIndex;
use crate::waveform::Waveform;

use super::event::Event;
use super::machine::transition;
use super::state::MotorState;

/// Motion state machine instance.
///
/// Starts in [`MotorState::Stopped`] at step index 0. The step index only
/// changes while the motor is moving and always stays within the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotionController {
    state: MotorState,
    index: StepIndex,
}

impl MotionController {
    /// Create a controller at rest on step index 0.
    pub const fn new() -> Self {
        Self {
            state: MotorState::Stopped,
            index: StepIndex::ZERO,
        }
    }

    /// Create a controller in an arbitrary state, e.g. to resume a snapshot.
    pub const fn with_state(state: MotorState, index: StepIndex) -> Self {
        Self { state, index }
    }

    /// Current state.
    #[inline]
    pub fn state(&self) -> MotorState {
        self.state
    }

    /// Current step index.
    #[inline]
    pub fn step_index(&self) -> StepIndex {
        self.index
    }

    /// Process one event and return the output to apply, if any.
    pub fn handle(&mut self, event: Event) -> Option<Waveform> {
        let next = transition(self.state, self.index, event);

        if next.state != self.state {
            #[cfg(feature = "defmt")]
            defmt::debug!(
                "{} -> {} on {} at step {}",
                self.state.name(),
                next.state.name(),
                event.name(),
                next.index.value()
            );
        }

        self.state = next.state;
        self.index = next.index;
        next.output
    }

    /// Return to the power-on state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
