//! Transition function of the motion state machine.
//!
//! | State          | Event             | Output                 | Next state     |
//! |----------------|-------------------|------------------------|----------------|
//! | Stopped        | Advance           | -                      | Forward        |
//! | Stopped        | Retreat           | -                      | Reverse        |
//! | Forward        | Tick              | moving, index + 1      | Forward        |
//! | Forward        | Retreat / Stop    | -                      | BrakingForward |
//! | BrakingForward | Tick on full step | parking                | Stopped        |
//! | BrakingForward | Tick              | moving, index + 1      | BrakingForward |
//! | Reverse        | Tick              | moving, index - 1      | Reverse        |
//! | Reverse        | Advance / Stop    | -                      | BrakingReverse |
//! | BrakingReverse | Tick on full step | parking                | Stopped        |
//! | BrakingReverse | Tick              | moving, index - 1      | BrakingReverse |
//!
//! Every other pair leaves state and index untouched and produces no output.
//! The moving output is always computed from the index *before* it steps.

use crate::config::units::StepIndex;
use crate::waveform::{moving_waveform, parking_waveform, Waveform};

use super::event::Event;
use super::state::{Direction, MotorState};

/// Result of applying one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transition {
    /// State after the event.
    pub state: MotorState,
    /// Step index after the event.
    pub index: StepIndex,
    /// Output to apply immediately, if any.
    pub output: Option<Waveform>,
}

impl Transition {
    #[inline]
    const fn hold(state: MotorState, index: StepIndex) -> Self {
        Self {
            state,
            index,
            output: None,
        }
    }

    #[inline]
    fn step(state: MotorState, from: StepIndex, to: StepIndex) -> Self {
        Self {
            state,
            index: to,
            output: Some(moving_waveform(from)),
        }
    }

    #[inline]
    fn park(index: StepIndex) -> Self {
        Self {
            state: MotorState::Stopped,
            index,
            output: Some(parking_waveform(index)),
        }
    }
}

/// Apply `event` to the machine in `state` at `index`.
pub fn transition(state: MotorState, index: StepIndex, event: Event) -> Transition {
    use Event::*;
    use MotorState::*;

    match (state, event) {
        (Stopped, Advance) => Transition::hold(Forward, index),
        (Stopped, Retreat) => Transition::hold(Reverse, index),
        (Forward, Retreat | Stop) => Transition::hold(BrakingForward, index),
        (Reverse, Advance | Stop) => Transition::hold(BrakingReverse, index),
        (_, Tick) => tick(state, index),
        _ => Transition::hold(state, index),
    }
}

/// One step clock period: step along the state's direction, or park once a
/// braking motor sits on a full step.
fn tick(state: MotorState, index: StepIndex) -> Transition {
    let Some(direction) = state.direction() else {
        return Transition::hold(state, index);
    };

    if state.is_braking() && index.is_full_step() {
        return Transition::park(index);
    }

    let to = match direction {
        Direction::Forward => index.next(),
        Direction::Reverse => index.prev(),
    };
    Transition::step(state, index, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(index: u8) -> StepIndex {
        StepIndex::new(index).unwrap()
    }

    #[test]
    fn test_stopped_starts_on_command() {
        let t = transition(MotorState::Stopped, at(8), Event::Advance);
        assert_eq!(t, Transition::hold(MotorState::Forward, at(8)));

        let t = transition(MotorState::Stopped, at(8), Event::Retreat);
        assert_eq!(t, Transition::hold(MotorState::Reverse, at(8)));
    }

    #[test]
    fn test_forward_tick_outputs_before_stepping() {
        let t = transition(MotorState::Forward, at(31), Event::Tick);
        assert_eq!(t.state, MotorState::Forward);
        assert_eq!(t.index, at(0));
        assert_eq!(t.output, Some(moving_waveform(at(31))));
    }

    #[test]
    fn test_reverse_tick_wraps_below_zero() {
        let t = transition(MotorState::Reverse, at(0), Event::Tick);
        assert_eq!(t.index, at(31));
        assert_eq!(t.output, Some(moving_waveform(at(0))));
    }

    #[test]
    fn test_braking_requests() {
        for event in [Event::Retreat, Event::Stop] {
            let t = transition(MotorState::Forward, at(3), event);
            assert_eq!(t, Transition::hold(MotorState::BrakingForward, at(3)));
        }
        for event in [Event::Advance, Event::Stop] {
            let t = transition(MotorState::Reverse, at(3), event);
            assert_eq!(t, Transition::hold(MotorState::BrakingReverse, at(3)));
        }
    }

    #[test]
    fn test_braking_parks_on_full_step() {
        let t = transition(MotorState::BrakingForward, at(16), Event::Tick);
        assert_eq!(t.state, MotorState::Stopped);
        assert_eq!(t.index, at(16));
        assert_eq!(t.output, Some(parking_waveform(at(16))));

        let t = transition(MotorState::BrakingReverse, at(0), Event::Tick);
        assert_eq!(t.state, MotorState::Stopped);
        assert_eq!(t.index, at(0));
    }

    #[test]
    fn test_braking_keeps_stepping_between_full_steps() {
        let t = transition(MotorState::BrakingForward, at(7), Event::Tick);
        assert_eq!(t.state, MotorState::BrakingForward);
        assert_eq!(t.index, at(8));

        let t = transition(MotorState::BrakingReverse, at(9), Event::Tick);
        assert_eq!(t.state, MotorState::BrakingReverse);
        assert_eq!(t.index, at(8));
    }

    #[test]
    fn test_tick_steps_along_state_direction() {
        for state in MotorState::ALL {
            let t = transition(state, at(3), Event::Tick);
            let expected = match state.direction() {
                Some(Direction::Forward) => at(4),
                Some(Direction::Reverse) => at(2),
                None => at(3),
            };
            assert_eq!(t.index, expected, "{:?}", state);
            assert_eq!(t.state, state);
            assert_eq!(t.output.is_some(), state.direction().is_some());
        }
    }

    #[test]
    fn test_only_braking_states_park() {
        for state in MotorState::ALL {
            let t = transition(state, at(24), Event::Tick);
            if state.is_braking() {
                assert_eq!(t.state, MotorState::Stopped);
                assert_eq!(t.index, at(24));
                assert_eq!(t.output, Some(parking_waveform(at(24))));
            } else {
                assert_eq!(t.state, state, "{:?}", state);
            }
        }
    }

    #[test]
    fn test_unhandled_pairs_are_noops() {
        let unhandled = [
            (MotorState::Stopped, Event::Tick),
            (MotorState::Stopped, Event::Stop),
            (MotorState::Forward, Event::Advance),
            (MotorState::BrakingForward, Event::Advance),
            (MotorState::BrakingForward, Event::Retreat),
            (MotorState::BrakingForward, Event::Stop),
            (MotorState::Reverse, Event::Retreat),
            (MotorState::BrakingReverse, Event::Advance),
            (MotorState::BrakingReverse, Event::Retreat),
            (MotorState::BrakingReverse, Event::Stop),
        ];
        for (state, event) in unhandled {
            let t = transition(state, at(5), event);
            assert_eq!(t, Transition::hold(state, at(5)), "{:?} on {:?}", state, event);
        }
    }
}
