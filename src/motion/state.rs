//! Motor states.

/// Direction of travel through the step cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Increasing step index.
    Forward,
    /// Decreasing step index.
    Reverse,
}

/// State of the motion state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorState {
    /// Holding position on a full step.
    #[default]
    Stopped,
    /// Stepping forward on every TICK.
    Forward,
    /// Still stepping forward until the next full step is reached.
    BrakingForward,
    /// Stepping backward on every TICK.
    Reverse,
    /// Still stepping backward until the next full step is reached.
    BrakingReverse,
}

impl MotorState {
    /// Every state, in declaration order.
    pub const ALL: [MotorState; 5] = [
        MotorState::Stopped,
        MotorState::Forward,
        MotorState::BrakingForward,
        MotorState::Reverse,
        MotorState::BrakingReverse,
    ];

    /// Get the state name as a static string.
    pub const fn name(self) -> &'static str {
        match self {
            MotorState::Stopped => "Stopped",
            MotorState::Forward => "Forward",
            MotorState::BrakingForward => "BrakingForward",
            MotorState::Reverse => "Reverse",
            MotorState::BrakingReverse => "BrakingReverse",
        }
    }

    /// Direction the step index moves on TICK, if any.
    pub const fn direction(self) -> Option<Direction> {
        match self {
            MotorState::Stopped => None,
            MotorState::Forward | MotorState::BrakingForward => Some(Direction::Forward),
            MotorState::Reverse | MotorState::BrakingReverse => Some(Direction::Reverse),
        }
    }

    /// Whether the motor is running out to the next full step.
    #[inline]
    pub const fn is_braking(self) -> bool {
        matches!(self, MotorState::BrakingForward | MotorState::BrakingReverse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_stopped() {
        assert_eq!(MotorState::default(), MotorState::Stopped);
    }

    #[test]
    fn test_direction() {
        assert_eq!(MotorState::Stopped.direction(), None);
        assert_eq!(MotorState::BrakingForward.direction(), Some(Direction::Forward));
        assert_eq!(MotorState::Reverse.direction(), Some(Direction::Reverse));
        assert_eq!(MotorState::BrakingReverse.direction(), Some(Direction::Reverse));
    }

    #[test]
    fn test_braking_flags() {
        assert!(MotorState::BrakingReverse.is_braking());
        assert!(MotorState::BrakingForward.is_braking());
        assert!(!MotorState::Forward.is_braking());
        assert!(!MotorState::Stopped.is_braking());
    }
}
