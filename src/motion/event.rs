//! Events consumed by the motion state machine.

/// Input to the motion state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Operator asks the motor to move forward.
    Advance,
    /// Operator asks the motor to move backward.
    Retreat,
    /// Explicit stop request.
    Stop,
    /// One period of the step clock elapsed.
    Tick,
}

impl Event {
    /// Every event, in declaration order.
    pub const ALL: [Event; 4] = [Event::Advance, Event::Retreat, Event::Stop, Event::Tick];

    /// Get the event name as a static string.
    pub const fn name(self) -> &'static str {
        match self {
            Event::Advance => "Advance",
            Event::Retreat => "Retreat",
            Event::Stop => "Stop",
            Event::Tick => "Tick",
        }
    }
}
