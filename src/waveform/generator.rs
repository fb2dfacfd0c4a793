//! Waveform generation - step index to output.

use crate::config::units::{Amplitude, Polarity, StepIndex};

use super::tables::{AMPLITUDE_TABLE, MOVING_POLARITY_TABLE, PARKING_POLARITY_TABLE};

/// Output to apply to the bridge: a PWM amplitude and a polarity pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Waveform {
    /// PWM duty on the 0 to 32 scale.
    pub amplitude: Amplitude,
    /// Bridge switch pattern.
    pub polarity: Polarity,
}

impl Waveform {
    /// Create a waveform from raw table values.
    #[inline]
    pub const fn new(amplitude: u8, polarity: u8) -> Self {
        Self {
            amplitude: Amplitude::new(amplitude),
            polarity: Polarity::new(polarity),
        }
    }
}

/// Microstep output while the motor is moving.
///
/// The amplitude follows the cosine table through each half-cycle while the
/// polarity switches once per quadrant.
#[inline]
pub fn moving_waveform(index: StepIndex) -> Waveform {
    let subindex = index.subindex();
    let quadrant = index.quadrant();
    Waveform::new(AMPLITUDE_TABLE[subindex], MOVING_POLARITY_TABLE[quadrant])
}

/// Holding output at rest: half duty with the parking pattern of the quadrant.
#[inline]
pub fn parking_waveform(index: StepIndex) -> Waveform {
    Waveform {
        amplitude: Amplitude::HALF,
        polarity: Polarity::new(PARKING_POLARITY_TABLE[index.quadrant()]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(index: u8) -> StepIndex {
        StepIndex::new(index).unwrap()
    }

    #[test]
    fn test_moving_waveform_known_points() {
        assert_eq!(moving_waveform(at(0)), Waveform::new(32, 5));
        assert_eq!(moving_waveform(at(9)), Waveform::new(1, 6));
        assert_eq!(moving_waveform(at(24)), Waveform::new(0, 9));
        assert_eq!(moving_waveform(at(31)), Waveform::new(31, 9));
    }

    #[test]
    fn test_parking_waveform_known_points() {
        assert_eq!(parking_waveform(at(0)), Waveform::new(16, 1));
        assert_eq!(parking_waveform(at(8)), Waveform::new(16, 4));
        assert_eq!(parking_waveform(at(16)), Waveform::new(16, 2));
        assert_eq!(parking_waveform(at(24)), Waveform::new(16, 8));
    }

    #[test]
    fn test_parking_holds_half_duty() {
        for index in StepIndex::all() {
            let w = parking_waveform(index);
            assert_eq!(w.amplitude, Amplitude::HALF);
            assert_eq!(w.amplitude.value() * 2, Amplitude::MAX.value());
        }
    }

    #[test]
    fn test_quadrant_holds_polarity() {
        for index in StepIndex::all() {
            let first = StepIndex::wrapping(index.value() & !0x07);
            assert_eq!(
                moving_waveform(index).polarity,
                moving_waveform(first).polarity
            );
        }
    }
}
