//! Output driver - applies waveforms to the half-bridge.

use embedded_hal::digital::{OutputPin, PinState};
use embedded_hal::pwm::SetDutyCycle;

use crate::config::units::Amplitude;
use crate::error::OutputError;
use crate::waveform::Waveform;

/// Sink for the waveforms produced by the motion controller.
///
/// Implementations apply the output immediately; applying the same waveform
/// twice must leave the hardware in the same state as applying it once.
pub trait OutputDriver {
    /// Apply an amplitude and polarity pattern.
    fn set_output(&mut self, waveform: Waveform) -> Result<(), OutputError>;
}

impl<T: OutputDriver + ?Sized> OutputDriver for &mut T {
    #[inline]
    fn set_output(&mut self, waveform: Waveform) -> Result<(), OutputError> {
        (**self).set_output(waveform)
    }
}

/// Half-bridge output built on embedded-hal 1.0 traits.
///
/// Generic over:
/// - `PWM`: duty channel shared by both windings (must implement `SetDutyCycle`)
/// - `A`, `B`, `C`, `D`: bridge inputs for polarity bits 0 to 3 (must implement `OutputPin`)
pub struct BridgeOutput<PWM, A, B, C, D>
where
    PWM: SetDutyCycle,
    A: OutputPin,
    B: OutputPin,
    C: OutputPin,
    D: OutputPin,
{
    pwm: PWM,
    a: A,
    b: B,
    c: C,
    d: D,
}

impl<PWM, A, B, C, D> BridgeOutput<PWM, A, B, C, D>
where
    PWM: SetDutyCycle,
    A: OutputPin,
    B: OutputPin,
    C: OutputPin,
    D: OutputPin,
{
    /// Create a bridge output from a PWM channel and four bridge inputs.
    pub fn new(pwm: PWM, a: A, b: B, c: C, d: D) -> Self {
        Self { pwm, a, b, c, d }
    }

    /// Give the peripherals back.
    pub fn release(self) -> (PWM, A, B, C, D) {
        (self.pwm, self.a, self.b, self.c, self.d)
    }
}

fn drive_pin<P: OutputPin>(pin: &mut P, high: bool) -> Result<(), OutputError> {
    pin.set_state(PinState::from(high))
        .map_err(|_| OutputError::PinError)
}

impl<PWM, A, B, C, D> OutputDriver for BridgeOutput<PWM, A, B, C, D>
where
    PWM: SetDutyCycle,
    A: OutputPin,
    B: OutputPin,
    C: OutputPin,
    D: OutputPin,
{
    fn set_output(&mut self, waveform: Waveform) -> Result<(), OutputError> {
        // Duty is scaled to the channel's resolution.
        self.pwm
            .set_duty_cycle_fraction(
                waveform.amplitude.value() as u16,
                Amplitude::MAX.value() as u16,
            )
            .map_err(|_| OutputError::PwmError)?;

        let polarity = waveform.polarity;
        drive_pin(&mut self.a, polarity.is_set(0))?;
        drive_pin(&mut self.b, polarity.is_set(1))?;
        drive_pin(&mut self.c, polarity.is_set(2))?;
        drive_pin(&mut self.d, polarity.is_set(3))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction};

    /// PWM channel recording the last duty written.
    struct FakePwm {
        max: u16,
        duty: u16,
    }

    impl embedded_hal::pwm::ErrorType for FakePwm {
        type Error = Infallible;
    }

    impl SetDutyCycle for FakePwm {
        fn max_duty_cycle(&self) -> u16 {
            self.max
        }

        fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
            self.duty = duty;
            Ok(())
        }
    }

    fn pin(states: &[State]) -> PinMock {
        let expectations: Vec<Transaction> = states.iter().map(|s| Transaction::set(*s)).collect();
        PinMock::new(&expectations)
    }

    #[test]
    fn test_bridge_output_drives_pattern() {
        use State::{High, Low};

        // 5 = 0b0101, then 10 = 0b1010
        let mut output = BridgeOutput::new(
            FakePwm { max: 1000, duty: 0 },
            pin(&[High, Low]),
            pin(&[Low, High]),
            pin(&[High, Low]),
            pin(&[Low, High]),
        );

        output.set_output(Waveform::new(32, 5)).unwrap();
        assert_eq!(output.pwm.duty, 1000);

        output.set_output(Waveform::new(16, 10)).unwrap();
        assert_eq!(output.pwm.duty, 500);

        let (_, mut a, mut b, mut c, mut d) = output.release();
        a.done();
        b.done();
        c.done();
        d.done();
    }

    #[test]
    fn test_zero_amplitude() {
        use State::{High, Low};

        let mut output = BridgeOutput::new(
            FakePwm { max: 32, duty: 7 },
            pin(&[High]),
            pin(&[Low]),
            pin(&[Low]),
            pin(&[High]),
        );

        output.set_output(Waveform::new(0, 9)).unwrap();
        assert_eq!(output.pwm.duty, 0);

        let (_, mut a, mut b, mut c, mut d) = output.release();
        a.done();
        b.done();
        c.done();
        d.done();
    }
}
