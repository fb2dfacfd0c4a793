//! Drive configuration from TOML.

use heapless::String;
use serde::Deserialize;

use super::units::Hertz;

/// Hardware ticks per logical step when no divisor is configured.
pub const DEFAULT_STEP_DIVISOR: u16 = 26;

/// Configuration of one microstepping drive.
#[derive(Debug, Clone, Deserialize)]
pub struct DriveConfig {
    /// Human-readable name (max 32 chars).
    pub name: String<32>,

    /// Rate of the periodic hardware interrupt feeding the step clock divider.
    #[serde(rename = "timer_frequency_hz")]
    pub timer_frequency: Hertz,

    /// Hardware ticks per logical TICK (1-255).
    #[serde(default = "default_step_divisor")]
    pub step_divisor: u16,
}

fn default_step_divisor() -> u16 {
    DEFAULT_STEP_DIVISOR
}

impl DriveConfig {
    /// Logical step rate in microsteps per second.
    pub fn step_rate_hz(&self) -> f32 {
        if self.step_divisor == 0 {
            return 0.0;
        }
        self.timer_frequency.0 as f32 / self.step_divisor as f32
    }

    /// Time between two logical TICKs in nanoseconds.
    ///
    /// Every event handler must complete within this period.
    pub fn step_period_ns(&self) -> u64 {
        self.timer_frequency.period_ns() as u64 * self.step_divisor as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_config() -> DriveConfig {
        DriveConfig {
            name: String::try_from("test").unwrap(),
            timer_frequency: Hertz(26_000),
            step_divisor: 26,
        }
    }

    #[test]
    fn test_step_rate() {
        let config = make_test_config();
        // 26000 / 26 = 1000 microsteps/s
        assert!((config.step_rate_hz() - 1000.0).abs() < 0.01);
    }

    #[test]
    fn test_step_period() {
        let config = make_test_config();
        // 1 / 26000 Hz = 38461 ns, times 26
        assert_eq!(config.step_period_ns(), 38_461 * 26);
    }
}
