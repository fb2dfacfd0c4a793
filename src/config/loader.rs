//! Reading drive definitions from TOML (std only).
//!
//! Parsing and validation happen together: a [`SystemConfig`] returned from
//! here has already passed [`validate_config`](super::validate_config).

use std::fs;
use std::path::Path;

use heapless::String;

use crate::error::{ConfigError, Result};

use super::validation::validate_config;
use super::SystemConfig;

/// Read and parse a drive file, e.g. `load_config("drives.toml")?`.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SystemConfig> {
    let content = fs::read_to_string(path)
        .map_err(|e| ConfigError::IoError(clipped(&e.to_string())))?;
    parse_config(&content)
}

/// Parse drive definitions held in memory.
///
/// Fails on malformed TOML, unknown value types, or a drive that does not
/// validate.
pub fn parse_config(content: &str) -> Result<SystemConfig> {
    let config: SystemConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(clipped(e.message())))?;
    validate_config(&config)?;
    Ok(config)
}

/// Copy as much of `msg` as fits, cutting on a char boundary.
fn clipped<const N: usize>(msg: &str) -> String<N> {
    let mut end = msg.len().min(N);
    while !msg.is_char_boundary(end) {
        end -= 1;
    }

    let mut out = String::new();
    // `end <= N`, so this cannot overflow.
    let _ = out.push_str(&msg[..end]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_parse_minimal_config() {
        let toml = r#"
[drives.table]
name = "Rotary table"
timer_frequency_hz = 31250
"#;

        let config = parse_config(toml).unwrap();
        let drive = config.drive("table").unwrap();
        assert_eq!(drive.step_divisor, 26);
        assert_eq!(drive.timer_frequency.value(), 31_250);
    }

    #[test]
    fn test_parse_rejects_zero_divisor() {
        let toml = r#"
[drives.table]
name = "Rotary table"
timer_frequency_hz = 31250
step_divisor = 0
"#;

        let result = parse_config(toml);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidStepDivisor(0)))
        ));
    }

    #[test]
    fn test_parse_error_keeps_message() {
        match parse_config("[drives.table]\nname = 12\n") {
            Err(Error::Config(ConfigError::ParseError(msg))) => assert!(!msg.is_empty()),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file() {
        match load_config("/nonexistent/drives.toml") {
            Err(Error::Config(ConfigError::IoError(msg))) => assert!(!msg.is_empty()),
            other => panic!("expected I/O error, got {:?}", other),
        }
    }

    #[test]
    fn test_long_message_is_clipped_not_dropped() {
        let long = "x".repeat(300);
        let msg: String<128> = clipped(&long);
        assert_eq!(msg.len(), 128);

        // 'é' is two bytes; 65 of them straddle the 128-byte limit.
        let wide = "é".repeat(65);
        let msg: String<128> = clipped(&wide);
        assert_eq!(msg.len(), 128);
        assert!(msg.chars().all(|c| c == 'é'));

        let short: String<128> = clipped("bad value");
        assert_eq!(short.as_str(), "bad value");
    }
}
