//! Elapsed-time formatting in `MM:SS.mmm` form, and its inverse.

use crate::config::{MS_PER_MINUTE, MS_PER_SECOND, SECONDS_PER_MINUTE};
use once_cell::sync::Lazy;
use regex::Regex;

// Minutes are unbounded, so at least two digits rather than exactly two.
static ELAPSED_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{2,}):(\d{2})\.(\d{3})$").unwrap());

/// Format milliseconds as `MM:SS.mmm`.
///
/// Minutes are not wrapped into hours, so one hour renders as `60:00.000`.
/// All parts are truncated, never rounded.
pub fn format_elapsed(ms: u64) -> String {
    let minutes = ms / MS_PER_MINUTE;
    let seconds = (ms / MS_PER_SECOND) % SECONDS_PER_MINUTE;
    let milliseconds = ms % MS_PER_SECOND;
    format!("{:02}:{:02}.{:03}", minutes, seconds, milliseconds)
}

/// Label of one row in the lap list; `index` is zero-based.
pub fn lap_label(index: usize, lap_ms: u64) -> String {
    format!("Lap {}: {}", index + 1, format_elapsed(lap_ms))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElapsedParseError {
    EmptyInput,
    InvalidFormat(String),
    InvalidSeconds(u64),
    Overflow,
}

impl std::fmt::Display for ElapsedParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ElapsedParseError::EmptyInput => write!(f, "Elapsed time cannot be empty"),
            ElapsedParseError::InvalidFormat(input) => {
                write!(f, "Invalid elapsed time '{}', expected MM:SS.mmm", input)
            }
            ElapsedParseError::InvalidSeconds(s) => {
                write!(f, "Invalid seconds: {} (must be 0-59)", s)
            }
            ElapsedParseError::Overflow => write!(f, "Elapsed time is too large"),
        }
    }
}

impl std::error::Error for ElapsedParseError {}

/// Parse a string produced by [`format_elapsed`] back into milliseconds.
///
/// Only the exact display form is accepted: at least two minute digits, two
/// second digits (0-59) and three millisecond digits.
pub fn parse_elapsed(input: &str) -> Result<u64, ElapsedParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ElapsedParseError::EmptyInput);
    }

    let captures = ELAPSED_REGEX
        .captures(trimmed)
        .ok_or_else(|| ElapsedParseError::InvalidFormat(trimmed.to_string()))?;

    // Digit-only captures can only fail to parse by being out of range.
    let minutes: u64 = captures[1]
        .parse()
        .map_err(|_| ElapsedParseError::Overflow)?;
    let seconds: u64 = captures[2]
        .parse()
        .map_err(|_| ElapsedParseError::InvalidFormat(trimmed.to_string()))?;
    let milliseconds: u64 = captures[3]
        .parse()
        .map_err(|_| ElapsedParseError::InvalidFormat(trimmed.to_string()))?;

    if seconds >= SECONDS_PER_MINUTE {
        return Err(ElapsedParseError::InvalidSeconds(seconds));
    }

    minutes
        .checked_mul(MS_PER_MINUTE)
        .and_then(|ms| ms.checked_add(seconds * MS_PER_SECOND + milliseconds))
        .ok_or(ElapsedParseError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(0), "00:00.000");
        assert_eq!(format_elapsed(7), "00:00.007");
        assert_eq!(format_elapsed(61_234), "01:01.234");
        assert_eq!(format_elapsed(59_999), "00:59.999");
        assert_eq!(format_elapsed(60_000), "01:00.000");
    }

    #[test]
    fn test_format_minutes_are_not_wrapped() {
        assert_eq!(format_elapsed(3_600_000), "60:00.000");
        assert_eq!(format_elapsed(6_000_000), "100:00.000");
    }

    #[test]
    fn test_format_matches_display_pattern() {
        let pattern = Regex::new(r"^\d{2,}:\d{2}\.\d{3}$").unwrap();
        for ms in [0, 10, 999, 1_000, 61_234, 599_990, 3_600_000, u64::MAX] {
            let text = format_elapsed(ms);
            assert!(pattern.is_match(&text), "{} -> {}", ms, text);
        }
    }

    #[test]
    fn test_parse_inverts_format() {
        for ms in [0, 50, 80, 61_234, 3_600_000, 12_345_678, u64::MAX] {
            assert_eq!(parse_elapsed(&format_elapsed(ms)), Ok(ms));
        }
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(parse_elapsed("   "), Err(ElapsedParseError::EmptyInput));
        assert_eq!(
            parse_elapsed("1:00.000"),
            Err(ElapsedParseError::InvalidFormat("1:00.000".to_string()))
        );
        assert_eq!(
            parse_elapsed("01:00.5"),
            Err(ElapsedParseError::InvalidFormat("01:00.5".to_string()))
        );
        assert_eq!(
            parse_elapsed("01:60.000"),
            Err(ElapsedParseError::InvalidSeconds(60))
        );
        assert_eq!(
            parse_elapsed("99999999999999999999:00.000"),
            Err(ElapsedParseError::Overflow)
        );
    }

    #[test]
    fn test_lap_label() {
        assert_eq!(lap_label(0, 50), "Lap 1: 00:00.050");
        assert_eq!(lap_label(2, 61_234), "Lap 3: 01:01.234");
    }
}
