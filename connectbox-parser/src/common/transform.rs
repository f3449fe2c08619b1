//! Post-parse conversions for the few fields the device does not report as
//! plain values.

use crate::error::{ParseError, ParseResult};
use once_cell::sync::Lazy;
use regex::Regex;

static UPTIME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:(\d+)day\(s\))?(\d+)h:(\d+)m:(\d+)s").expect("uptime pattern is valid")
});

const SECONDS_PER_DAY: u64 = 86_400;
const SECONDS_PER_HOUR: u64 = 3_600;
const SECONDS_PER_MINUTE: u64 = 60;

/// Parse the device uptime text into seconds.
///
/// Input format is `"4day(s)16h:30m:35s"`; the day component is optional.
///
/// # Errors
///
/// Returns [`ParseError::InvalidDuration`] when the text does not match or
/// the total does not fit in a `u64`.
pub fn parse_uptime(s: &str) -> ParseResult<u64> {
    let caps = UPTIME_PATTERN
        .captures(s)
        .ok_or_else(|| ParseError::InvalidDuration(s.to_string()))?;

    let component = |idx: usize| -> ParseResult<u64> {
        match caps.get(idx) {
            None => Ok(0),
            Some(m) => m
                .as_str()
                .parse::<u64>()
                .map_err(|_| ParseError::InvalidDuration(s.to_string())),
        }
    };

    let days = component(1)?;
    let hours = component(2)?;
    let minutes = component(3)?;
    let seconds = component(4)?;

    days.checked_mul(SECONDS_PER_DAY)
        .and_then(|total| total.checked_add(hours.checked_mul(SECONDS_PER_HOUR)?))
        .and_then(|total| total.checked_add(minutes.checked_mul(SECONDS_PER_MINUTE)?))
        .and_then(|total| total.checked_add(seconds))
        .ok_or_else(|| ParseError::InvalidDuration(s.to_string()))
}

/// Convert a Fahrenheit reading to Celsius.
///
/// Integer arithmetic evaluated left to right, truncating toward zero:
/// 0°F is -17°C, not -18°C.
pub fn fahrenheit_to_celsius(f: i32) -> i32 {
    // Widened for the intermediate product; the quotient always fits back in i32.
    ((i64::from(f) - 32) * 5 / 9) as i32
}
