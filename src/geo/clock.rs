//! Timezone-aware local clock for region displays.
//!
//! The clock service converts an instant supplied by a [`TimeSource`] into the
//! local hour and a formatted local time string for a city's timezone. The time
//! source is injected so tests (and the `--at` flag) can freeze the clock.

use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;
use serde::Deserialize;

use crate::error::RegionError;

/// Supplies the current instant.
#[cfg_attr(test, mockall::automock)]
pub trait TimeSource {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock time source.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Time source frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl TimeSource for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// How the clock text is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum ClockFormat {
    /// en-US style, e.g. `9:05:03 PM`
    #[default]
    #[serde(rename = "12h")]
    TwelveHour,
    /// e.g. `21:05:03`
    #[serde(rename = "24h")]
    TwentyFourHour,
}

impl ClockFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClockFormat::TwelveHour => "12h",
            ClockFormat::TwentyFourHour => "24h",
        }
    }

    fn pattern(&self) -> &'static str {
        match self {
            ClockFormat::TwelveHour => "%-I:%M:%S %p",
            ClockFormat::TwentyFourHour => "%H:%M:%S",
        }
    }
}

/// Parse an IANA timezone identifier.
pub fn parse_timezone(timezone_id: &str) -> Result<Tz, RegionError> {
    timezone_id
        .parse::<Tz>()
        .map_err(|_| RegionError::InvalidTimezone(timezone_id.to_string()))
}

/// Local hour of day (0-23) in the given timezone.
pub fn hour_of(timezone_id: &str, now: DateTime<Utc>) -> Result<u32, RegionError> {
    let tz = parse_timezone(timezone_id)?;
    Ok(now.with_timezone(&tz).hour())
}

/// Local time of day in the given timezone, formatted for display.
pub fn time_string_of(
    timezone_id: &str,
    now: DateTime<Utc>,
    format: ClockFormat,
) -> Result<String, RegionError> {
    let tz = parse_timezone(timezone_id)?;
    Ok(now.with_timezone(&tz).format(format.pattern()).to_string())
}
