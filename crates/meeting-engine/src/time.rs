//! Clock times within a single day, parsed from compact `HHMM` strings.
//!
//! The hour comes from the first two characters and the minute from the last two,
//! so longer strings such as `"09:30"` parse as well as `"0930"`. Anything shorter
//! than four characters, non-digit hour/minute characters, or out-of-range values
//! are rejected with [`MeetingError::InvalidTimeFormat`].

use std::fmt;
use std::str::FromStr;

use crate::error::{MeetingError, Result};

/// A single hour/minute point within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    pub hour: u8,
    pub minute: u8,
}

impl TimeOfDay {
    /// Build a time of day, rejecting hours above 23 and minutes above 59.
    pub fn new(hour: u8, minute: u8) -> Result<Self> {
        if hour > 23 {
            return Err(MeetingError::invalid_time(
                &format!("{:02}{:02}", hour, minute),
                format!("hour {} is out of range 00-23", hour),
            ));
        }
        if minute > 59 {
            return Err(MeetingError::invalid_time(
                &format!("{:02}{:02}", hour, minute),
                format!("minute {} is out of range 00-59", minute),
            ));
        }
        Ok(Self { hour, minute })
    }

    /// Parse an `HHMM`-shaped string.
    ///
    /// # Errors
    /// Returns `MeetingError::InvalidTimeFormat` if the string is shorter than four
    /// bytes, if the first or last two characters are not ASCII digits, or if the
    /// values fall outside a 24-hour clock.
    pub fn parse(s: &str) -> Result<Self> {
        let bytes = s.as_bytes();
        if bytes.len() < 4 {
            return Err(MeetingError::invalid_time(
                s,
                "expected at least 4 characters (HHMM)",
            ));
        }

        let hour = two_digits(&bytes[..2])
            .ok_or_else(|| MeetingError::invalid_time(s, "hour is not two digits"))?;
        let minute = two_digits(&bytes[bytes.len() - 2..])
            .ok_or_else(|| MeetingError::invalid_time(s, "minute is not two digits"))?;

        if hour > 23 {
            return Err(MeetingError::invalid_time(
                s,
                format!("hour {} is out of range 00-23", hour),
            ));
        }
        if minute > 59 {
            return Err(MeetingError::invalid_time(
                s,
                format!("minute {} is out of range 00-59", minute),
            ));
        }

        Ok(Self { hour, minute })
    }

    /// Minutes elapsed since midnight.
    pub fn minutes_of_day(&self) -> u16 {
        self.hour as u16 * 60 + self.minute as u16
    }
}

fn two_digits(pair: &[u8]) -> Option<u8> {
    match pair {
        [tens, ones] if tens.is_ascii_digit() && ones.is_ascii_digit() => {
            Some((tens - b'0') * 10 + (ones - b'0'))
        }
        _ => None,
    }
}

impl FromStr for TimeOfDay {
    type Err = MeetingError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}", self.hour, self.minute)
    }
}

/// A start/end pair of clock times on the same day.
///
/// Nothing forces `start` to precede `end`; stored meetings are accepted as
/// submitted. [`TimeRange::is_well_ordered`] reports whether they do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeRange {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl TimeRange {
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }

    /// Parse a range from its two `HHMM` endpoints.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Ok(Self {
            start: TimeOfDay::parse(start)?,
            end: TimeOfDay::parse(end)?,
        })
    }

    /// True when `start` is strictly before `end`.
    pub fn is_well_ordered(&self) -> bool {
        self.start < self.end
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
