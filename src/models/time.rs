use chrono::Timelike;
use serde::{Deserialize, Serialize};

use crate::models::schedule::InvalidBlockError;

/// ISO day of the week: 1 = Monday .. 7 = Sunday.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct DayOfWeek(u8);

impl DayOfWeek {
    /// Create a day of week, rejecting numbers outside 1..=7.
    pub fn new(value: u8) -> Result<Self, InvalidBlockError> {
        if (1..=7).contains(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidBlockError::DayOutOfRange(value))
        }
    }

    /// ISO day number (1 = Monday .. 7 = Sunday).
    pub fn value(&self) -> u8 {
        self.0
    }

    /// All seven days in chronological order, Monday first.
    pub fn all() -> impl Iterator<Item = DayOfWeek> {
        (1..=7).map(DayOfWeek)
    }
}

impl TryFrom<u8> for DayOfWeek {
    type Error = InvalidBlockError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        DayOfWeek::new(value)
    }
}

impl From<DayOfWeek> for u8 {
    fn from(day: DayOfWeek) -> Self {
        day.0
    }
}

impl std::fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Wall-clock instant as minutes since midnight (0..=1439).
///
/// Serialized as a zero-padded 24-hour `"HH:MM"` string, the only time
/// format the external interfaces use. Blocks never span midnight, so a
/// single day's worth of minutes is always enough.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(pub(crate) u16);

impl ClockTime {
    pub const MIDNIGHT: ClockTime = ClockTime(0);

    /// Parse a zero-padded 24-hour `"HH:MM"` string.
    pub fn parse(s: &str) -> Result<Self, InvalidBlockError> {
        // chrono accepts single-digit hours for %H; the wire format does not.
        if s.len() != 5 || s.as_bytes()[2] != b':' {
            return Err(InvalidBlockError::BadTimeFormat(s.to_string()));
        }
        let time = chrono::NaiveTime::parse_from_str(s, "%H:%M")
            .map_err(|_| InvalidBlockError::BadTimeFormat(s.to_string()))?;
        Ok(Self((time.hour() * 60 + time.minute()) as u16))
    }

    /// Build from minutes since midnight; `None` when out of day range.
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        if minutes < 24 * 60 {
            Some(Self(minutes))
        } else {
            None
        }
    }

    /// Minutes since midnight.
    pub fn minutes(&self) -> u16 {
        self.0
    }

    pub fn hour(&self) -> u8 {
        (self.0 / 60) as u8
    }

    pub fn minute(&self) -> u8 {
        (self.0 % 60) as u8
    }
}

impl TryFrom<String> for ClockTime {
    type Error = InvalidBlockError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ClockTime::parse(&value)
    }
}

impl From<ClockTime> for String {
    fn from(time: ClockTime) -> Self {
        time.to_string()
    }
}

impl std::fmt::Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}
