use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

pub const MINUTES_PER_DAY: u16 = 1440;

/// A clock time as minutes since midnight, in `[0, 1440)`.
///
/// All comparisons and arithmetic happen in this representation; the
/// external encodings (12-hour `"8:30 AM"` on the CSV side, 24-hour
/// `"08:30"` on the query and document side) are converted at the
/// boundary only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        if minutes < MINUTES_PER_DAY {
            Some(Self(minutes))
        } else {
            None
        }
    }

    pub fn from_hm(hour: u16, minute: u16) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self(hour * 60 + minute))
        } else {
            None
        }
    }

    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    pub fn minute(self) -> u16 {
        self.0 % 60
    }

    /// Parses a 12-hour clock string such as `"8:30 AM"`.
    pub fn parse_12h(input: &str) -> Option<Self> {
        let time = NaiveTime::parse_from_str(input.trim(), "%I:%M %p").ok()?;
        Self::from_hm(time.hour() as u16, time.minute() as u16)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTimeError(pub String);

impl fmt::Display for ParseTimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid time '{}': use HH:MM in 24-hour format", self.0)
    }
}

impl std::error::Error for ParseTimeError {}

impl FromStr for TimeOfDay {
    type Err = ParseTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseTimeError(s.to_string());
        let trimmed = s.trim();
        let (hours, minutes) = trimmed.split_once(':').ok_or_else(err)?;
        if hours.is_empty()
            || hours.len() > 2
            || minutes.len() != 2
            || !hours.bytes().all(|b| b.is_ascii_digit())
            || !minutes.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(err());
        }
        let hour: u16 = hours.parse().map_err(|_| err())?;
        let minute: u16 = minutes.parse().map_err(|_| err())?;
        Self::from_hm(hour, minute).ok_or_else(err)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Parses a meeting time range like `"8:30 AM - 9:50 AM"`.
///
/// Returns `None` when the field is empty, `"TBA"`, does not split into
/// exactly two parts on `" - "`, or either side is not a 12-hour clock
/// time. Callers treat `None` as "reject the whole row".
pub fn parse_meeting_times(input: &str) -> Option<(TimeOfDay, TimeOfDay)> {
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed == "TBA" {
        return None;
    }
    let parts: Vec<&str> = trimmed.split(" - ").collect();
    let [start, end] = parts.as_slice() else {
        return None;
    };
    Some((TimeOfDay::parse_12h(start)?, TimeOfDay::parse_12h(end)?))
}
