use std::{fmt, str::FromStr};

use thiserror::Error;

const MINUTES_PER_HOUR: u16 = 60;
const MINUTES_PER_DAY: u16 = 24 * MINUTES_PER_HOUR;

/// Wall clock time in minutes since midnight.
///
/// `24:00` is accepted to denote the end of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid time of day (expected HH:MM)")]
pub struct TimeOfDayParseError;

impl TimeOfDay {
    pub fn from_hm(hours: u8, minutes: u8) -> Option<Self> {
        let total = u16::from(hours) * MINUTES_PER_HOUR + u16::from(minutes);
        if minutes >= 60 || total > MINUTES_PER_DAY {
            return None;
        }
        Some(Self(total))
    }

    pub const fn hours(self) -> u16 {
        self.0 / MINUTES_PER_HOUR
    }

    pub const fn minutes(self) -> u16 {
        self.0 % MINUTES_PER_HOUR
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeOfDayParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (h, m) = s.trim().split_once(':').ok_or(TimeOfDayParseError)?;
        if m.len() != 2 {
            return Err(TimeOfDayParseError);
        }
        let h = h.parse::<u8>().map_err(|_| TimeOfDayParseError)?;
        let m = m.parse::<u8>().map_err(|_| TimeOfDayParseError)?;
        Self::from_hm(h, m).ok_or(TimeOfDayParseError)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours(), self.minutes())
    }
}

/// A single opening interval, optionally restricted to a day or day type
/// (e.g. "Mon-Fri").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpeningHours {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    pub day: Option<String>,
}

impl fmt::Display for OpeningHours {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}
