//! Spreading the five daily packets across a learner's waking hours

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::packets::{PacketType, PACKETS_PER_CONCEPT};

pub const DEFAULT_WAKE: ClockTime = ClockTime { hour: 7, minute: 0 };
pub const DEFAULT_SLEEP: ClockTime = ClockTime { hour: 23, minute: 0 };

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Position of each slot in the waking window, in percent
const SLOT_PERCENTS: [u32; PACKETS_PER_CONCEPT] = [10, 30, 50, 70, 90];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeParseError {
    #[error("Empty time")]
    Empty,

    #[error("Invalid time format: {0}")]
    InvalidFormat(String),

    #[error("Time out of range: {0}")]
    OutOfRange(String),
}

/// Wall-clock time of day, minute precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
}

impl ClockTime {
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    fn from_minutes(minutes: u32) -> Self {
        let minutes = minutes % MINUTES_PER_DAY;
        Self {
            hour: minutes / 60,
            minute: minutes % 60,
        }
    }

    pub fn minutes_of_day(&self) -> u32 {
        self.hour * 60 + self.minute
    }
}

impl FromStr for ClockTime {
    type Err = TimeParseError;

    /// Accepts "7:00 AM", "11:30 pm", "7:30PM", "7 AM" and 24-hour "19:30"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let clean = s.trim().to_ascii_uppercase();
        if clean.is_empty() {
            return Err(TimeParseError::Empty);
        }

        let mut parts = clean.split_whitespace();
        let time_part = parts.next().unwrap_or_default();
        let period = parts.next();
        if parts.next().is_some() {
            return Err(TimeParseError::InvalidFormat(s.to_string()));
        }

        // "7:30PM" carries the meridiem without a space
        let (time_part, period) = match period {
            None if time_part.ends_with("AM") || time_part.ends_with("PM") => {
                let (time, meridiem) = time_part.split_at(time_part.len() - 2);
                (time, Some(meridiem))
            }
            _ => (time_part, period),
        };

        let (hour_str, minute_str) = time_part.split_once(':').unwrap_or((time_part, "0"));
        let invalid = || TimeParseError::InvalidFormat(s.to_string());
        let hour: u32 = hour_str.parse().map_err(|_| invalid())?;
        let minute: u32 = minute_str.parse().map_err(|_| invalid())?;

        let hour = match period {
            Some(meridiem @ ("AM" | "PM")) => {
                if hour == 0 || hour > 12 {
                    return Err(TimeParseError::OutOfRange(s.to_string()));
                }
                match (meridiem, hour) {
                    ("AM", 12) => 0,
                    ("PM", 12) => 12,
                    ("PM", h) => h + 12,
                    (_, h) => h,
                }
            }
            Some(_) => return Err(invalid()),
            None => hour,
        };

        ClockTime::new(hour, minute).ok_or_else(|| TimeParseError::OutOfRange(s.to_string()))
    }
}

impl fmt::Display for ClockTime {
    /// 12-hour form, e.g. "8:36 AM"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let period = if self.hour < 12 { "AM" } else { "PM" };
        let hour = match self.hour % 12 {
            0 => 12,
            h => h,
        };
        write!(f, "{}:{:02} {}", hour, self.minute, period)
    }
}

/// Parse a time, falling back to `default` with a warning
pub fn parse_or_default(input: &str, default: ClockTime) -> ClockTime {
    match input.parse() {
        Ok(time) => time,
        Err(e) => {
            log::warn!("Could not parse time {:?} ({}), using {}", input, e, default);
            default
        }
    }
}

/// One reminder position in the day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderSlot {
    pub index: usize,
    pub packet_type: PacketType,
    pub time: ClockTime,
}

/// Five reminder times spread over the window from `wake` to `sleep`.
///
/// A sleep time earlier than the wake time means the window runs past
/// midnight. Equal times give an empty window and all five slots at wake.
pub fn compute_slots(wake: &str, sleep: &str) -> [ReminderSlot; PACKETS_PER_CONCEPT] {
    let wake = parse_or_default(wake, DEFAULT_WAKE);
    let sleep = parse_or_default(sleep, DEFAULT_SLEEP);
    slots_between(wake, sleep)
}

pub fn slots_between(wake: ClockTime, sleep: ClockTime) -> [ReminderSlot; PACKETS_PER_CONCEPT] {
    let wake_minutes = wake.minutes_of_day();
    let window = (sleep.minutes_of_day() + MINUTES_PER_DAY - wake_minutes) % MINUTES_PER_DAY;

    std::array::from_fn(|index| ReminderSlot {
        index,
        packet_type: PacketType::ALL[index],
        // floor(percent / 100 * window)
        time: ClockTime::from_minutes(wake_minutes + SLOT_PERCENTS[index] * window / 100),
    })
}
