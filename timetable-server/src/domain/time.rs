//! Clock times for the departure board.
//!
//! The timetable covers a single operational day, so a time is a bare
//! (hour, minute) pair with no date attached and no wraparound arithmetic.
//! Times are total-ordered and valid by construction.

use chrono::{NaiveTime, Timelike};
use std::fmt;

/// Error returned when constructing or parsing an invalid time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A scheduled clock time within one operational day.
///
/// # Examples
///
/// ```
/// use timetable_server::domain::ScheduleTime;
///
/// let depart = ScheduleTime::parse_hhmm("09:05").unwrap();
/// let arrive = ScheduleTime::new(11, 30).unwrap();
///
/// assert!(depart < arrive);
/// assert_eq!(depart.to_string(), "09:05");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScheduleTime(NaiveTime);

impl ScheduleTime {
    /// Create a time from hour and minute components.
    ///
    /// The hour must be 0-23 and the minute 0-59.
    pub fn new(hour: u32, minute: u32) -> Result<Self, TimeError> {
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }
        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or_else(|| TimeError::new("invalid time"))?;
        Ok(Self(time))
    }

    /// Parse a time from strict "HH:MM" format.
    ///
    /// # Examples
    ///
    /// ```
    /// use timetable_server::domain::ScheduleTime;
    ///
    /// assert!(ScheduleTime::parse_hhmm("00:00").is_ok());
    /// assert!(ScheduleTime::parse_hhmm("23:59").is_ok());
    ///
    /// assert!(ScheduleTime::parse_hhmm("930").is_err());
    /// assert!(ScheduleTime::parse_hhmm("9:30").is_err());
    /// assert!(ScheduleTime::parse_hhmm("24:00").is_err());
    /// ```
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        // Must be exactly 5 characters: HH:MM
        if s.len() != 5 {
            return Err(TimeError::new("expected HH:MM format"));
        }

        let bytes = s.as_bytes();

        if bytes[2] != b':' {
            return Err(TimeError::new("expected colon at position 2"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;

        Self::new(hour, minute)
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }
}

impl fmt::Debug for ScheduleTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScheduleTime({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for ScheduleTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}
