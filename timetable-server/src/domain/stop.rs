//! Stop types for timetabled trains.
//!
//! A `Stop` is a single scheduled call: a station name and the clock time
//! the train is there. Within an itinerary the origin's time is its
//! departure and every other stop's time is its arrival.

use super::ScheduleTime;
use std::fmt;

/// A named station with its scheduled time.
///
/// Two stops are equal iff both the station name and the time match.
///
/// # Examples
///
/// ```
/// use timetable_server::domain::{ScheduleTime, Stop};
///
/// let reading = Stop::new("Reading", ScheduleTime::new(10, 25).unwrap());
/// assert_eq!(reading.station, "Reading");
/// assert_eq!(reading.time.to_string(), "10:25");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Stop {
    /// Station name
    pub station: String,
    /// Scheduled time at this station
    pub time: ScheduleTime,
}

impl Stop {
    /// Creates a stop at the given station and time.
    pub fn new(station: impl Into<String>, time: ScheduleTime) -> Self {
        Self {
            station: station.into(),
            time,
        }
    }
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.station, self.time)
    }
}
