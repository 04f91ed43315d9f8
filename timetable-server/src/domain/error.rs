//! Domain error types.
//!
//! Not-found and duplicate-name conditions are reported through boolean
//! returns; the one condition that aborts an operation with an error is a
//! proposed time that cannot coexist with the rest of an itinerary.

use super::ScheduleTime;

/// Error returned when a proposed stop time cannot be scheduled.
///
/// Raised when the time would break the strict chronological ordering of an
/// itinerary, or collide with an existing stop's time. The operation that
/// returned this error has left the timetable unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot schedule {station} at {time}: itinerary times must be strictly increasing")]
pub struct ScheduleConflict {
    /// Station whose proposed time was rejected
    pub station: String,
    /// The rejected time
    pub time: ScheduleTime,
}

impl ScheduleConflict {
    pub(crate) fn new(station: impl Into<String>, time: ScheduleTime) -> Self {
        Self {
            station: station.into(),
            time,
        }
    }
}
