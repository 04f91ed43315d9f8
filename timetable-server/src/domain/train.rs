//! Train itineraries.
//!
//! A `Train` owns its ordered itinerary: the origin stop first, the
//! destination stop last, intermediate stops strictly between them in time.
//! All mutation goes through methods that validate the proposed time against
//! the whole itinerary before touching the stop list, so an itinerary
//! observed from outside is always strictly increasing in time.

use super::{ScheduleConflict, ScheduleTime, Stop};

/// A named train with its ordered stop list.
///
/// # Invariants
///
/// - At least two stops: origin first, destination last
/// - Stop times are strictly increasing across the whole itinerary
/// - The origin and destination stations are fixed at creation
///
/// # Examples
///
/// ```
/// use timetable_server::domain::{ScheduleTime, Stop, Train};
///
/// let mut train = Train::new(
///     "9A01",
///     Stop::new("Paddington", ScheduleTime::new(10, 0).unwrap()),
///     Stop::new("Bristol", ScheduleTime::new(12, 0).unwrap()),
/// )
/// .unwrap();
///
/// // Inserting a stop between the endpoints slots it into time order.
/// let added = train
///     .schedule_stop(Stop::new("Reading", ScheduleTime::new(10, 25).unwrap()))
///     .unwrap();
/// assert!(added);
/// assert_eq!(train.stops()[1].station, "Reading");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Train {
    name: String,
    stops: Vec<Stop>,
}

impl Train {
    /// Creates a train with a two-stop itinerary: origin and destination.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the destination time is not strictly after the
    /// departure time.
    pub fn new(
        name: impl Into<String>,
        origin: Stop,
        destination: Stop,
    ) -> Result<Self, ScheduleConflict> {
        if destination.time <= origin.time {
            return Err(ScheduleConflict::new(destination.station, destination.time));
        }
        Ok(Self {
            name: name.into(),
            stops: vec![origin, destination],
        })
    }

    /// Returns the train's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the full itinerary, origin first, destination last.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Returns the origin stop.
    pub fn origin(&self) -> &Stop {
        &self.stops[0]
    }

    /// Returns the destination stop.
    pub fn destination(&self) -> &Stop {
        &self.stops[self.stops.len() - 1]
    }

    /// Returns the departure time from the origin.
    pub fn departure_time(&self) -> ScheduleTime {
        self.origin().time
    }

    /// Returns the arrival time at the destination.
    pub fn arrival_time(&self) -> ScheduleTime {
        self.destination().time
    }

    /// Returns the scheduled time at a station, if the train calls there.
    ///
    /// Scans from the origin, so if a name somehow appeared twice the first
    /// occurrence wins.
    pub fn time_at(&self, station: &str) -> Option<ScheduleTime> {
        self.stops
            .iter()
            .find(|s| s.station == station)
            .map(|s| s.time)
    }

    /// Does this train call at the given station?
    pub fn calls_at(&self, station: &str) -> bool {
        self.time_at(station).is_some()
    }

    /// Returns the number of stops, endpoints included.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Always false: an itinerary keeps its origin and destination for life.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Adds a stop, or reschedules the one already carrying that name.
    ///
    /// - Origin name: reschedules the departure. The new time must stay
    ///   strictly before every later stop.
    /// - Destination name: reschedules the arrival. The new time must stay
    ///   strictly after every earlier stop.
    /// - An existing intermediate name: reschedules that stop. The new time
    ///   must stay strictly between its current neighbours.
    /// - A new name: inserts an intermediate stop at its chronological
    ///   position. The time must fall strictly inside the journey and not
    ///   equal any existing stop's time.
    ///
    /// Returns `Ok(true)` when a stop was inserted, `Ok(false)` when an
    /// existing stop was rescheduled.
    ///
    /// # Errors
    ///
    /// Returns `Err` when the proposed time cannot coexist with the rest of
    /// the itinerary; the itinerary is left untouched.
    pub fn schedule_stop(&mut self, stop: Stop) -> Result<bool, ScheduleConflict> {
        let last = self.stops.len() - 1;

        if self.stops[0].station == stop.station {
            if self.stops[1..].iter().any(|s| s.time <= stop.time) {
                return Err(ScheduleConflict::new(stop.station, stop.time));
            }
            self.stops[0] = stop;
            return Ok(false);
        }

        if self.stops[last].station == stop.station {
            if self.stops[..last].iter().any(|s| s.time >= stop.time) {
                return Err(ScheduleConflict::new(stop.station, stop.time));
            }
            self.stops[last] = stop;
            return Ok(false);
        }

        if let Some(idx) = self.stops[1..last]
            .iter()
            .position(|s| s.station == stop.station)
        {
            let idx = idx + 1;
            if stop.time <= self.stops[idx - 1].time || stop.time >= self.stops[idx + 1].time {
                return Err(ScheduleConflict::new(stop.station, stop.time));
            }
            self.stops[idx] = stop;
            return Ok(false);
        }

        // New intermediate stop. Strictly inside the journey, and no shared
        // times anywhere in the itinerary.
        if stop.time <= self.stops[0].time || stop.time >= self.stops[last].time {
            return Err(ScheduleConflict::new(stop.station, stop.time));
        }
        if self.stops.iter().any(|s| s.time == stop.time) {
            return Err(ScheduleConflict::new(stop.station, stop.time));
        }

        let idx = insertion_index(&self.stops, stop.time);
        self.stops.insert(idx, stop);
        Ok(true)
    }

    /// Removes the intermediate stop with the given station name.
    ///
    /// Returns `false` without change when the name is the origin, the
    /// destination, or not on the itinerary at all.
    pub fn remove_stop(&mut self, station: &str) -> bool {
        let last = self.stops.len() - 1;

        if self.stops[0].station == station || self.stops[last].station == station {
            return false;
        }

        match self.stops[1..last]
            .iter()
            .position(|s| s.station == station)
        {
            Some(idx) => {
                self.stops.remove(idx + 1);
                true
            }
            None => false,
        }
    }
}

/// Position at which a stop with the given time slots into a sorted itinerary.
///
/// The stop goes immediately before the first stop from index 1 whose time is
/// later; with no later stop it goes immediately before the destination.
/// Expects a slice holding at least the origin and destination.
pub fn insertion_index(stops: &[Stop], time: ScheduleTime) -> usize {
    stops
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, s)| s.time > time)
        .map(|(i, _)| i)
        .unwrap_or_else(|| stops.len().saturating_sub(1))
}
