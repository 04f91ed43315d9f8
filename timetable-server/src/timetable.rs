//! The departure timetable registry.
//!
//! A `Timetable` owns every train leaving one fixed origin station, keyed by
//! unique train name. Mutations resolve the train by name and delegate
//! itinerary validation and positional insertion to [`Train`]; the two
//! queries filter and return freshly sorted vectors and never mutate.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{ScheduleConflict, ScheduleTime, Stop, Train};

/// Departure timetable for a single origin station.
///
/// # Examples
///
/// ```
/// use timetable_server::domain::{ScheduleTime, Stop};
/// use timetable_server::timetable::Timetable;
///
/// let mut table = Timetable::new("Amsterdam");
///
/// table
///     .add_train(
///         "IC 123",
///         ScheduleTime::new(10, 0).unwrap(),
///         Stop::new("Paris", ScheduleTime::new(13, 20).unwrap()),
///     )
///     .unwrap();
/// let added = table
///     .add_stop("IC 123", Stop::new("Brussels", ScheduleTime::new(11, 55).unwrap()))
///     .unwrap();
/// assert!(added);
///
/// let towards = table.trains_towards(ScheduleTime::new(9, 0).unwrap(), "Brussels");
/// assert_eq!(towards.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Timetable {
    /// The origin station every train departs from
    base_station: String,
    /// Trains keyed by unique name
    trains: HashMap<String, Train>,
}

impl Timetable {
    /// Creates an empty timetable for the given origin station.
    pub fn new(base_station: impl Into<String>) -> Self {
        Self {
            base_station: base_station.into(),
            trains: HashMap::new(),
        }
    }

    /// Returns the origin station shared by every train on this table.
    pub fn base_station(&self) -> &str {
        &self.base_station
    }

    /// Returns the train with the given name, if present.
    pub fn get(&self, name: &str) -> Option<&Train> {
        self.trains.get(name)
    }

    /// Returns the number of trains on the table.
    pub fn len(&self) -> usize {
        self.trains.len()
    }

    /// Returns true if the table holds no trains.
    pub fn is_empty(&self) -> bool {
        self.trains.is_empty()
    }

    /// Adds a train with a two-stop itinerary: the base station at the given
    /// departure time, and the destination stop.
    ///
    /// Returns `Ok(false)` without change when a train with that name
    /// already exists, `Ok(true)` when the train was added.
    ///
    /// # Errors
    ///
    /// Returns `Err` when the destination time is not strictly after the
    /// departure time; the table is unchanged.
    pub fn add_train(
        &mut self,
        name: &str,
        departure: ScheduleTime,
        destination: Stop,
    ) -> Result<bool, ScheduleConflict> {
        if self.trains.contains_key(name) {
            debug!(train = name, "add_train: name already taken");
            return Ok(false);
        }

        let origin = Stop::new(self.base_station.clone(), departure);
        let train = Train::new(name, origin, destination)?;

        debug!(train = name, departure = %departure, "add_train: added");
        self.trains.insert(name.to_string(), train);
        Ok(true)
    }

    /// Removes the train with the given name.
    ///
    /// Returns `false` without change when no such train exists.
    pub fn remove_train(&mut self, name: &str) -> bool {
        let removed = self.trains.remove(name).is_some();
        if removed {
            debug!(train = name, "remove_train: removed");
        }
        removed
    }

    /// Adds a stop to the named train, or reschedules the stop already
    /// carrying that station name (origin, destination, or intermediate).
    ///
    /// Returns `Ok(true)` when a new intermediate stop was inserted,
    /// `Ok(false)` when an existing stop was rescheduled or when no train
    /// with that name exists.
    ///
    /// # Errors
    ///
    /// Returns `Err` when the proposed time cannot coexist with the train's
    /// itinerary; the table is unchanged.
    pub fn add_stop(&mut self, train: &str, stop: Stop) -> Result<bool, ScheduleConflict> {
        let Some(entry) = self.trains.get_mut(train) else {
            debug!(train, "add_stop: no such train");
            return Ok(false);
        };

        let added = entry.schedule_stop(stop)?;
        debug!(train, added, "add_stop: scheduled");
        Ok(added)
    }

    /// Removes an intermediate stop from the named train.
    ///
    /// Returns `false` without change when the train does not exist, the
    /// station is the train's origin or destination, or the train does not
    /// call there.
    pub fn remove_stop(&mut self, train: &str, station: &str) -> bool {
        let Some(entry) = self.trains.get_mut(train) else {
            debug!(train, "remove_stop: no such train");
            return false;
        };

        let removed = entry.remove_stop(station);
        if removed {
            debug!(train, station, "remove_stop: removed");
        }
        removed
    }

    /// All trains, ascending by departure time from the base station.
    ///
    /// Equal departure times are broken by train name so the output is
    /// deterministic.
    pub fn trains(&self) -> Vec<&Train> {
        let mut trains: Vec<&Train> = self.trains.values().collect();
        trains.sort_by(|a, b| {
            a.departure_time()
                .cmp(&b.departure_time())
                .then_with(|| a.name().cmp(b.name()))
        });
        trains
    }

    /// Trains departing at or after `current` that call at `station`,
    /// ascending by their time at that station.
    ///
    /// The station may be any stop on the itinerary: origin, intermediate,
    /// or destination. Equal times are broken by train name.
    pub fn trains_towards(&self, current: ScheduleTime, station: &str) -> Vec<&Train> {
        let mut matching: Vec<(&Train, ScheduleTime)> = self
            .trains
            .values()
            .filter(|t| t.departure_time() >= current)
            .filter_map(|t| t.time_at(station).map(|at| (t, at)))
            .collect();

        matching.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.name().cmp(b.0.name())));
        matching.into_iter().map(|(t, _)| t).collect()
    }
}

/// Timetables are equal when they hold the same set of train names and, per
/// name, the same multiset of (station, time) pairs. The comparison is
/// order-insensitive over each itinerary and ignores the base station name.
impl PartialEq for Timetable {
    fn eq(&self, other: &Self) -> bool {
        if self.trains.len() != other.trains.len() {
            return false;
        }
        self.trains.iter().all(|(name, train)| {
            other
                .trains
                .get(name)
                .is_some_and(|o| stop_multiset(train) == stop_multiset(o))
        })
    }
}

impl Eq for Timetable {}

/// (station, time) pairs of an itinerary in canonical order, for
/// order-insensitive comparison.
fn stop_multiset(train: &Train) -> Vec<(&str, ScheduleTime)> {
    let mut pairs: Vec<(&str, ScheduleTime)> = train
        .stops()
        .iter()
        .map(|s| (s.station.as_str(), s.time))
        .collect();
    pairs.sort();
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(s: &str) -> ScheduleTime {
        ScheduleTime::parse_hhmm(s).unwrap()
    }

    fn stop(station: &str, t: &str) -> Stop {
        Stop::new(station, time(t))
    }

    /// Base "Amsterdam"; one train "IC 123" Amsterdam 10:00 -> Paris 13:20.
    fn table() -> Timetable {
        let mut table = Timetable::new("Amsterdam");
        assert_eq!(
            table.add_train("IC 123", time("10:00"), stop("Paris", "13:20")),
            Ok(true)
        );
        table
    }

    fn names(trains: &[&Train]) -> Vec<String> {
        trains.iter().map(|t| t.name().to_string()).collect()
    }

    #[test]
    fn add_train_duplicate_name_is_refused() {
        let mut table = table();

        assert_eq!(
            table.add_train("IC 123", time("11:00"), stop("Berlin", "15:00")),
            Ok(false)
        );

        // Exactly one IC 123, still the original one
        assert_eq!(table.len(), 1);
        let train = table.get("IC 123").unwrap();
        assert_eq!(train.departure_time(), time("10:00"));
        assert_eq!(train.destination().station, "Paris");
    }

    #[test]
    fn add_train_rejects_arrival_before_departure() {
        let mut table = table();

        assert!(
            table
                .add_train("IC 999", time("10:00"), stop("Berlin", "09:00"))
                .is_err()
        );
        assert!(
            table
                .add_train("IC 999", time("10:00"), stop("Berlin", "10:00"))
                .is_err()
        );

        assert_eq!(table.len(), 1);
        assert!(table.get("IC 999").is_none());
    }

    #[test]
    fn add_train_origin_is_base_station() {
        let table = table();
        let train = table.get("IC 123").unwrap();

        assert_eq!(train.origin().station, "Amsterdam");
        assert_eq!(train.len(), 2);
    }

    #[test]
    fn remove_train() {
        let mut table = table();

        assert!(table.remove_train("IC 123"));
        assert!(table.is_empty());
        assert!(!table.remove_train("IC 123"));
    }

    #[test]
    fn add_stop_unknown_train() {
        let mut table = table();
        assert_eq!(table.add_stop("TGV 1", stop("Brussels", "11:55")), Ok(false));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn add_stop_inserts_and_reschedules() {
        let mut table = table();

        // New station: insertion
        assert_eq!(table.add_stop("IC 123", stop("Brussels", "11:55")), Ok(true));
        // Same station again: reschedule
        assert_eq!(table.add_stop("IC 123", stop("Brussels", "12:05")), Ok(false));

        let stations: Vec<&str> = table
            .get("IC 123")
            .unwrap()
            .stops()
            .iter()
            .map(|s| s.station.as_str())
            .collect();
        assert_eq!(stations, vec!["Amsterdam", "Brussels", "Paris"]);
        assert_eq!(
            table.get("IC 123").unwrap().time_at("Brussels"),
            Some(time("12:05"))
        );
    }

    #[test]
    fn add_stop_conflict_leaves_table_unchanged() {
        let mut table = table();
        table.add_stop("IC 123", stop("Brussels", "11:55")).unwrap();

        let before = table.clone();
        let before_stops = table.get("IC 123").unwrap().stops().to_vec();

        // Would precede the origin's departure
        assert!(table.add_stop("IC 123", stop("Brussels", "09:00")).is_err());
        // Would collide with an existing time
        assert!(table.add_stop("IC 123", stop("Antwerp", "11:55")).is_err());

        assert_eq!(table, before);
        assert_eq!(table.get("IC 123").unwrap().stops(), &before_stops[..]);
    }

    #[test]
    fn remove_stop_refuses_origin_and_destination() {
        let mut table = table();
        table.add_stop("IC 123", stop("Brussels", "11:55")).unwrap();

        assert!(!table.remove_stop("IC 123", "Amsterdam"));
        assert!(!table.remove_stop("IC 123", "Paris"));
        assert_eq!(table.get("IC 123").unwrap().len(), 3);
    }

    #[test]
    fn remove_stop_roundtrip_restores_itinerary() {
        let mut table = table();
        table.add_stop("IC 123", stop("Brussels", "11:55")).unwrap();

        let before = table.get("IC 123").unwrap().stops().to_vec();

        assert_eq!(table.add_stop("IC 123", stop("Antwerp", "11:20")), Ok(true));
        assert!(table.remove_stop("IC 123", "Antwerp"));

        assert_eq!(table.get("IC 123").unwrap().stops(), &before[..]);
    }

    #[test]
    fn remove_stop_unknown_cases() {
        let mut table = table();

        assert!(!table.remove_stop("TGV 1", "Brussels"));
        assert!(!table.remove_stop("IC 123", "Brussels"));
    }

    #[test]
    fn trains_sorted_by_departure_then_name() {
        let mut table = Timetable::new("Amsterdam");
        table
            .add_train("IC 2", time("12:00"), stop("Berlin", "18:00"))
            .unwrap();
        table
            .add_train("IC 3", time("09:00"), stop("Paris", "12:20"))
            .unwrap();
        // Same departure as IC 2: name decides
        table
            .add_train("IC 1", time("12:00"), stop("Basel", "16:00"))
            .unwrap();

        assert_eq!(names(&table.trains()), vec!["IC 3", "IC 1", "IC 2"]);
    }

    #[test]
    fn trains_towards_filters_on_departure_and_station() {
        let mut table = table();
        table.add_stop("IC 123", stop("Brussels", "11:55")).unwrap();

        // Departure 10:00 is before 11:30, so the train is filtered out
        assert!(table.trains_towards(time("11:30"), "Paris").is_empty());

        // The bound is inclusive: departing exactly at `current` qualifies
        assert_eq!(
            names(&table.trains_towards(time("10:00"), "Paris")),
            vec!["IC 123"]
        );

        // Unknown station matches nothing
        assert!(table.trains_towards(time("08:00"), "Atlantis").is_empty());

        // Intermediate and origin stops count as reachable stations
        assert_eq!(
            names(&table.trains_towards(time("09:00"), "Brussels")),
            vec!["IC 123"]
        );
        assert_eq!(
            names(&table.trains_towards(time("09:00"), "Amsterdam")),
            vec!["IC 123"]
        );
    }

    #[test]
    fn trains_towards_sorted_by_arrival_at_station() {
        let mut table = Timetable::new("Amsterdam");
        table
            .add_train("IC 1", time("08:00"), stop("Paris", "14:00"))
            .unwrap();
        table
            .add_train("IC 2", time("09:00"), stop("Paris", "12:00"))
            .unwrap();
        table
            .add_train("IC 3", time("10:00"), stop("Berlin", "16:00"))
            .unwrap();

        // IC 2 arrives in Paris first despite departing later; IC 3 never
        // goes there
        assert_eq!(
            names(&table.trains_towards(time("07:00"), "Paris")),
            vec!["IC 2", "IC 1"]
        );
    }

    #[test]
    fn equality_is_order_insensitive_per_train() {
        let mut a = Timetable::new("Amsterdam");
        a.add_train("IC 123", time("10:00"), stop("Paris", "13:20"))
            .unwrap();
        a.add_stop("IC 123", stop("Brussels", "11:55")).unwrap();
        a.add_stop("IC 123", stop("Antwerp", "11:20")).unwrap();

        // Same stops, built in a different order
        let mut b = Timetable::new("Amsterdam");
        b.add_train("IC 123", time("10:00"), stop("Paris", "13:20"))
            .unwrap();
        b.add_stop("IC 123", stop("Antwerp", "11:20")).unwrap();
        b.add_stop("IC 123", stop("Brussels", "11:55")).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn equality_detects_differences() {
        let mut a = Timetable::new("Amsterdam");
        a.add_train("IC 123", time("10:00"), stop("Paris", "13:20"))
            .unwrap();

        // Different stop time
        let mut b = a.clone();
        b.add_stop("IC 123", stop("Amsterdam", "09:45")).unwrap();
        assert_ne!(a, b);

        // Extra train
        let mut c = a.clone();
        c.add_train("IC 456", time("11:00"), stop("Berlin", "17:00"))
            .unwrap();
        assert_ne!(a, c);

        // Different train name, same itinerary shape
        let mut d = Timetable::new("Amsterdam");
        d.add_train("IC 456", time("10:00"), stop("Paris", "13:20"))
            .unwrap();
        assert_ne!(a, d);
    }

    #[test]
    fn equality_compares_the_train_set_only() {
        // The base station is not part of the comparison; two tables with
        // the same trains compare equal regardless of where they were built.
        let a = Timetable::new("Amsterdam");
        let b = Timetable::new("Rotterdam");
        assert_eq!(a, b);
    }
}
