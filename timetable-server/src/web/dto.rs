//! Data transfer objects for web requests and responses.
//!
//! Times travel as "HH:MM" strings and are converted to domain values at
//! the boundary; the domain types themselves stay serde-free.

use serde::{Deserialize, Serialize};

use crate::domain::Train;

/// A stop in a request or response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StopDto {
    /// Station name
    pub station: String,

    /// Scheduled time, "HH:MM"
    pub time: String,
}

/// Request to add a train.
#[derive(Debug, Deserialize)]
pub struct AddTrainRequest {
    /// Train name, unique on the board
    pub name: String,

    /// Departure time from the base station, "HH:MM"
    pub departure: String,

    /// Destination stop
    pub destination: StopDto,
}

/// Request to add or reschedule a stop on a train.
#[derive(Debug, Deserialize)]
pub struct AddStopRequest {
    /// Station name (origin, destination, or a new or existing intermediate)
    pub station: String,

    /// Scheduled time, "HH:MM"
    pub time: String,
}

/// Response to a stop mutation.
#[derive(Debug, Serialize)]
pub struct AddStopResponse {
    /// True when a new stop was inserted, false when an existing one was
    /// rescheduled
    pub added: bool,
}

/// A train on the departure board.
#[derive(Debug, Serialize)]
pub struct TrainView {
    /// Train name
    pub name: String,

    /// Departure time from the base station, "HH:MM"
    pub departure: String,

    /// Destination station name
    pub destination: String,

    /// Full itinerary, origin first
    pub stops: Vec<StopDto>,
}

impl TrainView {
    /// Builds the board view of one train.
    pub fn from_train(train: &Train) -> Self {
        Self {
            name: train.name().to_string(),
            departure: train.departure_time().to_string(),
            destination: train.destination().station.clone(),
            stops: train
                .stops()
                .iter()
                .map(|s| StopDto {
                    station: s.station.clone(),
                    time: s.time.to_string(),
                })
                .collect(),
        }
    }
}

/// Response listing departures.
#[derive(Debug, Serialize)]
pub struct DeparturesResponse {
    /// Trains in board order
    pub trains: Vec<TrainView>,
}

/// Query parameters for the departures board.
///
/// `after` and `to` select the reachability view and must be given
/// together; with neither, the full board is returned.
#[derive(Debug, Deserialize)]
pub struct DeparturesQuery {
    /// Earliest departure time to include, "HH:MM"
    pub after: Option<String>,

    /// Station the trains must call at
    pub to: Option<String>,
}

/// Error payload.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable description of the failure
    pub error: String,
}
