//! Domain types for the departure timetable.
//!
//! This module contains the core domain model types. All types enforce
//! their invariants at construction and mutation time, so code that
//! receives these types can trust their validity: a `Train`'s itinerary is
//! always strictly increasing in time, origin first, destination last.

mod error;
mod stop;
mod time;
mod train;

pub use error::ScheduleConflict;
pub use stop::Stop;
pub use time::{ScheduleTime, TimeError};
pub use train::{Train, insertion_index};
