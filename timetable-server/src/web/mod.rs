//! Web layer for the departure timetable.
//!
//! Provides JSON HTTP endpoints over one locked timetable instance.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
