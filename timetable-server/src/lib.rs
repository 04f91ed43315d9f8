//! Departure timetable server.
//!
//! An in-memory departure board for a single origin station: each train
//! carries an ordered itinerary of stops, and the board answers "what
//! leaves next" and "what reaches this station after this time".

pub mod domain;
pub mod timetable;
pub mod web;
