//! Application state for the web layer.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::timetable::Timetable;

/// Shared application state.
///
/// The whole timetable sits behind one exclusive lock: stop mutations
/// read-then-write an itinerary and must be atomic with respect to each
/// other, and the data is small enough that finer grain buys nothing.
#[derive(Clone)]
pub struct AppState {
    board: Arc<Mutex<Timetable>>,
}

impl AppState {
    /// Create a new app state around one timetable.
    pub fn new(board: Timetable) -> Self {
        Self {
            board: Arc::new(Mutex::new(board)),
        }
    }

    /// Locks the timetable for the duration of one handler.
    ///
    /// Recovers the data if a previous handler panicked while holding the
    /// lock; the table itself is always in its last valid state.
    pub fn board(&self) -> MutexGuard<'_, Timetable> {
        self.board.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
