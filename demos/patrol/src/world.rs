//! The demo blackboard.

use std::cell::{Cell, RefCell};

/// Shared state every unit of the demo reads and writes.
///
/// All fields use interior mutability: callbacks only ever get `&WorldState`.
#[derive(Default)]
pub struct WorldState {
    /// Simulated seconds since the group started.
    pub clock:          Cell<f32>,
    pub alarm_armed:    Cell<bool>,
    pub guard_position: Cell<(f32, f32)>,
    pub guard_distance: Cell<f32>,
    /// Visitors currently inside the perimeter.
    pub visitors:       Cell<u32>,
    pub visitors_seen:  Cell<u32>,
    /// Human-readable history, printed at the end of the run.
    pub journal:        RefCell<Vec<String>>,
}

impl WorldState {
    pub fn note(&self, entry: impl Into<String>) {
        let at = self.clock.get();
        self.journal.borrow_mut().push(format!("[{at:>6.2}s] {}", entry.into()));
    }
}
