//! horarium - automatic weekly timetable construction.
//!
//! Given a cohort's subjects (with weekly lecture and laboratory
//! requirements), a pool of rooms, a fixed faculty assignment per subject and
//! a working-day/time-slot grid, [`generator::Generator::generate`] produces
//! a conflict-free weekly [`timetable::Timetable`] or fails with a precise
//! [`generator::GenerationError`].
//!
//! The scheduler is a pure in-memory component: it performs no I/O, no
//! persistence and no rendering, and every generation call owns its state
//! exclusively. Placement is a randomized feasibility heuristic, so repeated
//! calls with the same inputs may return different valid timetables; fix a
//! seed for reproducible runs.

pub mod catalog;
pub mod generator;
pub mod state;
pub mod timegrid;
pub mod timetable;

pub use catalog::{Room, Subject};
pub use generator::{GenerationError, Generator};
pub use timegrid::{build_slots, ClockTime, Day, TimeSlot};
pub use timetable::{Session, SessionKind, Timetable};

/// Identifier type used for subjects, rooms, and faculty.
pub type Id = String;

/// Generates a new unique identifier (UUID v4).
pub fn generate_id() -> Id {
    uuid::Uuid::new_v4().to_string()
}
