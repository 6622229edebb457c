//! Input catalog: subjects and rooms as supplied by the caller.
//!
//! These are read-only snapshots for the duration of one generation call.
//! Course/department/semester ownership is a caller-side filtering concern
//! and never reaches the scheduler's logic.

mod room;
mod subject;

pub use room::Room;
pub use subject::Subject;
