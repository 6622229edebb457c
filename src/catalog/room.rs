//! Room definition and suitability matching.

use crate::{generate_id, Id};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A room available to the scheduler.
///
/// The `kind` tag is free text; suitability is decided by case-insensitive
/// substring matching so that tags like "Computer Lab 2" or "Lecture Hall B"
/// classify naturally.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Room {
    pub id: Id,
    pub name: String,
    /// Free-text room type tag, e.g. "lab", "lecture hall", "seminar".
    pub kind: String,
    /// Seating capacity.
    pub capacity: u32,
}

impl Room {
    /// Creates a room with a fresh id.
    pub fn new(name: impl Into<String>, kind: impl Into<String>, capacity: u32) -> Self {
        Self {
            id: generate_id(),
            name: name.into(),
            kind: kind.into(),
            capacity,
        }
    }

    /// True when the room can seat `student_count` students.
    pub fn fits(&self, student_count: u32) -> bool {
        self.capacity >= student_count
    }

    /// True when the kind tag marks this room as a laboratory.
    pub fn suits_lab(&self) -> bool {
        let kind = self.kind.to_lowercase();
        kind.contains("lab") || kind.contains("computer")
    }

    /// True when the kind tag marks this room as a lecture venue.
    pub fn suits_lecture(&self) -> bool {
        let kind = self.kind.to_lowercase();
        kind.contains("lecture") || kind.contains("hall")
    }
}
