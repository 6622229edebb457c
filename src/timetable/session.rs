//! The scheduled session: one timetable cell's worth of teaching.

use crate::catalog::{Room, Subject};
use crate::timegrid::{ClockTime, TimeSlot};
use crate::Id;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Kind of teaching delivered in a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SessionKind {
    Lecture,
    Lab,
}

/// Position of a lab slot within its contiguous block.
///
/// Continuation slots carry `Middle`/`Last` so renderers can recognize them
/// without re-deriving the block. A single-slot lab is `First`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BlockPosition {
    First,
    Middle,
    Last,
}

/// A placed session occupying one timetable cell.
///
/// Every slot of a multi-hour lab block holds its own `Session` carrying the
/// block's full start/end times and duration, distinguished by `position`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Session {
    pub subject_id: Id,
    pub subject: String,
    pub faculty: Id,
    pub room_id: Id,
    pub room: String,
    pub kind: SessionKind,
    /// Duration in hours: 1 for lectures, the block length for labs.
    pub duration: u32,
    pub start: ClockTime,
    pub end: ClockTime,
    /// Set for lab sessions only.
    pub position: Option<BlockPosition>,
}

impl Session {
    /// Builds a single-hour lecture session in the given slot.
    pub fn lecture(subject: &Subject, room: &Room, slot: &TimeSlot) -> Self {
        Self {
            subject_id: subject.id.clone(),
            subject: subject.name.clone(),
            faculty: subject.faculty.clone(),
            room_id: room.id.clone(),
            room: room.name.clone(),
            kind: SessionKind::Lecture,
            duration: 1,
            start: slot.start(),
            end: slot.end(),
            position: None,
        }
    }

    /// Builds one slot's session of a lab block spanning `[start, end)`.
    pub fn lab(
        subject: &Subject,
        room: &Room,
        start: ClockTime,
        end: ClockTime,
        duration: u32,
        position: BlockPosition,
    ) -> Self {
        Self {
            subject_id: subject.id.clone(),
            subject: subject.name.clone(),
            faculty: subject.faculty.clone(),
            room_id: room.id.clone(),
            room: room.name.clone(),
            kind: SessionKind::Lab,
            duration,
            start,
            end,
            position: Some(position),
        }
    }

    pub fn is_lab(&self) -> bool {
        self.kind == SessionKind::Lab
    }
}
