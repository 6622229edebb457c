//! Weekly timetable: the scheduler's output data structure.

use std::collections::BTreeMap;

use crate::timegrid::Day;

mod session;

pub use session::{BlockPosition, Session, SessionKind};


#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Mapping `Day -> (slot index -> Session)` for one working week.
///
/// A cell holds at most one session; empty cells are simply absent. The
/// structure is owned exclusively by one generation call and carries no
/// cross-call state.
///
/// # Internal Structure
/// - outer `BTreeMap` keyed by [`Day`] in calendar order
/// - inner `BTreeMap` keyed by 1-based slot index in slot order
///
/// Iteration is therefore deterministic regardless of placement order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Timetable {
    days: BTreeMap<Day, BTreeMap<usize, Session>>,
}

impl Timetable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of occupied cells across the whole week.
    pub fn len(&self) -> usize {
        self.days.values().map(|slots| slots.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.values().all(|slots| slots.is_empty())
    }

    /// Places a session into a cell. Within the owning generation call the
    /// last writer wins; the placement passes only ever write free cells.
    pub fn place(&mut self, day: Day, slot: usize, session: Session) {
        self.days.entry(day).or_default().insert(slot, session);
    }

    /// Returns the session in a cell, if any.
    pub fn session_at(&self, day: Day, slot: usize) -> Option<&Session> {
        self.days.get(&day)?.get(&slot)
    }

    /// True when the cell holds no session.
    pub fn is_free(&self, day: Day, slot: usize) -> bool {
        self.session_at(day, slot).is_none()
    }

    /// Days that have at least one session, in calendar order.
    pub fn days(&self) -> impl Iterator<Item = Day> + '_ {
        self.days
            .iter()
            .filter(|(_, slots)| !slots.is_empty())
            .map(|(day, _)| *day)
    }

    /// Sessions on one day in slot order, as `(slot index, session)` pairs.
    pub fn sessions_on(&self, day: Day) -> impl Iterator<Item = (usize, &Session)> + '_ {
        self.days
            .get(&day)
            .into_iter()
            .flat_map(|slots| slots.iter().map(|(idx, s)| (*idx, s)))
    }

    /// All occupied cells in (day, slot) order.
    pub fn iter(&self) -> impl Iterator<Item = (Day, usize, &Session)> + '_ {
        self.days.iter().flat_map(|(day, slots)| {
            slots.iter().map(move |(idx, s)| (*day, *idx, s))
        })
    }
}
