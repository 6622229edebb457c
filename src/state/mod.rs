//! Per-call scheduling state: occupancy trackers and progress counters.
//!
//! One generation call owns exactly one [`SchedulingState`]. It is created
//! fresh from the subject list, mutated by the placement passes, inspected by
//! the feasibility check, and discarded. Nothing here survives across calls,
//! so no locking is needed.

use std::collections::{HashMap, HashSet};

use crate::catalog::Subject;
use crate::timegrid::Day;
use crate::Id;

/// Per-day, per-slot occupancy of one resource class (faculty or rooms).
#[derive(Debug, Clone, Default)]
pub struct Occupancy {
    cells: HashMap<(Day, usize), HashSet<Id>>,
}

impl Occupancy {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when `id` is not occupied at `(day, slot)`.
    pub fn is_free(&self, day: Day, slot: usize, id: &str) -> bool {
        self.cells
            .get(&(day, slot))
            .is_none_or(|ids| !ids.contains(id))
    }

    /// Marks `id` occupied at `(day, slot)`.
    pub fn occupy(&mut self, day: Day, slot: usize, id: &Id) {
        self.cells.entry((day, slot)).or_default().insert(id.clone());
    }

    /// True when nothing occupies `(day, slot)`.
    pub fn is_slot_empty(&self, day: Day, slot: usize) -> bool {
        self.cells.get(&(day, slot)).is_none_or(HashSet::is_empty)
    }
}

/// Per-subject placement counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubjectProgress {
    pub lectures_scheduled: u32,
    pub labs_scheduled: u32,
}

/// All bookkeeping for one generation call.
#[derive(Debug, Clone)]
pub struct SchedulingState {
    faculty: Occupancy,
    rooms: Occupancy,
    progress: HashMap<Id, SubjectProgress>,
    /// Subjects with any activity (lecture or lab) per day.
    active: HashMap<Day, HashSet<Id>>,
    /// Days already carrying a lab block. One lab per day, globally.
    lab_days: HashSet<Day>,
}

impl SchedulingState {
    /// Initializes zeroed counters for every subject.
    pub fn new(subjects: &[Subject]) -> Self {
        Self {
            faculty: Occupancy::new(),
            rooms: Occupancy::new(),
            progress: subjects
                .iter()
                .map(|s| (s.id.clone(), SubjectProgress::default()))
                .collect(),
            active: HashMap::new(),
            lab_days: HashSet::new(),
        }
    }

    pub fn is_faculty_free(&self, day: Day, slot: usize, faculty: &str) -> bool {
        self.faculty.is_free(day, slot, faculty)
    }

    pub fn is_room_free(&self, day: Day, slot: usize, room: &str) -> bool {
        self.rooms.is_free(day, slot, room)
    }

    /// Atomically marks a cell occupied by a session's faculty and room.
    pub fn occupy(&mut self, day: Day, slot: usize, faculty: &Id, room: &Id) {
        self.faculty.occupy(day, slot, faculty);
        self.rooms.occupy(day, slot, room);
    }

    /// Counters for a subject. Unknown ids read as zero progress.
    pub fn progress(&self, subject: &str) -> SubjectProgress {
        self.progress.get(subject).copied().unwrap_or_default()
    }

    pub fn record_lecture(&mut self, subject: &Id) {
        self.progress
            .entry(subject.clone())
            .or_default()
            .lectures_scheduled += 1;
    }

    pub fn record_lab(&mut self, subject: &Id) {
        self.progress.entry(subject.clone()).or_default().labs_scheduled += 1;
    }

    /// True when the subject already has any session on `day`.
    pub fn is_active(&self, day: Day, subject: &str) -> bool {
        self.active
            .get(&day)
            .is_some_and(|ids| ids.contains(subject))
    }

    pub fn mark_active(&mut self, day: Day, subject: &Id) {
        self.active.entry(day).or_default().insert(subject.clone());
    }

    /// True when `day` already carries a lab block.
    pub fn day_has_lab(&self, day: Day) -> bool {
        self.lab_days.contains(&day)
    }

    pub fn mark_lab_day(&mut self, day: Day) {
        self.lab_days.insert(day);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Subject;

    #[test]
    fn occupancy_is_per_cell_and_per_id() {
        let mut occ = Occupancy::new();
        assert!(occ.is_free(Day::Monday, 1, "f1"));
        assert!(occ.is_slot_empty(Day::Monday, 1));

        occ.occupy(Day::Monday, 1, &"f1".to_string());
        assert!(!occ.is_free(Day::Monday, 1, "f1"));
        assert!(!occ.is_slot_empty(Day::Monday, 1));
        // Other ids, slots and days remain free.
        assert!(occ.is_free(Day::Monday, 1, "f2"));
        assert!(occ.is_free(Day::Monday, 2, "f1"));
        assert!(occ.is_free(Day::Tuesday, 1, "f1"));
    }

    #[test]
    fn counters_start_at_zero_and_increment() {
        let subjects = vec![Subject::new("Maths", "f1", 3)];
        let mut state = SchedulingState::new(&subjects);
        let id = subjects[0].id.clone();

        assert_eq!(state.progress(&id), SubjectProgress::default());
        state.record_lecture(&id);
        state.record_lecture(&id);
        state.record_lab(&id);
        assert_eq!(
            state.progress(&id),
            SubjectProgress {
                lectures_scheduled: 2,
                labs_scheduled: 1
            }
        );
    }

    #[test]
    fn unknown_subject_reads_zero_progress() {
        let state = SchedulingState::new(&[]);
        assert_eq!(state.progress("nope"), SubjectProgress::default());
    }

    #[test]
    fn day_activity_and_lab_flags() {
        let subjects = vec![Subject::new("Physics", "f2", 2)];
        let mut state = SchedulingState::new(&subjects);
        let id = subjects[0].id.clone();

        assert!(!state.is_active(Day::Tuesday, &id));
        state.mark_active(Day::Tuesday, &id);
        assert!(state.is_active(Day::Tuesday, &id));
        assert!(!state.is_active(Day::Wednesday, &id));

        assert!(!state.day_has_lab(Day::Tuesday));
        state.mark_lab_day(Day::Tuesday);
        assert!(state.day_has_lab(Day::Tuesday));
        assert!(!state.day_has_lab(Day::Wednesday));
    }

    #[test]
    fn occupy_marks_both_faculty_and_room() {
        let mut state = SchedulingState::new(&[]);
        state.occupy(Day::Friday, 3, &"f1".to_string(), &"r1".to_string());
        assert!(!state.is_faculty_free(Day::Friday, 3, "f1"));
        assert!(!state.is_room_free(Day::Friday, 3, "r1"));
        assert!(state.is_faculty_free(Day::Friday, 3, "f2"));
        assert!(state.is_room_free(Day::Friday, 3, "r2"));
    }
}
