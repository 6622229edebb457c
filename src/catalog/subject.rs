//! Subject definition with weekly lecture and laboratory requirements.

use crate::{generate_id, Id};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A subject to be placed on the weekly timetable.
///
/// Weekly requirements are expressed in hours: `lecture_hours` single-hour
/// lecture sessions plus `lab_hours` of laboratory time delivered in
/// contiguous blocks of `lab_duration` hours each.
///
/// # Invariant
///
/// `lab_hours > 0` iff `lab_duration > 0`. [`Subject::with_lab`] maintains
/// this; a subject built with [`Subject::new`] has neither.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Subject {
    pub id: Id,
    pub name: String,
    /// Weekly single-hour lecture sessions required.
    pub lecture_hours: u32,
    /// Weekly laboratory hours required (0 when the subject has no lab).
    pub lab_hours: u32,
    /// Hours per contiguous lab block (0 when the subject has no lab).
    pub lab_duration: u32,
    /// Identity of the assigned faculty member.
    pub faculty: Id,
}

impl Subject {
    /// Creates a lecture-only subject with a fresh id.
    pub fn new(name: impl Into<String>, faculty: impl Into<Id>, lecture_hours: u32) -> Self {
        Self {
            id: generate_id(),
            name: name.into(),
            lecture_hours,
            lab_hours: 0,
            lab_duration: 0,
            faculty: faculty.into(),
        }
    }

    /// Adds a weekly laboratory requirement.
    ///
    /// # Panics
    ///
    /// Panics if exactly one of `lab_hours` and `lab_duration` is zero.
    pub fn with_lab(mut self, lab_hours: u32, lab_duration: u32) -> Self {
        assert!(
            (lab_hours > 0) == (lab_duration > 0),
            "lab_hours and lab_duration must both be zero or both be positive"
        );
        self.lab_hours = lab_hours;
        self.lab_duration = lab_duration;
        self
    }

    pub fn has_lab(&self) -> bool {
        self.lab_hours > 0
    }

    /// Number of single-hour lecture sessions required per week.
    pub fn required_lectures(&self) -> u32 {
        self.lecture_hours
    }

    /// Number of lab blocks required per week: `ceil(lab_hours / lab_duration)`.
    pub fn required_lab_sessions(&self) -> u32 {
        if self.lab_duration == 0 {
            0
        } else {
            self.lab_hours.div_ceil(self.lab_duration)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lecture_only_subject_has_no_lab_sessions() {
        let s = Subject::new("Mathematics", "fac-1", 4);
        assert!(!s.has_lab());
        assert_eq!(s.required_lectures(), 4);
        assert_eq!(s.required_lab_sessions(), 0);
    }

    #[test]
    fn lab_session_count_rounds_up() {
        let s = Subject::new("Physics", "fac-2", 3).with_lab(4, 2);
        assert_eq!(s.required_lab_sessions(), 2);

        let s = Subject::new("Chemistry", "fac-3", 3).with_lab(3, 2);
        assert_eq!(s.required_lab_sessions(), 2);

        let s = Subject::new("Programming", "fac-4", 2).with_lab(2, 2);
        assert_eq!(s.required_lab_sessions(), 1);
    }

    #[test]
    #[should_panic(expected = "both be zero or both be positive")]
    fn lab_hours_without_duration_is_rejected() {
        let _ = Subject::new("Biology", "fac-5", 2).with_lab(2, 0);
    }

    #[test]
    fn fresh_ids_are_unique() {
        let a = Subject::new("A", "f", 1);
        let b = Subject::new("A", "f", 1);
        assert_ne!(a.id, b.id);
    }
}
