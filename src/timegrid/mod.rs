//! Working-week time grid: wall-clock times, one-hour slots, weekdays.
//!
//! The grid is built fresh for every generation call from a start/end time
//! pair and is immutable afterwards. Slots are fixed at one hour; a trailing
//! partial hour in the window is dropped, never padded.

use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Minutes in one slot. Slots are fixed-duration by design.
pub const SLOT_MINUTES: u16 = 60;

/// A wall-clock time of day with minute resolution.
///
/// Ordering is chronological within a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Creates a clock time.
    ///
    /// # Panics
    ///
    /// Panics if `hour > 23` or `minute > 59`.
    pub const fn new(hour: u8, minute: u8) -> Self {
        assert!(hour < 24, "hour must be in 0..24");
        assert!(minute < 60, "minute must be in 0..60");
        Self { hour, minute }
    }

    pub const fn hour(&self) -> u8 {
        self.hour
    }

    pub const fn minute(&self) -> u8 {
        self.minute
    }

    /// Minutes elapsed since midnight.
    pub const fn minutes_from_midnight(&self) -> u16 {
        self.hour as u16 * 60 + self.minute as u16
    }

    /// Returns the time `minutes` later, or `None` past the end of the day.
    pub fn advance(&self, minutes: u16) -> Option<ClockTime> {
        let total = self.minutes_from_midnight() + minutes;
        if total >= 24 * 60 {
            return None;
        }
        Some(ClockTime {
            hour: (total / 60) as u8,
            minute: (total % 60) as u8,
        })
    }
}

impl Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// A one-hour slot in the working day.
///
/// Indices are 1-based and contiguous across the slot sequence produced by
/// [`build_slots`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimeSlot {
    index: usize,
    start: ClockTime,
    end: ClockTime,
}

impl TimeSlot {
    pub const fn index(&self) -> usize {
        self.index
    }

    pub const fn start(&self) -> ClockTime {
        self.start
    }

    pub const fn end(&self) -> ClockTime {
        self.end
    }
}

impl Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// A day of the fixed five-day working week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Day {
    /// The working week in calendar order.
    pub const fn working_week() -> [Day; 5] {
        [
            Day::Monday,
            Day::Tuesday,
            Day::Wednesday,
            Day::Thursday,
            Day::Friday,
        ]
    }
}

impl Display for Day {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
        };
        f.write_str(name)
    }
}

/// Builds the ordered sequence of one-hour slots strictly within `[start, end)`.
///
/// Returns an empty vector when `end <= start` or when the window holds no
/// full hour. Callers treat emptiness as an invalid time range; this function
/// itself never fails.
pub fn build_slots(start: ClockTime, end: ClockTime) -> Vec<TimeSlot> {
    let mut slots = Vec::new();
    let mut cursor = start;
    loop {
        let Some(slot_end) = cursor.advance(SLOT_MINUTES) else {
            break;
        };
        if slot_end > end {
            break;
        }
        slots.push(TimeSlot {
            index: slots.len() + 1,
            start: cursor,
            end: slot_end,
        });
        cursor = slot_end;
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_full_hours_partial_tail_dropped() {
        let slots = build_slots(ClockTime::new(9, 0), ClockTime::new(12, 30));
        assert_eq!(slots.len(), 3);
        assert_eq!(slots[0].start(), ClockTime::new(9, 0));
        assert_eq!(slots[0].end(), ClockTime::new(10, 0));
        assert_eq!(slots[1].start(), ClockTime::new(10, 0));
        assert_eq!(slots[1].end(), ClockTime::new(11, 0));
        assert_eq!(slots[2].start(), ClockTime::new(11, 0));
        assert_eq!(slots[2].end(), ClockTime::new(12, 0));
    }

    #[test]
    fn indices_are_one_based_and_contiguous() {
        let slots = build_slots(ClockTime::new(8, 0), ClockTime::new(13, 0));
        let indices: Vec<usize> = slots.iter().map(|s| s.index()).collect();
        assert_eq!(indices, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn equal_start_and_end_yields_no_slots() {
        assert!(build_slots(ClockTime::new(9, 0), ClockTime::new(9, 0)).is_empty());
    }

    #[test]
    fn end_before_start_yields_no_slots() {
        assert!(build_slots(ClockTime::new(14, 0), ClockTime::new(9, 0)).is_empty());
    }

    #[test]
    fn window_shorter_than_an_hour_yields_no_slots() {
        assert!(build_slots(ClockTime::new(9, 0), ClockTime::new(9, 45)).is_empty());
    }

    #[test]
    fn single_full_hour_with_offset_minutes() {
        let slots = build_slots(ClockTime::new(10, 0), ClockTime::new(11, 30));
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].start(), ClockTime::new(10, 0));
        assert_eq!(slots[0].end(), ClockTime::new(11, 0));
    }

    #[test]
    fn window_never_crosses_midnight() {
        let slots = build_slots(ClockTime::new(23, 30), ClockTime::new(23, 59));
        assert!(slots.is_empty());
    }

    #[test]
    fn clock_time_ordering_and_display() {
        assert!(ClockTime::new(9, 0) < ClockTime::new(9, 30));
        assert!(ClockTime::new(9, 59) < ClockTime::new(10, 0));
        assert_eq!(ClockTime::new(9, 5).to_string(), "09:05");
    }

    #[test]
    fn advance_saturates_at_midnight() {
        assert_eq!(ClockTime::new(23, 30).advance(60), None);
        assert_eq!(
            ClockTime::new(9, 0).advance(90),
            Some(ClockTime::new(10, 30))
        );
    }

    #[test]
    fn working_week_is_monday_through_friday() {
        let week = Day::working_week();
        assert_eq!(week.len(), 5);
        assert_eq!(week[0], Day::Monday);
        assert_eq!(week[4], Day::Friday);
        assert!(Day::Monday < Day::Friday);
    }
}
