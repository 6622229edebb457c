//! Timetable generation: randomized placement passes over the weekly grid.
//!
//! Generation is a feasibility-satisfying heuristic, not an optimizer. It
//! places the tightest-constrained work first and retries the rest:
//!
//! 1. **Lab pass** — every laboratory block, in randomized subject order.
//!    Labs need a contiguous run of free slots, never start in the day's
//!    first slot, and at most one lab block lands on any day.
//! 2. **Lecture pass** — remaining single-hour lectures, retried across up
//!    to [`Generator::with_lecture_passes`] randomized passes. Early unlucky
//!    placements can starve later subjects of slots; reshuffling and
//!    retrying redistributes the load. A pass that places nothing is not
//!    fatal, only exhausting all passes is.
//! 3. **Feasibility check** — every subject's counters must exactly match
//!    its weekly requirements, otherwise the whole call fails.
//!
//! One call owns its [`SchedulingState`] and [`Timetable`] exclusively;
//! repeated calls with identical inputs may return different valid
//! timetables unless a seed is fixed.
//!
//! # Module Structure
//!
//! - [`errors`] - the terminal failure taxonomy
//! - `labs` - contiguous lab block placement
//! - `lectures` - multi-pass single-hour lecture placement
//! - `validate` - post-pass feasibility check

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::catalog::{Room, Subject};
use crate::state::SchedulingState;
use crate::timegrid::{Day, TimeSlot};
use crate::timetable::{SessionKind, Timetable};

pub mod errors;
mod labs;
mod lectures;
mod validate;

pub use errors::GenerationError;


/// Default number of lecture placement passes.
pub const DEFAULT_LECTURE_PASSES: usize = 3;

/// Weekly timetable generator.
///
/// # Examples
///
/// ```
/// use horarium::catalog::{Room, Subject};
/// use horarium::generator::Generator;
/// use horarium::timegrid::{build_slots, ClockTime, Day};
///
/// let subjects = vec![
///     Subject::new("Mathematics", "dr-ahuja", 3),
///     Subject::new("Physics", "dr-bose", 2).with_lab(2, 2),
/// ];
/// let rooms = vec![
///     Room::new("Hall A", "lecture hall", 60),
///     Room::new("CL-1", "computer lab", 40),
/// ];
/// let slots = build_slots(ClockTime::new(9, 0), ClockTime::new(16, 0));
///
/// let timetable = Generator::new()
///     .with_seed(7)
///     .generate(&subjects, &rooms, &Day::working_week(), &slots, 40)
///     .unwrap();
/// assert_eq!(timetable.len(), 3 + 2 + 2); // 5 lecture cells + 2 lab cells
/// ```
#[derive(Debug, Clone, Default)]
pub struct Generator {
    seed: Option<u64>,
    lecture_passes: Option<usize>,
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixes the RNG seed so a run is reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Overrides the number of lecture placement passes (default 3).
    pub fn with_lecture_passes(mut self, passes: usize) -> Self {
        self.lecture_passes = Some(passes.max(1));
        self
    }

    /// Generates a conflict-free weekly timetable, or fails with the first
    /// constraint that cannot be met.
    ///
    /// Inputs are read-only snapshots already filtered by the caller: the
    /// subject list belongs to one cohort and `student_count` gates room
    /// eligibility. Rooms below capacity are discarded up front.
    pub fn generate(
        &self,
        subjects: &[Subject],
        rooms: &[Room],
        days: &[Day],
        slots: &[TimeSlot],
        student_count: u32,
    ) -> Result<Timetable, GenerationError> {
        if slots.is_empty() {
            return Err(GenerationError::InvalidTimeRange);
        }
        if subjects.is_empty() {
            return Err(GenerationError::NoSubjectsForCriteria);
        }
        let eligible: Vec<&Room> = rooms.iter().filter(|r| r.fits(student_count)).collect();
        if eligible.is_empty() {
            return Err(GenerationError::NoEligibleRooms { student_count });
        }

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let passes = self.lecture_passes.unwrap_or(DEFAULT_LECTURE_PASSES);

        let mut timetable = Timetable::new();
        let mut state = SchedulingState::new(subjects);

        labs::place_all(&mut rng, subjects, &eligible, days, slots, &mut timetable, &mut state)?;
        lectures::place_all(
            &mut rng,
            passes,
            subjects,
            &eligible,
            days,
            slots,
            &mut timetable,
            &mut state,
        )?;
        validate::check(subjects, &state)?;

        Ok(timetable)
    }
}

/// Picks the room for a session: the first eligible room whose kind tag
/// suits the session, falling back to the first eligible room outright.
///
/// Callers guarantee `rooms` is non-empty.
fn pick_room<'a>(rooms: &[&'a Room], kind: SessionKind) -> &'a Room {
    rooms
        .iter()
        .find(|r| match kind {
            SessionKind::Lab => r.suits_lab(),
            SessionKind::Lecture => r.suits_lecture(),
        })
        .copied()
        .unwrap_or(rooms[0])
}

/// Returns a shuffled copy of the working days.
fn shuffled_days(rng: &mut StdRng, days: &[Day]) -> Vec<Day> {
    let mut order = days.to_vec();
    order.shuffle(rng);
    order
}
