//! Multi-pass single-hour lecture placement.

use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::catalog::{Room, Subject};
use crate::state::SchedulingState;
use crate::timegrid::{Day, TimeSlot};
use crate::timetable::{Session, SessionKind, Timetable};

use super::{pick_room, shuffled_days, GenerationError};

/// Places every outstanding lecture unit across up to `passes` passes.
///
/// Each pass recomputes the subjects still short of their lecture count and
/// reshuffles them, so a subject starved by unlucky early placements gets a
/// different draw next time. A unit that cannot be placed rolls over to the
/// next pass; on the final pass it fails the whole call.
#[allow(clippy::too_many_arguments)]
pub(super) fn place_all(
    rng: &mut StdRng,
    passes: usize,
    subjects: &[Subject],
    rooms: &[&Room],
    days: &[Day],
    slots: &[TimeSlot],
    timetable: &mut Timetable,
    state: &mut SchedulingState,
) -> Result<(), GenerationError> {
    for pass in 1..=passes {
        let final_pass = pass == passes;

        let mut pending: Vec<&Subject> = subjects
            .iter()
            .filter(|s| state.progress(&s.id).lectures_scheduled < s.required_lectures())
            .collect();
        if pending.is_empty() {
            return Ok(());
        }
        pending.shuffle(rng);
        debug!("lecture pass {pass}: {} subjects outstanding", pending.len());

        for subject in pending {
            let room = pick_room(rooms, SessionKind::Lecture);
            loop {
                let remaining = subject.required_lectures()
                    - state.progress(&subject.id).lectures_scheduled;
                if remaining == 0 {
                    break;
                }
                // The very last unit may sit next to the subject's own
                // session rather than stay unscheduled.
                let tolerate_adjacent = remaining == 1;
                if place_unit(
                    rng,
                    subject,
                    room,
                    days,
                    slots,
                    timetable,
                    state,
                    tolerate_adjacent,
                ) {
                    continue;
                }
                if final_pass {
                    return Err(GenerationError::LectureUnschedulable {
                        subject: subject.name.clone(),
                        passes,
                    });
                }
                // Leave the remainder for the next pass.
                break;
            }
        }
    }
    Ok(())
}

/// Attempts to place one lecture unit, trying days and slots in randomized
/// order. Returns whether a slot was found.
///
/// A day is skipped entirely when the subject already has any activity on
/// it; a slot must be free in the grid and both trackers at once.
#[allow(clippy::too_many_arguments)]
fn place_unit(
    rng: &mut StdRng,
    subject: &Subject,
    room: &Room,
    days: &[Day],
    slots: &[TimeSlot],
    timetable: &mut Timetable,
    state: &mut SchedulingState,
    tolerate_adjacent: bool,
) -> bool {
    for day in shuffled_days(rng, days) {
        if state.is_active(day, &subject.id) {
            continue;
        }

        let mut slot_order: Vec<usize> = (1..=slots.len()).collect();
        slot_order.shuffle(rng);

        for slot in slot_order {
            let free = timetable.is_free(day, slot)
                && state.is_faculty_free(day, slot, &subject.faculty)
                && state.is_room_free(day, slot, &room.id);
            if !free {
                continue;
            }
            if !tolerate_adjacent && adjacent_to_own_session(timetable, day, slot, &subject.id) {
                continue;
            }

            timetable.place(day, slot, Session::lecture(subject, room, &slots[slot - 1]));
            state.occupy(day, slot, &subject.faculty, &room.id);
            state.mark_active(day, &subject.id);
            state.record_lecture(&subject.id);
            debug!("lecture: {} on {} slot {} in {}", subject.name, day, slot, room.name);
            return true;
        }
    }
    false
}

/// True when the neighbouring slot on either side already holds a session of
/// the same subject.
fn adjacent_to_own_session(timetable: &Timetable, day: Day, slot: usize, subject: &str) -> bool {
    let same_subject =
        |s: usize| timetable.session_at(day, s).is_some_and(|x| x.subject_id == subject);
    (slot > 1 && same_subject(slot - 1)) || same_subject(slot + 1)
}
