//! Lab block placement: the tightest-constrained pass runs first.

use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::catalog::{Room, Subject};
use crate::state::SchedulingState;
use crate::timegrid::{Day, TimeSlot};
use crate::timetable::{BlockPosition, Session, SessionKind, Timetable};

use super::{pick_room, shuffled_days, GenerationError};

/// Places every required lab block of every subject.
///
/// Subjects are processed in an order randomized once per generation call so
/// insertion order carries no systematic advantage. The first block that
/// cannot be placed anywhere fails the whole call.
pub(super) fn place_all(
    rng: &mut StdRng,
    subjects: &[Subject],
    rooms: &[&Room],
    days: &[Day],
    slots: &[TimeSlot],
    timetable: &mut Timetable,
    state: &mut SchedulingState,
) -> Result<(), GenerationError> {
    let mut lab_subjects: Vec<&Subject> = subjects.iter().filter(|s| s.has_lab()).collect();
    lab_subjects.shuffle(rng);

    for subject in lab_subjects {
        let room = pick_room(rooms, SessionKind::Lab);
        for _ in 0..subject.required_lab_sessions() {
            place_block(rng, subject, room, days, slots, timetable, state)?;
        }
    }
    Ok(())
}

/// Places one contiguous lab block, trying days in randomized order.
///
/// Hard rules enforced here:
/// - at most one lab block per day, across all subjects
/// - a block never starts in the day's first slot
/// - every slot of the block is simultaneously free in the timetable grid,
///   the faculty tracker, and the room tracker
fn place_block(
    rng: &mut StdRng,
    subject: &Subject,
    room: &Room,
    days: &[Day],
    slots: &[TimeSlot],
    timetable: &mut Timetable,
    state: &mut SchedulingState,
) -> Result<(), GenerationError> {
    let duration = subject.lab_duration as usize;

    for day in shuffled_days(rng, days) {
        if state.day_has_lab(day) {
            continue;
        }
        // Starts are scanned from slot 2; the block must also fit before the
        // day ends.
        if duration + 1 > slots.len() {
            continue;
        }
        for start in 2..=slots.len() - duration + 1 {
            let span = start..start + duration;
            let free = span.clone().all(|slot| {
                timetable.is_free(day, slot)
                    && state.is_faculty_free(day, slot, &subject.faculty)
                    && state.is_room_free(day, slot, &room.id)
            });
            if !free {
                continue;
            }

            write_block(subject, room, day, slots, start, duration, timetable, state);
            debug!(
                "lab: {} on {} slots {}..{} in {}",
                subject.name,
                day,
                start,
                start + duration - 1,
                room.name
            );
            return Ok(());
        }
    }

    Err(GenerationError::LabUnschedulable {
        subject: subject.name.clone(),
        duration: subject.lab_duration,
    })
}

/// Writes a validated block into the grid and trackers.
#[allow(clippy::too_many_arguments)]
fn write_block(
    subject: &Subject,
    room: &Room,
    day: Day,
    slots: &[TimeSlot],
    start: usize,
    duration: usize,
    timetable: &mut Timetable,
    state: &mut SchedulingState,
) {
    let block_start = slots[start - 1].start();
    let block_end = slots[start + duration - 2].end();

    for (offset, slot) in (start..start + duration).enumerate() {
        let position = if offset == 0 {
            BlockPosition::First
        } else if offset == duration - 1 {
            BlockPosition::Last
        } else {
            BlockPosition::Middle
        };
        timetable.place(
            day,
            slot,
            Session::lab(
                subject,
                room,
                block_start,
                block_end,
                subject.lab_duration,
                position,
            ),
        );
        state.occupy(day, slot, &subject.faculty, &room.id);
    }
    state.mark_lab_day(day);
    state.mark_active(day, &subject.id);
    state.record_lab(&subject.id);
}
