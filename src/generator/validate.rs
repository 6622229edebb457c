//! Post-pass feasibility check.

use crate::catalog::Subject;
use crate::state::SchedulingState;

use super::GenerationError;

/// Confirms every subject's counters exactly match its weekly requirements.
///
/// The passes fail eagerly on their own, so a mismatch surviving to this
/// point signals a bookkeeping inconsistency rather than a normal outcome.
/// It is still a terminal failure: no partial timetable leaves the call.
pub(super) fn check(
    subjects: &[Subject],
    state: &SchedulingState,
) -> Result<(), GenerationError> {
    for subject in subjects {
        let progress = state.progress(&subject.id);
        let lectures_required = subject.required_lectures();
        let labs_required = subject.required_lab_sessions();

        if progress.lectures_scheduled != lectures_required
            || progress.labs_scheduled != labs_required
        {
            return Err(GenerationError::IncompleteSchedule {
                subject: subject.name.clone(),
                lectures_scheduled: progress.lectures_scheduled,
                lectures_required,
                labs_scheduled: progress.labs_scheduled,
                labs_required,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Subject;
    use crate::state::SchedulingState;

    #[test]
    fn exact_counters_pass() {
        let subjects = vec![Subject::new("Maths", "f1", 2).with_lab(2, 2)];
        let mut state = SchedulingState::new(&subjects);
        state.record_lecture(&subjects[0].id);
        state.record_lecture(&subjects[0].id);
        state.record_lab(&subjects[0].id);

        assert_eq!(check(&subjects, &state), Ok(()));
    }

    #[test]
    fn lecture_shortfall_is_reported() {
        let subjects = vec![Subject::new("Maths", "f1", 3)];
        let mut state = SchedulingState::new(&subjects);
        state.record_lecture(&subjects[0].id);

        let err = check(&subjects, &state).unwrap_err();
        assert_eq!(
            err,
            GenerationError::IncompleteSchedule {
                subject: "Maths".to_string(),
                lectures_scheduled: 1,
                lectures_required: 3,
                labs_scheduled: 0,
                labs_required: 0,
            }
        );
    }

    #[test]
    fn lab_shortfall_is_reported() {
        let subjects = vec![Subject::new("Physics", "f2", 0).with_lab(2, 2)];
        let state = SchedulingState::new(&subjects);

        let err = check(&subjects, &state).unwrap_err();
        assert!(matches!(
            err,
            GenerationError::IncompleteSchedule { labs_required: 1, labs_scheduled: 0, .. }
        ));
    }
}
