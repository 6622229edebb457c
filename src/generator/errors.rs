use thiserror::Error;

/// Terminal failures of one generation call.
///
/// No partial timetable accompanies any of these; the call either returns a
/// complete, validated timetable or one of the errors below naming the
/// offending input or subject.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("time window yields no full one-hour slots")]
    InvalidTimeRange,

    #[error("no room seats {student_count} students")]
    NoEligibleRooms { student_count: u32 },

    #[error("no subjects matched the scheduling criteria")]
    NoSubjectsForCriteria,

    #[error("no free {duration}-hour block found for the lab of '{subject}'")]
    LabUnschedulable { subject: String, duration: u32 },

    #[error("could not place every lecture of '{subject}' after {passes} passes")]
    LectureUnschedulable { subject: String, passes: usize },

    #[error("'{subject}' ended with {lectures_scheduled}/{lectures_required} lectures and {labs_scheduled}/{labs_required} lab blocks")]
    IncompleteSchedule {
        subject: String,
        lectures_scheduled: u32,
        lectures_required: u32,
        labs_scheduled: u32,
        labs_required: u32,
    },
}
