//! Error types.

use crate::models::SessionType;

/// Failure of a compensation run.
///
/// Carries no partial timetable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompensationError {
    /// A missed lecture has no eligible substitute on any kept day.
    #[error("no substitute for {subject} ({kind}) at {time} missed on {day}")]
    Infeasible {
        /// Excluded day the lecture was missed on.
        day: String,
        /// Subject of the missed lecture.
        subject: String,
        /// Type of the missed lecture.
        kind: SessionType,
        /// Time label of the missed lecture.
        time: String,
    },
}

/// Failure to read or write a curriculum document.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Malformed JSON or a record missing required fields.
    #[error("invalid curriculum JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Underlying reader or writer failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infeasible_message() {
        let err = CompensationError::Infeasible {
            day: "Monday".into(),
            subject: "Math".into(),
            kind: SessionType::Lecture,
            time: "10:00-12:00".into(),
        };
        assert_eq!(
            err.to_string(),
            "no substitute for Math (Lecture) at 10:00-12:00 missed on Monday"
        );
    }
}
