//! Compensation entry point.
//!
//! Wires the pipeline together:
//! subject filter → [`DayIndex`] → [`CandidatePool`] → [`Allocator`] → [`assemble`].
//!
//! Every call builds its own indices from the input snapshot and discards
//! them afterwards; the input is never mutated and identical inputs always
//! produce identical output.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::{assemble, Allocator, CandidatePool, DayIndex};
use crate::error::CompensationError;
use crate::models::Curriculum;
use crate::report::CompensationSummary;

/// Parameters of one compensation run.
///
/// Deserializable, so it can be loaded from a JSON settings document:
///
/// ```json
/// { "group": "A3", "excluded_days": ["Petak"], "excluded_subjects": ["Fizičko"] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationRequest {
    /// Target student group.
    pub group: String,
    /// Day names the group will not attend.
    #[serde(default)]
    pub excluded_days: Vec<String>,
    /// Subjects dropped from the timetable before compensation.
    #[serde(default)]
    pub excluded_subjects: Vec<String>,
}

impl CompensationRequest {
    /// Creates a request for a group with no exclusions.
    pub fn new(group: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            excluded_days: Vec::new(),
            excluded_subjects: Vec::new(),
        }
    }

    /// Adds an excluded day.
    pub fn with_excluded_day(mut self, day: impl Into<String>) -> Self {
        self.excluded_days.push(day.into());
        self
    }

    /// Adds an excluded subject.
    pub fn with_excluded_subject(mut self, subject: impl Into<String>) -> Self {
        self.excluded_subjects.push(subject.into());
        self
    }
}

/// Timetable compensator.
///
/// Removes excluded days from a group's timetable and substitutes every
/// lecture missed on them with an equivalent, conflict-free session on a
/// kept day. Fails as a whole if any lecture cannot be substituted.
///
/// # Example
///
/// ```
/// use u_timetable::compensation::Compensator;
/// use u_timetable::models::{Curriculum, Day, Session};
///
/// let curriculum = Curriculum::new()
///     .with_day(Day::new("Monday").with_session(
///         Session::new("Math", "P", "10:00-12:00").with_groups(["G1", "G2"]),
///     ))
///     .with_day(Day::new("Tuesday").with_session(
///         Session::new("Math", "P", "13:00-15:00").with_group("G3"),
///     ));
///
/// let out = Compensator::new()
///     .compensate(&curriculum, "G1", &["Monday".to_string()])
///     .unwrap();
/// assert_eq!(out.day_names(), vec!["Tuesday"]);
/// assert_eq!(out.days[0].sessions[0].groups, vec!["G3", "G1"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Compensator {
    excluded_subjects: Vec<String>,
}

impl Compensator {
    /// Creates a compensator with no subject filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops sessions of the given subjects before compensating.
    pub fn with_excluded_subjects(mut self, subjects: Vec<String>) -> Self {
        self.excluded_subjects = subjects;
        self
    }

    /// Compensates a group's timetable for the excluded days.
    pub fn compensate(
        &self,
        curriculum: &Curriculum,
        group: &str,
        excluded_days: &[String],
    ) -> Result<Curriculum, CompensationError> {
        self.compensate_with_summary(curriculum, group, excluded_days)
            .map(|(out, _)| out)
    }

    /// Like [`Compensator::compensate`], also returning run metrics.
    pub fn compensate_with_summary(
        &self,
        curriculum: &Curriculum,
        group: &str,
        excluded_days: &[String],
    ) -> Result<(Curriculum, CompensationSummary), CompensationError> {
        let source = curriculum.without_subjects(&self.excluded_subjects);

        for name in excluded_days {
            if source.day(name).is_none() {
                warn!(day = %name, "excluded day not in curriculum; ignoring");
            }
        }
        let excluded: HashSet<&str> = excluded_days.iter().map(String::as_str).collect();

        let index = DayIndex::build(&source, group, &excluded);
        let pool = CandidatePool::build(&source, group, &excluded);
        let allocation = Allocator::new(group, &pool).allocate(index)?;
        let out = assemble(&source, &allocation);

        let summary = CompensationSummary::calculate(&source, &out, group, excluded_days);
        info!(
            group,
            missed = summary.missed_lectures,
            substitutes = summary.substitute_sessions,
            days = summary.output_days,
            "timetable compensated"
        );
        Ok((out, summary))
    }

    /// Compensates from a request.
    ///
    /// The request's excluded subjects are dropped in addition to the
    /// compensator's own.
    pub fn compensate_request(
        &self,
        curriculum: &Curriculum,
        request: &CompensationRequest,
    ) -> Result<Curriculum, CompensationError> {
        let mut excluded_subjects = self.excluded_subjects.clone();
        for subject in &request.excluded_subjects {
            if !excluded_subjects.contains(subject) {
                excluded_subjects.push(subject.clone());
            }
        }
        Self { excluded_subjects }.compensate(curriculum, &request.group, &request.excluded_days)
    }
}
