//! Compensation metrics.
//!
//! Summarizes what a compensation run did to a group's timetable.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Baseline sessions | Group sessions on kept days before compensation |
//! | Missed lectures | Distinct lecture signatures on excluded days |
//! | Output sessions | Sessions in the compensated timetable |
//! | Substitute sessions | Output sessions minus baseline sessions |
//! | Output days | Days in the compensated timetable |
//! | Dropped days | Kept days with no sessions for the group |

use std::collections::HashSet;

use crate::compensation::DayIndex;
use crate::models::Curriculum;

/// Compensation run metrics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompensationSummary {
    /// Group sessions on kept days in the input.
    pub baseline_sessions: usize,
    /// Distinct lectures missed on excluded days.
    pub missed_lectures: usize,
    /// Sessions in the output.
    pub output_sessions: usize,
    /// Sessions added by compensation (room variants counted separately).
    pub substitute_sessions: usize,
    /// Days in the output.
    pub output_days: usize,
    /// Kept days omitted from the output because they were empty.
    pub dropped_days: Vec<String>,
    /// Session count per output day, in output order.
    pub sessions_by_day: Vec<(String, usize)>,
}

impl CompensationSummary {
    /// Computes metrics from a compensation input and its output.
    ///
    /// # Arguments
    /// * `input` - The curriculum that was compensated (after any subject filter).
    /// * `output` - The compensated curriculum.
    /// * `group` - The target group.
    /// * `excluded_days` - Day names that were excluded.
    pub fn calculate(
        input: &Curriculum,
        output: &Curriculum,
        group: &str,
        excluded_days: &[String],
    ) -> Self {
        let excluded: HashSet<&str> = excluded_days.iter().map(String::as_str).collect();
        let index = DayIndex::build(input, group, &excluded);

        let baseline_sessions = index.baseline_count();
        let output_sessions = output.session_count();
        let dropped_days = index
            .kept
            .iter()
            .filter(|k| output.day(&k.name).is_none())
            .map(|k| k.name.clone())
            .collect();

        Self {
            baseline_sessions,
            missed_lectures: index.missed.len(),
            output_sessions,
            substitute_sessions: output_sessions.saturating_sub(baseline_sessions),
            output_days: output.days.len(),
            dropped_days,
            sessions_by_day: output
                .days
                .iter()
                .map(|d| (d.name.clone(), d.session_count()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compensation::Compensator;
    use crate::models::{Day, Session};

    #[test]
    fn test_summary_counts() {
        let input = Curriculum::new()
            .with_day(
                Day::new("Mon")
                    .with_session(Session::new("Math", "P", "10:00-12:00").with_group("G1"))
                    .with_session(
                        Session::new("Math", "P", "10:00-12:00")
                            .with_group("G1")
                            .with_location("B"),
                    ),
            )
            .with_day(
                Day::new("Tue")
                    .with_session(
                        Session::new("Math", "P", "13:00-15:00")
                            .with_group("G2")
                            .with_location("X"),
                    )
                    .with_session(
                        Session::new("Math", "P", "13:00-15:00")
                            .with_group("G2")
                            .with_location("Y"),
                    ),
            )
            .with_day(Day::new("Wed").with_session(
                Session::new("Art", "V", "9:00-10:00").with_group("G2"),
            ))
            .with_day(Day::new("Thu").with_session(
                Session::new("Bio", "P", "9:00-10:00").with_group("G1"),
            ));
        let excluded = vec!["Mon".to_string()];

        let output = Compensator::new().compensate(&input, "G1", &excluded).unwrap();
        let summary = CompensationSummary::calculate(&input, &output, "G1", &excluded);

        // Two Monday rooms share one signature
        assert_eq!(summary.missed_lectures, 1);
        assert_eq!(summary.baseline_sessions, 1);
        // Both Tuesday rooms joined
        assert_eq!(summary.substitute_sessions, 2);
        assert_eq!(summary.output_sessions, 3);
        assert_eq!(summary.output_days, 2);
        assert_eq!(summary.dropped_days, vec!["Wed"]);
        assert_eq!(
            summary.sessions_by_day,
            vec![("Tue".to_string(), 2), ("Thu".to_string(), 1)]
        );
    }

    #[test]
    fn test_summary_no_exclusion() {
        let input = Curriculum::new().with_day(
            Day::new("Mon").with_session(Session::new("Math", "P", "10:00-12:00").with_group("G1")),
        );
        let output = Compensator::new().compensate(&input, "G1", &[]).unwrap();
        let summary = CompensationSummary::calculate(&input, &output, "G1", &[]);
        assert_eq!(summary.missed_lectures, 0);
        assert_eq!(summary.substitute_sessions, 0);
        assert_eq!(summary.output_sessions, 1);
        assert!(summary.dropped_days.is_empty());
    }
}
