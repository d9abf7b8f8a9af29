//! Input validation and output verification for timetables.
//!
//! [`validate_curriculum`] checks the structural integrity of an ingested
//! curriculum. The compensator does not call it: malformed input is the
//! ingestion side's responsibility, and callers may run this check first.
//! Detects:
//! - Duplicate day names
//! - Sessions with an empty subject, time or location
//! - Sessions with no groups, or the same group listed twice
//!
//! [`verify_compensation`] checks that a compensated timetable satisfies
//! the output guarantees for a group:
//! - No excluded day is present
//! - No day is empty
//! - Every session includes the group
//! - No two sessions on a day overlap in time

use std::collections::HashSet;

use crate::models::{Curriculum, Session};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two days share the same name.
    DuplicateDay,
    /// A required session field is empty.
    EmptyField,
    /// A session lists no groups.
    NoGroups,
    /// A session lists the same group more than once.
    DuplicateGroup,
    /// An excluded day appears in a compensated timetable.
    ExcludedDayPresent,
    /// A compensated timetable contains a day with no sessions.
    EmptyDay,
    /// A session in a compensated timetable does not include the group.
    MissingGroup,
    /// Two sessions of the group overlap on the same day.
    Overlap,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates an ingested curriculum.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_curriculum(curriculum: &Curriculum) -> ValidationResult {
    let mut errors = Vec::new();
    let mut names = HashSet::new();

    for day in &curriculum.days {
        if !names.insert(day.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateDay,
                format!("Duplicate day: {}", day.name),
            ));
        }

        for (i, session) in day.sessions.iter().enumerate() {
            check_session(&day.name, i, session, &mut errors);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_session(day: &str, i: usize, session: &Session, errors: &mut Vec<ValidationError>) {
    let fields = [
        ("subject", session.subject.as_str()),
        ("time", session.time.label()),
        ("location", session.location.as_str()),
    ];
    for (field, value) in fields {
        if value.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyField,
                format!("{day} #{i}: empty {field}"),
            ));
        }
    }

    if session.groups.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoGroups,
            format!("{day} #{i} ({}): no groups", session.subject),
        ));
    }

    let mut seen = HashSet::new();
    for group in &session.groups {
        if !seen.insert(group.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateGroup,
                format!("{day} #{i} ({}): group '{group}' listed twice", session.subject),
            ));
        }
    }
}

/// Verifies the output guarantees of a compensated timetable.
///
/// Overlaps use the same rule as the allocator: parsed intervals overlap,
/// or unparseable labels are textually equal.
pub fn verify_compensation(
    output: &Curriculum,
    group: &str,
    excluded_days: &[String],
) -> ValidationResult {
    let mut errors = Vec::new();

    for day in &output.days {
        if excluded_days.contains(&day.name) {
            errors.push(ValidationError::new(
                ValidationErrorKind::ExcludedDayPresent,
                format!("Excluded day present: {}", day.name),
            ));
        }
        if day.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyDay,
                format!("Empty day: {}", day.name),
            ));
        }

        for session in &day.sessions {
            if !session.has_group(group) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::MissingGroup,
                    format!("{}: {} does not include {group}", day.name, session.subject),
                ));
            }
        }

        // Room variants of one lecture share a time by construction.
        for (i, a) in day.sessions.iter().enumerate() {
            for b in &day.sessions[i + 1..] {
                if same_occurrence(a, b) {
                    continue;
                }
                if a.conflicts_with(b) {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::Overlap,
                        format!(
                            "{}: {} ({}) overlaps {} ({})",
                            day.name, a.subject, a.time, b.subject, b.time
                        ),
                    ));
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Whether two sessions are variants of the same lecture occurrence.
fn same_occurrence(a: &Session, b: &Session) -> bool {
    a.subject == b.subject && a.kind == b.kind && a.time.label() == b.time.label()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Day;

    fn sample() -> Curriculum {
        Curriculum::new()
            .with_day(
                Day::new("Mon").with_session(
                    Session::new("Math", "P", "10:00-12:00")
                        .with_groups(["A1", "A2"])
                        .with_location("Hall"),
                ),
            )
            .with_day(
                Day::new("Tue").with_session(
                    Session::new("Physics", "V", "08:00-10:00")
                        .with_group("A1")
                        .with_location("Lab"),
                ),
            )
    }

    #[test]
    fn test_valid_curriculum() {
        assert!(validate_curriculum(&sample()).is_ok());
    }

    #[test]
    fn test_duplicate_day() {
        let c = sample().with_day(Day::new("Mon"));
        let errors = validate_curriculum(&c).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateDay);
    }

    #[test]
    fn test_session_field_checks() {
        let mut bad = Session::new("", "P", " ");
        bad.groups = vec!["A1".into(), "A1".into()];
        let c = Curriculum::new()
            .with_day(Day::new("Wed").with_session(bad))
            .with_day(Day::new("Thu").with_session(
                Session::new("Bio", "P", "9:00-10:00").with_location("R"),
            ));

        let errors = validate_curriculum(&c).unwrap_err();
        let kinds: Vec<_> = errors.iter().map(|e| e.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                ValidationErrorKind::EmptyField, // subject
                ValidationErrorKind::EmptyField, // time
                ValidationErrorKind::EmptyField, // location
                ValidationErrorKind::DuplicateGroup,
                ValidationErrorKind::NoGroups,
            ]
        );
    }

    #[test]
    fn test_verify_clean_output() {
        let out = sample().for_group("A1");
        assert!(verify_compensation(&out, "A1", &["Wed".to_string()]).is_ok());
    }

    #[test]
    fn test_verify_detects_violations() {
        let out = Curriculum::new()
            .with_day(
                Day::new("Mon")
                    .with_session(Session::new("Math", "P", "10:00-12:00").with_group("A1"))
                    .with_session(Session::new("Bio", "P", "11:00-13:00").with_group("A1"))
                    .with_session(Session::new("Art", "V", "14:00-15:00").with_group("A2")),
            )
            .with_day(Day::new("Tue"));

        let errors = verify_compensation(&out, "A1", &["Mon".to_string()]).unwrap_err();
        let kinds: Vec<_> = errors.iter().map(|e| e.kind.clone()).collect();
        assert!(kinds.contains(&ValidationErrorKind::ExcludedDayPresent));
        assert!(kinds.contains(&ValidationErrorKind::Overlap));
        assert!(kinds.contains(&ValidationErrorKind::MissingGroup));
        assert!(kinds.contains(&ValidationErrorKind::EmptyDay));
    }

    #[test]
    fn test_verify_allows_parallel_rooms() {
        let out = Curriculum::new().with_day(
            Day::new("Tue")
                .with_session(
                    Session::new("Math", "P", "13:00-15:00")
                        .with_group("A1")
                        .with_location("A"),
                )
                .with_session(
                    Session::new("Math", "P", "13:00-15:00")
                        .with_group("A1")
                        .with_location("B"),
                ),
        );
        assert!(verify_compensation(&out, "A1", &[]).is_ok());
    }
}
