//! Timetable compensation for university curricula.
//!
//! Given a weekly curriculum, a student group and the days that group wants
//! to skip, computes a replacement timetable in which every lecture missed on
//! a skipped day is substituted by an equivalent session (same subject and
//! type) on a day the group still attends, without time overlaps. Either the
//! whole timetable is compensated or the call fails.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Session`, `SessionType`, `Day`,
//!   `Curriculum`, `TimeRange`, `Signature`
//! - **`compensation`**: Day indexer, candidate pool, first-fit allocator,
//!   result assembler and the `Compensator` entry point
//! - **`validation`**: Input integrity checks and output verification
//! - **`report`**: Run metrics
//! - **`io`**: JSON curriculum documents
//! - **`error`**: Error types
//!
//! # Determinism
//!
//! Compensation is a pure function of (curriculum, group, excluded days).
//! It keeps no state between calls, so separate calls may run in parallel.

pub mod compensation;
pub mod error;
pub mod io;
pub mod models;
pub mod report;
pub mod validation;

pub use compensation::{CompensationRequest, Compensator};
pub use error::{CompensationError, LoadError};
pub use models::{Curriculum, Day, Session, SessionType};

/// Compensates a group's timetable for the excluded days.
///
/// Shorthand for [`Compensator::new`] followed by [`Compensator::compensate`].
pub fn compensate(
    curriculum: &Curriculum,
    group: &str,
    excluded_days: &[String],
) -> Result<Curriculum, CompensationError> {
    Compensator::new().compensate(curriculum, group, excluded_days)
}
