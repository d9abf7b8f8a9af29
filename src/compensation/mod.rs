//! Timetable compensation.
//!
//! Given a curriculum, a target group and a set of days the group will skip,
//! produces the group's timetable without those days, in which every lecture
//! missed on a skipped day is replaced by an equivalent session (same subject
//! and type) on a kept day, without creating a time overlap for the group.
//!
//! # Pipeline
//!
//! | Stage | Type | Output |
//! |-------|------|--------|
//! | Day indexer | [`DayIndex`] | kept-day baselines, missed lectures |
//! | Candidate pool | [`CandidatePool`] | per-day bundles of parallel rooms |
//! | Allocator | [`Allocator`] | first-fit placements |
//! | Assembler | [`assemble`] | ordered output curriculum |
//!
//! # Guarantees
//! - All or nothing: a single unplaceable lecture fails the whole run.
//! - No two sessions of the group overlap on an output day.
//! - Excluded days and days with no sessions for the group are omitted.
//! - Deterministic: identical inputs give identical output.
//!
//! The allocator is greedy and does not backtrack; it may fail on inputs
//! for which a valid assignment exists.

mod allocator;
mod assembler;
mod compensator;
mod index;
mod pool;

pub use allocator::{Allocation, Allocator, Placement};
pub use assembler::assemble;
pub use compensator::{CompensationRequest, Compensator};
pub use index::{DayIndex, KeptDay, MissedLecture};
pub use pool::{CandidateGroup, CandidatePool, DayPool};
