//! Day indexer.
//!
//! Splits a curriculum into what the target group keeps and what it
//! misses:
//! - **Kept days** (not excluded): the sessions the group already attends,
//!   in day order. These form the baseline of the output.
//! - **Missed lectures** (excluded days): one entry per distinct
//!   [`Signature`] the group attends on that day, in first-seen order.
//!
//! Missed lectures are ordered by excluded day (curriculum order), then by
//! first appearance within the day. The allocator processes them in exactly
//! this order.

use std::collections::HashSet;

use crate::models::{Curriculum, Session, Signature};

/// Baseline sessions of the target group on one kept day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeptDay {
    /// Position of the day in the source curriculum.
    pub position: usize,
    /// Day name.
    pub name: String,
    /// Sessions attended by the group, in day order.
    pub sessions: Vec<Session>,
}

/// A lecture the group loses by skipping an excluded day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissedLecture {
    /// Excluded day the lecture falls on.
    pub day: String,
    /// Identity of the lecture.
    pub signature: Signature,
}

/// Kept-day baselines and missed lectures for one group.
#[derive(Debug, Clone, Default)]
pub struct DayIndex {
    /// Non-excluded days in curriculum order (including days where the
    /// group has no sessions yet).
    pub kept: Vec<KeptDay>,
    /// Missed lectures in processing order.
    pub missed: Vec<MissedLecture>,
}

impl DayIndex {
    /// Indexes a curriculum for a group and a set of excluded day names.
    pub fn build(curriculum: &Curriculum, group: &str, excluded: &HashSet<&str>) -> Self {
        let mut index = Self::default();

        for (position, day) in curriculum.days.iter().enumerate() {
            if excluded.contains(day.name.as_str()) {
                let mut seen = HashSet::new();
                for session in day.sessions_for(group) {
                    let signature = Signature::of(session);
                    if seen.insert(signature.clone()) {
                        index.missed.push(MissedLecture {
                            day: day.name.clone(),
                            signature,
                        });
                    }
                }
            } else {
                index.kept.push(KeptDay {
                    position,
                    name: day.name.clone(),
                    sessions: day.sessions_for(group).cloned().collect(),
                });
            }
        }

        index
    }

    /// Total baseline sessions across kept days.
    pub fn baseline_count(&self) -> usize {
        self.kept.iter().map(|d| d.sessions.len()).sum()
    }
}
