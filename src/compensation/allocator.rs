//! First-fit substitute allocator.
//!
//! # Algorithm
//!
//! For each missed lecture, in [`DayIndex`] order:
//! 1. Scan kept days in curriculum order.
//! 2. Within a day, scan candidate bundles in pool order.
//! 3. A bundle is eligible iff
//!    - its subject and type equal the missed lecture's (time and groups may differ),
//!    - it has not been consumed earlier in this run,
//!    - its time does not conflict with any session already accepted for the
//!      group on that day (baseline plus earlier substitutes).
//! 4. Commit the first eligible bundle: mark it consumed, clone every room
//!    variant with the target group added, append the clones to the day.
//! 5. If no bundle is eligible on any day, the whole run fails.
//!
//! No backtracking: an earlier choice may block a later lecture even when a
//! different assignment would have satisfied both.
//!
//! # Complexity
//! O(m * c * s) where m=missed lectures, c=candidate bundles, s=sessions per day.

use std::collections::HashSet;

use tracing::{debug, trace};

use super::{CandidatePool, DayIndex, KeptDay, MissedLecture};
use crate::error::CompensationError;
use crate::models::Signature;

/// Where a missed lecture was compensated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Excluded day the lecture was missed on.
    pub missed_day: String,
    /// Identity of the missed lecture.
    pub missed: Signature,
    /// Kept day that received the substitute.
    pub day: String,
    /// Identity of the substitute bundle (before the group was added).
    pub substitute: Signature,
    /// Number of room variants joined.
    pub rooms: usize,
}

/// Result of a successful allocation.
#[derive(Debug, Clone, Default)]
pub struct Allocation {
    /// Target group.
    pub group: String,
    /// Kept days with baseline sessions followed by committed substitutes.
    pub days: Vec<KeptDay>,
    /// One placement per missed lecture, in processing order.
    pub placements: Vec<Placement>,
}

impl Allocation {
    /// Number of substitute sessions added across all days.
    pub fn substitute_count(&self) -> usize {
        self.placements.iter().map(|p| p.rooms).sum()
    }
}

/// Greedy allocator over a candidate pool.
///
/// Working state (accepted sessions, consumed bundles) lives only for the
/// duration of one [`Allocator::allocate`] call.
#[derive(Debug)]
pub struct Allocator<'a> {
    group: &'a str,
    pool: &'a CandidatePool,
}

impl<'a> Allocator<'a> {
    /// Creates an allocator for a target group.
    pub fn new(group: &'a str, pool: &'a CandidatePool) -> Self {
        Self { group, pool }
    }

    /// Compensates every missed lecture of `index`, or fails on the first
    /// lecture that cannot be placed.
    pub fn allocate(&self, index: DayIndex) -> Result<Allocation, CompensationError> {
        let DayIndex { kept, missed } = index;
        debug_assert_eq!(kept.len(), self.pool.days.len());

        let mut allocation = Allocation {
            group: self.group.to_string(),
            days: kept,
            placements: Vec::with_capacity(missed.len()),
        };
        let mut consumed: HashSet<(usize, usize)> = HashSet::new();

        for lecture in &missed {
            let Some((d, g)) = self.find_slot(lecture, &allocation.days, &consumed) else {
                debug!(
                    group = self.group,
                    day = %lecture.day,
                    lecture = %lecture.signature,
                    "no eligible substitute"
                );
                return Err(CompensationError::Infeasible {
                    day: lecture.day.clone(),
                    subject: lecture.signature.subject.clone(),
                    kind: lecture.signature.kind.clone(),
                    time: lecture.signature.time.clone(),
                });
            };

            consumed.insert((d, g));
            let bundle = &self.pool.days[d].groups[g];
            let target = &mut allocation.days[d];
            target.sessions.extend(
                bundle
                    .sessions
                    .iter()
                    .map(|s| s.clone().with_group(self.group)),
            );

            debug!(
                group = self.group,
                missed = %lecture.signature,
                day = %target.name,
                rooms = bundle.sessions.len(),
                "placed substitute"
            );
            allocation.placements.push(Placement {
                missed_day: lecture.day.clone(),
                missed: lecture.signature.clone(),
                day: target.name.clone(),
                substitute: bundle.signature.clone(),
                rooms: bundle.sessions.len(),
            });
        }

        Ok(allocation)
    }

    /// Returns (day, bundle) indices of the first eligible bundle.
    fn find_slot(
        &self,
        lecture: &MissedLecture,
        accepted: &[KeptDay],
        consumed: &HashSet<(usize, usize)>,
    ) -> Option<(usize, usize)> {
        for (d, day_pool) in self.pool.days.iter().enumerate() {
            for (g, bundle) in day_pool.groups.iter().enumerate() {
                if !bundle.signature.substitutes_for(&lecture.signature) {
                    continue;
                }
                if consumed.contains(&(d, g)) {
                    continue;
                }
                if let Some(clash) = accepted[d]
                    .sessions
                    .iter()
                    .find(|s| s.time.conflicts_with(&bundle.time))
                {
                    trace!(
                        day = %day_pool.day,
                        candidate = %bundle.signature,
                        clashes_with = %clash.subject,
                        "candidate rejected: time conflict"
                    );
                    continue;
                }
                return Some((d, g));
            }
        }
        None
    }
}
