//! Result assembler.
//!
//! Turns an [`Allocation`] into the output curriculum:
//! - excluded days never appear (they are not in the allocation),
//! - kept days with no sessions for the group are dropped,
//! - each day's sessions are ordered by their position in the source day,
//!   matched by [`LocatedSignature`] (subject, type, time, location).
//!
//! When several source sessions share a signature, the last of them gives
//! the position. Sessions with equal rank keep their relative order.
//!
//! Sessions with no match in the source day go after all matched ones,
//! ordered by the character length of their location. This tie-break is
//! kept for parity with the published timetables and has no further meaning.

use std::collections::HashMap;

use super::Allocation;
use crate::models::{Curriculum, Day, LocatedSignature, Session};

/// Sort rank of a session within its output day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Rank {
    /// Position in the source day.
    Source(usize),
    /// Not found in the source day; location length.
    Unmatched(usize),
}

/// Builds the output curriculum from an allocation.
///
/// `curriculum` must be the curriculum the allocation was computed from.
pub fn assemble(curriculum: &Curriculum, allocation: &Allocation) -> Curriculum {
    let mut days = Vec::with_capacity(allocation.days.len());

    for kept in &allocation.days {
        if kept.sessions.is_empty() {
            continue;
        }
        let Some(source) = curriculum.days.get(kept.position) else {
            continue;
        };

        days.push(Day {
            name: kept.name.clone(),
            sessions: order_like(&kept.sessions, &source.sessions),
        });
    }

    Curriculum { days }
}

/// Returns `sessions` stable-sorted by their position in `source`.
fn order_like(sessions: &[Session], source: &[Session]) -> Vec<Session> {
    let positions: HashMap<LocatedSignature, usize> = source
        .iter()
        .enumerate()
        .map(|(i, s)| (LocatedSignature::of(s), i))
        .collect();

    let mut ranked: Vec<(Rank, &Session)> = sessions
        .iter()
        .map(|s| {
            let rank = match positions.get(&LocatedSignature::of(s)) {
                Some(&i) => Rank::Source(i),
                None => Rank::Unmatched(s.location.chars().count()),
            };
            (rank, s)
        })
        .collect();

    ranked.sort_by_key(|(rank, _)| *rank);
    ranked.into_iter().map(|(_, s)| s.clone()).collect()
}
