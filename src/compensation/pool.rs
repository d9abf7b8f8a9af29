//! Candidate pool builder.
//!
//! On every kept day, sessions the target group does not yet attend are
//! bundled by [`Signature`]. A bundle ([`CandidateGroup`]) holds all room
//! variants of one lecture occurrence and is consumed as a unit.
//!
//! Bundles keep the order in which their signature first appears in the day.

use std::collections::{HashMap, HashSet};

use crate::models::{Curriculum, Session, Signature, TimeRange};

/// Parallel offerings of one lecture occurrence on one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateGroup {
    /// Shared identity of the bundled sessions.
    pub signature: Signature,
    /// Shared time of the bundled sessions.
    pub time: TimeRange,
    /// Room variants, in day order. Never empty.
    pub sessions: Vec<Session>,
}

impl CandidateGroup {
    fn new(signature: Signature, session: Session) -> Self {
        Self {
            signature,
            time: session.time.clone(),
            sessions: vec![session],
        }
    }

    /// Locations of the bundled sessions.
    pub fn locations(&self) -> Vec<&str> {
        self.sessions.iter().map(|s| s.location.as_str()).collect()
    }
}

/// Candidate bundles of one kept day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayPool {
    /// Day name.
    pub day: String,
    /// Bundles in pool-construction order.
    pub groups: Vec<CandidateGroup>,
}

impl DayPool {
    fn new(day: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            groups: Vec::new(),
        }
    }

    /// Looks up the bundle for a signature.
    pub fn group(&self, signature: &Signature) -> Option<&CandidateGroup> {
        self.groups.iter().find(|g| &g.signature == signature)
    }
}

/// Candidate bundles for every kept day, in curriculum order.
#[derive(Debug, Clone, Default)]
pub struct CandidatePool {
    /// One entry per non-excluded day.
    pub days: Vec<DayPool>,
}

impl CandidatePool {
    /// Builds the pool for a group and a set of excluded day names.
    ///
    /// Has exactly one [`DayPool`] per non-excluded day, aligned with
    /// [`DayIndex::kept`](super::DayIndex).
    pub fn build(curriculum: &Curriculum, group: &str, excluded: &HashSet<&str>) -> Self {
        let mut pool = Self::default();

        for day in &curriculum.days {
            if excluded.contains(day.name.as_str()) {
                continue;
            }

            let mut day_pool = DayPool::new(&day.name);
            let mut slot: HashMap<Signature, usize> = HashMap::new();

            for session in day.sessions.iter().filter(|s| !s.has_group(group)) {
                let signature = Signature::of(session);
                match slot.get(&signature).copied() {
                    Some(idx) => day_pool.groups[idx].sessions.push(session.clone()),
                    None => {
                        slot.insert(signature.clone(), day_pool.groups.len());
                        day_pool
                            .groups
                            .push(CandidateGroup::new(signature, session.clone()));
                    }
                }
            }

            pool.days.push(day_pool);
        }

        pool
    }

    /// Total number of bundles.
    pub fn group_count(&self) -> usize {
        self.days.iter().map(|d| d.groups.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Day;

    fn no_exclusions() -> HashSet<&'static str> {
        HashSet::new()
    }

    #[test]
    fn test_parallel_rooms_bundled() {
        let c = Curriculum::new().with_day(
            Day::new("Tue")
                .with_session(
                    Session::new("Math", "P", "13:00-15:00")
                        .with_group("G3")
                        .with_location("Room A"),
                )
                .with_session(Session::new("Art", "V", "15:00-16:00").with_group("G3"))
                .with_session(
                    Session::new("Math", "P", "13:00-15:00")
                        .with_group("G3")
                        .with_location("Room B"),
                ),
        );
        let pool = CandidatePool::build(&c, "G1", &no_exclusions());

        assert_eq!(pool.days.len(), 1);
        assert_eq!(pool.group_count(), 2);
        let math = &pool.days[0].groups[0];
        assert_eq!(math.signature.subject, "Math");
        assert_eq!(math.locations(), vec!["Room A", "Room B"]);
        assert_eq!(math.time.label(), "13:00-15:00");
        assert_eq!(pool.days[0].groups[1].signature.subject, "Art");
    }

    #[test]
    fn test_sessions_with_target_group_excluded() {
        let c = Curriculum::new().with_day(
            Day::new("Mon")
                .with_session(Session::new("Math", "P", "10:00-12:00").with_groups(["G1", "G2"]))
                .with_session(Session::new("Math", "P", "12:00-14:00").with_group("G2")),
        );
        let pool = CandidatePool::build(&c, "G1", &no_exclusions());
        assert_eq!(pool.days[0].groups.len(), 1);
        assert_eq!(pool.days[0].groups[0].time.label(), "12:00-14:00");
    }

    #[test]
    fn test_excluded_days_have_no_pool() {
        let c = Curriculum::new()
            .with_day(Day::new("Mon").with_session(
                Session::new("Math", "P", "10:00-12:00").with_group("G2"),
            ))
            .with_day(Day::new("Tue"));
        let excluded: HashSet<&str> = ["Mon"].into_iter().collect();
        let pool = CandidatePool::build(&c, "G1", &excluded);

        assert_eq!(pool.days.len(), 1);
        assert_eq!(pool.days[0].day, "Tue");
        assert!(pool.days[0].groups.is_empty());
    }

    #[test]
    fn test_different_groups_are_different_bundles() {
        let c = Curriculum::new().with_day(
            Day::new("Tue")
                .with_session(Session::new("Math", "P", "13:00-15:00").with_group("G3"))
                .with_session(Session::new("Math", "P", "13:00-15:00").with_group("G4")),
        );
        let pool = CandidatePool::build(&c, "G1", &no_exclusions());
        assert_eq!(pool.days[0].groups.len(), 2);

        let sig = Signature::of(&Session::new("Math", "P", "13:00-15:00").with_group("G4"));
        assert!(pool.days[0].group(&sig).is_some());
    }
}
