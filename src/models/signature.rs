//! Lecture identity keys.
//!
//! A [`Signature`] identifies "the same lecture" independently of the room
//! it is held in: subject, type, time label and the sorted set of attending
//! groups. Sessions sharing a signature but differing in location are
//! parallel offerings of one lecture occurrence.
//!
//! A [`LocatedSignature`] additionally includes the location and drops the
//! groups; it is used to find a session's position in its original day.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Session, SessionType};

/// Room-independent identity of a lecture occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Signature {
    /// Subject name.
    pub subject: String,
    /// Kind of meeting.
    pub kind: SessionType,
    /// Raw time label.
    pub time: String,
    /// Attending groups, sorted lexicographically.
    pub groups: Vec<String>,
}

impl Signature {
    /// Derives the signature of a session.
    pub fn of(session: &Session) -> Self {
        let mut groups = session.groups.clone();
        groups.sort();
        Self {
            subject: session.subject.clone(),
            kind: session.kind.clone(),
            time: session.time.label().to_string(),
            groups,
        }
    }

    /// Whether a candidate with this signature can stand in for `other`.
    ///
    /// Only subject and type must agree; time and groups may differ.
    pub fn substitutes_for(&self, other: &Signature) -> bool {
        self.subject == other.subject && self.kind == other.kind
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}|{}|{}|{}",
            self.subject,
            self.kind,
            self.time,
            self.groups.join(",")
        )
    }
}

/// Position key of a session within a day: subject, type, time, location.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocatedSignature {
    subject: String,
    kind: SessionType,
    time: String,
    location: String,
}

impl LocatedSignature {
    /// Derives the located signature of a session.
    pub fn of(session: &Session) -> Self {
        Self {
            subject: session.subject.clone(),
            kind: session.kind.clone(),
            time: session.time.label().to_string(),
            location: session.location.clone(),
        }
    }
}
