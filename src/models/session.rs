//! Session (class meeting) model.
//!
//! A session is one scheduled meeting of a subject: a lecture, practice,
//! lab or other class held at a given time and place for a set of
//! student groups.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::TimeRange;

/// Kind of class meeting.
///
/// Ingested documents use short codes (`P` = lecture, `V` = practice,
/// `L` = lab). Unknown codes are kept verbatim in [`SessionType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SessionType {
    /// Lecture.
    Lecture,
    /// Practice / tutorial.
    Practice,
    /// Laboratory exercise.
    Lab,
    /// Any other kind, with its original label.
    Other(String),
}

impl SessionType {
    /// Canonical label, used in signatures and serialization.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Lecture => "Lecture",
            Self::Practice => "Practice",
            Self::Lab => "Lab",
            Self::Other(label) => label,
        }
    }
}

impl From<String> for SessionType {
    fn from(label: String) -> Self {
        match label.trim() {
            "P" | "Lecture" => Self::Lecture,
            "V" | "Practice" => Self::Practice,
            "L" | "Lab" => Self::Lab,
            _ => Self::Other(label),
        }
    }
}

impl From<&str> for SessionType {
    fn from(label: &str) -> Self {
        Self::from(label.to_string())
    }
}

impl From<SessionType> for String {
    fn from(kind: SessionType) -> Self {
        match kind {
            SessionType::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One class meeting.
///
/// `groups` behaves as an ordered set: [`Session::with_group`] appends a
/// group only if it is not already present, so the attending groups keep
/// their input order for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Subject name.
    pub subject: String,
    /// Kind of meeting.
    #[serde(rename = "type")]
    pub kind: SessionType,
    /// Student groups attending.
    pub groups: Vec<String>,
    /// Time label and its parsed interval.
    pub time: TimeRange,
    /// Room or venue.
    pub location: String,
}

impl Session {
    /// Creates a session with no groups and no location.
    pub fn new(
        subject: impl Into<String>,
        kind: impl Into<SessionType>,
        time: impl Into<TimeRange>,
    ) -> Self {
        Self {
            subject: subject.into(),
            kind: kind.into(),
            groups: Vec::new(),
            time: time.into(),
            location: String::new(),
        }
    }

    /// Adds an attending group (no-op if already present).
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        let group = group.into();
        if !self.has_group(&group) {
            self.groups.push(group);
        }
        self
    }

    /// Adds several attending groups.
    pub fn with_groups<I, S>(self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        groups.into_iter().fold(self, |s, g| s.with_group(g))
    }

    /// Sets the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Whether the given group attends this session.
    pub fn has_group(&self, group: &str) -> bool {
        self.groups.iter().any(|g| g == group)
    }

    /// Whether this session's time collides with another's.
    pub fn conflicts_with(&self, other: &Session) -> bool {
        self.time.conflicts_with(&other.time)
    }
}
