//! Day and curriculum models.
//!
//! A curriculum is the weekly timetable: an ordered list of days, each with
//! an ordered list of sessions. Order is significant for display and for
//! tie-breaking during compensation.

use serde::{Deserialize, Serialize};

use super::Session;

/// One day of the timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    /// Day name (unique within a curriculum).
    #[serde(rename = "day")]
    pub name: String,
    /// Sessions in display order.
    #[serde(rename = "classes")]
    pub sessions: Vec<Session>,
}

impl Day {
    /// Creates an empty day.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sessions: Vec::new(),
        }
    }

    /// Appends a session.
    pub fn with_session(mut self, session: Session) -> Self {
        self.sessions.push(session);
        self
    }

    /// Sessions attended by a group, in day order.
    pub fn sessions_for<'a>(&'a self, group: &'a str) -> impl Iterator<Item = &'a Session> + 'a {
        self.sessions.iter().filter(move |s| s.has_group(group))
    }

    /// Number of sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Whether the day has no sessions.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

/// The weekly timetable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Curriculum {
    /// Days in timetable order.
    pub days: Vec<Day>,
}

impl Curriculum {
    /// Creates an empty curriculum.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a day.
    pub fn with_day(mut self, day: Day) -> Self {
        self.days.push(day);
        self
    }

    /// Looks up a day by name.
    pub fn day(&self, name: &str) -> Option<&Day> {
        self.days.iter().find(|d| d.name == name)
    }

    /// Day names in order.
    pub fn day_names(&self) -> Vec<&str> {
        self.days.iter().map(|d| d.name.as_str()).collect()
    }

    /// Total number of sessions across all days.
    pub fn session_count(&self) -> usize {
        self.days.iter().map(Day::session_count).sum()
    }

    /// Restricts every day to the sessions a group attends.
    ///
    /// Days are kept even when they end up empty.
    pub fn for_group(&self, group: &str) -> Curriculum {
        Curriculum {
            days: self
                .days
                .iter()
                .map(|d| Day {
                    name: d.name.clone(),
                    sessions: d.sessions_for(group).cloned().collect(),
                })
                .collect(),
        }
    }

    /// Removes every session whose subject is listed.
    pub fn without_subjects(&self, subjects: &[String]) -> Curriculum {
        if subjects.is_empty() {
            return self.clone();
        }
        Curriculum {
            days: self
                .days
                .iter()
                .map(|d| Day {
                    name: d.name.clone(),
                    sessions: d
                        .sessions
                        .iter()
                        .filter(|s| !subjects.contains(&s.subject))
                        .cloned()
                        .collect(),
                })
                .collect(),
        }
    }
}

impl From<Vec<Day>> for Curriculum {
    fn from(days: Vec<Day>) -> Self {
        Self { days }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Curriculum {
        Curriculum::new()
            .with_day(
                Day::new("Monday")
                    .with_session(
                        Session::new("Math", "P", "10:00-12:00").with_groups(["A1", "A2"]),
                    )
                    .with_session(Session::new("Art", "V", "12:00-13:00").with_group("A2")),
            )
            .with_day(
                Day::new("Tuesday")
                    .with_session(Session::new("Math", "P", "13:00-15:00").with_group("A3")),
            )
    }

    #[test]
    fn test_lookup_and_counts() {
        let c = sample();
        assert_eq!(c.day_names(), vec!["Monday", "Tuesday"]);
        assert_eq!(c.session_count(), 3);
        assert_eq!(c.day("Tuesday").map(Day::session_count), Some(1));
        assert!(c.day("Friday").is_none());
    }

    #[test]
    fn test_for_group() {
        let c = sample().for_group("A1");
        assert_eq!(c.days.len(), 2);
        assert_eq!(c.days[0].sessions.len(), 1);
        assert!(c.days[1].is_empty());
    }

    #[test]
    fn test_without_subjects() {
        let c = sample().without_subjects(&["Math".to_string()]);
        assert_eq!(c.session_count(), 1);
        assert_eq!(c.days[0].sessions[0].subject, "Art");
        assert_eq!(c.days.len(), 2);
    }

    #[test]
    fn test_serde_unwrapped_shape() {
        let c = sample();
        let json = serde_json::to_value(&c).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["day"], "Monday");
        assert_eq!(json[0]["classes"][0]["subject"], "Math");

        let back: Curriculum = serde_json::from_value(json).unwrap();
        assert_eq!(back, c);
    }
}
