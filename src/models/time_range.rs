//! Time-of-day ranges.
//!
//! Session times arrive as human-readable labels such as `"10:15-12:00"`.
//! A label is parsed best-effort into a half-open minute interval; labels
//! that do not parse keep only their raw text and are compared by equality.
//!
//! # Conflict Rule
//! - Both labels parse: conflict iff the intervals overlap
//!   (`start_a < end_b && start_b < end_a`). Touching endpoints do not conflict.
//! - Either label fails to parse: conflict iff the trimmed labels are equal.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A minute-of-day interval [start, end).
///
/// Half-open interval: includes start, excludes end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MinuteWindow {
    /// Interval start (minutes after midnight, inclusive).
    pub start_min: u32,
    /// Interval end (minutes after midnight, exclusive).
    pub end_min: u32,
}

impl MinuteWindow {
    /// Creates a new window.
    pub fn new(start_min: u32, end_min: u32) -> Self {
        Self { start_min, end_min }
    }

    /// Length of this window in minutes.
    #[inline]
    pub fn duration_min(&self) -> u32 {
        self.end_min.saturating_sub(self.start_min)
    }

    /// Whether two windows overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_min < other.end_min && other.start_min < self.end_min
    }
}

/// A session time: the raw label plus its parsed window, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeRange {
    label: String,
    window: Option<MinuteWindow>,
}

impl TimeRange {
    /// Parses a label. Never fails; see [`TimeRange::window`].
    pub fn parse(label: impl Into<String>) -> Self {
        let label = label.into();
        let window = parse_window(&label);
        Self { label, window }
    }

    /// The label exactly as supplied.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The parsed interval, or `None` for a malformed label.
    pub fn window(&self) -> Option<MinuteWindow> {
        self.window
    }

    /// Whether the label parsed into an interval.
    #[inline]
    pub fn is_parsed(&self) -> bool {
        self.window.is_some()
    }

    /// Whether two session times collide.
    pub fn conflicts_with(&self, other: &Self) -> bool {
        match (self.window, other.window) {
            (Some(a), Some(b)) => a.overlaps(&b),
            _ => self.label.trim() == other.label.trim(),
        }
    }
}

/// Whether two raw time labels collide.
///
/// Convenience wrapper over [`TimeRange::conflicts_with`].
pub fn labels_conflict(a: &str, b: &str) -> bool {
    TimeRange::parse(a).conflicts_with(&TimeRange::parse(b))
}

/// Parses `H?H:MM-H?H:MM` (whitespace allowed around the dash).
fn parse_window(label: &str) -> Option<MinuteWindow> {
    let (start, end) = label.trim().split_once('-')?;
    let start_min = parse_clock(start.trim()).filter(|&m| m < DAY_END)?;
    let end_min = parse_clock(end.trim())?;
    if start_min >= end_min {
        return None;
    }
    Some(MinuteWindow::new(start_min, end_min))
}

/// Minutes in a day; `24:00` is only valid as an end time.
const DAY_END: u32 = 24 * 60;

/// Parses `H:MM` or `HH:MM` into minutes after midnight, up to `24:00`.
fn parse_clock(text: &str) -> Option<u32> {
    let (hours, minutes) = text.split_once(':')?;
    if hours.is_empty() || hours.len() > 2 || minutes.len() != 2 {
        return None;
    }
    if !hours.bytes().chain(minutes.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hours: u32 = hours.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;
    if minutes >= 60 {
        return None;
    }
    Some(hours * 60 + minutes).filter(|&m| m <= DAY_END)
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

impl From<&str> for TimeRange {
    fn from(label: &str) -> Self {
        Self::parse(label)
    }
}

impl From<String> for TimeRange {
    fn from(label: String) -> Self {
        Self::parse(label)
    }
}

// Serialized as the bare label; the window is re-derived on load.
impl Serialize for TimeRange {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label)
    }
}

impl<'de> Deserialize<'de> for TimeRange {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Self::parse(label))
    }
}
