//! Timetable domain models.
//!
//! Provides the data types for a weekly curriculum and the derived keys
//! used to compare sessions.
//!
//! # Vocabulary
//!
//! | Type | Meaning |
//! |------|---------|
//! | Session | One class meeting (subject, type, groups, time, location) |
//! | Day | Named, ordered list of sessions |
//! | Curriculum | Ordered list of days |
//! | Signature | Room-independent identity of a lecture occurrence |
//! | TimeRange | Time label with its parsed minute interval |

mod curriculum;
mod session;
mod signature;
mod time_range;

pub use curriculum::{Curriculum, Day};
pub use session::{Session, SessionType};
pub use signature::{LocatedSignature, Signature};
pub use time_range::{labels_conflict, MinuteWindow, TimeRange};
