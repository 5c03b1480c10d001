//! # meeting-engine
//!
//! Conflict detection for participant meetings.
//!
//! A meeting may only be created when none of its participants already has an
//! *accepted* (RSVP `Yes`) meeting whose time range overlaps the new one. The
//! engine owns that decision plus the read queries over the stored meetings;
//! persistence sits behind the [`MeetingStore`] trait so callers inject the
//! store they want.
//!
//! ## Modules
//!
//! - [`time`] — `HHMM` strings → [`TimeOfDay`] / [`TimeRange`]
//! - [`overlap`] — the overlap rule used by every check
//! - [`conflict`] — RSVP-aware check for a candidate meeting
//! - [`query`] — filter stored meetings by participant or time range
//! - [`schedule`] — check-and-insert creation path
//! - [`store`] — the Meeting Store contract and its implementations
//! - [`model`] — `Meeting` / `Participant` wire types
//! - [`error`] — Error types

pub mod conflict;
pub mod error;
pub mod model;
pub mod overlap;
pub mod query;
pub mod schedule;
pub mod store;
pub mod time;

pub use conflict::ConflictChecker;
pub use error::MeetingError;
pub use model::{Meeting, MeetingId, Participant, Rsvp};
pub use overlap::overlaps;
pub use query::MeetingQueryService;
pub use schedule::{CreateOutcome, Scheduler};
pub use store::{InMemoryStore, JsonFileStore, MeetingStore};
pub use time::{TimeOfDay, TimeRange};
