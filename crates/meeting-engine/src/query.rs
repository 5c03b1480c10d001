//! Read-side filters over the stored meetings.
//!
//! Both filters scan the full collection and keep store iteration order. No match
//! is an empty `Vec`, never an error.

use tracing::debug;

use crate::error::Result;
use crate::model::{Meeting, MeetingId};
use crate::overlap::meeting_overlaps;
use crate::store::MeetingStore;
use crate::time::TimeRange;

pub struct MeetingQueryService<'a, S: MeetingStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: MeetingStore + ?Sized> MeetingQueryService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// # Errors
    /// Returns `MeetingError::NotFound` when no meeting has this id.
    pub fn find_by_id(&self, id: &MeetingId) -> Result<Meeting> {
        self.store.find_by_id(id)
    }

    /// Meetings listing `email` among their participants (exact, case-sensitive).
    pub fn find_by_participant(&self, email: &str) -> Result<Vec<Meeting>> {
        let meetings: Vec<Meeting> = self
            .store
            .find_all()?
            .into_iter()
            .filter(|meeting| meeting.has_participant(email))
            .collect();

        debug!(email, matches = meetings.len(), "queried meetings by participant");
        Ok(meetings)
    }

    /// Meetings whose time range overlaps `[start, end)`.
    ///
    /// The query range plays the candidate role and each stored meeting the
    /// existing role in [`overlaps`](crate::overlap::overlaps).
    ///
    /// # Errors
    /// Returns `MeetingError::InvalidTimeFormat` if `start` or `end` does not parse.
    pub fn find_by_time_overlap(&self, start: &str, end: &str) -> Result<Vec<Meeting>> {
        let wanted = TimeRange::parse(start, end)?;

        let meetings: Vec<Meeting> = self
            .store
            .find_all()?
            .into_iter()
            .filter(|meeting| meeting_overlaps(meeting, &wanted))
            .collect();

        debug!(range = %wanted, matches = meetings.len(), "queried meetings by time");
        Ok(meetings)
    }
}
