//! RSVP-aware conflict check for a candidate meeting.
//!
//! For each participant of the candidate, the meetings that participant has
//! accepted are fetched from the store and compared against the candidate's time
//! range. The first collision ends the walk. Meetings answered `No` or still
//! pending never block anything.

use tracing::debug;

use crate::error::Result;
use crate::model::Meeting;
use crate::overlap::meeting_overlaps;
use crate::store::MeetingStore;

/// Read-only conflict check against a borrowed store.
pub struct ConflictChecker<'a, S: MeetingStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: MeetingStore + ?Sized> ConflictChecker<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// True when any participant of `candidate` has an accepted meeting that
    /// overlaps it.
    ///
    /// # Errors
    /// Returns `MeetingError::InvalidTimeFormat` if the candidate's own start or end
    /// time does not parse, and propagates store failures.
    pub fn has_conflict(&self, candidate: &Meeting) -> Result<bool> {
        Ok(self.find_conflict(candidate)?.is_some())
    }

    /// The first accepted meeting that collides with `candidate`, if any.
    pub fn find_conflict(&self, candidate: &Meeting) -> Result<Option<Meeting>> {
        let wanted = candidate.time_range()?;

        for participant in &candidate.participants {
            let accepted = self.store.find_accepted_by_participant(&participant.email)?;
            if let Some(blocking) = accepted
                .into_iter()
                .find(|meeting| meeting_overlaps(meeting, &wanted))
            {
                debug!(
                    email = %participant.email,
                    blocking = ?blocking.id,
                    range = %wanted,
                    "candidate overlaps an accepted meeting"
                );
                return Ok(Some(blocking));
            }
        }

        Ok(None)
    }
}
