//! Creation path: stamp, check for conflicts, insert.
//!
//! Every creation ends in one of three distinguishable outcomes:
//! `Ok(CreateOutcome::Created)`, `Ok(CreateOutcome::Conflict)`, or `Err(_)` for
//! parse and store failures.
//!
//! A [`Scheduler`] holds a mutex across the check and the insert, so concurrent
//! creations through the same scheduler cannot double-book a participant. Writers
//! that bypass it (another process sharing the same store) are not covered.

use std::sync::Mutex;

use chrono::{SecondsFormat, Utc};
use tracing::info;

use crate::conflict::ConflictChecker;
use crate::error::{MeetingError, Result};
use crate::model::{Meeting, MeetingId};
use crate::store::MeetingStore;

/// Result of a creation attempt that reached a decision.
#[derive(Debug, Clone, PartialEq)]
pub enum CreateOutcome {
    /// The meeting was stored under this id.
    Created(MeetingId),
    /// Nothing was stored; `with` is the accepted meeting that collides.
    Conflict { with: Meeting },
}

pub struct Scheduler<S: MeetingStore> {
    store: S,
    create_lock: Mutex<()>,
}

impl<S: MeetingStore> Scheduler<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            create_lock: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Insert `meeting` unless one of its participants already has an accepted
    /// meeting overlapping it.
    ///
    /// Any client-supplied id is discarded and `creation_time_stamp` is set to the
    /// current UTC time (RFC 3339).
    ///
    /// # Errors
    /// Returns `MeetingError::InvalidTimeFormat` if the meeting's times do not parse,
    /// and propagates store failures.
    pub fn create(&self, mut meeting: Meeting) -> Result<CreateOutcome> {
        meeting.id = None;
        meeting.creation_time_stamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

        let _guard = self
            .create_lock
            .lock()
            .map_err(|_| MeetingError::StoreUnavailable("scheduler lock poisoned".to_string()))?;

        if let Some(blocking) = ConflictChecker::new(&self.store).find_conflict(&meeting)? {
            info!(
                title = %meeting.title,
                blocking = ?blocking.id,
                "meeting rejected: participant already booked"
            );
            return Ok(CreateOutcome::Conflict { with: blocking });
        }

        let id = self.store.insert(meeting)?;
        info!(id = %id, "meeting created");
        Ok(CreateOutcome::Created(id))
    }
}
