//! In-process meeting store backed by a `Vec`.

use std::sync::{PoisonError, RwLock};

use crate::error::{MeetingError, Result};
use crate::model::{Meeting, MeetingId};
use crate::store::{new_meeting_id, MeetingStore};

/// Keeps meetings in insertion order. Nothing survives the process.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    meetings: RwLock<Vec<Meeting>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store, assigning ids to every meeting.
    pub fn with_meetings(meetings: impl IntoIterator<Item = Meeting>) -> Self {
        let meetings = meetings
            .into_iter()
            .map(|mut meeting| {
                meeting.id = Some(new_meeting_id());
                meeting
            })
            .collect();
        Self {
            meetings: RwLock::new(meetings),
        }
    }

    /// Number of stored meetings, counted even if a writer panicked mid-insert.
    pub fn len(&self) -> usize {
        self.meetings
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned() -> MeetingError {
    MeetingError::StoreUnavailable("in-memory store lock poisoned".to_string())
}

impl MeetingStore for InMemoryStore {
    fn find_all(&self) -> Result<Vec<Meeting>> {
        Ok(self.meetings.read().map_err(|_| poisoned())?.clone())
    }

    fn find_by_id(&self, id: &MeetingId) -> Result<Meeting> {
        self.meetings
            .read()
            .map_err(|_| poisoned())?
            .iter()
            .find(|m| m.id.as_ref() == Some(id))
            .cloned()
            .ok_or_else(|| MeetingError::NotFound(id.to_string()))
    }

    fn insert(&self, mut meeting: Meeting) -> Result<MeetingId> {
        let id = new_meeting_id();
        meeting.id = Some(id.clone());
        self.meetings.write().map_err(|_| poisoned())?.push(meeting);
        Ok(id)
    }
}
