//! The Meeting Store contract and its implementations.
//!
//! Components receive a store at construction rather than reaching for a global
//! connection, so tests can swap in [`InMemoryStore`].
//!
//! - [`memory`] — insertion-ordered in-process store
//! - [`file`] — JSON document persisted to a single file

pub mod file;
pub mod memory;

pub use file::JsonFileStore;
pub use memory::InMemoryStore;

use uuid::Uuid;

use crate::error::Result;
use crate::model::{Meeting, MeetingId};

/// Persistence boundary for meetings.
///
/// Iteration order of [`MeetingStore::find_all`] is whatever the backend yields;
/// callers must not rely on it.
pub trait MeetingStore: Send + Sync {
    /// Every stored meeting.
    fn find_all(&self) -> Result<Vec<Meeting>>;

    /// # Errors
    /// Returns `MeetingError::NotFound` when no meeting has this id.
    fn find_by_id(&self, id: &MeetingId) -> Result<Meeting>;

    /// Store `meeting` under a freshly assigned id, replacing any id it carried.
    fn insert(&self, meeting: Meeting) -> Result<MeetingId>;

    /// Meetings in which `email` has RSVP'd `Yes`.
    fn find_accepted_by_participant(&self, email: &str) -> Result<Vec<Meeting>> {
        Ok(self
            .find_all()?
            .into_iter()
            .filter(|meeting| meeting.has_accepted(email))
            .collect())
    }
}

pub(crate) fn new_meeting_id() -> MeetingId {
    MeetingId(Uuid::new_v4().simple().to_string())
}
