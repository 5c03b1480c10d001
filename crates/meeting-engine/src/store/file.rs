//! Meeting store persisted as a JSON array in a single file.
//!
//! The whole document is read on every call and rewritten on every insert. Writes
//! land in a sibling `.tmp` file that is then renamed over the original, so readers
//! never observe a half-written document.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::debug;

use crate::error::{MeetingError, Result};
use crate::model::{Meeting, MeetingId};
use crate::store::{new_meeting_id, MeetingStore};

#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    // Serializes read-modify-write cycles from this process.
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Open a store at `path`. The file is created on first insert.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<Meeting>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(MeetingError::StoreUnavailable(format!(
                    "failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        Ok(serde_json::from_str(&content)?)
    }

    fn save(&self, meetings: &[Meeting]) -> Result<()> {
        let json = serde_json::to_string_pretty(meetings)?;

        let mut tmp_name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "meetings.json".into());
        tmp_name.push(".tmp");
        let tmp_path = self.path.with_file_name(tmp_name);

        fs::write(&tmp_path, json).map_err(|e| {
            MeetingError::StoreUnavailable(format!("failed to write {}: {}", tmp_path.display(), e))
        })?;
        fs::rename(&tmp_path, &self.path).map_err(|e| {
            MeetingError::StoreUnavailable(format!(
                "failed to replace {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}

impl MeetingStore for JsonFileStore {
    fn find_all(&self) -> Result<Vec<Meeting>> {
        self.load()
    }

    fn find_by_id(&self, id: &MeetingId) -> Result<Meeting> {
        self.load()?
            .into_iter()
            .find(|m| m.id.as_ref() == Some(id))
            .ok_or_else(|| MeetingError::NotFound(id.to_string()))
    }

    fn insert(&self, mut meeting: Meeting) -> Result<MeetingId> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| MeetingError::StoreUnavailable("store write lock poisoned".to_string()))?;

        let mut meetings = self.load()?;
        let id = new_meeting_id();
        meeting.id = Some(id.clone());
        meetings.push(meeting);
        self.save(&meetings)?;

        debug!(id = %id, path = %self.path.display(), count = meetings.len(), "meeting stored");
        Ok(id)
    }
}
