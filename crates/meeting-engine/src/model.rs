//! Meeting and participant records as they travel over the wire and into the store.
//!
//! Field names are an external contract (`_id`, `startTime`, `creationTimeStamp`, ...)
//! shared with existing consumers, so every rename here is load-bearing.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Result;
use crate::time::TimeRange;

/// Opaque, store-assigned meeting identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MeetingId(pub String);

impl MeetingId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MeetingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MeetingId {
    fn from(s: &str) -> Self {
        MeetingId(s.to_string())
    }
}

/// A participant's response to a meeting invitation.
///
/// The value is stored exactly as the client sent it: an absent, null, or empty
/// `rsvp` stays absent, and unrecognized strings are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Rsvp {
    Yes,
    No,
    Pending,
    /// No `rsvp` was given.
    #[default]
    Unanswered,
    Other(String),
}

impl Rsvp {
    pub fn as_str(&self) -> &str {
        match self {
            Rsvp::Yes => "Yes",
            Rsvp::No => "No",
            Rsvp::Pending => "Pending",
            Rsvp::Unanswered => "",
            Rsvp::Other(raw) => raw,
        }
    }

    pub fn is_unanswered(&self) -> bool {
        *self == Rsvp::Unanswered
    }

    fn from_wire(s: &str) -> Self {
        match s {
            "Yes" => Rsvp::Yes,
            "No" => Rsvp::No,
            "Pending" => Rsvp::Pending,
            "" => Rsvp::Unanswered,
            other => Rsvp::Other(other.to_string()),
        }
    }
}

impl Serialize for Rsvp {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Rsvp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(Rsvp::from_wire).unwrap_or_default())
    }
}

/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Participant {
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub name: String,
    /// Identity key for the participant; there is no separate user record.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub email: String,
    #[serde(default, skip_serializing_if = "Rsvp::is_unanswered")]
    pub rsvp: Rsvp,
}

impl Participant {
    pub fn new(name: impl Into<String>, email: impl Into<String>, rsvp: Rsvp) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            rsvp,
        }
    }

    /// Only a `Yes` counts toward conflict detection.
    pub fn has_accepted(&self) -> bool {
        self.rsvp == Rsvp::Yes
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Meeting {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<MeetingId>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub participants: Vec<Participant>,
    #[serde(
        rename = "startTime",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub start_time: String,
    #[serde(
        rename = "endTime",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub end_time: String,
    /// Set by the server on insertion; client-supplied values are overwritten.
    #[serde(
        rename = "creationTimeStamp",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub creation_time_stamp: String,
}

impl Meeting {
    pub fn new(
        title: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        participants: Vec<Participant>,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            participants,
            start_time: start_time.into(),
            end_time: end_time.into(),
            creation_time_stamp: String::new(),
        }
    }

    /// Exact, case-sensitive email match against any participant.
    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p.email == email)
    }

    /// True when a participant with this email has answered `Yes`.
    pub fn has_accepted(&self, email: &str) -> bool {
        self.participants
            .iter()
            .any(|p| p.email == email && p.has_accepted())
    }

    pub fn time_range(&self) -> Result<TimeRange> {
        TimeRange::parse(&self.start_time, &self.end_time)
    }
}
