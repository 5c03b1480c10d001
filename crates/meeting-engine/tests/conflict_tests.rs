//! Tests for the RSVP-aware conflict check.

use meeting_engine::{
    ConflictChecker, InMemoryStore, Meeting, MeetingError, MeetingStore, Participant, Rsvp,
};

fn meeting(title: &str, start: &str, end: &str, participants: &[(&str, Rsvp)]) -> Meeting {
    Meeting::new(
        title,
        start,
        end,
        participants
            .iter()
            .map(|(email, rsvp)| Participant::new(email.split('@').next().unwrap(), *email, rsvp.clone()))
            .collect(),
    )
}

#[test]
fn participant_without_accepted_meetings_has_no_conflict() {
    let store = InMemoryStore::new();
    let candidate = meeting("Sync", "0900", "1000", &[("a@x.com", Rsvp::Yes)]);

    let checker = ConflictChecker::new(&store);
    assert!(!checker.has_conflict(&candidate).unwrap());
}

#[test]
fn overlapping_accepted_meeting_is_a_conflict() {
    let store = InMemoryStore::with_meetings([meeting(
        "Standup",
        "0930",
        "1030",
        &[("a@x.com", Rsvp::Yes)],
    )]);
    let candidate = meeting("Sync", "1000", "1100", &[("a@x.com", Rsvp::Pending)]);

    let checker = ConflictChecker::new(&store);
    assert!(checker.has_conflict(&candidate).unwrap());

    let blocking = checker.find_conflict(&candidate).unwrap().unwrap();
    assert_eq!(blocking.title, "Standup");
}

#[test]
fn declined_and_pending_meetings_do_not_block() {
    let store = InMemoryStore::with_meetings([
        meeting("Declined", "0900", "1100", &[("a@x.com", Rsvp::No)]),
        meeting("Undecided", "0900", "1100", &[("a@x.com", Rsvp::Pending)]),
    ]);
    let candidate = meeting("Sync", "0930", "1030", &[("a@x.com", Rsvp::Yes)]);

    assert!(!ConflictChecker::new(&store).has_conflict(&candidate).unwrap());
}

#[test]
fn another_participants_acceptance_does_not_count() {
    // b accepted, a did not; the candidate only involves a.
    let store = InMemoryStore::with_meetings([meeting(
        "Review",
        "0900",
        "1100",
        &[("a@x.com", Rsvp::No), ("b@x.com", Rsvp::Yes)],
    )]);
    let candidate = meeting("Sync", "0930", "1030", &[("a@x.com", Rsvp::Yes)]);

    assert!(!ConflictChecker::new(&store).has_conflict(&candidate).unwrap());
}

#[test]
fn any_participant_can_cause_the_conflict() {
    let store = InMemoryStore::with_meetings([meeting(
        "Interview",
        "1400",
        "1500",
        &[("c@x.com", Rsvp::Yes)],
    )]);
    let candidate = meeting(
        "Planning",
        "1430",
        "1530",
        &[("a@x.com", Rsvp::Yes), ("b@x.com", Rsvp::Yes), ("c@x.com", Rsvp::Pending)],
    );

    let blocking = ConflictChecker::new(&store)
        .find_conflict(&candidate)
        .unwrap()
        .expect("c@x.com is booked");
    assert_eq!(blocking.title, "Interview");
}

#[test]
fn adjacent_accepted_meeting_is_not_a_conflict() {
    let store = InMemoryStore::with_meetings([meeting(
        "Morning",
        "0900",
        "1000",
        &[("a@x.com", Rsvp::Yes)],
    )]);
    let candidate = meeting("Next", "1000", "1100", &[("a@x.com", Rsvp::Yes)]);

    assert!(!ConflictChecker::new(&store).has_conflict(&candidate).unwrap());
}

#[test]
fn email_match_is_case_sensitive() {
    let store = InMemoryStore::with_meetings([meeting(
        "Standup",
        "0900",
        "1000",
        &[("A@x.com", Rsvp::Yes)],
    )]);
    let candidate = meeting("Sync", "0900", "1000", &[("a@x.com", Rsvp::Yes)]);

    assert!(!ConflictChecker::new(&store).has_conflict(&candidate).unwrap());
}

#[test]
fn malformed_candidate_time_is_an_error() {
    let store = InMemoryStore::new();
    let candidate = meeting("Sync", "9am", "1000", &[("a@x.com", Rsvp::Yes)]);

    let err = ConflictChecker::new(&store).has_conflict(&candidate).unwrap_err();
    assert!(matches!(err, MeetingError::InvalidTimeFormat { .. }));
}

#[test]
fn malformed_stored_meeting_is_skipped() {
    let store = InMemoryStore::with_meetings([
        meeting("Broken", "xx", "1000", &[("a@x.com", Rsvp::Yes)]),
        meeting("Fine", "1300", "1400", &[("a@x.com", Rsvp::Yes)]),
    ]);
    let morning = meeting("Sync", "0900", "1000", &[("a@x.com", Rsvp::Yes)]);
    let afternoon = meeting("Sync", "1330", "1430", &[("a@x.com", Rsvp::Yes)]);

    let checker = ConflictChecker::new(&store);
    assert!(!checker.has_conflict(&morning).unwrap());
    assert!(checker.has_conflict(&afternoon).unwrap());
}

/// A store whose every read fails, standing in for an unreachable backend.
struct UnreachableStore;

impl MeetingStore for UnreachableStore {
    fn find_all(&self) -> meeting_engine::error::Result<Vec<Meeting>> {
        Err(MeetingError::StoreUnavailable("connection refused".to_string()))
    }

    fn find_by_id(&self, id: &meeting_engine::MeetingId) -> meeting_engine::error::Result<Meeting> {
        Err(MeetingError::NotFound(id.to_string()))
    }

    fn insert(&self, _meeting: Meeting) -> meeting_engine::error::Result<meeting_engine::MeetingId> {
        Err(MeetingError::StoreUnavailable("connection refused".to_string()))
    }
}

#[test]
fn unreachable_store_surfaces_as_error() {
    let candidate = meeting("Sync", "0900", "1000", &[("a@x.com", Rsvp::Yes)]);

    let err = ConflictChecker::new(&UnreachableStore)
        .has_conflict(&candidate)
        .unwrap_err();
    assert!(matches!(err, MeetingError::StoreUnavailable(_)));
}

#[test]
fn candidate_without_participants_never_conflicts() {
    let store = InMemoryStore::with_meetings([meeting(
        "Standup",
        "0900",
        "1000",
        &[("a@x.com", Rsvp::Yes)],
    )]);
    let candidate = meeting("Solo", "0900", "1000", &[]);

    assert!(!ConflictChecker::new(&store).has_conflict(&candidate).unwrap());
}
