//! Decide whether a stored ("existing") range collides with a candidate range.
//!
//! Hours are compared first; minutes only break ties on the boundary hour. Because
//! `(hour, minute)` pairs order the same way as minutes since midnight, this is the
//! half-open interval test: ranges that merely touch (one ends as the other starts)
//! do not overlap.

use tracing::warn;

use crate::model::Meeting;
use crate::time::TimeRange;

/// Whether `existing` overlaps `candidate`, evaluated in this order:
///
/// 1. `existing` ends in an earlier hour than `candidate` starts, or starts in a
///    later hour than `candidate` ends → no overlap.
/// 2. `existing` ends in the hour `candidate` starts, at or before its minute → no
///    overlap.
/// 3. `existing` starts in the hour `candidate` ends, at or after its minute → no
///    overlap.
/// 4. Otherwise → overlap.
pub fn overlaps(existing: &TimeRange, candidate: &TimeRange) -> bool {
    let (e_start, e_end) = (existing.start, existing.end);
    let (c_start, c_end) = (candidate.start, candidate.end);

    if e_end.hour < c_start.hour || e_start.hour > c_end.hour {
        false
    } else if e_end.hour == c_start.hour && e_end.minute <= c_start.minute {
        false
    } else if e_start.hour == c_end.hour && e_start.minute >= c_end.minute {
        false
    } else {
        true
    }
}

/// Whether a stored meeting overlaps `candidate`.
///
/// A stored meeting whose own times do not parse fails only this comparison: it is
/// logged and reported as non-overlapping.
pub(crate) fn meeting_overlaps(meeting: &Meeting, candidate: &TimeRange) -> bool {
    match meeting.time_range() {
        Ok(existing) => overlaps(&existing, candidate),
        Err(e) => {
            warn!(
                id = ?meeting.id,
                error = %e,
                "skipping stored meeting with unparseable time range"
            );
            false
        }
    }
}
