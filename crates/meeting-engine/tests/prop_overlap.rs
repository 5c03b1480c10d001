//! Property-based tests for the overlap rule using proptest.

use meeting_engine::{overlaps, TimeOfDay, TimeRange};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_time() -> impl Strategy<Value = TimeOfDay> {
    (0u8..=23, 0u8..=59).prop_map(|(h, m)| TimeOfDay { hour: h, minute: m })
}

/// Any pair of times, including reversed and zero-length ranges.
fn arb_range() -> impl Strategy<Value = TimeRange> {
    (arb_time(), arb_time()).prop_map(|(start, end)| TimeRange { start, end })
}

/// Ranges where start strictly precedes end.
fn arb_ordered_range() -> impl Strategy<Value = TimeRange> {
    (arb_time(), arb_time())
        .prop_filter("start must differ from end", |(a, b)| a != b)
        .prop_map(|(a, b)| TimeRange {
            start: a.min(b),
            end: a.max(b),
        })
}

fn interval_overlap(a: &TimeRange, b: &TimeRange) -> bool {
    a.start.minutes_of_day() < b.end.minutes_of_day()
        && b.start.minutes_of_day() < a.end.minutes_of_day()
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    /// The hour-then-minute rule agrees with the half-open interval test on
    /// minutes since midnight for every input, ordered or not.
    #[test]
    fn matches_minutes_of_day_interval_test(existing in arb_range(), candidate in arb_range()) {
        prop_assert_eq!(
            overlaps(&existing, &candidate),
            interval_overlap(&existing, &candidate)
        );
    }

    #[test]
    fn well_ordered_range_overlaps_itself(r in arb_ordered_range()) {
        prop_assert!(overlaps(&r, &r));
    }

    #[test]
    fn back_to_back_ranges_never_overlap(
        a in arb_time(),
        b in arb_time(),
        c in arb_time()
    ) {
        let mut t = [a, b, c];
        t.sort();
        let existing = TimeRange { start: t[0], end: t[1] };
        let candidate = TimeRange { start: t[1], end: t[2] };
        prop_assert!(!overlaps(&existing, &candidate));
    }

    #[test]
    fn parse_roundtrips_through_display(t in arb_time()) {
        prop_assert_eq!(TimeOfDay::parse(&t.to_string()).unwrap(), t);
    }
}
