use chrono::{DateTime, TimeZone, Utc};
use chronospan::{FixedClock, Precision, Span, Unit, UtcSpan};

fn dt(y: i32, mo: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, 0, 0, 0).unwrap()
}

fn span(a: (i32, u32, u32), b: (i32, u32, u32)) -> UtcSpan {
    Span::new(dt(a.0, a.1, a.2), dt(b.0, b.1, b.2))
}

#[test]
fn start_never_exceeds_end() {
    let pairs = [
        (dt(2020, 1, 1), dt(2020, 12, 31)),
        (dt(2020, 12, 31), dt(2020, 1, 1)),
        (dt(2020, 6, 1), dt(2020, 6, 1)),
    ];
    for (a, b) in pairs {
        let s = Span::new(a, b);
        assert!(s.start() <= s.end());
    }
}

#[test]
fn overlapping_spans_scenario() {
    let i = span((2020, 1, 1), (2020, 1, 31));
    let j = span((2020, 1, 15), (2020, 2, 15));

    assert!(i.overlaps(&j));
    assert!(!i.disjoint(&j));
    assert_eq!(i.common(&j), Some(span((2020, 1, 15), (2020, 1, 31))));
}

#[test]
fn disjoint_spans_scenario() {
    let i = span((2020, 1, 1), (2020, 1, 10));
    let j = span((2020, 2, 1), (2020, 2, 10));

    assert!(i.disjoint(&j));
    assert_eq!(i.gap(&j), Some(span((2020, 1, 10), (2020, 2, 1))));

    // Merging disjoint spans is a no-op copy of the left operand.
    let merged = i.merge(&j);
    assert!(merged.same(&i));
    assert_ne!(merged, i.merge_outer(&j));
}

#[test]
fn split_scenario() {
    let i = span((2020, 1, 1), (2020, 1, 31));

    let halves = i.split(dt(2020, 1, 15));
    assert_eq!(halves.len(), 2);
    assert_eq!(halves[0], span((2020, 1, 1), (2020, 1, 15)));
    assert_eq!(halves[1], span((2020, 1, 15), (2020, 1, 31)));

    assert!(i.split(dt(2021, 6, 1)).is_empty());
}

#[test]
fn strict_containment_scenario() {
    let i = span((2020, 1, 1), (2020, 12, 31));
    let j = span((2020, 6, 1), (2020, 6, 30));

    assert!(i.encloses(&j));
    assert!(j.within(&i));
    assert!(!i.within(&j));
}

#[test]
fn disjoint_equals_not_overlaps_across_configurations() {
    let spans = [
        span((2020, 1, 1), (2020, 1, 10)),
        span((2020, 1, 5), (2020, 1, 20)),
        span((2020, 1, 10), (2020, 1, 12)),
        span((2020, 2, 1), (2020, 2, 10)),
        span((2020, 1, 3), (2020, 1, 3)),
    ];
    for a in &spans {
        for b in &spans {
            assert_eq!(a.disjoint(b), !a.overlaps(b), "{a} vs {b}");
            assert_eq!(a.gap(b).is_none(), !a.disjoint(b), "{a} vs {b}");
            let merged = a.merge(b);
            if a.disjoint(b) {
                assert!(merged.same(a));
            } else {
                assert!(merged.same(&a.merge_outer(b)));
            }
        }
    }
}

#[test]
fn copies_never_alias_their_source() {
    let original = span((2020, 1, 1), (2020, 1, 31));
    let copy = original;

    assert!(original.same(&copy));
    let shifted = copy.shift(Unit::Month, 1);
    assert!(original.same(&span((2020, 1, 1), (2020, 1, 31))));
    assert!(!shifted.same(&original));
}

#[test]
fn calendar_layer_composes_with_the_algebra() {
    let clock = FixedClock(Utc.with_ymd_and_hms(2020, 6, 15, 14, 30, 0).unwrap());

    let today = Span::today(&clock, Precision::Second);
    let this_month = Span::month(clock.0, Precision::Second);
    let this_year = Span::year(clock.0, Precision::Second);

    assert!(today.within(&this_month));
    assert!(this_year.encloses(&this_month));
    assert_eq!(this_month.duration_in(Unit::Day), 29);
    assert_eq!(this_year.duration_in(Unit::Month), 11);

    let next_month = this_month.shift(Unit::Month, 1);
    assert!(this_month.disjoint(&next_month));
    assert_eq!(next_month.start(), dt(2020, 7, 1));
}

#[test]
fn parse_feeds_the_algebra() {
    let booked = Span::parse("2026-08-01T09:00:00Z", "2026-08-01T17:00:00Z").unwrap();
    let requested = Span::parse("2026-08-01T12:00:00Z", "2026-08-01T20:00:00Z").unwrap();

    let clash = booked.common(&requested).unwrap();
    assert_eq!(clash.duration_in(Unit::Hour), 5);
    assert!(Span::parse("yesterday-ish", "2026-08-01T09:00:00Z").is_err());
}

#[cfg(feature = "serde")]
#[test]
fn serde_roundtrip_preserves_ordering_invariant() {
    let original = span((2020, 1, 1), (2020, 1, 31));
    let json = serde_json::to_string(&original).unwrap();
    assert!(json.contains("start"));
    assert!(json.contains("end"));

    let back: UtcSpan = serde_json::from_str(&json).unwrap();
    assert!(back.same(&original));

    // Hand-written input with swapped fields is re-normalized.
    let swapped: UtcSpan = serde_json::from_str(
        r#"{"start":"2020-02-01T00:00:00Z","end":"2020-01-01T00:00:00Z"}"#,
    )
    .unwrap();
    assert!(swapped.start() <= swapped.end());
    assert_eq!(swapped.start(), dt(2020, 1, 1));
}
