//! Integration tests for the date-range value types
//!
//! Exercises the arithmetic and validation properties the availability
//! engine relies on: inclusive expansion, derived end dates, and fail-fast
//! construction.

use chrono::NaiveDate;
use rentcal_domain::{AvailabilityError, DateRange, RentalRequest};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

/// For every well-formed range, expansion yields `(end - start) + 1` days,
/// the first equal to start and the last equal to end.
#[test]
fn expansion_length_matches_span() {
    let cases = [
        (day(2024, 6, 10), day(2024, 6, 10)),
        (day(2024, 6, 10), day(2024, 6, 12)),
        (day(2024, 1, 1), day(2024, 12, 31)),
        (day(2023, 12, 30), day(2024, 1, 2)),
    ];

    for (start, end) in cases {
        let range = DateRange::new(start, end).expect("well-formed range");
        let days: Vec<NaiveDate> = range.days().collect();

        let expected = (end - start).num_days() + 1;
        assert_eq!(days.len() as i64, expected, "span {start}..={end}");
        assert_eq!(days.first(), Some(&start));
        assert_eq!(days.last(), Some(&end));

        // Consecutive days, no gaps or duplicates.
        for pair in days.windows(2) {
            assert_eq!((pair[1] - pair[0]).num_days(), 1);
        }
    }
}

/// `end_date - start` in days always equals `days - 1`.
#[test]
fn derived_end_date_matches_length() {
    for days in 1..=30 {
        let request = RentalRequest::new(day(2024, 6, 1), days).expect("positive length");
        assert_eq!((request.end_date() - request.start()).num_days(), i64::from(days) - 1);
    }
}

#[test]
fn year_boundary_expansion() {
    let range = DateRange::new(day(2023, 12, 30), day(2024, 1, 2)).expect("well-formed range");
    let days: Vec<NaiveDate> = range.days().collect();

    assert_eq!(
        days,
        vec![day(2023, 12, 30), day(2023, 12, 31), day(2024, 1, 1), day(2024, 1, 2)]
    );
}

#[test]
fn reversed_range_fails_fast() {
    let err = DateRange::new(day(2024, 6, 12), day(2024, 6, 10)).unwrap_err();
    assert!(matches!(err, AvailabilityError::InvalidRange { .. }));
}

#[test]
fn zero_length_request_fails_fast() {
    let err = RentalRequest::new(day(2024, 6, 12), 0).unwrap_err();
    assert!(matches!(err, AvailabilityError::InvalidRequestLength(0)));
}

/// Errors serialize with a stable tag so callers can log and branch on them.
#[test]
fn errors_serialize_with_type_tag() {
    let err = AvailabilityError::InvalidDate("not-a-date".to_string());
    let json = serde_json::to_value(&err).expect("serializable error");
    assert_eq!(json["type"], "InvalidDate");
}

#[test]
fn reason_survives_serde_round_trip() {
    let range = DateRange::new(day(2024, 6, 10), day(2024, 6, 12))
        .expect("well-formed range")
        .with_reason("Maintenance");

    let json = serde_json::to_string(&range).expect("serializable range");
    let back: DateRange = serde_json::from_str(&json).expect("deserializable range");

    assert_eq!(back, range);
    assert_eq!(back.reason(), Some("Maintenance"));
}
