use chrono::{FixedOffset, TimeZone, Utc};
use proptest::prelude::*;
use sysmgr_types::{EXACT_FRACTIONAL_MILLIS, Timestamp};

// ── Construction ─────────────────────────────────────────────────

#[test]
fn from_secs_scales_to_millis() {
    let ts = Timestamp::from_secs(1_700_000_000);
    assert_eq!(ts.as_millis(), 1_700_000_000_000);
}

#[test]
fn from_secs_f64_rounds_to_nearest_milli() {
    let ts = Timestamp::from_secs_f64(1.2345).unwrap();
    assert_eq!(ts.as_millis(), 1235);
}

#[test]
fn from_secs_f64_rejects_non_finite() {
    assert!(Timestamp::from_secs_f64(f64::NAN).is_err());
    assert!(Timestamp::from_secs_f64(f64::INFINITY).is_err());
}

#[test]
fn now_is_after_epoch() {
    assert!(Timestamp::now() > Timestamp::UNIX_EPOCH);
}

// ── Zone normalization ───────────────────────────────────────────

#[test]
fn offsets_naming_the_same_instant_are_equal() {
    let utc = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    let plus_two = FixedOffset::east_opt(2 * 3600)
        .unwrap()
        .with_ymd_and_hms(2024, 3, 1, 14, 0, 0)
        .unwrap();
    assert_eq!(Timestamp::from(utc), Timestamp::from(plus_two));
}

#[test]
fn to_datetime_round_trips() {
    let utc = Utc.with_ymd_and_hms(2021, 7, 4, 8, 30, 15).unwrap();
    let ts = Timestamp::from(utc);
    assert_eq!(ts.to_datetime(), Some(utc));
}

// ── Text form ────────────────────────────────────────────────────

#[test]
fn display_is_rfc3339_with_millis() {
    let ts = Timestamp::from_millis(1_500);
    assert_eq!(ts.to_string(), "1970-01-01T00:00:01.500Z");
}

#[test]
fn parses_rfc3339_with_offset() {
    let ts: Timestamp = "1970-01-01T01:00:01+01:00".parse().unwrap();
    assert_eq!(ts.as_millis(), 1_000);
}

#[test]
fn parse_rejects_garbage() {
    assert!("yesterday".parse::<Timestamp>().is_err());
}

// ── Serde ────────────────────────────────────────────────────────

#[test]
fn whole_seconds_serialize_as_integer() {
    let json = serde_json::to_string(&Timestamp::from_secs(42)).unwrap();
    assert_eq!(json, "42");
}

#[test]
fn fractional_seconds_serialize_as_float() {
    let json = serde_json::to_string(&Timestamp::from_millis(42_250)).unwrap();
    assert_eq!(json, "42.25");
}

#[test]
fn fractional_seconds_are_exact_up_to_the_bound() {
    for millis in [
        EXACT_FRACTIONAL_MILLIS - 1,
        -(EXACT_FRACTIONAL_MILLIS - 1),
        1_700_000_000_123,
    ] {
        let ts = Timestamp::from_millis(millis);
        let json = serde_json::to_string(&ts).unwrap();
        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ts, "{json}");
    }
    assert_eq!(
        serde_json::to_string(&Timestamp::from_millis(EXACT_FRACTIONAL_MILLIS - 1)).unwrap(),
        "999999999999.999"
    );
}

#[test]
fn fractional_seconds_past_the_bound_are_refused() {
    assert!(serde_json::to_string(&Timestamp::from_millis(EXACT_FRACTIONAL_MILLIS + 1)).is_err());
    assert!(serde_json::to_string(&Timestamp::from_millis(-EXACT_FRACTIONAL_MILLIS - 1)).is_err());
    assert!(serde_json::to_string(&Timestamp::from_millis(9_007_199_254_740_993)).is_err());
}

#[test]
fn whole_seconds_are_exact_past_the_bound() {
    // Beyond 2^53 ms, where an f64 can no longer hold every millisecond.
    let ts = Timestamp::from_secs(9_007_199_254_740_993);
    let json = serde_json::to_string(&ts).unwrap();
    assert_eq!(json, "9007199254740993");
    let back: Timestamp = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ts);
}

#[test]
fn deserializes_numbers_and_strings() {
    let a: Timestamp = serde_json::from_str("42").unwrap();
    let b: Timestamp = serde_json::from_str("42.0").unwrap();
    let c: Timestamp = serde_json::from_str("\"1970-01-01T00:00:42Z\"").unwrap();
    assert_eq!(a, Timestamp::from_secs(42));
    assert_eq!(a, b);
    assert_eq!(a, c);
}

#[test]
fn deserialize_rejects_booleans() {
    assert!(serde_json::from_str::<Timestamp>("true").is_err());
}

// ── Properties ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn serde_preserves_millis(millis in -(EXACT_FRACTIONAL_MILLIS - 1)..EXACT_FRACTIONAL_MILLIS) {
        let ts = Timestamp::from_millis(millis);
        let json = serde_json::to_string(&ts).unwrap();
        let back: Timestamp = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, ts);
    }

    #[test]
    fn ordering_follows_millis(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!(
            Timestamp::from_millis(a).cmp(&Timestamp::from_millis(b)),
            a.cmp(&b)
        );
    }
}
