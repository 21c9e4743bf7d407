use chrono::{DateTime, TimeZone, Utc};
use plotfmt::error::FormatError;
use plotfmt::interval::{
    calculate_interval, interval_to_ms, interval_to_seconds, parse_interval, round_interval,
    seconds_to_interval, Interval, IntervalUnit, TimeRange,
};

// Helper: build a UTC timestamp
fn utc(year: i32, month: u32, day: u32, h: u32, m: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, h, m, s).unwrap()
}

// The curated nice-step table, in milliseconds.
const NICE_STEPS: [i64; 16] = [
    100,
    1_000,
    5_000,
    10_000,
    30_000,
    60_000,
    300_000,
    600_000,
    1_800_000,
    3_600_000,
    10_800_000,
    43_200_000,
    86_400_000,
    604_800_000,
    2_592_000_000,
    31_536_000_000,
];

// ── Parsing ──────────────────────────────────────────────────────────────────

#[test]
fn parse_five_minutes() {
    let iv = parse_interval("5m").unwrap();
    assert_eq!(iv, Interval { unit: IntervalUnit::Minutes, count: 5 });
    assert_eq!(iv.unit_seconds(), 60);
    assert_eq!(iv.as_seconds(), 300);
    assert_eq!(iv.as_millis(), 300_000);
}

#[test]
fn unit_letters_are_case_sensitive() {
    assert_eq!(parse_interval("5M").unwrap().unit, IntervalUnit::Months);
    assert_eq!(parse_interval("5m").unwrap().unit, IntervalUnit::Minutes);
}

#[test]
fn fractional_count_is_truncated() {
    assert_eq!(parse_interval("1.5d").unwrap().count, 1);
}

#[test]
fn malformed_intervals_are_rejected() {
    for text in ["bogus", "", "h", "5x", "5 m", "-5m", "5.m", ".5m", "m5"] {
        let err = parse_interval(text).unwrap_err();
        assert_eq!(
            err,
            FormatError::InvalidInterval(text.to_string()),
            "expected InvalidInterval for {:?}",
            text
        );
    }
}

#[test]
fn interval_display_round_trips() {
    assert_eq!(parse_interval("5m").unwrap().to_string(), "5m");
    assert_eq!(parse_interval("2h").unwrap().to_string(), "2h");
}

#[test]
fn interval_to_ms_and_seconds() {
    assert_eq!(interval_to_ms("1h").unwrap(), 3_600_000);
    assert_eq!(interval_to_seconds("2w").unwrap(), 1_209_600);
    assert_eq!(interval_to_seconds("1y").unwrap(), 31_536_000);
    assert_eq!(interval_to_ms("1M").unwrap(), 2_592_000_000);
}

// ── Nice-step snapping ───────────────────────────────────────────────────────

#[test]
fn snapped_interval_is_always_a_nice_step() {
    for raw in [0.5, 30.0, 700.0, 2_000.0, 6_000.0, 44_000.0, 123_456.0, 9e9, 1e12] {
        let snapped = round_interval(raw);
        assert!(
            NICE_STEPS.contains(&snapped),
            "round_interval({}) produced non-nice step {}",
            raw,
            snapped
        );
    }
}

#[test]
fn snapping_is_monotonic_non_decreasing() {
    let mut prev = 0;
    let mut raw = 1.0;
    while raw < 1e13 {
        let snapped = round_interval(raw);
        assert!(
            snapped >= prev,
            "round_interval not monotonic at {} ({} < {})",
            raw,
            snapped,
            prev
        );
        prev = snapped;
        raw *= 1.5;
    }
}

#[test]
fn nice_steps_snap_to_themselves() {
    for step in NICE_STEPS {
        assert_eq!(round_interval(step as f64), step, "step {} did not round-trip", step);
    }
}

#[test]
fn oversized_intervals_cap_at_one_year() {
    assert_eq!(round_interval(1e18), 31_536_000_000);
}

// ── Duration decomposition ───────────────────────────────────────────────────

#[test]
fn largest_nonzero_unit_wins() {
    assert_eq!(seconds_to_interval(63_072_000.0), "2y");
    assert_eq!(seconds_to_interval(259_200.0), "3d");
    assert_eq!(seconds_to_interval(18_000.0), "5h");
    assert_eq!(seconds_to_interval(90.0), "1m");
    assert_eq!(seconds_to_interval(45.0), "45s");
    assert_eq!(seconds_to_interval(0.1), "100ms");
}

#[test]
fn a_week_renders_in_days() {
    // no week unit in the decomposition
    assert_eq!(seconds_to_interval(604_800.0), "7d");
}

#[test]
fn sub_millisecond_durations_get_fallback_text() {
    assert_eq!(seconds_to_interval(0.0005), "less than a millisecond");
    assert_eq!(seconds_to_interval(0.0), "less than a millisecond");
}

// ── Display-interval resolution ──────────────────────────────────────────────

#[test]
fn explicit_user_interval_is_returned_verbatim() {
    let range = TimeRange::new(utc(2024, 1, 15, 12, 0, 0), utc(2024, 1, 15, 13, 0, 0));
    assert_eq!(calculate_interval(&range, 60, Some("10s")).unwrap(), "10s");
    // even a string the computation would never produce
    assert_eq!(calculate_interval(&range, 60, Some("42m")).unwrap(), "42m");
}

#[test]
fn computed_interval_for_an_hour_at_sixty_points() {
    let range = TimeRange::new(utc(2024, 1, 15, 12, 0, 0), utc(2024, 1, 15, 13, 0, 0));
    assert_eq!(calculate_interval(&range, 60, None).unwrap(), "1m");
}

#[test]
fn fine_resolution_bottoms_out_at_the_smallest_step() {
    let range = TimeRange::new(utc(2024, 1, 15, 12, 0, 0), utc(2024, 1, 15, 13, 0, 0));
    assert_eq!(calculate_interval(&range, 1_000_000, None).unwrap(), "100ms");
}

#[test]
fn lower_bound_clamps_the_computed_interval() {
    let range = TimeRange::new(utc(2024, 1, 15, 12, 0, 0), utc(2024, 1, 15, 13, 0, 0));
    assert_eq!(calculate_interval(&range, 60, Some(">5m")).unwrap(), "5m");
}

#[test]
fn lower_bound_below_the_computed_interval_is_ignored() {
    let range = TimeRange::new(utc(2024, 1, 15, 12, 0, 0), utc(2024, 1, 15, 13, 0, 0));
    assert_eq!(calculate_interval(&range, 60, Some(">30s")).unwrap(), "1m");
}

#[test]
fn malformed_lower_bound_is_an_error() {
    let range = TimeRange::new(utc(2024, 1, 15, 12, 0, 0), utc(2024, 1, 15, 13, 0, 0));
    assert_eq!(
        calculate_interval(&range, 60, Some(">wat")),
        Err(FormatError::InvalidInterval("wat".to_string()))
    );
}

#[test]
fn day_long_range_at_default_resolution() {
    let range = TimeRange::new(utc(2024, 1, 15, 0, 0, 0), utc(2024, 1, 16, 0, 0, 0));
    // 86_400_000 / 100 = 864_000 ms raw -> 10m nice step
    assert_eq!(calculate_interval(&range, 100, None).unwrap(), "10m");
}
