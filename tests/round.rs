use plotfmt::round::{round_value, to_fixed, to_fixed_scaled, to_percent};

#[test]
fn missing_value_renders_empty() {
    assert_eq!(to_fixed(None, None), "");
    assert_eq!(to_fixed(None, Some(2)), "");
}

#[test]
fn zero_renders_bare_zero_regardless_of_precision() {
    assert_eq!(to_fixed(Some(0.0), None), "0");
    assert_eq!(to_fixed(Some(0.0), Some(2)), "0");
    assert_eq!(to_fixed(Some(0.0), Some(8)), "0");
}

#[test]
fn rounds_to_requested_decimals() {
    assert_eq!(to_fixed(Some(1.2345), Some(2)), "1.23");
    assert_eq!(to_fixed(Some(-1.2345), Some(2)), "-1.23");
}

#[test]
fn pads_up_to_requested_decimals() {
    assert_eq!(to_fixed(Some(1.0), Some(3)), "1.000");
    assert_eq!(to_fixed(Some(1.5), Some(2)), "1.50");
}

#[test]
fn rounding_to_zero_still_pads() {
    assert_eq!(to_fixed(Some(0.0001), Some(2)), "0.00");
}

#[test]
fn no_decimals_means_shortest_integer_rendering() {
    assert_eq!(to_fixed(Some(1.5), None), "2");
    assert_eq!(to_fixed(Some(1.4), None), "1");
    assert_eq!(to_fixed(Some(1.6), Some(0)), "2");
}

#[test]
fn huge_magnitudes_pass_through_in_scientific_notation() {
    let out = to_fixed(Some(1e22), Some(2));
    assert!(out.contains('e'), "expected exponent rendering, got: {}", out);
}

#[test]
fn tiny_magnitudes_pass_through_in_scientific_notation() {
    let out = to_fixed(Some(5e-8), Some(10));
    assert!(out.contains('e'), "expected exponent rendering, got: {}", out);
}

#[test]
fn scaled_variant_prefers_scaled_decimals() {
    // scaled precision requested: 1 + 3 extra digits
    assert_eq!(to_fixed_scaled(1.5, Some(2), Some(1), 3, " s"), "1.5000 s");
    // no scaled precision: plain decimals win
    assert_eq!(to_fixed_scaled(1.5, Some(2), None, 3, " s"), "1.50 s");
}

#[test]
fn round_value_returns_number_not_text() {
    assert_eq!(round_value(Some(3.14159), 2), Some(3.14));
    assert_eq!(round_value(None, 2), None);
}

#[test]
fn to_percent_floors_to_two_places() {
    assert_eq!(to_percent(1.0, 4.0), "25%");
    assert_eq!(to_percent(1.0, 3.0), "33.33%");
    assert_eq!(to_percent(2.0, 3.0), "66.66%");
}
