//! Fixed-decimal rounding with a minimum-precision guarantee.
//!
//! Everything else in the crate renders numbers through [`to_fixed`]: it
//! rounds to a requested number of fractional digits and, unlike plain
//! `format!("{:.n}")`, keeps the *shortest* representation when no
//! precision was requested, while zero-padding up to the requested
//! precision when one was.

/// Round `value` to `decimals` fractional digits and render it as text.
///
/// * `None` value renders as the empty string (missing-value sentinel).
/// * `0.0` always renders as `"0"`, with no precision padding.
/// * When `decimals` is `Some(d)` the result carries at least `d`
///   fractional digits, zero-padded if rounding produced fewer.
/// * When `decimals` is `None` the shortest representation is used.
///
/// ```
/// # use plotfmt::round::to_fixed;
/// assert_eq!(to_fixed(Some(1.2345), Some(2)), "1.23");
/// assert_eq!(to_fixed(Some(1.0), Some(3)), "1.000");
/// assert_eq!(to_fixed(None, Some(2)), "");
/// ```
pub fn to_fixed(value: Option<f64>, decimals: Option<u32>) -> String {
    let Some(value) = value else {
        return String::new();
    };

    let factor = match decimals {
        Some(d) if d > 0 => 10f64.powi(d as i32),
        _ => 1.0,
    };
    let rounded = (value * factor).round() / factor;

    if value == 0.0 {
        return "0".to_string();
    }

    // Magnitudes whose decimal expansion would be unreadable are rendered
    // in scientific notation and returned without padding.
    if rounded != 0.0 && (rounded.abs() >= 1e21 || rounded.abs() < 1e-7) {
        return format!("{:e}", rounded);
    }

    // -0 collapses to 0.
    let formatted = if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{}", rounded)
    };

    // If a precision was requested, ensure we show exactly that many
    // fractional digits; otherwise keep the value's own precision.
    if let Some(d) = decimals {
        let d = d as usize;
        let precision = match formatted.find('.') {
            Some(pos) => formatted.len() - pos - 1,
            None => 0,
        };
        if precision < d {
            let mut padded = formatted;
            if precision == 0 {
                padded.push('.');
            }
            padded.extend(std::iter::repeat('0').take(d - precision));
            return padded;
        }
    }

    formatted
}

/// Render a value that has already been scaled down to a coarser display
/// unit, then append the unit suffix `ext`.
///
/// When `scaled_decimals` is supplied the effective precision becomes
/// `scaled_decimals + additional_decimals`, so formatters can ask for more
/// fractional digits as the display unit grows coarser and keep absolute
/// precision roughly constant. Otherwise `decimals` is used as-is.
pub fn to_fixed_scaled(
    value: f64,
    decimals: Option<u32>,
    scaled_decimals: Option<u32>,
    additional_decimals: u32,
    ext: &str,
) -> String {
    match scaled_decimals {
        Some(scaled) => format!(
            "{}{}",
            to_fixed(Some(value), Some(scaled + additional_decimals)),
            ext
        ),
        None => format!("{}{}", to_fixed(Some(value), decimals), ext),
    }
}

/// Round to `decimals` fractional digits and return the number itself,
/// for callers that need a fully-rounded value before further computation.
/// `None` passes through.
pub fn round_value(value: Option<f64>, decimals: u32) -> Option<f64> {
    let value = value?;
    let n = 10f64.powi(decimals as i32);
    Some((value * n).round() / n)
}

/// Render `part` as a percentage of `whole`, floored to two decimal places.
///
/// ```
/// # use plotfmt::round::to_percent;
/// assert_eq!(to_percent(1.0, 4.0), "25%");
/// ```
pub fn to_percent(part: f64, whole: f64) -> String {
    format!("{}%", ((part / whole) * 10_000.0).floor() / 100.0)
}
