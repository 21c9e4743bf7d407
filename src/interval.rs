//! Display-interval selection and compact interval strings.
//!
//! A chart asking for N points over a time range needs a sampling step
//! that is a round, predictable duration rather than an arbitrary
//! fraction. [`round_interval`] snaps a raw millisecond step to a curated
//! table of nice steps; [`parse_interval`] reads compact strings like
//! `"5m"` or `"2h"`; [`calculate_interval`] ties the two together for a
//! time range, a target resolution, and an optional user override.

use chrono::{DateTime, Utc};

use crate::error::{FormatError, Result};

// ─────────────────────────────────────────────────────────────────────────────
// IntervalUnit
// ─────────────────────────────────────────────────────────────────────────────

/// The unit letter of a compact interval string.
///
/// Case matters: `M` is months, `m` is minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntervalUnit {
    Years,
    Months,
    Weeks,
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl IntervalUnit {
    /// Canonical duration of one unit, in seconds (a month is 30 days,
    /// a year 365 days).
    ///
    /// ```
    /// # use plotfmt::interval::IntervalUnit;
    /// assert_eq!(IntervalUnit::Minutes.seconds(), 60);
    /// assert_eq!(IntervalUnit::Years.seconds(), 31_536_000);
    /// ```
    pub fn seconds(&self) -> i64 {
        match self {
            IntervalUnit::Years => 31_536_000,
            IntervalUnit::Months => 2_592_000,
            IntervalUnit::Weeks => 604_800,
            IntervalUnit::Days => 86_400,
            IntervalUnit::Hours => 3_600,
            IntervalUnit::Minutes => 60,
            IntervalUnit::Seconds => 1,
        }
    }

    /// The unit letter used in compact interval strings.
    pub fn symbol(&self) -> char {
        match self {
            IntervalUnit::Years => 'y',
            IntervalUnit::Months => 'M',
            IntervalUnit::Weeks => 'w',
            IntervalUnit::Days => 'd',
            IntervalUnit::Hours => 'h',
            IntervalUnit::Minutes => 'm',
            IntervalUnit::Seconds => 's',
        }
    }

    /// Parse a unit letter.
    pub fn from_symbol(symbol: char) -> Option<IntervalUnit> {
        match symbol {
            'y' => Some(IntervalUnit::Years),
            'M' => Some(IntervalUnit::Months),
            'w' => Some(IntervalUnit::Weeks),
            'd' => Some(IntervalUnit::Days),
            'h' => Some(IntervalUnit::Hours),
            'm' => Some(IntervalUnit::Minutes),
            's' => Some(IntervalUnit::Seconds),
            _ => None,
        }
    }
}

impl std::fmt::Display for IntervalUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Interval
// ─────────────────────────────────────────────────────────────────────────────

/// A parsed compact interval: a count of some [`IntervalUnit`].
///
/// Created transiently by [`parse_interval`]; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    pub unit: IntervalUnit,
    pub count: u32,
}

impl Interval {
    /// Seconds in one unit of this interval (e.g. 60 for `"5m"`).
    pub fn unit_seconds(&self) -> i64 {
        self.unit.seconds()
    }

    /// Total duration in seconds.
    pub fn as_seconds(&self) -> i64 {
        self.unit.seconds() * i64::from(self.count)
    }

    /// Total duration in milliseconds.
    pub fn as_millis(&self) -> i64 {
        self.as_seconds() * 1000
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.count, self.unit)
    }
}

/// Parse a compact interval string like `"5m"`, `"2h"` or `"1y"`.
///
/// The grammar is one or more digits, an optional decimal fraction, and a
/// single unit letter from `y M w d h m s`. The count keeps only the
/// integer part; a fraction is accepted but truncated (`"1.5d"` counts 1).
///
/// ```
/// # use plotfmt::interval::{parse_interval, IntervalUnit};
/// let iv = parse_interval("5m").unwrap();
/// assert_eq!(iv.unit, IntervalUnit::Minutes);
/// assert_eq!(iv.count, 5);
/// assert!(parse_interval("bogus").is_err());
/// ```
pub fn parse_interval(text: &str) -> Result<Interval> {
    let invalid = || FormatError::InvalidInterval(text.to_string());

    let mut chars = text.chars();
    let unit_symbol = chars.next_back().ok_or_else(invalid)?;
    let unit = IntervalUnit::from_symbol(unit_symbol).ok_or_else(invalid)?;
    let number = chars.as_str();

    let (int_part, frac_part) = match number.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (number, None),
    };
    if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    if let Some(frac) = frac_part {
        if frac.is_empty() || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
    }

    let count = int_part.parse::<u32>().map_err(|_| invalid())?;
    Ok(Interval { unit, count })
}

/// Total duration of a compact interval string, in milliseconds.
///
/// ```
/// # use plotfmt::interval::interval_to_ms;
/// assert_eq!(interval_to_ms("1h").unwrap(), 3_600_000);
/// ```
pub fn interval_to_ms(text: &str) -> Result<i64> {
    Ok(parse_interval(text)?.as_millis())
}

/// Total duration of a compact interval string, in seconds.
pub fn interval_to_seconds(text: &str) -> Result<i64> {
    Ok(parse_interval(text)?.as_seconds())
}

// ─────────────────────────────────────────────────────────────────────────────
// Nice-step snapping
// ─────────────────────────────────────────────────────────────────────────────

/// Snap a raw millisecond step to the nearest "nice" step.
///
/// The table is hand-curated; each threshold sits between two adjacent
/// steps, so the result is monotonic in the input and every nice step
/// snaps to itself. Values beyond the largest threshold get the one-year
/// step.
pub fn round_interval(interval_ms: f64) -> i64 {
    match interval_ms {
        // 0.5s
        x if x <= 500.0 => 100, // 0.1s
        // 5s
        x if x < 5_000.0 => 1_000, // 1s
        // 7.5s
        x if x <= 7_500.0 => 5_000, // 5s
        // 15s
        x if x <= 15_000.0 => 10_000, // 10s
        // 45s
        x if x <= 45_000.0 => 30_000, // 30s
        // 3m
        x if x <= 180_000.0 => 60_000, // 1m
        // 9m
        x if x <= 450_000.0 => 300_000, // 5m
        // 20m
        x if x <= 1_200_000.0 => 600_000, // 10m
        // 45m
        x if x <= 2_700_000.0 => 1_800_000, // 30m
        // 2h
        x if x <= 7_200_000.0 => 3_600_000, // 1h
        // 6h
        x if x <= 21_600_000.0 => 10_800_000, // 3h
        // 24h
        x if x < 86_400_000.0 => 43_200_000, // 12h
        // 1w
        x if x < 604_800_000.0 => 86_400_000, // 24h
        // 3w
        x if x <= 1_814_400_000.0 => 604_800_000, // 1w
        // 2y
        x if x < 3_628_800_000.0 => 2_592_000_000, // 30d
        _ => 31_536_000_000, // 1y
    }
}

/// Render a duration in seconds as a compact interval string, using the
/// largest unit with a non-zero whole count (`90061.0` → `"1d"` only once
/// the day count is non-zero; otherwise hours, minutes, seconds, then
/// milliseconds). Sub-millisecond magnitudes get a readable fallback.
pub fn seconds_to_interval(seconds: f64) -> String {
    let num_years = (seconds / 31_536_000.0).floor() as i64;
    if num_years != 0 {
        return format!("{}y", num_years);
    }
    let num_days = ((seconds % 31_536_000.0) / 86_400.0).floor() as i64;
    if num_days != 0 {
        return format!("{}d", num_days);
    }
    let num_hours = ((seconds % 86_400.0) / 3_600.0).floor() as i64;
    if num_hours != 0 {
        return format!("{}h", num_hours);
    }
    let num_minutes = ((seconds % 3_600.0) / 60.0).floor() as i64;
    if num_minutes != 0 {
        return format!("{}m", num_minutes);
    }
    let num_seconds = (seconds % 60.0).floor() as i64;
    if num_seconds != 0 {
        return format!("{}s", num_seconds);
    }
    let num_milliseconds = (seconds * 1000.0).floor() as i64;
    if num_milliseconds != 0 {
        return format!("{}ms", num_milliseconds);
    }

    "less than a millisecond".to_string()
}

// ─────────────────────────────────────────────────────────────────────────────
// Display-interval resolution
// ─────────────────────────────────────────────────────────────────────────────

/// The time span a chart is displaying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl TimeRange {
    pub fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self { from, to }
    }

    /// Span of the range in milliseconds.
    pub fn span_millis(&self) -> i64 {
        (self.to - self.from).num_milliseconds()
    }
}

/// Choose a display interval for `range` at roughly `resolution` points.
///
/// A `user_interval` not starting with `>` is an explicit override and is
/// returned verbatim, bypassing all computation. One starting with `>`
/// sets a lower bound: the computed interval is clamped up to it (failing
/// with [`FormatError::InvalidInterval`] if the remainder does not parse).
/// Without an override, the raw step `span / resolution` is snapped via
/// [`round_interval`] and rendered back as a compact string.
pub fn calculate_interval(
    range: &TimeRange,
    resolution: u32,
    user_interval: Option<&str>,
) -> Result<String> {
    // 1 millisecond default low limit
    let mut low_limit_ms: i64 = 1;

    if let Some(user) = user_interval {
        match user.strip_prefix('>') {
            Some(low_limit) => low_limit_ms = interval_to_ms(low_limit)?,
            None => return Ok(user.to_string()),
        }
    }

    let mut interval_ms = round_interval(range.span_millis() as f64 / f64::from(resolution));
    if low_limit_ms > interval_ms {
        interval_ms = low_limit_ms;
    }

    Ok(seconds_to_interval(interval_ms as f64 / 1000.0))
}
