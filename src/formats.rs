//! The value format registry: maps format ids to formatting functions.
//!
//! Most entries are built by composing the ladder builders in
//! [`crate::scale`] with the right base unit and prefix offset. The
//! time-duration formats (`ms`, `s`, `µs`, `ns`) are hand-written
//! piecewise functions instead, because their unit choice follows fixed
//! real-world breakpoints (a minute is not 1000 seconds) rather than a
//! uniform ladder.
//!
//! Build one [`ValueFormats`] at startup and pass it by reference to the
//! rendering code; the set of entries never changes after construction.

use std::collections::HashMap;

use crate::error::{FormatError, Result};
use crate::round::{to_fixed, to_fixed_scaled};
use crate::scale::{binary_si_prefix, currency, decimal_si_prefix, fixed_unit, scaled_units, FormatFn};

// ─────────────────────────────────────────────────────────────────────────────
// ValueFormats
// ─────────────────────────────────────────────────────────────────────────────

/// Registry of value formatters, assembled once and immutable afterwards.
///
/// All formatters are pure and the registry itself is `Send + Sync`, so a
/// single instance can be shared by reference across threads.
pub struct ValueFormats {
    formats: HashMap<&'static str, FormatFn>,
}

impl ValueFormats {
    /// Build the full registry of supported formats.
    pub fn new() -> Self {
        let mut f: HashMap<&'static str, FormatFn> = HashMap::new();

        // Dimensionless
        f.insert("none", Box::new(|size, decimals, _| to_fixed(size, decimals)));
        f.insert(
            "short",
            scaled_units(
                1000.0,
                ["", " K", " Mil", " Bil", " Tri", " Quadr", " Quint", " Sext", " Sept"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            ),
        );
        f.insert("dB", fixed_unit("dB"));
        f.insert("ppm", fixed_unit("ppm"));
        f.insert("percent", Box::new(format_percent));
        f.insert("percentunit", Box::new(format_percent_unit));

        // Currencies
        f.insert("currencyUSD", currency("$"));
        f.insert("currencyGBP", currency("£"));

        // Data (binary prefixes)
        f.insert("bits", binary_si_prefix("b", 0));
        f.insert("bytes", binary_si_prefix("B", 0));
        f.insert("kbytes", binary_si_prefix("B", 1));
        f.insert("mbytes", binary_si_prefix("B", 2));
        f.insert("gbytes", binary_si_prefix("B", 3));

        // Data rate
        f.insert("pps", decimal_si_prefix("pps", 0));
        f.insert("bps", decimal_si_prefix("bps", 0));
        f.insert("Bps", decimal_si_prefix("Bps", 0));

        // Energy / electrical
        f.insert("watt", decimal_si_prefix("W", 0));
        f.insert("kwatt", decimal_si_prefix("W", 1));
        f.insert("watth", decimal_si_prefix("Wh", 0));
        f.insert("kwatth", decimal_si_prefix("Wh", 1));
        f.insert("joule", decimal_si_prefix("J", 0));
        f.insert("ev", decimal_si_prefix("eV", 0));
        f.insert("amp", decimal_si_prefix("A", 0));
        f.insert("volt", decimal_si_prefix("V", 0));

        // Temperature
        f.insert("celsius", fixed_unit("°C"));
        f.insert("farenheit", fixed_unit("°F"));
        f.insert("kelvin", fixed_unit("K"));
        f.insert("humidity", fixed_unit("%H"));

        // Pressure
        f.insert("pressurembar", fixed_unit("mbar"));
        f.insert("pressurehpa", fixed_unit("hPa"));
        f.insert("pressurehg", fixed_unit("\"Hg"));
        f.insert(
            "pressurepsi",
            scaled_units(
                1000.0,
                [" psi", " ksi", " Mpsi"].iter().map(|s| s.to_string()).collect(),
            ),
        );

        // Length
        f.insert("lengthm", decimal_si_prefix("m", 0));
        f.insert("lengthmm", decimal_si_prefix("m", -1));
        f.insert("lengthkm", decimal_si_prefix("m", 1));
        f.insert("lengthmi", fixed_unit("mi"));

        // Velocity
        f.insert("velocityms", fixed_unit("m/s"));
        f.insert("velocitykmh", fixed_unit("km/h"));
        f.insert("velocitymph", fixed_unit("mph"));
        f.insert("velocityknot", fixed_unit("kn"));

        // Volume
        f.insert("litre", decimal_si_prefix("L", 0));
        f.insert("mlitre", decimal_si_prefix("L", -1));

        // Frequency and durations
        f.insert("hertz", decimal_si_prefix("Hz", 0));
        f.insert("ms", Box::new(format_ms));
        f.insert("s", Box::new(format_s));
        f.insert("µs", Box::new(format_us));
        f.insert("ns", Box::new(format_ns));

        Self { formats: f }
    }

    /// Format `value` with the formatter registered under `format_id`.
    ///
    /// Fails with [`FormatError::UnknownFormat`] if the id is absent.
    pub fn format(
        &self,
        format_id: &str,
        value: Option<f64>,
        decimals: Option<u32>,
        scaled_decimals: Option<u32>,
    ) -> Result<String> {
        match self.formats.get(format_id) {
            Some(fmt) => Ok(fmt(value, decimals, scaled_decimals)),
            None => Err(FormatError::UnknownFormat(format_id.to_string())),
        }
    }

    /// Look up a formatter by id.
    pub fn get(&self, format_id: &str) -> Option<&FormatFn> {
        self.formats.get(format_id)
    }

    /// Whether a format id is registered.
    pub fn contains(&self, format_id: &str) -> bool {
        self.formats.contains_key(format_id)
    }

    /// All registered format ids, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.formats.keys().copied()
    }

    /// Number of registered formats.
    pub fn len(&self) -> usize {
        self.formats.len()
    }

    /// `true` if no formats are registered (never the case after `new`).
    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }
}

impl Default for ValueFormats {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ValueFormats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValueFormats")
            .field("formats", &self.formats.len())
            .finish()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Percent formats
// ─────────────────────────────────────────────────────────────────────────────

/// `percent`: the value already is a 0–100 percentage.
fn format_percent(size: Option<f64>, decimals: Option<u32>, _scaled: Option<u32>) -> String {
    match size {
        Some(size) => format!("{}%", to_fixed(Some(size), decimals)),
        None => String::new(),
    }
}

/// `percentunit`: the value is a 0.0–1.0 fraction, scaled up first.
fn format_percent_unit(size: Option<f64>, decimals: Option<u32>, _scaled: Option<u32>) -> String {
    match size {
        Some(size) => format!("{}%", to_fixed(Some(100.0 * size), decimals)),
        None => String::new(),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Time-duration formats
// ─────────────────────────────────────────────────────────────────────────────
//
// Each branch divides down to the chosen display unit and hands
// `to_fixed_scaled` a per-branch extra-decimals constant, so requesting
// scaled precision yields more fractional digits as the unit grows coarser.

fn format_ms(size: Option<f64>, decimals: Option<u32>, scaled_decimals: Option<u32>) -> String {
    let Some(size) = size else {
        return String::new();
    };

    if size.abs() < 1000.0 {
        format!("{} ms", to_fixed(Some(size), decimals))
    } else if size.abs() < 60_000.0 {
        to_fixed_scaled(size / 1000.0, decimals, scaled_decimals, 3, " s")
    } else if size.abs() < 3_600_000.0 {
        to_fixed_scaled(size / 60_000.0, decimals, scaled_decimals, 5, " min")
    } else if size.abs() < 86_400_000.0 {
        to_fixed_scaled(size / 3_600_000.0, decimals, scaled_decimals, 7, " hour")
    } else if size.abs() < 31_536_000_000.0 {
        to_fixed_scaled(size / 86_400_000.0, decimals, scaled_decimals, 8, " day")
    } else {
        to_fixed_scaled(size / 31_536_000_000.0, decimals, scaled_decimals, 10, " year")
    }
}

fn format_s(size: Option<f64>, decimals: Option<u32>, scaled_decimals: Option<u32>) -> String {
    let Some(size) = size else {
        return String::new();
    };

    if size.abs() < 600.0 {
        format!("{} s", to_fixed(Some(size), decimals))
    } else if size.abs() < 3600.0 {
        to_fixed_scaled(size / 60.0, decimals, scaled_decimals, 1, " min")
    } else if size.abs() < 86_400.0 {
        to_fixed_scaled(size / 3600.0, decimals, scaled_decimals, 4, " hour")
    } else if size.abs() < 604_800.0 {
        to_fixed_scaled(size / 86_400.0, decimals, scaled_decimals, 5, " day")
    } else if size.abs() < 31_536_000.0 {
        to_fixed_scaled(size / 604_800.0, decimals, scaled_decimals, 6, " week")
    } else {
        to_fixed_scaled(size / 3.15569e7, decimals, scaled_decimals, 7, " year")
    }
}

fn format_us(size: Option<f64>, decimals: Option<u32>, scaled_decimals: Option<u32>) -> String {
    let Some(size) = size else {
        return String::new();
    };

    if size.abs() < 1000.0 {
        format!("{} µs", to_fixed(Some(size), decimals))
    } else if size.abs() < 1_000_000.0 {
        to_fixed_scaled(size / 1000.0, decimals, scaled_decimals, 3, " ms")
    } else {
        to_fixed_scaled(size / 1_000_000.0, decimals, scaled_decimals, 6, " s")
    }
}

fn format_ns(size: Option<f64>, decimals: Option<u32>, scaled_decimals: Option<u32>) -> String {
    let Some(size) = size else {
        return String::new();
    };

    if size.abs() < 1000.0 {
        format!("{} ns", to_fixed(Some(size), decimals))
    } else if size.abs() < 1_000_000.0 {
        to_fixed_scaled(size / 1000.0, decimals, scaled_decimals, 3, " µs")
    } else if size.abs() < 1_000_000_000.0 {
        to_fixed_scaled(size / 1_000_000.0, decimals, scaled_decimals, 6, " ms")
    } else if size.abs() < 60_000_000_000.0 {
        to_fixed_scaled(size / 1_000_000_000.0, decimals, scaled_decimals, 9, " s")
    } else {
        to_fixed_scaled(size / 60_000_000_000.0, decimals, scaled_decimals, 12, " min")
    }
}
