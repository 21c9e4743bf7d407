//! Unit-ladder format builders: SI decimal/binary prefixes, currency, and
//! fixed units.
//!
//! A *ladder* is an ordered list of unit suffixes paired with a scaling
//! factor. [`scaled_units`] repeatedly divides a magnitude by the factor
//! and picks the suffix matching the number of steps taken; the other
//! builders compose it with the standard prefix tables.

use crate::round::to_fixed;

/// A formatting function: `(value, decimals, scaled_decimals) -> text`.
///
/// A `None` value always renders as the empty string, regardless of the
/// other arguments.
pub type FormatFn = Box<dyn Fn(Option<f64>, Option<u32>, Option<u32>) -> String + Send + Sync>;

/// Formatter which always appends a fixed unit string to the value. No
/// scaling of the value is performed.
pub fn fixed_unit(unit: &str) -> FormatFn {
    let unit = unit.to_string();
    Box::new(move |size, decimals, _scaled_decimals| match size {
        Some(size) => format!("{} {}", to_fixed(Some(size), decimals), unit),
        None => String::new(),
    })
}

/// Formatter which scales the unit string geometrically according to the
/// given numeric factor. Repeatedly scales the value down by the factor
/// until it is less than the factor in magnitude, or the end of the unit
/// list is reached, in which case the sentinel `"NA"` is returned.
///
/// When at least one scaling step occurred and `scaled_decimals` was
/// supplied, the rendered precision becomes `scaled_decimals + 3 × steps`
/// (one ladder step is treated as a three-order-of-magnitude jump; the
/// 1024-factor binary ladder reuses the same constant).
pub fn scaled_units(factor: f64, units: Vec<String>) -> FormatFn {
    Box::new(move |size, decimals, scaled_decimals| {
        let Some(mut size) = size else {
            return String::new();
        };

        let limit = units.len();
        let mut steps = 0usize;

        while size.abs() >= factor {
            steps += 1;
            size /= factor;

            if steps >= limit {
                return "NA".to_string();
            }
        }

        let decimals = match scaled_decimals {
            Some(scaled) if steps > 0 => Some(scaled + 3 * steps as u32),
            _ => decimals,
        };

        format!("{}{}", to_fixed(Some(size), decimals), units[steps])
    })
}

const DECIMAL_PREFIXES: [&str; 12] = ["n", "µ", "m", "", "k", "M", "G", "T", "P", "E", "Z", "Y"];
const BINARY_PREFIXES: [&str; 9] = ["", "Ki", "Mi", "Gi", "Ti", "Pi", "Ei", "Zi", "Yi"];

/// SI decimal-prefix ladder (factor 1000) for the given base unit.
///
/// `offset` shifts the starting prefix: 0 starts unprefixed, 1 starts at
/// kilo, -1 at milli, down to -3 (nano). Prefixes below the start are
/// dropped so the ladder's first entry matches the caller's base unit.
pub fn decimal_si_prefix(unit: &str, offset: i32) -> FormatFn {
    let start = (3 + offset) as usize;
    let units = DECIMAL_PREFIXES[start..]
        .iter()
        .map(|p| format!(" {}{}", p, unit))
        .collect();
    scaled_units(1000.0, units)
}

/// SI binary-prefix ladder (factor 1024) for the given base unit.
///
/// `offset` starts the ladder at the given prefix (1 = Ki, 2 = Mi, ...);
/// the table has no sub-unit entries, so the offset is never negative.
pub fn binary_si_prefix(unit: &str, offset: usize) -> FormatFn {
    let units = BINARY_PREFIXES[offset..]
        .iter()
        .map(|p| format!(" {}{}", p, unit))
        .collect();
    scaled_units(1024.0, units)
}

/// Currency formatter: a 1000-factor ladder up to trillions, with the
/// currency symbol prefixed onto the scaled text.
pub fn currency(symbol: &str) -> FormatFn {
    let units = ["", "K", "M", "B", "T"].iter().map(|s| s.to_string()).collect();
    let scaler = scaled_units(1000.0, units);
    let symbol = symbol.to_string();
    Box::new(move |size, decimals, scaled_decimals| {
        if size.is_none() {
            return String::new();
        }
        format!("{}{}", symbol, scaler(size, decimals, scaled_decimals))
    })
}
