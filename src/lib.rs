//! plotfmt crate root: re-exports and module wiring.
//!
//! Building blocks for turning raw dashboard measurements into
//! human-readable text (axis labels, legends, tooltips):
//! - `round`: fixed-decimal rounding with a minimum-precision guarantee
//! - `scale`: unit-ladder format builders (SI decimal/binary, currency)
//! - `formats`: the value format registry keyed by format id
//! - `interval`: nice display intervals and compact interval strings
//! - `catalog`: unit catalog for UI pickers
//! - `error`: the two error kinds surfaced to callers
//!
//! Everything is pure and synchronous. Build one [`ValueFormats`] at
//! startup, share it by reference, and call the interval helpers freely
//! from any thread.

pub mod catalog;
pub mod error;
pub mod formats;
pub mod interval;
pub mod round;
pub mod scale;

// Public re-exports for a compact external API
pub use catalog::{unit_format_groups, UnitFormatDesc, UnitFormatGroup};
pub use error::{FormatError, Result};
pub use formats::ValueFormats;
pub use interval::{
    calculate_interval, interval_to_ms, interval_to_seconds, parse_interval, round_interval,
    seconds_to_interval, Interval, IntervalUnit, TimeRange,
};
pub use round::{round_value, to_fixed, to_fixed_scaled, to_percent};
pub use scale::FormatFn;
