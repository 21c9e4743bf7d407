//! Unit catalog for UI pickers: human labels grouped by quantity kind.
//!
//! Pure generated data; the only contract is that every `value` here is a
//! key registered in [`crate::formats::ValueFormats`].

use serde::{Deserialize, Serialize};

/// One selectable unit format: human label plus registry key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitFormatDesc {
    /// Human label shown in the picker.
    pub text: String,
    /// Format id registered in the value format registry.
    pub value: String,
}

/// A picker group: a heading and its selectable entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitFormatGroup {
    pub text: String,
    pub submenu: Vec<UnitFormatDesc>,
}

fn desc(text: &str, value: &str) -> UnitFormatDesc {
    UnitFormatDesc {
        text: text.to_string(),
        value: value.to_string(),
    }
}

fn group(text: &str, submenu: Vec<UnitFormatDesc>) -> UnitFormatGroup {
    UnitFormatGroup {
        text: text.to_string(),
        submenu,
    }
}

/// The full unit catalog, grouped for display in a picker.
pub fn unit_format_groups() -> Vec<UnitFormatGroup> {
    vec![
        group(
            "none",
            vec![
                desc("none", "none"),
                desc("short", "short"),
                desc("percent (0-100)", "percent"),
                desc("percent (0.0-1.0)", "percentunit"),
                desc("Humidity (%H)", "humidity"),
                desc("ppm", "ppm"),
                desc("decibel", "dB"),
            ],
        ),
        group(
            "currency",
            vec![
                desc("Dollars ($)", "currencyUSD"),
                desc("Pounds (£)", "currencyGBP"),
            ],
        ),
        group(
            "time",
            vec![
                desc("Hertz (1/s)", "hertz"),
                desc("nanoseconds (ns)", "ns"),
                desc("microseconds (µs)", "µs"),
                desc("milliseconds (ms)", "ms"),
                desc("seconds (s)", "s"),
            ],
        ),
        group(
            "data",
            vec![
                desc("bits", "bits"),
                desc("bytes", "bytes"),
                desc("kilobytes", "kbytes"),
                desc("megabytes", "mbytes"),
                desc("gigabytes", "gbytes"),
            ],
        ),
        group(
            "data rate",
            vec![
                desc("packets/sec", "pps"),
                desc("bits/sec", "bps"),
                desc("bytes/sec", "Bps"),
            ],
        ),
        group(
            "length",
            vec![
                desc("millimetre (mm)", "lengthmm"),
                desc("meter (m)", "lengthm"),
                desc("kilometer (km)", "lengthkm"),
                desc("mile (mi)", "lengthmi"),
            ],
        ),
        group(
            "velocity",
            vec![
                desc("m/s", "velocityms"),
                desc("km/h", "velocitykmh"),
                desc("mph", "velocitymph"),
                desc("knot (kn)", "velocityknot"),
            ],
        ),
        group(
            "volume",
            vec![desc("millilitre", "mlitre"), desc("litre", "litre")],
        ),
        group(
            "energy",
            vec![
                desc("watt (W)", "watt"),
                desc("kilowatt (kW)", "kwatt"),
                desc("watt-hour (Wh)", "watth"),
                desc("kilowatt-hour (kWh)", "kwatth"),
                desc("joule (J)", "joule"),
                desc("electron volt (eV)", "ev"),
                desc("Ampere (A)", "amp"),
                desc("Volt (V)", "volt"),
            ],
        ),
        group(
            "temperature",
            vec![
                desc("Celsius (°C)", "celsius"),
                desc("Fahrenheit (°F)", "farenheit"),
                desc("Kelvin (K)", "kelvin"),
            ],
        ),
        group(
            "pressure",
            vec![
                desc("Millibars", "pressurembar"),
                desc("Hectopascals", "pressurehpa"),
                desc("Inches of mercury", "pressurehg"),
                desc("PSI", "pressurepsi"),
            ],
        ),
    ]
}
