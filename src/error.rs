//! Error types surfaced to the rendering layer.
//!
//! Only two things can fail in this crate: parsing a compact interval
//! string and looking up a format id that was never registered. Numeric
//! formatting itself is total; a missing value (`None`) renders as an
//! empty string and is never an error.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, FormatError>;

/// Errors raised by format lookup and interval parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The text does not match the compact interval grammar
    /// (digits, optional fraction, one unit letter).
    #[error("invalid interval string {0:?}, expecting a number followed by one of \"Mwdhmsy\"")]
    InvalidInterval(String),

    /// The format id is not present in the registry.
    #[error("unknown format id {0:?}")]
    UnknownFormat(String),
}
