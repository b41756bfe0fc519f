//! Error types for `Tintwork`

use thiserror::Error;

/// A color string that could not be decoded.
///
/// Parse failures are recoverable: the caller keeps whatever color it had
/// before the rejected input.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Nothing left to parse after removing the optional `#` prefix.
    #[error("empty color string")]
    Empty,

    /// Hex input with anything other than six digits.
    #[error("invalid hex length: expected 6 digits, found {len}")]
    InvalidLength {
        /// Number of characters after the prefix.
        len: usize,
    },

    /// Hex input containing a character outside `0-9a-fA-F`.
    #[error("invalid hex digit {ch:?}")]
    InvalidHexDigit {
        /// The first offending character.
        ch: char,
    },

    /// Decimal channel input that is not an integer.
    #[error("not a decimal channel value: {text:?}")]
    NotANumber {
        /// The rejected field text.
        text: String,
    },
}

/// The error type for `Tintwork` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    /// A hex or decimal color string was rejected.
    #[error("color parse error: {0}")]
    Parse(#[from] ParseError),

    /// JSON serialization of a color failed.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for `Tintwork` operations.
pub type Result<T> = std::result::Result<T, Error>;
