//! Errors for the `klay-primitives` crate.

use thiserror::Error;

/// A [Result] type alias where the error is [FormatError].
pub type FormatResult<T> = Result<T, FormatError>;

/// An error returned when a textual field cannot be parsed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    /// The string is not well-formed hexadecimal.
    #[error("Invalid hex string")]
    InvalidHex,
    /// The string is hex, but not a 20 byte address. Holds the number of hex digits found.
    #[error("Invalid address: expected 40 hex digits, got {0}")]
    InvalidAddress(usize),
    /// The quantity does not fit in 256 bits.
    #[error("Quantity overflows 256 bits")]
    Overflow,
}
