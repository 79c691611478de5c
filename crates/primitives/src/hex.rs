//! Parsing of the textual forms used for transaction fields.
//!
//! Quantities, byte strings and addresses are accepted as hex strings with an optional `0x` or
//! `0X` prefix. Quantities may carry leading zeros and an odd number of digits, byte strings are
//! left-padded with a zero nibble when the digit count is odd.

use crate::errors::{FormatError, FormatResult};
use alloc::{format, string::String};
use alloy_primitives::{hex, Address, Bytes, U256};

/// The textual empty address. Builders treat it as "recipient not set".
pub const EMPTY_ADDRESS: &str = "0x";

/// The number of hex digits in an address.
const ADDRESS_HEX_LENGTH: usize = 40;

/// Strips an optional `0x` / `0X` prefix.
pub fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s)
}

/// Returns `true` if `s` consists only of hex digits after an optional prefix.
///
/// `"0x"` and the empty string are valid hex (zero digits).
pub fn is_hex(s: &str) -> bool {
    hex_digits_only(strip_hex_prefix(s))
}

fn hex_digits_only(digits: &str) -> bool {
    digits.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Returns `true` if `s` is the empty address sentinel.
pub fn is_empty_address(s: &str) -> bool {
    s.is_empty() || s == EMPTY_ADDRESS
}

/// Parses a hex byte string, left-padding odd digit counts with a zero nibble.
pub fn parse_hex_bytes(s: &str) -> FormatResult<Bytes> {
    let digits = strip_hex_prefix(s);
    if !hex_digits_only(digits) {
        return Err(FormatError::InvalidHex);
    }

    let decoded = if digits.len() % 2 == 1 {
        hex::decode(format!("0{digits}"))
    } else {
        hex::decode(digits)
    };
    decoded.map(Bytes::from).map_err(|_| FormatError::InvalidHex)
}

/// Parses a hex quantity into a [U256]. An empty digit string is zero.
pub fn parse_quantity(s: &str) -> FormatResult<U256> {
    let digits = strip_hex_prefix(s);
    if !hex_digits_only(digits) {
        return Err(FormatError::InvalidHex);
    }

    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return Ok(U256::ZERO);
    }
    U256::from_str_radix(significant, 16).map_err(|_| FormatError::Overflow)
}

/// Parses a 20 byte address. Case is not checked.
pub fn parse_address(s: &str) -> FormatResult<Address> {
    let digits = strip_hex_prefix(s);
    if !hex_digits_only(digits) {
        return Err(FormatError::InvalidHex);
    }
    if digits.len() != ADDRESS_HEX_LENGTH {
        return Err(FormatError::InvalidAddress(digits.len()));
    }

    let bytes = hex::decode(digits).map_err(|_| FormatError::InvalidHex)?;
    Ok(Address::from_slice(&bytes))
}

/// Renders a quantity as minimal lowercase hex with a `0x` prefix (`0x0` for zero).
pub fn quantity_to_hex(value: U256) -> String {
    format!("0x{value:x}")
}
