#![doc = include_str!("../README.md")]
#![warn(missing_debug_implementations, missing_docs, unreachable_pub, rustdoc::all)]
#![deny(unused_must_use, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![no_std]

extern crate alloc;

pub mod errors;
pub mod hex;
pub mod signature;
pub mod tx_type;

/// The prelude exports common types and traits.
pub mod prelude {
    pub use crate::{
        errors::{FormatError, FormatResult},
        hex::{is_hex, parse_address, parse_hex_bytes, parse_quantity, quantity_to_hex},
        signature::SignatureData,
        tx_type::TransactionType,
    };
}
