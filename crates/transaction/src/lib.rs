#![doc = include_str!("../README.md")]
#![warn(missing_debug_implementations, missing_docs, unreachable_pub, rustdoc::all)]
#![deny(unused_must_use, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(any(test, feature = "test-utils")), warn(unused_crate_dependencies))]
#![no_std]

extern crate alloc;

pub mod common;
pub mod errors;
pub mod legacy;
pub mod traits;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

/// Re-export commonly used types and traits.
pub mod prelude {
    pub use crate::{
        common::{CommonFields, RequiredFields, SignaturePolicy},
        errors::{DecodeError, TransactionError, TxResult},
        legacy::{LegacyTransaction, LegacyTransactionBuilder},
        traits::{Signable, Transaction, TransactionEncoding},
    };
    pub use klay_primitives::prelude::*;
}
