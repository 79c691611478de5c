//! Errors for the `klay-transaction` crate.

use klay_primitives::{errors::FormatError, tx_type::TransactionType};
use thiserror::Error;

/// A [Result] type alias where the error is [TransactionError].
pub type TxResult<T> = Result<T, TransactionError>;

/// An error raised while building, signing, encoding or decoding a transaction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransactionError {
    /// A required field was never set.
    #[error("{0} is missing")]
    MissingField(&'static str),
    /// A field's textual form could not be parsed.
    #[error("Invalid {field}: {source}")]
    InvalidFormat {
        /// The name of the offending field.
        field: &'static str,
        /// The parse failure.
        #[source]
        source: FormatError,
    },
    /// A signature is already present on a single-signature transaction.
    #[error("Signatures already defined. {0} cannot include more than one signature.")]
    SignatureConflict(TransactionType),
    /// A signature list with a length other than one was appended.
    #[error("Signatures are too long. {tx_type} accepts exactly one signature, got {count}.")]
    SignatureCardinality {
        /// The transaction type.
        tx_type: TransactionType,
        /// The length of the rejected list.
        count: usize,
    },
    /// The signed form was requested before a signature was appended.
    #[error("{0} has no signature to encode")]
    MissingSignature(TransactionType),
    /// The input could not be decoded into a transaction.
    #[error("There is an error while decoding process: {0}")]
    Decode(#[from] DecodeError),
}

impl TransactionError {
    /// Shorthand for an [TransactionError::InvalidFormat] on `field`.
    pub const fn invalid(field: &'static str, source: FormatError) -> Self {
        Self::InvalidFormat { field, source }
    }
}

/// The structural cause of a decoding failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The RLP itself is malformed.
    #[error("RLP error: {0}")]
    Rlp(alloy_rlp::Error),
    /// The hex input could not be converted to bytes.
    #[error("Invalid hex input: {0}")]
    Hex(#[from] FormatError),
    /// The top level item is a string rather than a list.
    #[error("Expected an RLP list")]
    NotAList,
    /// The list does not have the expected arity.
    #[error("Expected {expected} RLP items, got {got}")]
    ItemCount {
        /// The expected number of items.
        expected: usize,
        /// The number of items found.
        got: usize,
    },
    /// Bytes remain after the top level list.
    #[error("{0} trailing bytes after the transaction")]
    TrailingBytes(usize),
    /// The recipient is not a 20 byte address.
    #[error("Invalid recipient address length: expected 20 bytes, got {0}")]
    InvalidAddressLength(usize),
}

impl From<alloy_rlp::Error> for DecodeError {
    fn from(err: alloy_rlp::Error) -> Self {
        Self::Rlp(err)
    }
}

impl From<alloy_rlp::Error> for TransactionError {
    fn from(err: alloy_rlp::Error) -> Self {
        Self::Decode(DecodeError::Rlp(err))
    }
}
