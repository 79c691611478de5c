//! Capability traits implemented by each transaction kind.

use crate::{common::CommonFields, errors::TxResult};
use alloc::string::String;
use alloy_primitives::{hex, keccak256, Bytes, B256};
use core::{any::Any, fmt::Debug};
use klay_primitives::{signature::SignatureData, tx_type::TransactionType};

/// The field model shared by every transaction kind.
pub trait Transaction: Debug + Send + Sync + 'static {
    /// Returns the kind of the transaction.
    fn tx_type(&self) -> TransactionType;

    /// Returns the fields shared by every kind.
    fn common(&self) -> &CommonFields;

    /// Returns the fields shared by every kind, mutably. Used to fill in the nonce, gas price or
    /// chain id after building.
    fn common_mut(&mut self) -> &mut CommonFields;

    /// Upcasts to [Any], so that [Transaction::compare_fields] can check the concrete kind.
    fn as_any(&self) -> &dyn Any;

    /// Checks that every field needed by the requested encoding is present.
    fn validate_optional_values(&self, for_signing: bool) -> TxResult<()> {
        self.common().validate(for_signing).map(|_| ())
    }

    /// Compares the fields of two transactions. Returns `false` on any mismatch, including a
    /// different transaction kind. The signature is compared only when `check_signature` is set.
    fn compare_fields(&self, other: &dyn Transaction, check_signature: bool) -> bool;
}

/// A transaction that can be signed.
pub trait Signable: Transaction {
    /// Returns the RLP encoded payload that gets signed.
    fn encode_for_signing(&self) -> TxResult<Bytes>;

    /// Attaches a signature.
    fn append_signature(&mut self, signature: SignatureData) -> TxResult<()>;

    /// Attaches a list of signatures.
    fn append_signatures(&mut self, signatures: &[SignatureData]) -> TxResult<()>;

    /// Returns the signatures attached so far.
    fn signatures(&self) -> &[SignatureData] {
        self.common().signatures()
    }

    /// Returns the keccak-256 hash of the signing payload.
    fn signature_hash(&self) -> TxResult<B256> {
        Ok(keccak256(self.encode_for_signing()?))
    }

    /// Returns the signing payload as a `0x` prefixed hex string.
    fn rlp_encoding_for_signature_hex(&self) -> TxResult<String> {
        Ok(hex::encode_prefixed(self.encode_for_signing()?))
    }
}

/// A transaction with a final, signed encoding.
pub trait TransactionEncoding: Transaction {
    /// Returns the RLP encoded signed transaction.
    fn encode_signed(&self) -> TxResult<Bytes>;

    /// Returns the signed transaction as a `0x` prefixed hex string.
    fn raw_transaction(&self) -> TxResult<String> {
        Ok(hex::encode_prefixed(self.encode_signed()?))
    }

    /// Returns the keccak-256 hash of the signed encoding.
    fn transaction_hash(&self) -> TxResult<B256> {
        Ok(keccak256(self.encode_signed()?))
    }
}
