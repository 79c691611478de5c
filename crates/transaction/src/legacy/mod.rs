//! Contains the [LegacyTransaction] type.

mod builder;
pub use builder::LegacyTransactionBuilder;

mod codec;

use crate::{
    common::{CommonFields, SignaturePolicy},
    traits::Transaction,
};
use alloy_primitives::{Address, Bytes, U256};
use core::any::Any;
use klay_primitives::tx_type::TransactionType;

/// A legacy transaction: a value transfer or contract call identified by field order alone,
/// carrying at most one signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyTransaction {
    /// The fields shared by every transaction kind.
    common: CommonFields,
    /// The account receiving the value.
    to: Address,
    /// The amount transferred, in peb.
    value: U256,
    /// Call data.
    input: Bytes,
    /// What to do when a signature is appended to an occupied slot.
    policy: SignaturePolicy,
}

impl LegacyTransaction {
    /// Returns a new [LegacyTransactionBuilder].
    pub fn builder() -> LegacyTransactionBuilder {
        LegacyTransactionBuilder::default()
    }

    /// Returns the recipient.
    pub const fn to(&self) -> Address {
        self.to
    }

    /// Returns the amount transferred.
    pub const fn value(&self) -> U256 {
        self.value
    }

    /// Returns the call data.
    pub const fn input(&self) -> &Bytes {
        &self.input
    }

    /// Returns the signature policy.
    pub const fn signature_policy(&self) -> SignaturePolicy {
        self.policy
    }
}

impl Transaction for LegacyTransaction {
    fn tx_type(&self) -> TransactionType {
        TransactionType::Legacy
    }

    fn common(&self) -> &CommonFields {
        &self.common
    }

    fn common_mut(&mut self) -> &mut CommonFields {
        &mut self.common
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn compare_fields(&self, other: &dyn Transaction, check_signature: bool) -> bool {
        if self.tx_type() != other.tx_type() {
            return false;
        }
        let Some(other) = other.as_any().downcast_ref::<Self>() else {
            return false;
        };

        self.common.compare(&other.common, check_signature) &&
            self.to == other.to &&
            self.value == other.value &&
            self.input == other.input
    }
}
