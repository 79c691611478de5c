//! Contains the [CommonFields] shared by every transaction kind.

use crate::errors::{TransactionError, TxResult};
use alloy_primitives::{Address, U256};
use klay_primitives::{
    hex::{is_empty_address, parse_address, parse_quantity},
    signature::SignatureData,
    tx_type::TransactionType,
};

/// Decides what happens when a signature is appended to a transaction whose single slot is
/// already occupied.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub enum SignaturePolicy {
    /// An empty placeholder signature may be replaced. A real signature is never replaced.
    #[default]
    ReplaceEmpty,
    /// Any signature in the slot, placeholder or not, rejects the append.
    RejectExisting,
}

/// Fields every transaction kind carries, plus the single signature slot.
///
/// Numeric fields stay optional until encoding so that they can be filled in after the
/// transaction is built.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CommonFields {
    /// The sender. Not part of the legacy encodings.
    pub from: Option<Address>,
    /// The sender's nonce.
    pub nonce: Option<U256>,
    /// The gas limit.
    pub gas: Option<U256>,
    /// The gas price.
    pub gas_price: Option<U256>,
    /// The network id, committed through the signing payload.
    pub chain_id: Option<U256>,
    signature: Option<SignatureData>,
}

/// The fields [CommonFields::validate] guarantees to be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredFields {
    /// The sender's nonce.
    pub nonce: U256,
    /// The gas price.
    pub gas_price: U256,
    /// The gas limit.
    pub gas: U256,
    /// The network id, only guaranteed when validating for signing.
    pub chain_id: Option<U256>,
}

impl CommonFields {
    /// Sets the nonce.
    pub fn set_nonce(&mut self, nonce: U256) {
        self.nonce = Some(nonce);
    }

    /// Sets the nonce from a hex quantity.
    pub fn set_nonce_hex(&mut self, nonce: &str) -> TxResult<()> {
        self.nonce = Some(quantity("nonce", nonce)?);
        Ok(())
    }

    /// Sets the gas limit.
    pub fn set_gas(&mut self, gas: U256) {
        self.gas = Some(gas);
    }

    /// Sets the gas limit from a hex quantity.
    pub fn set_gas_hex(&mut self, gas: &str) -> TxResult<()> {
        self.gas = Some(quantity("gas", gas)?);
        Ok(())
    }

    /// Sets the gas price.
    pub fn set_gas_price(&mut self, gas_price: U256) {
        self.gas_price = Some(gas_price);
    }

    /// Sets the gas price from a hex quantity.
    pub fn set_gas_price_hex(&mut self, gas_price: &str) -> TxResult<()> {
        self.gas_price = Some(quantity("gasPrice", gas_price)?);
        Ok(())
    }

    /// Sets the chain id.
    pub fn set_chain_id(&mut self, chain_id: U256) {
        self.chain_id = Some(chain_id);
    }

    /// Sets the chain id from a hex quantity.
    pub fn set_chain_id_hex(&mut self, chain_id: &str) -> TxResult<()> {
        self.chain_id = Some(quantity("chainId", chain_id)?);
        Ok(())
    }

    /// Sets the sender.
    pub fn set_from(&mut self, from: Address) {
        self.from = Some(from);
    }

    /// Sets the sender from a hex address. The empty address clears it.
    pub fn set_from_hex(&mut self, from: &str) -> TxResult<()> {
        self.from = if is_empty_address(from) {
            None
        } else {
            Some(parse_address(from).map_err(|e| TransactionError::invalid("from", e))?)
        };
        Ok(())
    }

    /// Returns the signature slot as a list of zero or one signatures.
    pub fn signatures(&self) -> &[SignatureData] {
        self.signature.as_slice()
    }

    /// Returns the signature, if one has been appended.
    pub const fn signature(&self) -> Option<&SignatureData> {
        self.signature.as_ref()
    }

    /// Checks that the fields needed for encoding are present, failing on the first missing one.
    /// The chain id is only required when `for_signing` is set.
    pub fn validate(&self, for_signing: bool) -> TxResult<RequiredFields> {
        let nonce = self.nonce.ok_or(TransactionError::MissingField("nonce"))?;
        let gas_price = self.gas_price.ok_or(TransactionError::MissingField("gasPrice"))?;
        let gas = self.gas.ok_or(TransactionError::MissingField("gas"))?;
        let chain_id = if for_signing {
            Some(self.chain_id.ok_or(TransactionError::MissingField("chainId"))?)
        } else {
            self.chain_id
        };
        Ok(RequiredFields { nonce, gas_price, gas, chain_id })
    }

    /// Places `signature` in the slot, following `policy` when the slot is occupied.
    pub fn append_signature(
        &mut self,
        signature: SignatureData,
        policy: SignaturePolicy,
        tx_type: TransactionType,
    ) -> TxResult<()> {
        self.ensure_slot_free(policy, tx_type)?;
        tracing::debug!(target: "signatures", "Appending signature to {}", tx_type);
        self.signature = Some(signature);
        Ok(())
    }

    /// List form of [CommonFields::append_signature]. The list must hold exactly one signature.
    /// An occupied slot is reported before a bad list length.
    pub fn append_signatures(
        &mut self,
        signatures: &[SignatureData],
        policy: SignaturePolicy,
        tx_type: TransactionType,
    ) -> TxResult<()> {
        self.ensure_slot_free(policy, tx_type)?;
        let [signature] = signatures else {
            return Err(TransactionError::SignatureCardinality {
                tx_type,
                count: signatures.len(),
            });
        };
        self.append_signature(signature.clone(), policy, tx_type)
    }

    fn ensure_slot_free(&self, policy: SignaturePolicy, tx_type: TransactionType) -> TxResult<()> {
        match (&self.signature, policy) {
            (None, _) => Ok(()),
            (Some(existing), SignaturePolicy::ReplaceEmpty) if existing.is_empty() => Ok(()),
            (Some(_), _) => {
                tracing::warn!(target: "signatures", "Rejected second signature for {}", tx_type);
                Err(TransactionError::SignatureConflict(tx_type))
            }
        }
    }

    /// Compares two sets of common fields.
    ///
    /// `nonce`, `gas` and `gas_price` must match. `chain_id` and `from` are not carried by the
    /// signed encoding, so they are only compared when both sides have them.
    pub fn compare(&self, other: &Self, check_signature: bool) -> bool {
        if self.nonce != other.nonce || self.gas != other.gas || self.gas_price != other.gas_price {
            return false;
        }
        if !matches_when_both_set(&self.chain_id, &other.chain_id) ||
            !matches_when_both_set(&self.from, &other.from)
        {
            return false;
        }
        !check_signature || self.signature == other.signature
    }
}

fn quantity(field: &'static str, value: &str) -> TxResult<U256> {
    parse_quantity(value).map_err(|e| TransactionError::invalid(field, e))
}

fn matches_when_both_set<T: PartialEq>(a: &Option<T>, b: &Option<T>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a == b,
        _ => true,
    }
}
