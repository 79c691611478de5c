//! Contains the [LegacyTransactionBuilder].

use super::LegacyTransaction;
use crate::{
    common::{CommonFields, SignaturePolicy},
    errors::{TransactionError, TxResult},
};
use alloy_primitives::{Address, Bytes, U256};
use klay_primitives::{
    hex::{is_empty_address, parse_address, parse_hex_bytes, parse_quantity},
    signature::SignatureData,
    tx_type::TransactionType,
};

/// Collects the fields of a [LegacyTransaction] and validates them as a whole in
/// [LegacyTransactionBuilder::build].
///
/// Hex setters validate their input immediately. Whether `to` and `value` were set at all is
/// only checked when building.
#[derive(Debug, Default, Clone)]
pub struct LegacyTransactionBuilder {
    common: CommonFields,
    to: Option<Address>,
    value: Option<U256>,
    input: Option<Bytes>,
    signature: Option<SignatureData>,
    policy: SignaturePolicy,
}

impl LegacyTransactionBuilder {
    /// Replaces all common fields at once.
    pub fn common(mut self, common: CommonFields) -> Self {
        self.common = common;
        self
    }

    /// Sets the nonce.
    pub fn nonce(mut self, nonce: U256) -> Self {
        self.common.set_nonce(nonce);
        self
    }

    /// Sets the nonce from a hex quantity.
    pub fn nonce_hex(mut self, nonce: &str) -> TxResult<Self> {
        self.common.set_nonce_hex(nonce)?;
        Ok(self)
    }

    /// Sets the gas limit.
    pub fn gas(mut self, gas: U256) -> Self {
        self.common.set_gas(gas);
        self
    }

    /// Sets the gas limit from a hex quantity.
    pub fn gas_hex(mut self, gas: &str) -> TxResult<Self> {
        self.common.set_gas_hex(gas)?;
        Ok(self)
    }

    /// Sets the gas price.
    pub fn gas_price(mut self, gas_price: U256) -> Self {
        self.common.set_gas_price(gas_price);
        self
    }

    /// Sets the gas price from a hex quantity.
    pub fn gas_price_hex(mut self, gas_price: &str) -> TxResult<Self> {
        self.common.set_gas_price_hex(gas_price)?;
        Ok(self)
    }

    /// Sets the chain id.
    pub fn chain_id(mut self, chain_id: U256) -> Self {
        self.common.set_chain_id(chain_id);
        self
    }

    /// Sets the chain id from a hex quantity.
    pub fn chain_id_hex(mut self, chain_id: &str) -> TxResult<Self> {
        self.common.set_chain_id_hex(chain_id)?;
        Ok(self)
    }

    /// Sets the sender.
    pub fn from(mut self, from: Address) -> Self {
        self.common.set_from(from);
        self
    }

    /// Sets the sender from a hex address.
    pub fn from_hex(mut self, from: &str) -> TxResult<Self> {
        self.common.set_from_hex(from)?;
        Ok(self)
    }

    /// Sets the recipient.
    pub fn to(mut self, to: Address) -> Self {
        self.to = Some(to);
        self
    }

    /// Sets the recipient from a hex address.
    ///
    /// The empty address `0x` is accepted and leaves the recipient unset, which
    /// [LegacyTransactionBuilder::build] then rejects.
    pub fn to_hex(mut self, to: &str) -> TxResult<Self> {
        self.to = if is_empty_address(to) {
            None
        } else {
            Some(parse_address(to).map_err(|e| TransactionError::invalid("to", e))?)
        };
        Ok(self)
    }

    /// Sets the amount transferred.
    pub fn value(mut self, value: U256) -> Self {
        self.value = Some(value);
        self
    }

    /// Sets the amount transferred from a hex quantity.
    pub fn value_hex(mut self, value: &str) -> TxResult<Self> {
        self.value =
            Some(parse_quantity(value).map_err(|e| TransactionError::invalid("value", e))?);
        Ok(self)
    }

    /// Sets the call data.
    pub fn input(mut self, input: impl Into<Bytes>) -> Self {
        self.input = Some(input.into());
        self
    }

    /// Sets the call data from a hex string.
    pub fn input_hex(mut self, input: &str) -> TxResult<Self> {
        self.input =
            Some(parse_hex_bytes(input).map_err(|e| TransactionError::invalid("input", e))?);
        Ok(self)
    }

    /// Sets the initial signature.
    pub fn signature(mut self, signature: SignatureData) -> Self {
        self.signature = Some(signature);
        self
    }

    /// Sets what happens when a signature is appended to an occupied slot.
    pub fn signature_policy(mut self, policy: SignaturePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Builds the [LegacyTransaction].
    ///
    /// Fails with [TransactionError::MissingField] if `to` or `value` was never set. `input`
    /// defaults to empty call data.
    pub fn build(self) -> TxResult<LegacyTransaction> {
        let to = self.to.ok_or(TransactionError::MissingField("to"))?;
        let value = self.value.ok_or(TransactionError::MissingField("value"))?;

        let mut tx = LegacyTransaction {
            common: self.common,
            to,
            value,
            input: self.input.unwrap_or_default(),
            policy: self.policy,
        };
        if let Some(signature) = self.signature {
            tx.common.append_signature(signature, tx.policy, TransactionType::Legacy)?;
        }
        Ok(tx)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::traits::{Signable, Transaction};
    use alloc::format;
    use alloy_primitives::{address, bytes};
    use klay_primitives::errors::FormatError;

    const TO: &str = "0x7b65B75d204aBed71587c9E519a89277766EE1d0";

    #[test]
    fn test_build_minimal() {
        let tx = LegacyTransaction::builder()
            .to_hex(TO)
            .unwrap()
            .value_hex("0x0")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(tx.to(), address!("7b65b75d204abed71587c9e519a89277766ee1d0"));
        assert_eq!(tx.value(), U256::ZERO);
        assert!(tx.input().is_empty());
        assert_eq!(tx.common(), &CommonFields::default());
    }

    #[test]
    fn test_build_missing_to() {
        let err = LegacyTransaction::builder().value(U256::from(1)).build().unwrap_err();
        assert_eq!(err, TransactionError::MissingField("to"));
    }

    #[test]
    fn test_build_missing_value() {
        let err = LegacyTransaction::builder().to_hex(TO).unwrap().build().unwrap_err();
        assert_eq!(err, TransactionError::MissingField("value"));
    }

    #[test]
    fn test_empty_address_sentinel() {
        let builder = LegacyTransaction::builder().to_hex("0x").unwrap().value(U256::from(1));
        assert_eq!(builder.build().unwrap_err(), TransactionError::MissingField("to"));

        // A real address set earlier is cleared by the sentinel.
        let builder = LegacyTransaction::builder()
            .to_hex(TO)
            .unwrap()
            .to_hex("0x")
            .unwrap()
            .value(U256::from(1));
        assert_eq!(builder.build().unwrap_err(), TransactionError::MissingField("to"));
    }

    #[test]
    fn test_to_wrong_length() {
        let short = format!("0x{}", "11".repeat(19));
        let err = LegacyTransaction::builder().to_hex(&short).unwrap_err();
        assert_eq!(err, TransactionError::invalid("to", FormatError::InvalidAddress(38)));

        let long = format!("0x{}", "11".repeat(21));
        let err = LegacyTransaction::builder().to_hex(&long).unwrap_err();
        assert_eq!(err, TransactionError::invalid("to", FormatError::InvalidAddress(42)));
    }

    #[test]
    fn test_invalid_value_and_input() {
        let err = LegacyTransaction::builder().value_hex("0xkaia").unwrap_err();
        assert_eq!(err, TransactionError::invalid("value", FormatError::InvalidHex));

        let err = LegacyTransaction::builder().input_hex("0x12zz").unwrap_err();
        assert_eq!(err, TransactionError::invalid("input", FormatError::InvalidHex));
    }

    #[test]
    fn test_input_hex() {
        let tx = LegacyTransaction::builder()
            .to_hex(TO)
            .unwrap()
            .value(U256::ZERO)
            .input_hex("0x31323334")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(tx.input(), &bytes!("31323334"));
    }

    #[test]
    fn test_common_setters() {
        let tx = LegacyTransaction::builder()
            .to_hex(TO)
            .unwrap()
            .value(U256::ZERO)
            .nonce_hex("0x4d2")
            .unwrap()
            .gas_hex("0xf4240")
            .unwrap()
            .gas_price_hex("0x19")
            .unwrap()
            .chain_id_hex("0x7e3")
            .unwrap()
            .from_hex("0xa94f5374fce5edbc8e2a8697c15331677e6ebf0b")
            .unwrap()
            .build()
            .unwrap();

        let common = tx.common();
        assert_eq!(common.nonce, Some(U256::from(1234)));
        assert_eq!(common.gas, Some(U256::from(1_000_000)));
        assert_eq!(common.gas_price, Some(U256::from(25)));
        assert_eq!(common.chain_id, Some(U256::from(2019)));
        assert_eq!(common.from, Some(address!("a94f5374fce5edbc8e2a8697c15331677e6ebf0b")));
    }

    #[test]
    fn test_build_with_signature() {
        let sig = SignatureData::new(bytes!("0fea"), bytes!("01"), bytes!("02"));
        let tx = LegacyTransaction::builder()
            .to_hex(TO)
            .unwrap()
            .value(U256::ZERO)
            .signature(sig.clone())
            .signature_policy(SignaturePolicy::RejectExisting)
            .build()
            .unwrap();
        assert_eq!(tx.signatures(), &[sig]);
        assert_eq!(tx.signature_policy(), SignaturePolicy::RejectExisting);
    }
}
