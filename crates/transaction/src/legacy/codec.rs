//! RLP encoding and decoding of the [LegacyTransaction].
//!
//! ```text
//! signing payload = rlp([nonce, gasPrice, gas, to, value, input, chainId, 0, 0])
//! signed          = rlp([nonce, gasPrice, gas, to, value, input, v, r, s])
//! ```

use super::LegacyTransaction;
use crate::{
    common::RequiredFields,
    errors::{DecodeError, TransactionError, TxResult},
    traits::{Signable, TransactionEncoding},
};
use alloc::vec::Vec;
use alloy_primitives::{Address, Bytes, U256};
use alloy_rlp::{BufMut, Decodable, Encodable, Header, EMPTY_STRING_CODE};
use klay_primitives::{hex::parse_hex_bytes, signature::SignatureData, tx_type::TransactionType};

/// The number of items in both encodings.
const LEGACY_LIST_LENGTH: usize = 9;

/// The length of an address in bytes.
const ADDRESS_LENGTH: usize = 20;

/// The length of the two empty placeholders closing the signing payload.
const SIGNING_PLACEHOLDERS_LENGTH: usize = 2;

impl LegacyTransaction {
    /// Decodes a signed legacy transaction.
    ///
    /// The input must be a single RLP list of exactly nine strings,
    /// `[nonce, gasPrice, gas, to, value, input, v, r, s]`. Any structural mismatch is reported
    /// as [TransactionError::Decode]. The decoded transaction carries no chain id or sender.
    pub fn decode(buf: &[u8]) -> TxResult<Self> {
        match Self::decode_signed(buf) {
            Ok(tx) => {
                tracing::debug!(target: "legacy-tx", "Decoded legacy transaction");
                Ok(tx)
            }
            Err(err) => {
                tracing::warn!(target: "legacy-tx", "Failed to decode legacy transaction: {}", err);
                Err(err)
            }
        }
    }

    /// Decodes a signed legacy transaction from a hex string, with or without `0x` prefix.
    pub fn decode_hex(raw: &str) -> TxResult<Self> {
        let bytes = parse_hex_bytes(raw).map_err(DecodeError::Hex)?;
        Self::decode(&bytes)
    }

    fn decode_signed(mut buf: &[u8]) -> TxResult<Self> {
        let header = Header::decode(&mut buf).map_err(DecodeError::Rlp)?;
        if !header.list {
            return Err(DecodeError::NotAList.into());
        }
        if buf.len() < header.payload_length {
            return Err(DecodeError::Rlp(alloy_rlp::Error::InputTooShort).into());
        }
        let (mut payload, rest) = buf.split_at(header.payload_length);
        if !rest.is_empty() {
            return Err(DecodeError::TrailingBytes(rest.len()).into());
        }

        let got = count_items(payload)?;
        if got != LEGACY_LIST_LENGTH {
            return Err(DecodeError::ItemCount { expected: LEGACY_LIST_LENGTH, got }.into());
        }

        let nonce = U256::decode(&mut payload)?;
        let gas_price = U256::decode(&mut payload)?;
        let gas = U256::decode(&mut payload)?;
        let to = Bytes::decode(&mut payload)?;
        if to.len() != ADDRESS_LENGTH {
            return Err(DecodeError::InvalidAddressLength(to.len()).into());
        }
        let value = U256::decode(&mut payload)?;
        let input = Bytes::decode(&mut payload)?;
        let signature = SignatureData::decode_fields(&mut payload)?;

        let mut tx = Self::builder()
            .nonce(nonce)
            .gas_price(gas_price)
            .gas(gas)
            .to(Address::from_slice(&to))
            .value(value)
            .input(input)
            .build()?;
        tx.append_signature(signature)?;
        Ok(tx)
    }

    /// The summed length of the six leading fields shared by both encodings.
    fn fields_length(&self, required: &RequiredFields) -> usize {
        required.nonce.length() +
            required.gas_price.length() +
            required.gas.length() +
            self.to.length() +
            self.value.length() +
            self.input.length()
    }

    fn encode_fields(&self, required: &RequiredFields, out: &mut dyn BufMut) {
        required.nonce.encode(out);
        required.gas_price.encode(out);
        required.gas.encode(out);
        self.to.encode(out);
        self.value.encode(out);
        self.input.encode(out);
    }

    fn signing_payload(&self) -> TxResult<Bytes> {
        let required = self.common.validate(true)?;
        let chain_id = required.chain_id.ok_or(TransactionError::MissingField("chainId"))?;

        let payload_length =
            self.fields_length(&required) + chain_id.length() + SIGNING_PLACEHOLDERS_LENGTH;
        let header = Header { list: true, payload_length };
        let mut out = Vec::with_capacity(header.length() + payload_length);

        header.encode(&mut out);
        self.encode_fields(&required, &mut out);
        chain_id.encode(&mut out);
        out.put_u8(EMPTY_STRING_CODE);
        out.put_u8(EMPTY_STRING_CODE);

        tracing::trace!(target: "legacy-tx", "Encoded signing payload: {} bytes", out.len());
        Ok(out.into())
    }

    fn signed_payload(&self) -> TxResult<Bytes> {
        let required = self.common.validate(false)?;
        let signature = self
            .common
            .signature()
            .ok_or(TransactionError::MissingSignature(TransactionType::Legacy))?;

        let payload_length = self.fields_length(&required) + signature.fields_length();
        let header = Header { list: true, payload_length };
        let mut out = Vec::with_capacity(header.length() + payload_length);

        header.encode(&mut out);
        self.encode_fields(&required, &mut out);
        signature.encode_fields(&mut out);

        tracing::trace!(target: "legacy-tx", "Encoded signed transaction: {} bytes", out.len());
        Ok(out.into())
    }
}

impl Signable for LegacyTransaction {
    fn encode_for_signing(&self) -> TxResult<Bytes> {
        self.signing_payload()
    }

    fn append_signature(&mut self, signature: SignatureData) -> TxResult<()> {
        self.common.append_signature(signature, self.policy, TransactionType::Legacy)
    }

    fn append_signatures(&mut self, signatures: &[SignatureData]) -> TxResult<()> {
        self.common.append_signatures(signatures, self.policy, TransactionType::Legacy)
    }
}

impl TransactionEncoding for LegacyTransaction {
    fn encode_signed(&self) -> TxResult<Bytes> {
        self.signed_payload()
    }
}

/// Counts the top level items of an RLP list payload. Nested lists count as one item each and
/// are rejected later by the field decoders.
fn count_items(mut payload: &[u8]) -> Result<usize, DecodeError> {
    let mut count = 0;
    while !payload.is_empty() {
        let item = Header::decode(&mut payload)?;
        if payload.len() < item.payload_length {
            return Err(DecodeError::Rlp(alloy_rlp::Error::InputTooShort));
        }
        payload = &payload[item.payload_length..];
        count += 1;
    }
    Ok(count)
}
