//! Contains the [SignatureData] type.

use crate::{errors::FormatResult, hex::parse_hex_bytes};
use alloy_primitives::Bytes;
use alloy_rlp::{BufMut, Decodable, Encodable};

/// An ECDSA signature as carried by a transaction: the recovery id `v` and the curve points `r`
/// and `s`, each kept as the raw bytes they were created or decoded with.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct SignatureData {
    /// The recovery id.
    pub v: Bytes,
    /// The `r` value.
    pub r: Bytes,
    /// The `s` value.
    pub s: Bytes,
}

impl SignatureData {
    /// Creates a new [SignatureData] from raw parts.
    pub fn new(v: impl Into<Bytes>, r: impl Into<Bytes>, s: impl Into<Bytes>) -> Self {
        Self { v: v.into(), r: r.into(), s: s.into() }
    }

    /// Creates a new [SignatureData] from hex strings.
    pub fn from_hex(v: &str, r: &str, s: &str) -> FormatResult<Self> {
        Ok(Self { v: parse_hex_bytes(v)?, r: parse_hex_bytes(r)?, s: parse_hex_bytes(s)? })
    }

    /// The empty signature placeholder: `v = 0x01`, `r = 0x`, `s = 0x`.
    pub fn empty() -> Self {
        Self {
            v: Bytes::from_static(&[0x01]),
            r: Bytes::new(),
            s: Bytes::new(),
        }
    }

    /// Returns `true` if this is the empty placeholder, comparing numerically so that
    /// zero-padded encodings of the same values also match.
    pub fn is_empty(&self) -> bool {
        strip_leading_zeros(&self.v) == [0x01] && is_zero(&self.r) && is_zero(&self.s)
    }

    /// The length of `v`, `r` and `s` encoded as consecutive RLP strings, without a list header.
    pub fn fields_length(&self) -> usize {
        self.v.length() + self.r.length() + self.s.length()
    }

    /// Encodes `v`, `r` and `s` as consecutive RLP strings, without a list header.
    pub fn encode_fields(&self, out: &mut dyn BufMut) {
        self.v.encode(out);
        self.r.encode(out);
        self.s.encode(out);
    }

    /// Decodes `v`, `r` and `s` from consecutive RLP strings.
    pub fn decode_fields(buf: &mut &[u8]) -> alloy_rlp::Result<Self> {
        Ok(Self { v: Bytes::decode(buf)?, r: Bytes::decode(buf)?, s: Bytes::decode(buf)? })
    }
}

impl Default for SignatureData {
    fn default() -> Self {
        Self::empty()
    }
}

fn strip_leading_zeros(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
    &bytes[start..]
}

fn is_zero(bytes: &[u8]) -> bool {
    bytes.iter().all(|b| *b == 0)
}

#[cfg(test)]
mod test {
    use super::*;
    use alloc::vec::Vec;
    use alloy_primitives::{bytes, hex};

    fn sample() -> SignatureData {
        SignatureData::from_hex(
            "0x0fea",
            "0x3d820b27d0997baf16f98df01c7b2b2e9734ad05b2228c4d403c2facff8397f3",
            "0x1f4a44eeb8b7f0b0019162d1d6b90c401078e56fcd7495e74f7cfcd37e25f017",
        )
        .unwrap()
    }

    #[test]
    fn test_empty_signature() {
        assert!(SignatureData::empty().is_empty());
        assert!(SignatureData::default().is_empty());
        assert!(SignatureData::new(bytes!("0001"), bytes!("00"), bytes!("0000")).is_empty());
        assert!(!SignatureData::new(bytes!("02"), Bytes::new(), Bytes::new()).is_empty());
        assert!(!SignatureData::new(bytes!("01"), bytes!("01"), Bytes::new()).is_empty());
        assert!(!sample().is_empty());
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert!(SignatureData::from_hex("0x01", "0xzz", "0x").is_err());
    }

    #[test]
    fn test_encode_fields() {
        let mut out = Vec::new();
        SignatureData::empty().encode_fields(&mut out);
        assert_eq!(out, hex!("018080"));
        assert_eq!(SignatureData::empty().fields_length(), 3);

        let sig = sample();
        let mut out = Vec::new();
        sig.encode_fields(&mut out);
        assert_eq!(out.len(), sig.fields_length());
        assert_eq!(&out[..3], &hex!("820fea"));

        let decoded = SignatureData::decode_fields(&mut out.as_slice()).unwrap();
        assert_eq!(decoded, sig);
    }

    #[test]
    fn test_decode_fields_too_short() {
        let err = SignatureData::decode_fields(&mut hex!("0180").as_slice()).unwrap_err();
        assert_eq!(err, alloy_rlp::Error::InputTooShort);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let sig = sample();
        let json = serde_json::to_string(&sig).unwrap();
        let back: SignatureData = serde_json::from_str(&json).unwrap();
        assert_eq!(sig, back);
    }
}
