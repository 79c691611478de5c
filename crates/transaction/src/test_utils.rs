//! Fixtures shared by the transaction tests.

use crate::legacy::LegacyTransaction;
use alloy_primitives::hex;
use klay_primitives::signature::SignatureData;

/// The signing payload of [golden_transaction].
pub const GOLDEN_SIGNING_RLP: [u8; 46] = hex!(
    "ed808505d21dba00830186a0947b65b75d204abed71587c9e519a89277766ee1d0880de0b6b3a764000080018080"
);

/// The signed encoding of [golden_transaction] carrying [golden_signature].
pub const GOLDEN_SIGNED_RLP: [u8; 113] = hex!(
    "f86f808505d21dba00830186a0947b65b75d204abed71587c9e519a89277766ee1d0880de0b6b3a764000080820feaa03d820b27d0997baf16f98df01c7b2b2e9734ad05b2228c4d403c2facff8397f3a01f4a44eeb8b7f0b0019162d1d6b90c401078e56fcd7495e74f7cfcd37e25f017"
);

/// An unsigned 1 KLAY transfer with every common field set.
pub fn golden_transaction() -> LegacyTransaction {
    LegacyTransaction::builder()
        .to_hex("0x7b65B75d204aBed71587c9E519a89277766EE1d0")
        .and_then(|b| b.value_hex("0x0de0b6b3a7640000"))
        .and_then(|b| b.input_hex("0x"))
        .and_then(|b| b.nonce_hex("0x0"))
        .and_then(|b| b.gas_hex("0x186a0"))
        .and_then(|b| b.gas_price_hex("0x5d21dba00"))
        .and_then(|b| b.chain_id_hex("0x1"))
        .and_then(|b| b.build())
        .expect("golden transaction is valid")
}

/// A signature for [golden_transaction] on chain 2019.
pub fn golden_signature() -> SignatureData {
    SignatureData::from_hex(
        "0x0fea",
        "0x3d820b27d0997baf16f98df01c7b2b2e9734ad05b2228c4d403c2facff8397f3",
        "0x1f4a44eeb8b7f0b0019162d1d6b90c401078e56fcd7495e74f7cfcd37e25f017",
    )
    .expect("golden signature is valid hex")
}
