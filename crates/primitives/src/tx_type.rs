//! Contains the [TransactionType] tag.

use core::fmt::Display;

/// The legacy transaction type byte. Legacy transactions are not prefixed with it on the wire.
pub const LEGACY_TX_TYPE_ID: u8 = 0x00;

/// The kind of a transaction.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
#[non_exhaustive]
pub enum TransactionType {
    /// An untyped transaction, identified by its field order.
    #[default]
    Legacy,
}

impl TransactionType {
    /// Returns the type byte.
    pub const fn id(&self) -> u8 {
        match self {
            Self::Legacy => LEGACY_TX_TYPE_ID,
        }
    }

    /// Returns the canonical name of the type.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Legacy => "TxTypeLegacyTransaction",
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u8> for TransactionType {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            LEGACY_TX_TYPE_ID => Ok(Self::Legacy),
            other => Err(other),
        }
    }
}
