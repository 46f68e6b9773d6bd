//! Implements `RuneId` and the packed `EdictId`

use std::fmt;
use std::str::FromStr;

use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::utils::constants::{CLAIM_BIT, EDICT_ID_TX_BITS, MAX_RUNE_ID_BLOCK, MAX_RUNE_ID_TX};
use crate::RuneIdError;

/// Rune identifier: the height of the etching block and the index of the
/// etching transaction in that block, written as `block:tx`.
#[derive(
    Debug,
    PartialEq,
    Copy,
    Clone,
    Hash,
    Eq,
    PartialOrd,
    Ord,
    Default,
    DeserializeFromStr,
    SerializeDisplay,
)]
pub struct RuneId {
    pub block: u64,
    pub tx: u64,
}

impl RuneId {
    /// Creates a rune id which can be packed into an [`EdictId`] without
    /// overlapping fields.
    ///
    /// Parsing does not check the ranges; use this when the packed id must be
    /// unpackable.
    pub fn new(block: u64, tx: u64) -> Result<Self, RuneIdError> {
        if block > MAX_RUNE_ID_BLOCK {
            return Err(RuneIdError::BlockOutOfRange(block));
        }
        if tx > MAX_RUNE_ID_TX {
            return Err(RuneIdError::TxOutOfRange(tx));
        }

        Ok(Self { block, tx })
    }

    /// Packs the id as `(block << 16) | tx`, setting [`CLAIM_BIT`] when
    /// `is_claim` is true.
    ///
    /// Fields outside the range checked by [`RuneId::new`] are packed as is
    /// and overlap their neighbours.
    pub fn edict_id(self, is_claim: bool) -> EdictId {
        let mut value = (self.block << EDICT_ID_TX_BITS) | self.tx;
        if is_claim {
            value |= CLAIM_BIT;
        }

        EdictId(value)
    }
}

impl fmt::Display for RuneId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.block, self.tx)
    }
}

impl FromStr for RuneId {
    type Err = RuneIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (block, tx) = s.split_once(':').ok_or(RuneIdError::Separator)?;

        Ok(Self {
            block: block.parse().map_err(RuneIdError::Block)?,
            tx: tx.parse().map_err(RuneIdError::Tx)?,
        })
    }
}

/// A [`RuneId`] packed into a single integer, as referenced by edicts.
#[derive(Debug, PartialEq, Copy, Clone, Hash, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdictId(u64);

impl EdictId {
    pub fn from_value(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }

    pub fn is_claim(self) -> bool {
        self.0 & CLAIM_BIT != 0
    }

    /// Unpacks the block height and transaction index, dropping the claim bit.
    pub fn rune_id(self) -> RuneId {
        let tx_mask = (1 << EDICT_ID_TX_BITS) - 1;

        RuneId {
            block: (self.0 & !CLAIM_BIT) >> EDICT_ID_TX_BITS,
            tx: self.0 & tx_mask,
        }
    }
}

impl From<EdictId> for u64 {
    fn from(id: EdictId) -> Self {
        id.0
    }
}

impl fmt::Display for EdictId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses a `block:tx` rune id and packs it with the claim bit set.
pub fn pack_edict_id(s: &str) -> Result<EdictId, RuneIdError> {
    pack_edict_id_with(s, true)
}

/// Parses a `block:tx` rune id and packs it, setting the claim bit only when
/// `is_claim` is true.
pub fn pack_edict_id_with(s: &str, is_claim: bool) -> Result<EdictId, RuneIdError> {
    Ok(s.parse::<RuneId>()?.edict_id(is_claim))
}
