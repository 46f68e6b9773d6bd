use std::num::ParseIntError;

use thiserror::Error;

/// Errors raised while parsing a spaced rune name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpacedRuneError {
    /// A character that is neither an uppercase letter nor a spacer.
    #[error("invalid character `{0}`")]
    Character(char),
    /// Two spacers resolve to the same letter boundary.
    #[error("double spacer")]
    DoubleSpacer,
    /// A spacer placed before the first letter. Belongs to the trailing
    /// spacer family: it would need a spacer bit below bit 0.
    #[error("leading spacer")]
    LeadingSpacer,
    /// A spacer bit at or beyond the last letter.
    #[error("trailing spacer")]
    TrailingSpacer,
    /// A spacer after a letter whose position does not fit in the spacers mask.
    #[error("spacer after letter {0} is out of range")]
    SpacerOutOfRange(usize),
}

/// Errors raised while parsing a `block:tx` rune id.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuneIdError {
    #[error("missing `:` separator in rune id")]
    Separator,
    #[error("invalid block height: {0}")]
    Block(ParseIntError),
    #[error("invalid transaction index: {0}")]
    Tx(ParseIntError),
    #[error("block height {0} overlaps the claim bit")]
    BlockOutOfRange(u64),
    #[error("transaction index {0} does not fit in 16 bits")]
    TxOutOfRange(u64),
}

/// Crate-wide error
#[derive(Error, Debug)]
pub enum OrdError {
    #[error("spaced rune error: {0}")]
    SpacedRune(#[from] SpacedRuneError),
    #[error("rune id error: {0}")]
    RuneId(#[from] RuneIdError),
    #[error("codec error: {0}")]
    Codec(#[from] serde_json::Error),
    #[error("hex decoding error: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error("psbt error: {0}")]
    Psbt(#[from] bitcoin::psbt::Error),
    #[error("divisibility {0} is out of range")]
    Divisibility(u8),
    #[error("transaction has no inputs")]
    NoInputs,
    #[error("insufficient balance: required {required} sats, available {available} sats")]
    InsufficientBalance { required: u64, available: u64 },
    #[error("service error: {0}")]
    Service(String),
    #[cfg(feature = "rune")]
    #[error("ordinals conversion error: {0}")]
    Interop(String),
}
