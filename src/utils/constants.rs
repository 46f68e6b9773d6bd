use bitcoin::Amount;

/// Spacer used when rendering a rune name.
pub const SPACER: char = '•';
/// ASCII spacer accepted when parsing a rune name.
pub const DOT_SPACER: char = '.';

/// Number of low bits of an edict id holding the transaction index.
pub const EDICT_ID_TX_BITS: u32 = 16;
/// Reserved bit marking the claim variant of an edict id.
pub const CLAIM_BIT: u64 = 1 << 48;
/// Highest block height whose shifted value stays below [`CLAIM_BIT`].
pub const MAX_RUNE_ID_BLOCK: u64 = u32::MAX as u64;
/// Highest transaction index that fits in [`EDICT_ID_TX_BITS`].
pub const MAX_RUNE_ID_TX: u64 = u16::MAX as u64;

/// Maximum divisibility accepted by the runes protocol.
pub const MAX_DIVISIBILITY: u8 = 38;
/// Output receiving minted runes, right after the runestone output.
pub const DEFAULT_RUNE_OUTPUT: u32 = 1;

/// Postage attached to the output receiving runes.
pub const RUNE_POSTAGE: Amount = Amount::from_sat(600);
/// Flat fee paid by an etching transaction.
pub const ETCHING_FEE: Amount = Amount::from_sat(2_000);
/// Flat fee paid by a mint transaction.
pub const MINT_FEE: Amount = Amount::from_sat(1_000);
