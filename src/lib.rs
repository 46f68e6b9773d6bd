//! # ord-runes
//!
//! Helpers for shaping Bitcoin Runes etching and mint requests.
//!
//! # Get started
//!
//! The crate covers the pieces a runes front-end has to compute locally before
//! handing off to a runestone encipher service, a UTXO datasource and a wallet:
//!
//! - [`SpacedRune`]: parse a display name such as `UNCOMMON•GOODS` into its
//!   letters and spacer bitmask, and render it back.
//! - [`RuneId`] and [`EdictId`]: parse a `block:tx` rune id and pack it into the
//!   64-bit identifier used by edicts.
//! - [`EncipherRequest`]: the JSON body describing an etching or a set of edicts.
//! - [`wallet`]: build the unsigned transaction / PSBT spending the runestone
//!   script and submit it through a [`WalletSigner`] and a [`Datasource`].
//!
//! ## Example
//!
//! ```rust
//! use ord_runes::{pack_edict_id, SpacedRune};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let spaced: SpacedRune = "UNCOMMON.GOODS".parse()?;
//!     assert_eq!(spaced.rune, "UNCOMMONGOODS");
//!     assert_eq!(spaced.spacers, 0b1000_0000);
//!
//!     let edict_id = pack_edict_id("840000:1")?;
//!     assert_eq!(edict_id.value(), (840000 << 16) | 1 | (1 << 48));
//!     Ok(())
//! }
//! ```
//!

#[macro_use]
extern crate serde;
extern crate serde_with;

mod error;
#[cfg(feature = "rune")]
mod interop;
mod result;
pub mod rune;
pub mod runestone;
pub mod service;
pub mod utils;
pub mod wallet;

pub use error::{OrdError, RuneIdError, SpacedRuneError};
pub use result::OrdResult;
pub use rune::{pack_edict_id, pack_edict_id_with, EdictId, RuneId, SpacedRune};
pub use runestone::{
    Edict, EncipherRequest, EncipherResponse, Etching, EtchingArgs, MintArgs, MintTerms,
    Runestone,
};
pub use service::{
    rune_balances, Datasource, OrdOutput, OutputRune, RuneBalances, RuneDetail, RuneEntry,
    RuneService, Spendable, WalletSigner,
};
pub use utils::constants;
