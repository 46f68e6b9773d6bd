pub mod builder;
mod submit;

pub use builder::{create_rune_psbt, create_rune_transaction, RuneTxArgs, TxInputInfo};
pub use submit::{FundingAccount, RuneSubmitter};
