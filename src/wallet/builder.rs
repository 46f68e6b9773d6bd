use bitcoin::absolute::LockTime;
use bitcoin::transaction::Version;
use bitcoin::{
    Address, Amount, OutPoint, Psbt, ScriptBuf, Sequence, Transaction, TxIn, TxOut, Witness,
};
use log::debug;

use crate::utils::constants::{ETCHING_FEE, MINT_FEE, RUNE_POSTAGE};
use crate::{OrdError, OrdResult, Spendable};

/// Input spent by a rune transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxInputInfo {
    pub outpoint: OutPoint,
    /// The output being spent.
    pub tx_out: TxOut,
    /// Redeem script of P2SH inputs, e.g. the P2WPKH program of a nested segwit
    /// payment address.
    pub redeem_script: Option<ScriptBuf>,
}

impl TxInputInfo {
    pub fn from_spendable(
        spendable: &Spendable,
        redeem_script: Option<ScriptBuf>,
    ) -> OrdResult<Self> {
        Ok(Self {
            outpoint: spendable.outpoint(),
            tx_out: TxOut {
                value: spendable.amount(),
                script_pubkey: spendable.script_pubkey.script()?,
            },
            redeem_script,
        })
    }
}

/// Arguments for [`create_rune_transaction`] and [`create_rune_psbt`].
#[derive(Debug, Clone)]
pub struct RuneTxArgs {
    /// Inputs funding the transaction.
    pub inputs: Vec<TxInputInfo>,
    /// Runestone `OP_RETURN` script, as returned by the encipher service.
    pub runestone_script: ScriptBuf,
    /// Address receiving the runes, funded with [`RUNE_POSTAGE`].
    pub rune_recipient: Option<Address>,
    /// Address receiving the leftovers of BTC.
    pub change_address: Address,
    /// Flat transaction fee.
    pub fee: Amount,
}

impl RuneTxArgs {
    /// Etching: the etched runes are allocated by the runestone, no rune output.
    pub fn etching(
        inputs: Vec<TxInputInfo>,
        runestone_script: ScriptBuf,
        change_address: Address,
    ) -> Self {
        Self {
            inputs,
            runestone_script,
            rune_recipient: None,
            change_address,
            fee: ETCHING_FEE,
        }
    }

    /// Mint: claimed runes go to `rune_recipient`, right after the runestone.
    pub fn mint(
        inputs: Vec<TxInputInfo>,
        runestone_script: ScriptBuf,
        rune_recipient: Address,
        change_address: Address,
    ) -> Self {
        Self {
            inputs,
            runestone_script,
            rune_recipient: Some(rune_recipient),
            change_address,
            fee: MINT_FEE,
        }
    }

    fn input_amount(&self) -> Amount {
        self.inputs
            .iter()
            .fold(Amount::ZERO, |a, b| a + b.tx_out.value)
    }

    fn postage(&self) -> Amount {
        if self.rune_recipient.is_some() {
            RUNE_POSTAGE
        } else {
            Amount::ZERO
        }
    }

    /// BTC the inputs must cover: rune postage plus fee.
    pub fn required_amount(&self) -> Amount {
        self.postage() + self.fee
    }
}

/// Creates the unsigned rune transaction.
///
/// Outputs are, in order: the runestone (0 sats), the rune recipient if any
/// ([`RUNE_POSTAGE`]), and the change.
///
/// # Errors
/// * Returns [`OrdError::NoInputs`] if there is nothing to spend.
/// * Returns [`OrdError::InsufficientBalance`] if the inputs do not cover the
///   postage and the fee.
pub fn create_rune_transaction(args: &RuneTxArgs) -> OrdResult<Transaction> {
    if args.inputs.is_empty() {
        return Err(OrdError::NoInputs);
    }

    let required = args.required_amount();
    let available = args.input_amount();
    let change_amount = available
        .checked_sub(required)
        .ok_or(OrdError::InsufficientBalance {
            required: required.to_sat(),
            available: available.to_sat(),
        })?;
    debug!("change_amount: {change_amount}");

    let mut output = vec![TxOut {
        value: Amount::ZERO,
        script_pubkey: args.runestone_script.clone(),
    }];
    if let Some(recipient) = &args.rune_recipient {
        output.push(TxOut {
            value: RUNE_POSTAGE,
            script_pubkey: recipient.script_pubkey(),
        });
    }
    output.push(TxOut {
        value: change_amount,
        script_pubkey: args.change_address.script_pubkey(),
    });

    let input = args
        .inputs
        .iter()
        .map(|input| TxIn {
            previous_output: input.outpoint,
            script_sig: ScriptBuf::new(),
            sequence: Sequence::from_consensus(0xffffffff),
            witness: Witness::new(),
        })
        .collect();

    Ok(Transaction {
        version: Version::TWO,
        lock_time: LockTime::ZERO,
        input,
        output,
    })
}

/// Wraps the transaction of [`create_rune_transaction`] in a PSBT carrying the
/// spent outputs and redeem scripts the wallet needs to sign.
pub fn create_rune_psbt(args: &RuneTxArgs) -> OrdResult<Psbt> {
    let mut psbt = Psbt::from_unsigned_tx(create_rune_transaction(args)?)?;

    for (psbt_input, input) in psbt.inputs.iter_mut().zip(&args.inputs) {
        psbt_input.witness_utxo = Some(input.tx_out.clone());
        psbt_input.redeem_script = input.redeem_script.clone();
    }

    Ok(psbt)
}
