use bitcoin::{Address, Amount, Psbt, ScriptBuf, Txid};
use log::{debug, info};

use super::builder::{create_rune_psbt, RuneTxArgs, TxInputInfo};
use crate::utils::constants::{ETCHING_FEE, MINT_FEE, RUNE_POSTAGE};
use crate::{
    Datasource, EncipherRequest, EtchingArgs, OrdResult, RuneId, RuneService, WalletSigner,
};

/// Address paying for rune transactions.
#[derive(Debug, Clone)]
pub struct FundingAccount {
    pub address: Address,
    /// Redeem script of the address, for nested segwit (P2SH-P2WPKH) accounts.
    pub redeem_script: Option<ScriptBuf>,
}

/// Signs rune transactions with a wallet and relays them through a datasource.
pub struct RuneSubmitter<D, S> {
    datasource: D,
    signer: S,
}

impl<D, S> RuneSubmitter<D, S>
where
    D: Datasource,
    S: WalletSigner,
{
    pub fn new(datasource: D, signer: S) -> Self {
        Self { datasource, signer }
    }

    pub fn datasource(&self) -> &D {
        &self.datasource
    }

    pub fn signer(&self) -> &S {
        &self.signer
    }

    /// Signs the inputs at `signing_indexes` as `address` and relays the
    /// signed transaction.
    pub async fn submit(
        &self,
        address: &Address,
        psbt: &Psbt,
        signing_indexes: &[usize],
    ) -> OrdResult<Txid> {
        let signed_tx = self.signer.sign(address, psbt, signing_indexes).await?;
        debug!("signed_tx ({}): {signed_tx}", signed_tx.len());

        let txid = self.datasource.relay(&signed_tx).await?;
        info!("relayed rune transaction {txid}");

        Ok(txid)
    }

    /// Enciphers `etching`, funds it from `funding` and submits it.
    pub async fn etch<R>(
        &self,
        service: &R,
        etching: EtchingArgs,
        bitcoin_height: u64,
        funding: &FundingAccount,
    ) -> OrdResult<Txid>
    where
        R: RuneService + ?Sized,
    {
        let request = EncipherRequest::etching(etching, bitcoin_height)?;
        let runestone_script = service.encipher(&request).await?.script()?;

        let inputs = self.funding_inputs(funding, ETCHING_FEE).await?;

        let args = RuneTxArgs::etching(inputs, runestone_script, funding.address.clone());
        self.sign_and_relay(funding, &args).await
    }

    /// Enciphers a claim of `amount` units of `rune_id`, sends the runes to
    /// `rune_recipient` and submits it.
    pub async fn mint<R>(
        &self,
        service: &R,
        rune_id: RuneId,
        amount: u128,
        rune_recipient: &Address,
        funding: &FundingAccount,
    ) -> OrdResult<Txid>
    where
        R: RuneService + ?Sized,
    {
        let request = EncipherRequest::mint(rune_id, amount);
        let runestone_script = service.encipher(&request).await?.script()?;

        let inputs = self
            .funding_inputs(funding, RUNE_POSTAGE + MINT_FEE)
            .await?;

        let args = RuneTxArgs::mint(
            inputs,
            runestone_script,
            rune_recipient.clone(),
            funding.address.clone(),
        );
        self.sign_and_relay(funding, &args).await
    }

    async fn funding_inputs(
        &self,
        funding: &FundingAccount,
        value: Amount,
    ) -> OrdResult<Vec<TxInputInfo>> {
        let spendables = self.datasource.spendables(&funding.address, value).await?;
        debug!(
            "{} spendables for {} covering {value}",
            spendables.len(),
            funding.address
        );

        spendables
            .iter()
            .map(|spendable| {
                TxInputInfo::from_spendable(spendable, funding.redeem_script.clone())
            })
            .collect()
    }

    async fn sign_and_relay(
        &self,
        funding: &FundingAccount,
        args: &RuneTxArgs,
    ) -> OrdResult<Txid> {
        let psbt = create_rune_psbt(args)?;
        let signing_indexes: Vec<usize> = (0..psbt.inputs.len()).collect();

        self.submit(&funding.address, &psbt, &signing_indexes).await
    }
}
