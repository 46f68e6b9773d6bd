//! Interfaces of the external collaborators (rune indexer, UTXO datasource,
//! wallet) and the shapes of the data they return.

use std::collections::BTreeMap;

use bitcoin::{Address, Amount, OutPoint, Psbt, ScriptBuf, Txid};
use log::debug;

use crate::{
    EdictId, EncipherRequest, EncipherResponse, OrdResult, RuneId, SpacedRune, SpacedRuneError,
};

/// Rune indexer: runestone encipher, rune lookup and output lookup.
#[async_trait::async_trait]
pub trait RuneService: Send + Sync {
    /// Turns a runestone description into its `OP_RETURN` script.
    async fn encipher(&self, request: &EncipherRequest) -> OrdResult<EncipherResponse>;

    /// Looks up a rune by its name, without spacers.
    async fn rune(&self, name: &str) -> OrdResult<RuneDetail>;

    /// Looks up the inscriptions and rune balances held by an output.
    async fn output(&self, outpoint: OutPoint) -> OrdResult<OrdOutput>;
}

/// UTXO datasource and transaction relay.
#[async_trait::async_trait]
pub trait Datasource: Send + Sync {
    /// Selects spendable outputs of `address` covering at least `value`.
    async fn spendables(&self, address: &Address, value: Amount) -> OrdResult<Vec<Spendable>>;

    /// Lists the outputs of `address` which must not be spent as plain BTC,
    /// i.e. outputs carrying inscriptions or runes.
    async fn unspendables(&self, address: &Address) -> OrdResult<Vec<Spendable>>;

    /// Broadcasts a signed raw transaction.
    async fn relay(&self, tx_hex: &str) -> OrdResult<Txid>;
}

/// Wallet signing a PSBT on behalf of `address`.
#[async_trait::async_trait]
pub trait WalletSigner: Send + Sync {
    /// Signs the inputs at `signing_indexes`, finalizes the PSBT and returns the
    /// extracted transaction as hex.
    async fn sign(
        &self,
        address: &Address,
        psbt: &Psbt,
        signing_indexes: &[usize],
    ) -> OrdResult<String>;
}

/// Response of the rune lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuneDetail {
    pub entry: RuneEntry,
    pub id: RuneId,
}

impl RuneDetail {
    /// Edict id referencing this rune.
    pub fn edict_id(&self, is_claim: bool) -> EdictId {
        self.id.edict_id(is_claim)
    }

    /// Display name of the rune.
    pub fn spaced_rune(&self) -> Result<SpacedRune, SpacedRuneError> {
        SpacedRune::new(self.entry.rune.as_str(), self.entry.spacers)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuneEntry {
    pub burned: u128,
    pub divisibility: u8,
    pub etching: Txid,
    #[serde(default)]
    pub mint: Option<RuneMintEntry>,
    pub mints: u64,
    pub number: u64,
    pub rune: String,
    pub spacers: u32,
    pub supply: u128,
    #[serde(default)]
    pub symbol: Option<char>,
    pub timestamp: u64,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuneMintEntry {
    #[serde(default)]
    pub deadline: Option<u64>,
    #[serde(default)]
    pub end: Option<u64>,
    #[serde(default)]
    pub limit: Option<u128>,
}

/// Response of the output lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrdOutput {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub indexed: bool,
    #[serde(default)]
    pub inscriptions: Vec<serde_json::Value>,
    #[serde(default)]
    pub runes: Vec<(String, OutputRune)>,
    #[serde(default)]
    pub sat_ranges: Option<Vec<(u64, u64)>>,
    pub script_pubkey: String,
    #[serde(default)]
    pub spent: bool,
    pub transaction: String,
    pub value: u64,
}

/// Balance of a single rune held by an output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRune {
    pub amount: u128,
    pub divisibility: u8,
    #[serde(default)]
    pub symbol: Option<char>,
}

/// UTXO as returned by the datasource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spendable {
    pub txid: Txid,
    pub n: u32,
    pub sats: u64,
    #[serde(rename = "scriptPubKey")]
    pub script_pubkey: ScriptPubKeyHex,
}

impl Spendable {
    pub fn outpoint(&self) -> OutPoint {
        OutPoint {
            txid: self.txid,
            vout: self.n,
        }
    }

    pub fn amount(&self) -> Amount {
        Amount::from_sat(self.sats)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptPubKeyHex {
    pub hex: String,
}

impl ScriptPubKeyHex {
    pub fn script(&self) -> OrdResult<ScriptBuf> {
        Ok(ScriptBuf::from_bytes(hex::decode(&self.hex)?))
    }
}

/// Rune balances keyed by rune name.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuneBalances(BTreeMap<String, u128>);

impl RuneBalances {
    /// Adds every rune balance held by `output`.
    pub fn add_output(&mut self, output: &OrdOutput) {
        for (rune, balance) in &output.runes {
            let total = self.0.entry(rune.clone()).or_default();
            *total = total.saturating_add(balance.amount);
        }
    }

    /// Balance of `rune`, zero if none is held.
    pub fn get(&self, rune: &str) -> u128 {
        self.0.get(rune).copied().unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &u128)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Sums the rune balances of all the outputs of `address` which carry runes.
pub async fn rune_balances<D, R>(
    datasource: &D,
    service: &R,
    address: &Address,
) -> OrdResult<RuneBalances>
where
    D: Datasource + ?Sized,
    R: RuneService + ?Sized,
{
    let utxos = datasource.unspendables(address).await?;
    debug!("{} unspendable outputs for {address}", utxos.len());

    let mut balances = RuneBalances::default();
    for utxo in &utxos {
        let output = service.output(utxo.outpoint()).await?;
        balances.add_output(&output);
    }

    Ok(balances)
}
