use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Mutex;

use bitcoin::{Address, Amount, Network, OutPoint, Psbt, Txid};

use crate::service::ScriptPubKeyHex;
use crate::{
    Datasource, EncipherRequest, EncipherResponse, OrdError, OrdOutput, OrdResult, RuneDetail,
    RuneService, Spendable, WalletSigner,
};

/// Nested segwit script of the test payment address.
pub const P2SH_SCRIPT_HEX: &str = "a914f5a8c4a5b0c5b4e1f3d6c3a0f9b9d5e5e0f2c1a287";

pub fn txid(n: u64) -> Txid {
    let hex = format!("{n:x}");

    if hex.is_empty() || hex.len() > 1 {
        panic!();
    }

    hex.repeat(64).parse().unwrap()
}

pub fn address() -> Address {
    Address::from_str("tb1qax89amll2uas5k92tmuc8rdccmqddqw94vrr86")
        .unwrap()
        .require_network(Network::Testnet)
        .unwrap()
}

pub fn ordinals_address() -> Address {
    Address::from_str("bcrt1pu8kl0t74qn89ljqs6ez558uyjvht3d93hsa2ha3u7654hgqjmadqlm20ps")
        .unwrap()
        .assume_checked()
}

pub fn spendable(n: u64, sats: u64) -> Spendable {
    Spendable {
        txid: txid(n),
        n: n as u32,
        sats,
        script_pubkey: ScriptPubKeyHex {
            hex: P2SH_SCRIPT_HEX.to_string(),
        },
    }
}

#[derive(Default)]
pub struct FakeRuneService {
    pub script_hex: String,
    pub runes: HashMap<String, RuneDetail>,
    pub outputs: HashMap<OutPoint, OrdOutput>,
    pub requests: Mutex<Vec<EncipherRequest>>,
}

#[async_trait::async_trait]
impl RuneService for FakeRuneService {
    async fn encipher(&self, request: &EncipherRequest) -> OrdResult<EncipherResponse> {
        self.requests.lock().unwrap().push(request.clone());

        Ok(EncipherResponse {
            script_hex: self.script_hex.clone(),
        })
    }

    async fn rune(&self, name: &str) -> OrdResult<RuneDetail> {
        self.runes
            .get(name)
            .cloned()
            .ok_or_else(|| OrdError::Service(format!("rune {name} not found")))
    }

    async fn output(&self, outpoint: OutPoint) -> OrdResult<OrdOutput> {
        self.outputs
            .get(&outpoint)
            .cloned()
            .ok_or_else(|| OrdError::Service(format!("output {outpoint} not found")))
    }
}

#[derive(Default)]
pub struct FakeDatasource {
    pub spendables: Vec<Spendable>,
    pub unspendables: Vec<Spendable>,
    pub requested_values: Mutex<Vec<Amount>>,
    pub relayed: Mutex<Vec<String>>,
}

#[async_trait::async_trait]
impl Datasource for FakeDatasource {
    async fn spendables(&self, _address: &Address, value: Amount) -> OrdResult<Vec<Spendable>> {
        self.requested_values.lock().unwrap().push(value);
        Ok(self.spendables.clone())
    }

    async fn unspendables(&self, _address: &Address) -> OrdResult<Vec<Spendable>> {
        Ok(self.unspendables.clone())
    }

    async fn relay(&self, tx_hex: &str) -> OrdResult<Txid> {
        self.relayed.lock().unwrap().push(tx_hex.to_string());
        Ok(txid(0xf))
    }
}

/// Signer returning the unsigned transaction as hex.
#[derive(Default)]
pub struct FakeSigner {
    pub calls: Mutex<Vec<(String, Vec<usize>)>>,
}

#[async_trait::async_trait]
impl WalletSigner for FakeSigner {
    async fn sign(
        &self,
        address: &Address,
        psbt: &Psbt,
        signing_indexes: &[usize],
    ) -> OrdResult<String> {
        self.calls
            .lock()
            .unwrap()
            .push((address.to_string(), signing_indexes.to_vec()));

        Ok(hex::encode(bitcoin::consensus::serialize(&psbt.unsigned_tx)))
    }
}
