//! Request and response bodies of the runestone encipher service.
//!
//! The service takes a structured runestone and returns the `OP_RETURN` script
//! carrying it. Etchings are validated against the given bitcoin height, edict
//! only runestones are not.

use bitcoin::ScriptBuf;
use log::{debug, warn};

use crate::utils::constants::{DEFAULT_RUNE_OUTPUT, MAX_DIVISIBILITY};
use crate::{EdictId, OrdError, OrdResult, RuneId, SpacedRune};

/// Body posted to the encipher endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncipherRequest {
    pub runestone: Runestone,
    pub validate: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bitcoin_height: Option<u64>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Runestone {
    pub edicts: Vec<Edict>,
    pub etching: Option<Etching>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_output: Option<bool>,
    pub burn: bool,
}

/// Transfer of `amount` units of the rune `id` to the output at index `output`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edict {
    pub id: EdictId,
    pub amount: u128,
    pub output: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Etching {
    pub divisibility: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mint: Option<MintTerms>,
    pub rune: String,
    pub spacers: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<char>,
}

/// Open mint terms of an etching. Unset terms are sent as `null`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintTerms {
    pub deadline: Option<u64>,
    pub limit: Option<u64>,
    pub term: Option<u64>,
}

/// Mint terms as entered in a form, where `0` means "not set".
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MintArgs {
    pub deadline: u64,
    pub limit: u64,
    pub term: u64,
}

impl From<MintArgs> for MintTerms {
    fn from(args: MintArgs) -> Self {
        let non_zero = |value: u64| (value != 0).then_some(value);

        Self {
            deadline: non_zero(args.deadline),
            limit: non_zero(args.limit),
            term: non_zero(args.term),
        }
    }
}

/// Arguments for [`EncipherRequest::etching`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EtchingArgs {
    pub divisibility: u8,
    pub mint: MintArgs,
    /// Display name of the rune, e.g. `UNCOMMON•GOODS`.
    pub rune: String,
    pub symbol: Option<char>,
}

impl EncipherRequest {
    /// Creates a validated etching request.
    ///
    /// # Errors
    /// * Returns [`OrdError::SpacedRune`] if the rune name is malformed.
    /// * Returns [`OrdError::Divisibility`] if the divisibility exceeds
    ///   [`MAX_DIVISIBILITY`].
    pub fn etching(args: EtchingArgs, bitcoin_height: u64) -> OrdResult<Self> {
        if args.divisibility > MAX_DIVISIBILITY {
            warn!("rejected etching of {}: divisibility {}", args.rune, args.divisibility);
            return Err(OrdError::Divisibility(args.divisibility));
        }

        let SpacedRune { rune, spacers } = args.rune.parse::<SpacedRune>().map_err(|err| {
            warn!("rejected etching of {}: {err}", args.rune);
            err
        })?;
        debug!("etching rune: {rune}, spacers: {spacers:#b}");

        Ok(Self {
            runestone: Runestone {
                edicts: vec![],
                etching: Some(Etching {
                    divisibility: args.divisibility,
                    mint: Some(args.mint.into()),
                    rune,
                    spacers,
                    symbol: args.symbol,
                }),
                default_output: None,
                burn: false,
            },
            validate: true,
            bitcoin_height: Some(bitcoin_height),
        })
    }

    /// Creates an unvalidated request transferring runes with `edicts`.
    pub fn edicts(edicts: Vec<Edict>, burn: bool) -> Self {
        Self {
            runestone: Runestone {
                edicts,
                etching: None,
                default_output: None,
                burn,
            },
            validate: false,
            bitcoin_height: None,
        }
    }

    /// Creates a claim of `amount` units of `rune_id` to the output following
    /// the runestone.
    pub fn mint(rune_id: RuneId, amount: u128) -> Self {
        let id = rune_id.edict_id(true);
        debug!("minting {amount} of {rune_id} (edict id {id})");

        Self::edicts(
            vec![Edict {
                id,
                amount,
                output: DEFAULT_RUNE_OUTPUT,
            }],
            false,
        )
    }

    /// Encodes the request as a JSON string
    pub fn to_json(&self) -> OrdResult<String> {
        serde_json::to_string(self).map_err(OrdError::from)
    }
}

/// Response of the encipher endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncipherResponse {
    pub script_hex: String,
}

impl EncipherResponse {
    /// Decodes the runestone script.
    pub fn script(&self) -> OrdResult<ScriptBuf> {
        let script = ScriptBuf::from_bytes(hex::decode(&self.script_hex)?);
        debug!("runestone script: {script}");

        Ok(script)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::SpacedRuneError;

    #[test]
    fn test_should_encode_etching() {
        let request = EncipherRequest::etching(
            EtchingArgs {
                divisibility: 2,
                mint: MintArgs {
                    deadline: 0,
                    limit: 1000,
                    term: 0,
                },
                rune: "UNCOMMON.GOODS".to_string(),
                symbol: Some('Z'),
            },
            2_585_000,
        )
        .unwrap();

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "runestone": {
                    "edicts": [],
                    "etching": {
                        "divisibility": 2,
                        "mint": {
                            "deadline": null,
                            "limit": 1000,
                            "term": null
                        },
                        "rune": "UNCOMMONGOODS",
                        "spacers": 128,
                        "symbol": "Z"
                    },
                    "burn": false
                },
                "validate": true,
                "bitcoin_height": 2_585_000
            })
        );
    }

    #[test]
    fn test_should_etch_empty_name() {
        let request = EncipherRequest::etching(EtchingArgs::default(), 1).unwrap();
        let etching = request.runestone.etching.unwrap();

        assert_eq!(etching.rune, "");
        assert_eq!(etching.spacers, 0);
        assert_eq!(etching.mint, Some(MintTerms::default()));
    }

    #[test]
    fn test_should_reject_bad_etching() {
        let err = EncipherRequest::etching(
            EtchingArgs {
                rune: "RUNE.".to_string(),
                ..Default::default()
            },
            1,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            OrdError::SpacedRune(SpacedRuneError::TrailingSpacer)
        ));

        let err = EncipherRequest::etching(
            EtchingArgs {
                divisibility: 39,
                rune: "RUNE".to_string(),
                ..Default::default()
            },
            1,
        )
        .unwrap_err();
        assert!(matches!(err, OrdError::Divisibility(39)));
    }

    #[test]
    fn test_should_encode_edicts() {
        let id = "840000:1".parse::<RuneId>().unwrap().edict_id(true);
        let packed: u64 = (840000 << 16) | 1 | (1 << 48);
        let request = EncipherRequest::edicts(
            vec![Edict {
                id,
                amount: 500,
                output: 1,
            }],
            true,
        );

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "runestone": {
                    "edicts": [
                        { "id": packed, "amount": 500, "output": 1 }
                    ],
                    "etching": null,
                    "burn": true
                },
                "validate": false
            })
        );
    }

    #[test]
    fn test_should_mint_to_default_output() {
        let rune_id = RuneId::new(2_585_189, 7).unwrap();
        let request = EncipherRequest::mint(rune_id, 100);

        assert_eq!(
            request.runestone.edicts,
            vec![Edict {
                id: rune_id.edict_id(true),
                amount: 100,
                output: DEFAULT_RUNE_OUTPUT,
            }]
        );
        assert!(!request.validate);
        assert!(!request.runestone.burn);
    }

    #[test]
    fn test_should_decode_request() {
        let json = r#"
            {
                "runestone": {
                    "edicts": [],
                    "etching": {
                        "divisibility": 0,
                        "rune": "RUNE",
                        "spacers": 0
                    },
                    "default_output": true,
                    "burn": false
                },
                "validate": true
            }
        "#;
        let request: EncipherRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.runestone.default_output, Some(true));
        assert_eq!(request.bitcoin_height, None);
        let etching = request.runestone.etching.unwrap();
        assert_eq!(etching.mint, None);
        assert_eq!(etching.symbol, None);
    }

    #[test]
    fn test_should_decode_script() {
        let response: EncipherResponse =
            serde_json::from_str(r#"{ "script_hex": "6a5d0700db01019c4a02" }"#).unwrap();
        let script = response.script().unwrap();

        assert!(script.is_op_return());
        assert_eq!(
            script.as_bytes(),
            hex_literal::hex!("6a5d0700db01019c4a02").as_slice()
        );

        let bad = EncipherResponse {
            script_hex: "zz".to_string(),
        };
        assert!(matches!(bad.script(), Err(OrdError::Hex(_))));
    }
}
