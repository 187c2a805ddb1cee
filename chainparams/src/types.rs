//! Per-chain parameter bundles.
//!
//! A [`ChainParameters`] bundle is what deployment and automation code reads
//! instead of hardcoding per-network values. Fields that only make sense on
//! chains wired to the external randomness oracle are grouped in
//! [`OracleParameters`], so a chain either has all of them or none.

use alloy::primitives::utils::{ParseUnits, format_ether, parse_units};
use alloy::primitives::{Address, B256, U256};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// Parameters registered for one chain, or the default bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainParameters {
    /// EIP-155 chain ID. `None` only for the default bundle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,

    /// Human-readable chain name (matches the deployment network name).
    pub name: String,

    /// Interval between upkeep checks for time-based automation.
    pub update_interval_secs: u64,

    /// Oracle integration, absent on chains that cannot reach it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oracle: Option<OracleParameters>,
}

/// Fields used to request verifiable randomness from the oracle coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OracleParameters {
    /// Key hash selecting the maximum gas price tier for fulfilment.
    pub gas_lane: B256,

    /// Entrance fee in wei.
    #[serde(
        serialize_with = "serialize_ether",
        deserialize_with = "deserialize_wei_or_ether"
    )]
    pub entrance_fee: U256,

    /// Gas limit for the fulfilment callback.
    pub callback_gas_limit: u32,

    /// Oracle subscription funding the requests.
    pub subscription_id: u64,

    /// Coordinator contract. `None` where a mock coordinator is deployed
    /// alongside the contracts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinator: Option<Address>,
}

impl ChainParameters {
    /// Create a bundle with no oracle integration.
    #[must_use]
    pub fn new(chain_id: Option<u64>, name: impl Into<String>, update_interval_secs: u64) -> Self {
        Self {
            chain_id,
            name: name.into(),
            update_interval_secs,
            oracle: None,
        }
    }

    /// Attach oracle parameters.
    #[must_use]
    pub fn with_oracle(mut self, oracle: OracleParameters) -> Self {
        self.oracle = Some(oracle);
        self
    }

    /// Whether this is the fallback bundle.
    #[must_use]
    pub const fn is_default(&self) -> bool {
        self.chain_id.is_none()
    }

    /// Returns the oracle parameters, or [`Error::MissingField`] if this
    /// chain has none.
    ///
    /// Callers on development chains are expected to branch to a mock
    /// before reaching for this.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] when the bundle carries no oracle.
    pub fn require_oracle(&self) -> Result<&OracleParameters> {
        self.oracle.as_ref().ok_or_else(|| Error::MissingField {
            chain: self.name.clone(),
            field: "oracle",
        })
    }

    /// Returns the live coordinator address.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] when the bundle has no oracle or the
    /// oracle has no coordinator.
    pub fn require_coordinator(&self) -> Result<Address> {
        self.require_oracle()?
            .coordinator
            .ok_or_else(|| Error::MissingField {
                chain: self.name.clone(),
                field: "coordinator",
            })
    }
}

/// Render wei as a decimal ether string without trailing zeros.
#[must_use]
pub fn ether_string(wei: U256) -> String {
    let formatted = format_ether(wei);
    match formatted.split_once('.') {
        Some((whole, frac)) => {
            let frac = frac.trim_end_matches('0');
            if frac.is_empty() {
                whole.to_owned()
            } else {
                format!("{whole}.{frac}")
            }
        }
        None => formatted,
    }
}

fn serialize_ether<S>(wei: &U256, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&ether_string(*wei))
}

/// Deserialize a fee from an integer wei amount, a `0x` hex wei string, or a
/// decimal ether string such as `"0.01"`.
fn deserialize_wei_or_ether<'de, D>(deserializer: D) -> Result<U256, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum WeiOrEther {
        Wei(u64),
        Str(String),
    }
    match WeiOrEther::deserialize(deserializer)? {
        WeiOrEther::Wei(n) => Ok(U256::from(n)),
        WeiOrEther::Str(s) if s.starts_with("0x") => {
            s.parse::<U256>().map_err(serde::de::Error::custom)
        }
        WeiOrEther::Str(s) => match parse_units(&s, "ether").map_err(serde::de::Error::custom)? {
            ParseUnits::U256(wei) => Ok(wei),
            ParseUnits::I256(_) => Err(serde::de::Error::custom(
                "entrance fee must not be negative",
            )),
        },
    }
}
