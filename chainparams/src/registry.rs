//! Chain parameter registry and resolver.
//!
//! The [`ChainParameterResolver`] is built once, either from the builtin
//! table ([`ChainParameterResolver::builtin`]) or from a configuration file
//! (see [`crate::config`]), and is read-only afterwards. It is `Send + Sync`
//! and meant to be shared by reference.

use std::collections::{HashMap, HashSet};

use alloy::primitives::{Address, B256, U256, address, b256};

use crate::constants::VERIFICATION_BLOCK_CONFIRMATIONS;
use crate::error::{Error, Result};
use crate::types::{ChainParameters, OracleParameters};

/// Keeper interval shared by every builtin chain.
const UPDATE_INTERVAL_SECS: u64 = 30;

/// Callback gas limit shared by every builtin oracle chain.
const CALLBACK_GAS_LIMIT: u32 = 500_000;

/// 0.01 ETH.
const FEE_ETH: U256 = U256::from_limbs([10_000_000_000_000_000, 0, 0, 0]);

/// 0.00073 of the native token, roughly 1 MATIC at the time of configuration.
const FEE_MATIC: U256 = U256::from_limbs([730_000_000_000_000, 0, 0, 0]);

/// Chain names treated as local development chains by the builtin resolver.
pub const BUILTIN_DEVELOPMENT_CHAINS: &[&str] = &["hardhat", "localhost"];

/// Mapping from chain ID to parameters, plus a mandatory default bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    default: ChainParameters,
    chains: HashMap<u64, ChainParameters>,
}

impl Registry {
    /// Build a registry from a default bundle and the per-chain entries.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDefault`] if the default bundle has a chain ID
    /// or oracle parameters, [`Error::MissingChainId`] if an entry has no
    /// chain ID, and [`Error::DuplicateChain`] if an ID appears twice.
    pub fn new(
        default: ChainParameters,
        entries: impl IntoIterator<Item = ChainParameters>,
    ) -> Result<Self> {
        if let Some(id) = default.chain_id {
            return Err(Error::InvalidDefault(format!(
                "default bundle must not carry a chain ID (found {id})"
            )));
        }
        if default.oracle.is_some() {
            return Err(Error::InvalidDefault(
                "default bundle must not carry oracle parameters".to_owned(),
            ));
        }

        let mut chains = HashMap::new();
        for entry in entries {
            let Some(id) = entry.chain_id else {
                return Err(Error::MissingChainId(entry.name));
            };
            if chains.insert(id, entry).is_some() {
                return Err(Error::DuplicateChain(id));
            }
        }

        Ok(Self { default, chains })
    }

    /// The fallback bundle.
    #[must_use]
    pub const fn default_bundle(&self) -> &ChainParameters {
        &self.default
    }

    /// Exact lookup without fallback.
    #[must_use]
    pub fn get(&self, chain_id: u64) -> Option<&ChainParameters> {
        self.chains.get(&chain_id)
    }

    /// Registered entries ordered by chain ID (the default bundle excluded).
    #[must_use]
    pub fn entries(&self) -> Vec<&ChainParameters> {
        let mut entries: Vec<_> = self.chains.values().collect();
        entries.sort_by_key(|c| c.chain_id);
        entries
    }

    /// Number of registered chains, not counting the default.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chains.len()
    }

    /// Whether only the default bundle is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    fn contains_name(&self, name: &str) -> bool {
        self.default.name == name || self.chains.values().any(|c| c.name == name)
    }
}

/// Names of chains flagged as local or ephemeral.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DevelopmentChains(HashSet<String>);

impl DevelopmentChains {
    /// Build the set, checking every name against `registry`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownDevelopmentChain`] for a name that is not the
    /// name of any bundle in `registry`.
    pub fn new<I, S>(names: I, registry: &Registry) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = HashSet::new();
        for name in names {
            let name = name.into();
            if !registry.contains_name(&name) {
                return Err(Error::UnknownDevelopmentChain(name));
            }
            set.insert(name);
        }
        Ok(Self(set))
    }

    /// Membership test.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    /// Names in the set, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.0.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Where a caller should get randomness from on a given chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OracleSource {
    /// Development chain: deploy and use a local mock coordinator.
    Mock,
    /// Live coordinator at this address.
    Live(Address),
}

/// Resolves chain IDs to parameter bundles and classifies development chains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainParameterResolver {
    registry: Registry,
    development: DevelopmentChains,
}

impl ChainParameterResolver {
    /// Pair a registry with its development chain set.
    #[must_use]
    pub const fn new(registry: Registry, development: DevelopmentChains) -> Self {
        Self {
            registry,
            development,
        }
    }

    /// Build a resolver from a default bundle, entries and development names.
    ///
    /// # Errors
    ///
    /// Propagates the validation errors of [`Registry::new`] and
    /// [`DevelopmentChains::new`].
    pub fn from_parts<I, S>(
        default: ChainParameters,
        entries: impl IntoIterator<Item = ChainParameters>,
        development: I,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let registry = Registry::new(default, entries)?;
        let development = DevelopmentChains::new(development, &registry)?;
        Ok(Self::new(registry, development))
    }

    /// The builtin table of deployment parameters.
    #[must_use]
    pub fn builtin() -> Self {
        let registry = Registry {
            default: ChainParameters::new(None, "hardhat", UPDATE_INTERVAL_SECS),
            chains: builtin_entries()
                .into_iter()
                .filter_map(|c| c.chain_id.map(|id| (id, c)))
                .collect(),
        };
        let development = DevelopmentChains(
            BUILTIN_DEVELOPMENT_CHAINS
                .iter()
                .map(|&n| n.to_owned())
                .collect(),
        );
        Self::new(registry, development)
    }

    /// Look up `chain_id`, falling back to the default bundle.
    #[must_use]
    pub fn resolve(&self, chain_id: u64) -> &ChainParameters {
        self.registry.get(chain_id).unwrap_or_else(|| {
            tracing::debug!(chain_id, "no parameters registered, using default");
            self.registry.default_bundle()
        })
    }

    /// The default bundle.
    #[must_use]
    pub const fn resolve_default(&self) -> &ChainParameters {
        self.registry.default_bundle()
    }

    /// Whether `name` is a local development chain.
    #[must_use]
    pub fn is_development_chain(&self, name: &str) -> bool {
        self.development.contains(name)
    }

    /// Decide where randomness comes from on `chain_id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] when a non-development chain has no
    /// coordinator configured.
    pub fn oracle_source(&self, chain_id: u64) -> Result<OracleSource> {
        let params = self.resolve(chain_id);
        if self.is_development_chain(&params.name) {
            return Ok(OracleSource::Mock);
        }
        params.require_coordinator().map(OracleSource::Live)
    }

    /// Confirmations to wait for before treating a deployment as final.
    #[must_use]
    pub fn block_confirmations(&self, name: &str) -> u64 {
        if self.is_development_chain(name) {
            1
        } else {
            VERIFICATION_BLOCK_CONFIRMATIONS
        }
    }

    /// The underlying registry.
    #[must_use]
    pub const fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The development chain set.
    #[must_use]
    pub const fn development_chains(&self) -> &DevelopmentChains {
        &self.development
    }
}

impl Default for ChainParameterResolver {
    fn default() -> Self {
        Self::builtin()
    }
}

fn oracle_chain(
    chain_id: u64,
    name: &str,
    subscription_id: u64,
    gas_lane: B256,
    entrance_fee: U256,
    coordinator: Option<Address>,
) -> ChainParameters {
    ChainParameters::new(Some(chain_id), name, UPDATE_INTERVAL_SECS).with_oracle(
        OracleParameters {
            gas_lane,
            entrance_fee,
            callback_gas_limit: CALLBACK_GAS_LIMIT,
            subscription_id,
            coordinator,
        },
    )
}

/// Every builtin chain entry (the default bundle excluded).
#[must_use]
pub fn builtin_entries() -> Vec<ChainParameters> {
    vec![
        // 30 gwei lane, mock coordinator deployed locally
        oracle_chain(
            31337,
            "localhost",
            588,
            b256!("d89b2bf150e3b9e13446986e571fb9cab24b13cea0a43ea20a6049a85cc807cc"),
            FEE_ETH,
            None,
        ),
        // 30 gwei
        oracle_chain(
            5,
            "goerli",
            7354,
            b256!("79d3d8832d904592c0bf9818b621522c988bb8b0c05cdc3b15aea1b6e8db0c15"),
            FEE_ETH,
            Some(address!("2Ca8E0C643bDe4C2E08ab1fA0da3401AdAD7734D")),
        ),
        // 500 gwei
        oracle_chain(
            80001,
            "mumbai",
            2805,
            b256!("4b09e658ed251bcafeebbc69400383d49f344ace09b9576fe248bb02c003fe9f"),
            FEE_MATIC,
            Some(address!("7a1BaC17Ccc5b313516C5E16fb24f7659aA5ebed")),
        ),
        // 200 gwei
        oracle_chain(
            137,
            "polygon",
            6926,
            b256!("6e099d640cde6de9d40ac749b4b594126b0169747122711109c9985d47751f93"),
            FEE_MATIC,
            Some(address!("AE975071Be8F8eE67addBC1A82488F1C24858067")),
        ),
    ]
}
