//! Pre-configured deployment networks.
//!
//! Each [`Network`] names one entry of the deployment tooling's network table
//! together with where its RPC endpoint comes from. Endpoints themselves are
//! resolved at runtime by [`crate::env::NetworkEnv`].

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Networks the deployment tooling knows how to reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Network {
    /// In-process development chain (chain ID 31337).
    Hardhat,
    /// Locally hosted node at `http://127.0.0.1:8545`.
    Localhost,
    /// Goerli testnet (chain ID 5).
    Goerli,
    /// Ethereum Mainnet (chain ID 1).
    Mainnet,
    /// Polygon Mainnet (chain ID 137).
    Polygon,
    /// Polygon Mumbai testnet (chain ID 80001).
    Mumbai,
}

/// Network selected when the caller does not name one.
pub const DEFAULT_NETWORK: Network = Network::Mumbai;

/// RPC URL of the locally hosted node.
pub const LOCALHOST_RPC_URL: &str = "http://127.0.0.1:8545";

impl Network {
    /// All known network variants.
    pub const ALL: &[Self] = &[
        Self::Hardhat,
        Self::Localhost,
        Self::Goerli,
        Self::Mainnet,
        Self::Polygon,
        Self::Mumbai,
    ];

    /// Returns the network name used by the deployment tooling.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hardhat => "hardhat",
            Self::Localhost => "localhost",
            Self::Goerli => "goerli",
            Self::Mainnet => "mainnet",
            Self::Polygon => "polygon",
            Self::Mumbai => "mumbai",
        }
    }

    /// Returns the pinned EIP-155 chain ID, if the network declares one.
    ///
    /// `Localhost` reports whatever the local node is running, so it has no
    /// fixed ID.
    #[must_use]
    pub const fn chain_id(self) -> Option<u64> {
        match self {
            Self::Hardhat => Some(31337),
            Self::Localhost => None,
            Self::Goerli => Some(5),
            Self::Mainnet => Some(1),
            Self::Polygon => Some(137),
            Self::Mumbai => Some(80001),
        }
    }

    /// Whether the network runs on the developer's machine.
    #[must_use]
    pub const fn is_local(self) -> bool {
        matches!(self, Self::Hardhat | Self::Localhost)
    }

    /// Environment variable holding the RPC URL for remote networks.
    #[must_use]
    pub const fn rpc_env_var(self) -> Option<&'static str> {
        match self {
            Self::Hardhat | Self::Localhost => None,
            Self::Goerli => Some("GOERLI_RPC_URL"),
            Self::Mainnet => Some("MAINNET_RPC_URL"),
            Self::Polygon => Some("POLYGON_MAINNET_RPC_URL"),
            Self::Mumbai => Some("POLYGON_MUMBAI_RPC_URL"),
        }
    }

    /// URL used when [`Self::rpc_env_var`] is unset.
    ///
    /// Remote placeholders carry a dummy API key and will be rejected by the
    /// provider; `Hardhat` has no URL at all.
    #[must_use]
    pub const fn placeholder_rpc_url(self) -> Option<&'static str> {
        match self {
            Self::Hardhat => None,
            Self::Localhost => Some(LOCALHOST_RPC_URL),
            Self::Goerli => Some("https://eth-goerli.g.alchemy.com/v2/your-api-key"),
            Self::Mainnet => Some("https://eth-mainnet.alchemyapi.io/v2/your-api-key"),
            Self::Polygon => Some("https://polygon-mainnet.alchemyapi.io/v2/your-api-key"),
            Self::Mumbai => Some("https://polygon-mumbai.g.alchemy.com/v2/your-api-key"),
        }
    }

    /// Look up a [`Network`] by its pinned chain ID.
    #[must_use]
    pub fn from_chain_id(chain_id: u64) -> Option<Self> {
        Self::ALL
            .iter()
            .find(|n| n.chain_id() == Some(chain_id))
            .copied()
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Network {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|n| n.name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| Error::UnknownNetwork(s.to_owned()))
    }
}
