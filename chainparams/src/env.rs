//! Secrets and RPC endpoints taken from the process environment.
//!
//! Nothing here fails: an unset (or empty) variable falls back to a
//! placeholder literal, and the placeholder is rejected later by whatever
//! remote service it is sent to.

use std::collections::HashMap;
use std::fmt;

use crate::networks::Network;

/// Used when neither `PRIVATE_KEY` nor `MNEMONIC` is set.
pub const PLACEHOLDER_PRIVATE_KEY: &str = "your private key";

/// Signing material for remote networks.
#[derive(Clone, PartialEq, Eq)]
pub enum Accounts {
    /// Raw private keys.
    PrivateKeys(Vec<String>),
    /// BIP-39 mnemonic phrase.
    Mnemonic(String),
}

impl fmt::Debug for Accounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PrivateKeys(keys) => f
                .debug_tuple("PrivateKeys")
                .field(&keys.iter().map(|k| redact(k)).collect::<Vec<_>>())
                .finish(),
            Self::Mnemonic(m) => f.debug_tuple("Mnemonic").field(&redact(m)).finish(),
        }
    }
}

impl fmt::Display for Accounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PrivateKeys(keys) => write!(f, "{} private key(s)", keys.len()),
            Self::Mnemonic(_) => f.write_str("mnemonic"),
        }
    }
}

/// A network with its endpoint and signing setup resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkEndpoint {
    /// The network.
    pub network: Network,
    /// RPC URL, `None` for the in-process chain.
    pub url: Option<String>,
    /// Pinned chain ID.
    pub chain_id: Option<u64>,
    /// Signers, `None` on local networks (they use the node's own accounts).
    pub accounts: Option<Accounts>,
    /// Whether deployment artifacts are kept for this network.
    pub save_deployments: bool,
}

/// Snapshot of the environment variables the deployment tooling reads.
#[derive(Clone)]
pub struct NetworkEnv {
    private_key: Option<String>,
    mnemonic: Option<String>,
    rpc_urls: HashMap<Network, String>,
    etherscan_api_key: Option<String>,
    coinmarketcap_api_key: Option<String>,
}

impl NetworkEnv {
    /// Read variables through `lookup`.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let rpc_urls = Network::ALL
            .iter()
            .filter_map(|&n| n.rpc_env_var().and_then(&get).map(|url| (n, url)))
            .collect();
        Self {
            private_key: get("PRIVATE_KEY"),
            mnemonic: get("MNEMONIC"),
            rpc_urls,
            etherscan_api_key: get("ETHERSCAN_API_KEY"),
            coinmarketcap_api_key: get("COINMARKETCAP_API_KEY"),
        }
    }

    /// Load `.env` from the working directory (if any), then read the
    /// process environment.
    #[must_use]
    pub fn from_process_env() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
            Err(e) if e.not_found() => {}
            Err(e) => tracing::warn!(error = %e, "ignoring unreadable .env"),
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Signers for remote networks: the private key if set, else the
    /// mnemonic if set, else [`PLACEHOLDER_PRIVATE_KEY`].
    #[must_use]
    pub fn accounts(&self) -> Accounts {
        match (&self.private_key, &self.mnemonic) {
            (Some(key), _) => Accounts::PrivateKeys(vec![key.clone()]),
            (None, Some(mnemonic)) => Accounts::Mnemonic(mnemonic.clone()),
            (None, None) => Accounts::PrivateKeys(vec![PLACEHOLDER_PRIVATE_KEY.to_owned()]),
        }
    }

    /// RPC URL for `network`, falling back to its placeholder.
    #[must_use]
    pub fn rpc_url(&self, network: Network) -> Option<String> {
        self.rpc_urls
            .get(&network)
            .cloned()
            .or_else(|| network.placeholder_rpc_url().map(str::to_owned))
    }

    /// Whether `network` would use a placeholder URL.
    #[must_use]
    pub fn uses_placeholder(&self, network: Network) -> bool {
        network.rpc_env_var().is_some() && !self.rpc_urls.contains_key(&network)
    }

    /// API key for block explorer contract verification.
    #[must_use]
    pub fn etherscan_api_key(&self) -> Option<&str> {
        self.etherscan_api_key.as_deref()
    }

    /// API key for gas price conversion in reports.
    #[must_use]
    pub fn coinmarketcap_api_key(&self) -> Option<&str> {
        self.coinmarketcap_api_key.as_deref()
    }

    /// Resolve the full endpoint entry for `network`.
    #[must_use]
    pub fn endpoint(&self, network: Network) -> NetworkEndpoint {
        let remote = !network.is_local();
        NetworkEndpoint {
            network,
            url: self.rpc_url(network),
            chain_id: network.chain_id(),
            accounts: remote.then(|| self.accounts()),
            save_deployments: remote,
        }
    }

    /// Endpoints for every known network.
    #[must_use]
    pub fn endpoints(&self) -> Vec<NetworkEndpoint> {
        Network::ALL.iter().map(|&n| self.endpoint(n)).collect()
    }
}

impl fmt::Debug for NetworkEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NetworkEnv")
            .field("private_key", &self.private_key.as_deref().map(redact))
            .field("mnemonic", &self.mnemonic.as_deref().map(redact))
            .field("rpc_urls", &self.rpc_urls.keys().collect::<Vec<_>>())
            .field(
                "etherscan_api_key",
                &self.etherscan_api_key.as_deref().map(redact),
            )
            .field(
                "coinmarketcap_api_key",
                &self.coinmarketcap_api_key.as_deref().map(redact),
            )
            .finish()
    }
}

/// Mask a secret, keeping at most four leading characters.
#[must_use]
pub fn redact(secret: &str) -> String {
    if secret.chars().count() <= 8 {
        return "****".to_owned();
    }
    let head: String = secret.chars().take(4).collect();
    format!("{head}****")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_from(pairs: &[(&str, &str)]) -> NetworkEnv {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|&(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        NetworkEnv::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_placeholders() {
        let env = env_from(&[]);
        assert_eq!(
            env.accounts(),
            Accounts::PrivateKeys(vec![PLACEHOLDER_PRIVATE_KEY.to_owned()])
        );
        assert_eq!(
            env.rpc_url(Network::Goerli).as_deref(),
            Some("https://eth-goerli.g.alchemy.com/v2/your-api-key")
        );
        assert!(env.uses_placeholder(Network::Goerli), "goerli unset");
        assert!(!env.uses_placeholder(Network::Localhost), "localhost is fixed");
        assert_eq!(env.etherscan_api_key(), None);
    }

    #[test]
    fn private_key_wins_over_mnemonic() {
        let env = env_from(&[("PRIVATE_KEY", "0xabc123"), ("MNEMONIC", "test test junk")]);
        assert_eq!(env.accounts(), Accounts::PrivateKeys(vec!["0xabc123".to_owned()]));

        // empty counts as unset
        let env = env_from(&[("PRIVATE_KEY", ""), ("MNEMONIC", "test test junk")]);
        assert_eq!(env.accounts(), Accounts::Mnemonic("test test junk".to_owned()));
    }

    #[test]
    fn endpoints_pick_up_rpc_overrides() {
        let env = env_from(&[("POLYGON_MUMBAI_RPC_URL", "https://mumbai.example")]);
        let mumbai = env.endpoint(Network::Mumbai);
        assert_eq!(mumbai.url.as_deref(), Some("https://mumbai.example"));
        assert_eq!(mumbai.chain_id, Some(80001));
        assert!(mumbai.save_deployments, "remote networks save deployments");
        assert!(mumbai.accounts.is_some(), "remote networks have signers");

        let hardhat = env.endpoint(Network::Hardhat);
        assert_eq!(hardhat.url, None);
        assert_eq!(hardhat.accounts, None);
        assert!(!hardhat.save_deployments, "local networks are throwaway");

        assert_eq!(env.endpoints().len(), Network::ALL.len());
    }

    #[test]
    fn debug_output_hides_secrets() {
        let env = env_from(&[("PRIVATE_KEY", "0xdeadbeefdeadbeefdeadbeef")]);
        let rendered = format!("{env:?} {:?}", env.accounts());
        assert!(!rendered.contains("deadbeefdeadbeef"), "{rendered}");
        assert!(rendered.contains("0xde****"), "{rendered}");
        assert_eq!(redact("short"), "****");
    }
}
