//! Resolver configuration loaded from TOML.
//!
//! When no config file is present the builtin table from
//! [`ChainParameterResolver::builtin`] is used.
//!
//! # File format
//!
//! ```toml
//! development_chains = ["hardhat", "localhost"]
//!
//! [default]
//! name = "hardhat"
//! update_interval_secs = 30
//!
//! [chains.5]
//! name = "goerli"
//! update_interval_secs = 30
//!
//! [chains.5.oracle]
//! gas_lane = "0x79d3d8832d904592c0bf9818b621522c988bb8b0c05cdc3b15aea1b6e8db0c15"
//! entrance_fee = "0.01"
//! callback_gas_limit = 500000
//! subscription_id = 7354
//! coordinator = "0x2Ca8E0C643bDe4C2E08ab1fA0da3401AdAD7734D"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::registry::ChainParameterResolver;
use crate::types::ChainParameters;

/// Default config file name looked up by the CLI.
pub const DEFAULT_CONFIG_FILE: &str = "chainparams.toml";

/// On-disk shape of a resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Names of local development chains.
    #[serde(default)]
    pub development_chains: Vec<String>,

    /// Fallback bundle for unregistered chain IDs.
    pub default: ChainParameters,

    /// Per-chain bundles keyed by decimal chain ID.
    #[serde(default)]
    pub chains: BTreeMap<String, ChainParameters>,
}

impl ResolverConfig {
    /// Validate and build the resolver.
    ///
    /// An entry may omit `chain_id`; it is taken from the table key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for a key that is not a decimal chain ID,
    /// [`Error::ChainIdMismatch`] when an entry's `chain_id` contradicts its
    /// key, and any validation error of
    /// [`ChainParameterResolver::from_parts`].
    pub fn into_resolver(self) -> Result<ChainParameterResolver> {
        let mut entries = Vec::with_capacity(self.chains.len());
        for (key, mut entry) in self.chains {
            let id: u64 = key
                .trim()
                .parse()
                .map_err(|e| Error::Config(format!("chain key '{key}': {e}")))?;
            match entry.chain_id {
                None => entry.chain_id = Some(id),
                Some(declared) if declared == id => {}
                Some(declared) => {
                    return Err(Error::ChainIdMismatch {
                        key: id,
                        chain_id: Some(declared),
                    });
                }
            }
            entries.push(entry);
        }
        ChainParameterResolver::from_parts(self.default, entries, self.development_chains)
    }
}

impl From<&ChainParameterResolver> for ResolverConfig {
    fn from(resolver: &ChainParameterResolver) -> Self {
        let chains = resolver
            .registry()
            .entries()
            .into_iter()
            .filter_map(|entry| {
                let id = entry.chain_id?;
                let mut entry = entry.clone();
                entry.chain_id = None;
                Some((id.to_string(), entry))
            })
            .collect();
        Self {
            development_chains: resolver
                .development_chains()
                .names()
                .into_iter()
                .map(str::to_owned)
                .collect(),
            default: resolver.resolve_default().clone(),
            chains,
        }
    }
}

/// Parse a resolver from TOML text.
///
/// # Errors
///
/// Returns [`Error::Config`] if the text is not a valid config, or any
/// validation error of [`ResolverConfig::into_resolver`].
pub fn from_toml_str(text: &str) -> Result<ChainParameterResolver> {
    let config: ResolverConfig = toml::from_str(text).map_err(|e| Error::Config(e.to_string()))?;
    config.into_resolver()
}

/// Load a resolver from `path`.
///
/// Returns [`ChainParameterResolver::builtin`] if the file does not exist,
/// allowing callers to work without any config.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed
/// ([`Error::Config`] names the path), or the validation error of
/// [`ResolverConfig::into_resolver`] unchanged.
pub fn load(path: &Path) -> Result<ChainParameterResolver> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using builtin parameters");
        return Ok(ChainParameterResolver::builtin());
    }
    let text = std::fs::read_to_string(path)?;
    let config: ResolverConfig = toml::from_str(&text)
        .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
    let resolver = config.into_resolver()?;
    tracing::info!(
        path = %path.display(),
        chains = resolver.registry().len(),
        "loaded chain parameters"
    );
    Ok(resolver)
}

/// Serialize a resolver to TOML.
///
/// # Errors
///
/// Returns [`Error::Config`] if serialization fails.
pub fn to_toml(resolver: &ChainParameterResolver) -> Result<String> {
    toml::to_string(&ResolverConfig::from(resolver)).map_err(|e| Error::Config(e.to_string()))
}

/// Generate a commented configuration template holding the builtin table.
///
/// # Errors
///
/// Returns [`Error::Config`] if serialization fails.
pub fn generate_default_config() -> Result<String> {
    let body = to_toml(&ChainParameterResolver::builtin())?;
    Ok(format!(
        r"# Chain deployment parameters
#
# [default] applies to every chain ID without its own [chains.<id>] table
# and must not carry an [oracle] section.
# development_chains names chains that use a mock oracle coordinator.
# entrance_fee accepts ether (0.01), hex wei (0x...) or integer wei.

{body}"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_template_round_trips() {
        let text = generate_default_config().expect("serializable");
        let parsed = from_toml_str(&text).expect("template parses");
        assert_eq!(parsed, ChainParameterResolver::builtin());
    }

    #[test]
    fn minimal_config() {
        let resolver = from_toml_str(
            r#"
            development_chains = ["anvil"]

            [default]
            name = "anvil"
            update_interval_secs = 10

            [chains.10]
            name = "optimism"
            update_interval_secs = 60
            "#,
        )
        .expect("valid config");
        assert_eq!(resolver.resolve(10).chain_id, Some(10));
        assert_eq!(resolver.resolve(10).update_interval_secs, 60);
        assert_eq!(resolver.resolve(11).name, "anvil");
        assert!(resolver.is_development_chain("anvil"), "anvil is local");
    }

    #[test]
    fn rejects_bad_keys_and_mismatched_ids() {
        let bad_key = r#"
            [default]
            name = "hardhat"
            update_interval_secs = 30

            [chains.mainnet]
            name = "mainnet"
            update_interval_secs = 30
        "#;
        assert!(matches!(from_toml_str(bad_key), Err(Error::Config(_))), "non-numeric key");

        let mismatch = r#"
            [default]
            name = "hardhat"
            update_interval_secs = 30

            [chains.1]
            chain_id = 2
            name = "mainnet"
            update_interval_secs = 30
        "#;
        assert!(
            matches!(
                from_toml_str(mismatch),
                Err(Error::ChainIdMismatch { key: 1, chain_id: Some(2) })
            ),
            "declared id differs from key"
        );
    }

    #[test]
    fn oracle_on_default_is_rejected() {
        let text = r#"
            [default]
            name = "hardhat"
            update_interval_secs = 30

            [default.oracle]
            gas_lane = "0x79d3d8832d904592c0bf9818b621522c988bb8b0c05cdc3b15aea1b6e8db0c15"
            entrance_fee = "0.01"
            callback_gas_limit = 500000
            subscription_id = 1
        "#;
        assert!(
            matches!(from_toml_str(text), Err(Error::InvalidDefault(_))),
            "default must stay oracle-free"
        );
    }

    #[test]
    fn load_keeps_validation_variants() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let path = dir.path().join("chainparams.toml");
        std::fs::write(
            &path,
            r#"
            development_chains = ["anvil"]

            [default]
            name = "hardhat"
            update_interval_secs = 30
            "#,
        )
        .expect("write config");
        assert!(
            matches!(load(&path), Err(Error::UnknownDevelopmentChain(n)) if n == "anvil"),
            "validation error is not flattened"
        );

        std::fs::write(&path, "[default]\nname = 3\n").expect("write config");
        assert!(
            matches!(load(&path), Err(Error::Config(msg)) if msg.contains("chainparams.toml")),
            "parse error names the file"
        );
    }

    #[test]
    fn negative_entrance_fee_is_rejected() {
        let text = r#"
            [default]
            name = "hardhat"
            update_interval_secs = 30

            [chains.5]
            name = "goerli"
            update_interval_secs = 30

            [chains.5.oracle]
            gas_lane = "0x79d3d8832d904592c0bf9818b621522c988bb8b0c05cdc3b15aea1b6e8db0c15"
            entrance_fee = "-0.01"
            callback_gas_limit = 500000
            subscription_id = 7354
        "#;
        assert!(
            matches!(from_toml_str(text), Err(Error::Config(msg)) if msg.contains("negative")),
            "negative fee must not wrap around"
        );
    }

    #[test]
    fn missing_file_falls_back_to_builtin() {
        let resolver = load(Path::new("/nonexistent/chainparams.toml")).expect("fallback");
        assert_eq!(resolver, ChainParameterResolver::builtin());
    }
}
