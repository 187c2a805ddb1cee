//! Error types for registry construction and parameter access.

use thiserror::Error;

/// Errors produced while building a resolver or reading sparse parameters.
///
/// An unregistered chain ID is not an error: [`crate::ChainParameterResolver::resolve`]
/// falls back to the default bundle instead.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A caller asked for a field the resolved bundle does not carry.
    #[error("chain '{chain}' has no '{field}' configured")]
    MissingField {
        /// Name of the resolved chain.
        chain: String,
        /// The requested field.
        field: &'static str,
    },

    /// The same chain ID was registered twice.
    #[error("chain ID {0} is registered more than once")]
    DuplicateChain(u64),

    /// A registry entry has no chain ID.
    #[error("chain '{0}' has no chain ID")]
    MissingChainId(String),

    /// A registry entry's `chain_id` disagrees with the key it is stored under.
    #[error("entry stored under chain ID {key} declares chain ID {chain_id:?}")]
    ChainIdMismatch {
        /// Registry key.
        key: u64,
        /// ID carried by the entry itself.
        chain_id: Option<u64>,
    },

    /// The default bundle is malformed.
    #[error("invalid default bundle: {0}")]
    InvalidDefault(String),

    /// A development chain name matches no registered bundle.
    #[error("development chain '{0}' is not in the registry")]
    UnknownDevelopmentChain(String),

    /// A network name is not one of [`crate::Network::ALL`].
    #[error("unknown network '{0}'")]
    UnknownNetwork(String),

    /// Configuration text could not be parsed.
    #[error("config: {0}")]
    Config(String),

    /// Reading or writing a configuration file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
