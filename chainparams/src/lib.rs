//! Chain-parameterized deployment configuration.
//!
//! Deployment and automation code asks a [`ChainParameterResolver`] for the
//! parameters of the chain it is running against instead of hardcoding
//! per-network values. Unregistered chain IDs resolve to a default bundle;
//! local development chains are flagged so callers can swap live oracle
//! integrations for mocks.
//!
//! ```
//! use chainparams::ChainParameterResolver;
//!
//! let resolver = ChainParameterResolver::builtin();
//! assert_eq!(resolver.resolve(137).name, "polygon");
//! assert_eq!(resolver.resolve(999_999), resolver.resolve_default());
//! assert!(resolver.is_development_chain("localhost"));
//! ```
//!
//! The remaining modules model the rest of the deployment setup as typed
//! data: [`networks`] and [`env`] for RPC endpoints and signers,
//! [`accounts`] for named signer slots and [`constants`] for values shared
//! with external tooling.

pub mod accounts;
pub mod config;
pub mod constants;
pub mod env;
pub mod error;
pub mod networks;
pub mod registry;
pub mod types;

pub use accounts::NamedAccount;
pub use env::{Accounts, NetworkEndpoint, NetworkEnv};
pub use error::{Error, Result};
pub use networks::{DEFAULT_NETWORK, Network};
pub use registry::{ChainParameterResolver, DevelopmentChains, OracleSource, Registry};
pub use types::{ChainParameters, OracleParameters};
