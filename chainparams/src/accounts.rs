//! Named account slots.
//!
//! Deployment scripts refer to signers by role. Each role maps to an index
//! into the network's account list, optionally overridden per chain.

use std::fmt;

/// A signer role used by deployment scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedAccount {
    /// Account that deploys contracts.
    Deployer,
    /// Account that interacts with deployed contracts in tests.
    Player,
}

impl NamedAccount {
    /// All roles.
    pub const ALL: &[Self] = &[Self::Deployer, Self::Player];

    /// Index into the account list used on chains without an override.
    #[must_use]
    pub const fn default_index(self) -> usize {
        match self {
            Self::Deployer => 0,
            Self::Player => 1,
        }
    }

    /// Index into the account list on `chain_id`.
    #[must_use]
    pub const fn index_for(self, chain_id: u64) -> usize {
        match (self, chain_id) {
            // mainnet pins the deployer explicitly
            (Self::Deployer, 1) => 0,
            _ => self.default_index(),
        }
    }

    /// Role name as written in deployment scripts.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Deployer => "deployer",
            Self::Player => "player",
        }
    }
}

impl fmt::Display for NamedAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
