//! Deployment constants shared with external tooling.

/// Block confirmations to wait for on live networks before verifying a
/// deployment.
pub const VERIFICATION_BLOCK_CONFIRMATIONS: u64 = 6;

/// Where the front-end build expects deployed contract addresses.
pub const FRONT_END_CONTRACTS_FILE: &str =
    "../nextjs-smartcontract-lottery-fcc/constants/contractAddresses.json";

/// Where the front-end build expects the contract ABI.
pub const FRONT_END_ABI_FILE: &str = "../nextjs-smartcontract-lottery-fcc/constants/abi.json";
