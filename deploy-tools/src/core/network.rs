// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/deploy-tools/blob/main/licenses/COPYRIGHT.md

//! Network identity and the development-chain allow-list.

use std::fmt;

/// Chains treated as development environments by default: the in-process
/// simulated chain and the locally persistent node.
pub const DEV_CHAINS: [&str; 2] = ["hardhat", "localhost"];

/// The network a deployment run targets, identified by name.
///
/// The name comes from the execution environment and is not validated here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Network {
    name: String,
}

impl Network {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this network is in the given development allow-list.
    pub fn is_development(&self, allow_list: &[String]) -> bool {
        allow_list.iter().any(|chain| chain == &self.name)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.name.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_chains() -> Vec<String> {
        DEV_CHAINS.iter().map(|chain| chain.to_string()).collect()
    }

    #[test]
    fn default_chains_are_development() {
        let chains = default_chains();
        assert!(Network::new("hardhat").is_development(&chains));
        assert!(Network::new("localhost").is_development(&chains));
    }

    #[test]
    fn public_networks_are_not_development() {
        let chains = default_chains();
        assert!(!Network::new("mainnet").is_development(&chains));
        assert!(!Network::new("sepolia").is_development(&chains));
        assert!(!Network::new("").is_development(&chains));
    }
}
