// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/deploy-tools/blob/main/licenses/COPYRIGHT.md

//! Deploy.toml configuration definitions.

use std::{collections::BTreeMap, fs, path::Path};

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use super::{
    accounts::{DEPLOYER, DEV_DEPLOYER},
    network::DEV_CHAINS,
};

/// Filename for deployment configuration files.
pub const FILENAME: &str = "Deploy.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml read error: {0}")]
    TomlRead(#[from] toml::de::Error),
}

/// Configuration shared by every deployment run.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeployConfig {
    /// Chains treated as development environments.
    pub development_chains: Vec<String>,
    /// Role name to account address.
    pub accounts: BTreeMap<String, Address>,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            development_chains: DEV_CHAINS.iter().map(|chain| chain.to_string()).collect(),
            accounts: BTreeMap::from([(DEPLOYER.to_string(), DEV_DEPLOYER)]),
        }
    }
}

impl DeployConfig {
    /// Loads configuration from `path`, falling back to the defaults when
    /// the file does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }
}
