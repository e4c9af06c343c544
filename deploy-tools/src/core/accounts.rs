// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/deploy-tools/blob/main/licenses/COPYRIGHT.md

//! Named account resolution.
//!
//! Scripts never hold raw keys. They look up accounts by role name and pass
//! the resolved address through to the deployment backend unmodified.

use std::collections::BTreeMap;

use alloy_primitives::{address, Address};

/// Role of the account that sends deployment transactions.
pub const DEPLOYER: &str = "deployer";

/// First pre-funded account on a stock local development chain.
pub const DEV_DEPLOYER: Address = address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");

#[derive(Debug, thiserror::Error)]
pub enum AccountsError {
    #[error("no account configured for role: {0}")]
    MissingRole(String),
}

/// Immutable role-name to address mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamedAccounts {
    accounts: BTreeMap<String, Address>,
}

impl NamedAccounts {
    pub fn new(accounts: BTreeMap<String, Address>) -> Self {
        Self { accounts }
    }

    /// Accounts for a stock local development chain.
    pub fn dev() -> Self {
        Self::new(BTreeMap::from([(DEPLOYER.to_string(), DEV_DEPLOYER)]))
    }

    pub fn get(&self, role: &str) -> Result<Address, AccountsError> {
        self.accounts
            .get(role)
            .copied()
            .ok_or_else(|| AccountsError::MissingRole(role.to_string()))
    }

    pub fn deployer(&self) -> Result<Address, AccountsError> {
        self.get(DEPLOYER)
    }
}
