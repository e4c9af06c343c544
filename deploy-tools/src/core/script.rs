// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/deploy-tools/blob/main/licenses/COPYRIGHT.md

//! The deployment script interface.

use async_trait::async_trait;

use super::{
    accounts::NamedAccounts,
    deployment::{DeploymentError, Deployments},
    network::Network,
};

/// Everything a script receives from the orchestrator, injected explicitly
/// at call time.
pub struct ScriptContext<'a> {
    pub network: &'a Network,
    pub accounts: &'a NamedAccounts,
    pub development_chains: &'a [String],
    pub deployments: &'a dyn Deployments,
}

impl ScriptContext<'_> {
    /// Whether the targeted network is in the development allow-list.
    pub fn is_development_chain(&self) -> bool {
        self.network.is_development(self.development_chains)
    }
}

/// A deployment script, selected by tag and run in order by the
/// orchestrator.
#[async_trait]
pub trait DeployScript: Send + Sync {
    /// Short identifier used in listings and skip/debug logs.
    fn name(&self) -> &'static str;

    /// Static tags used to select this script for a run.
    fn tags(&self) -> &'static [&'static str];

    async fn run(&self, ctx: &ScriptContext<'_>) -> Result<(), DeploymentError>;
}
