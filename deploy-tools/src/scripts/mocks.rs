// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/deploy-tools/blob/main/licenses/COPYRIGHT.md

//! Mock VRF coordinator deployment for development chains.
//!
//! Public test and production networks have a real coordinator, so this
//! script is a silent no-op there.

use async_trait::async_trait;

use crate::core::{
    deployment::{ConstructorArg, DeployRequest, DeploymentError},
    script::{DeployScript, ScriptContext},
};

/// Base fee charged by the mock coordinator per request, in juels
/// (0.25 LINK).
pub const BASE_FEE: &str = "250000000000000000";

/// LINK per gas unit, used by the mock to compute request costs.
pub const GAS_PRICE_LINK: u64 = 1_000_000_000;

const CONTRACT_NAME: &str = "VRFCoordinatorV2Mock";
const SEPARATOR: &str = "----------------------------------------------------------";

/// Deploys `VRFCoordinatorV2Mock` when targeting a development chain.
pub struct DeployMocks;

impl DeployMocks {
    pub const TAGS: &'static [&'static str] = &["all", "mocks"];
}

#[async_trait]
impl DeployScript for DeployMocks {
    fn name(&self) -> &'static str {
        "deploy-mocks"
    }

    fn tags(&self) -> &'static [&'static str] {
        Self::TAGS
    }

    async fn run(&self, ctx: &ScriptContext<'_>) -> Result<(), DeploymentError> {
        if !ctx.is_development_chain() {
            return Ok(());
        }

        ctx.deployments
            .log("Development Chain detected!, Deploying mocks...");
        let request = DeployRequest::builder()
            .contract_name(CONTRACT_NAME)
            .from(ctx.accounts.deployer()?)
            .log(true)
            .constructor_args(vec![
                ConstructorArg::from(BASE_FEE),
                ConstructorArg::from(GAS_PRICE_LINK),
            ])
            .build();
        ctx.deployments.deploy(request).await?;
        ctx.deployments.log("Mocks Deployed");
        ctx.deployments.log(SEPARATOR);
        Ok(())
    }
}
