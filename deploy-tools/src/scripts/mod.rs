// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/deploy-tools/blob/main/licenses/COPYRIGHT.md

//! Deployment scripts shipped with this workspace.

pub use mocks::DeployMocks;

mod mocks;

use crate::core::script::DeployScript;

/// Every shipped script, in deployment order.
pub fn all() -> Vec<Box<dyn DeployScript>> {
    vec![Box::new(DeployMocks)]
}
