// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/deploy-tools/blob/main/licenses/COPYRIGHT.md

use deploy_tools::scripts;

use crate::error::DeployCliResult;

#[derive(Debug, clap::Args)]
pub struct Args {}

pub fn exec(_args: Args) -> DeployCliResult {
    for script in scripts::all() {
        println!("{} [{}]", script.name(), script.tags().join(", "));
    }
    Ok(())
}
