// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/deploy-tools/blob/main/licenses/COPYRIGHT.md

use std::path::PathBuf;

use deploy_tools::{
    core::{
        accounts::NamedAccounts,
        config::{self, DeployConfig},
        deployment::DeploymentRecorder,
        network::Network,
        script::ScriptContext,
    },
    ops, scripts,
};

use crate::error::DeployCliResult;

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Network the scripts should target.
    #[arg(long)]
    network: String,
    /// Only run scripts carrying one of these tags.
    #[arg(long, num_args(0..), value_name = "TAGS")]
    tags: Vec<String>,
    /// Path to the deployment configuration file.
    #[arg(long, default_value = config::FILENAME)]
    config: PathBuf,
}

pub async fn exec(args: Args) -> DeployCliResult {
    let config = DeployConfig::load(&args.config)?;
    let network = Network::new(args.network);
    let accounts = NamedAccounts::new(config.accounts);
    let recorder = DeploymentRecorder::new();
    let ctx = ScriptContext {
        network: &network,
        accounts: &accounts,
        development_chains: &config.development_chains,
        deployments: &recorder,
    };

    let scripts = scripts::all();
    let count = ops::run_scripts(&scripts, &args.tags, &ctx).await?;

    println!("ran {count} script(s) on {network}");
    for record in recorder.records() {
        println!("  {} @ {}", record.contract.contract_name, record.contract.address);
    }
    Ok(())
}
