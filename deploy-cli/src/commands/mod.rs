// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/deploy-tools/blob/main/licenses/COPYRIGHT.md

use crate::error::DeployCliResult;

mod list;
mod run;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// List available deployment scripts and their tags
    #[clap(visible_alias = "l")]
    List(list::Args),
    /// Run deployment scripts against a network
    #[clap(visible_alias = "r")]
    Run(run::Args),
}

pub async fn exec(cmd: Command) -> DeployCliResult {
    match cmd {
        Command::List(args) => list::exec(args),
        Command::Run(args) => run::exec(args).await,
    }
}
