// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/deploy-tools/blob/main/licenses/COPYRIGHT.md

//! Tag-filtered script execution.

use crate::core::{
    deployment::DeploymentError,
    script::{DeployScript, ScriptContext},
};

/// Runs every script whose tags intersect `tag_filter`, in order.
///
/// An empty filter selects every script. Execution stops at the first
/// failing script and the failure is returned unchanged. Returns the number
/// of scripts run.
pub async fn run_scripts(
    scripts: &[Box<dyn DeployScript>],
    tag_filter: &[String],
    ctx: &ScriptContext<'_>,
) -> Result<usize, DeploymentError> {
    let mut count = 0;
    for script in scripts {
        if !selected(script.tags(), tag_filter) {
            debug!(@grey, "skipping {} (tags {:?})", script.name(), script.tags());
            continue;
        }
        debug!(@grey, "running {}", script.name());
        script.run(ctx).await?;
        count += 1;
    }
    Ok(count)
}

fn selected(tags: &[&str], filter: &[String]) -> bool {
    filter.is_empty() || tags.iter().any(|tag| filter.iter().any(|f| f == tag))
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use async_trait::async_trait;

    use crate::core::{
        accounts::NamedAccounts,
        deployment::DeploymentRecorder,
        network::Network,
        script::{DeployScript, ScriptContext},
    };

    use super::*;

    struct Counting {
        tags: &'static [&'static str],
        runs: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl DeployScript for Counting {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn tags(&self) -> &'static [&'static str] {
            self.tags
        }

        async fn run(&self, _ctx: &ScriptContext<'_>) -> Result<(), DeploymentError> {
            self.runs.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct Failing;

    #[async_trait]
    impl DeployScript for Failing {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn tags(&self) -> &'static [&'static str] {
            &["all"]
        }

        async fn run(&self, _ctx: &ScriptContext<'_>) -> Result<(), DeploymentError> {
            Err(DeploymentError::FailedToComplete)
        }
    }

    fn counting(tags: &'static [&'static str]) -> (Box<dyn DeployScript>, Arc<AtomicUsize>) {
        let runs = Arc::new(AtomicUsize::new(0));
        let script = Counting {
            tags,
            runs: runs.clone(),
        };
        (Box::new(script), runs)
    }

    #[tokio::test]
    async fn empty_filter_runs_everything() {
        let (first, first_runs) = counting(&["all", "mocks"]);
        let (second, second_runs) = counting(&["all"]);
        let scripts = vec![first, second];

        let network = Network::new("hardhat");
        let accounts = NamedAccounts::dev();
        let chains = Vec::new();
        let recorder = DeploymentRecorder::new();
        let ctx = ScriptContext {
            network: &network,
            accounts: &accounts,
            development_chains: &chains,
            deployments: &recorder,
        };

        let count = run_scripts(&scripts, &[], &ctx).await.unwrap();
        assert_eq!(count, 2);
        assert_eq!(first_runs.load(Ordering::SeqCst), 1);
        assert_eq!(second_runs.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn filter_selects_by_tag_intersection() {
        let (first, first_runs) = counting(&["all", "mocks"]);
        let (second, second_runs) = counting(&["all", "raffle"]);
        let scripts = vec![first, second];

        let network = Network::new("hardhat");
        let accounts = NamedAccounts::dev();
        let chains = Vec::new();
        let recorder = DeploymentRecorder::new();
        let ctx = ScriptContext {
            network: &network,
            accounts: &accounts,
            development_chains: &chains,
            deployments: &recorder,
        };

        let count = run_scripts(&scripts, &["mocks".to_string()], &ctx)
            .await
            .unwrap();
        assert_eq!(count, 1);
        assert_eq!(first_runs.load(Ordering::SeqCst), 1);
        assert_eq!(second_runs.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn first_failure_halts_the_run() {
        let (first, first_runs) = counting(&["all"]);
        let (third, third_runs) = counting(&["all"]);
        let scripts: Vec<Box<dyn DeployScript>> = vec![first, Box::new(Failing), third];

        let network = Network::new("hardhat");
        let accounts = NamedAccounts::dev();
        let chains = Vec::new();
        let recorder = DeploymentRecorder::new();
        let ctx = ScriptContext {
            network: &network,
            accounts: &accounts,
            development_chains: &chains,
            deployments: &recorder,
        };

        let err = run_scripts(&scripts, &[], &ctx).await.unwrap_err();
        assert!(matches!(err, DeploymentError::FailedToComplete));
        assert_eq!(first_runs.load(Ordering::SeqCst), 1);
        assert_eq!(third_runs.load(Ordering::SeqCst), 0);
    }
}
