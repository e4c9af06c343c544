// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/deploy-tools/blob/main/licenses/COPYRIGHT.md

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Accounts(#[from] crate::core::accounts::AccountsError),
    #[error("{0}")]
    Config(#[from] crate::core::config::ConfigError),
    #[error("{0}")]
    Deployment(#[from] crate::core::deployment::DeploymentError),
}

#[cfg(test)]
mod tests {
    use crate::core::{
        accounts::{AccountsError, NamedAccounts},
        config::DeployConfig,
        deployment::DeploymentError,
    };

    use super::*;

    #[test]
    fn aggregates_account_errors() {
        fn deployer() -> Result<alloy_primitives::Address> {
            Ok(NamedAccounts::default().deployer()?)
        }

        let err = deployer().unwrap_err();
        assert!(matches!(err, Error::Accounts(AccountsError::MissingRole(_))));
        assert_eq!(err.to_string(), "no account configured for role: deployer");
    }

    #[test]
    fn aggregates_config_errors() {
        fn parse() -> Result<DeployConfig> {
            let config = toml::from_str("development_chains = 7")
                .map_err(crate::core::config::ConfigError::from)?;
            Ok(config)
        }

        let err = parse().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn aggregates_deployment_errors() {
        fn deploy() -> Result<()> {
            Err(DeploymentError::FailedToComplete)?
        }

        let err = deploy().unwrap_err();
        assert!(matches!(err, Error::Deployment(_)));
        assert_eq!(err.to_string(), "deploy tx failed to complete");
    }
}
