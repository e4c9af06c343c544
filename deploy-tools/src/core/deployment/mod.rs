// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/deploy-tools/blob/main/licenses/COPYRIGHT.md

//! The deployment capability handed to scripts.
//!
//! Everything chain-facing (transport, signing, fees, artifact tracking)
//! lives behind the [`Deployments`] trait. Scripts only build requests and
//! await results.

use std::fmt;

use alloy_primitives::Address;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

pub use recorder::{DeployRecord, DeploymentRecorder};

mod recorder;

#[derive(Debug, thiserror::Error)]
pub enum DeploymentError {
    #[error("{0}")]
    Accounts(#[from] crate::core::accounts::AccountsError),

    #[error("deploy rejected: {0}")]
    Rejected(String),
    #[error("deploy tx failed to complete")]
    FailedToComplete,
}

/// Constructor argument shapes accepted by deployment backends.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ConstructorArg {
    /// Decimal string, used for fixed-point currency amounts that overflow
    /// native integers.
    Amount(String),
    /// Plain unsigned integer.
    Uint(u64),
}

impl From<&str> for ConstructorArg {
    fn from(amount: &str) -> Self {
        Self::Amount(amount.to_string())
    }
}

impl From<u64> for ConstructorArg {
    fn from(value: u64) -> Self {
        Self::Uint(value)
    }
}

impl fmt::Display for ConstructorArg {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Amount(amount) => amount.fmt(f),
            Self::Uint(value) => value.fmt(f),
        }
    }
}

/// Defines a single contract deployment.
/// After setting the parameters, pass the request to [`Deployments::deploy`].
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
#[builder(field_defaults(setter(into)))]
pub struct DeployRequest {
    /// Name of the contract artifact to deploy.
    pub contract_name: String,

    /// Account the deployment transaction is sent from.
    pub from: Address,

    /// Whether the backend should log receipt details.
    #[builder(default = true)]
    pub log: bool,

    /// Constructor arguments, in declaration order.
    #[builder(default)]
    pub constructor_args: Vec<ConstructorArg>,
}

/// Record returned by a deployment backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployedContract {
    pub contract_name: String,
    pub address: Address,
    /// Position of this deployment in the backend's receipt order.
    pub ordinal: usize,
}

/// Deployment capability exposed to scripts.
///
/// Exactly two operations: deploy a named contract and write a line to the
/// shared deployment log.
#[async_trait]
pub trait Deployments: Send + Sync {
    async fn deploy(&self, request: DeployRequest) -> Result<DeployedContract, DeploymentError>;

    fn log(&self, message: &str);
}
