// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/deploy-tools/blob/main/licenses/COPYRIGHT.md

//! In-memory deployment backend.

use alloy_primitives::{keccak256, Address};
use async_trait::async_trait;
use parking_lot::Mutex;

use crate::utils::color::DebugColor;

use super::{DeployRequest, DeployedContract, DeploymentError, Deployments};

/// One recorded deployment: the request as received, and the result handed
/// back to the script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployRecord {
    pub request: DeployRequest,
    pub contract: DeployedContract,
}

/// Records deployments and log lines without touching a chain.
///
/// Mock addresses are derived from the contract name and deploy ordinal, so
/// repeated runs produce identical records.
#[derive(Debug, Default)]
pub struct DeploymentRecorder {
    records: Mutex<Vec<DeployRecord>>,
    logs: Mutex<Vec<String>>,
}

impl DeploymentRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<DeployRecord> {
        self.records.lock().clone()
    }

    pub fn logs(&self) -> Vec<String> {
        self.logs.lock().clone()
    }

    fn mock_address(contract_name: &str, ordinal: usize) -> Address {
        let digest = keccak256(format!("{contract_name}:{ordinal}"));
        Address::from_slice(&digest[12..])
    }
}

#[async_trait]
impl Deployments for DeploymentRecorder {
    async fn deploy(&self, request: DeployRequest) -> Result<DeployedContract, DeploymentError> {
        let mut records = self.records.lock();
        let ordinal = records.len();
        let address = Self::mock_address(&request.contract_name, ordinal);
        let contract = DeployedContract {
            contract_name: request.contract_name.clone(),
            address,
            ordinal,
        };
        if request.log {
            info!(@grey, "deployed {} at address: {}", contract.contract_name, address.debug_lavender());
        }
        records.push(DeployRecord {
            request,
            contract: contract.clone(),
        });
        Ok(contract)
    }

    fn log(&self, message: &str) {
        greyln!("{message}");
        self.logs.lock().push(message.to_string());
    }
}
