// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/deploy-tools/blob/main/licenses/COPYRIGHT.md

pub mod accounts;
pub mod config;
pub mod deployment;
pub mod network;
pub mod script;
