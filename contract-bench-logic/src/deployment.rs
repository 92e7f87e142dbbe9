//! Registration of newly deployed contracts.

use crate::{
    abi_check::{check_abi_compatibility, AbiCompatibility},
    error::ValidationError,
    types::{
        abi::{InkAbi, SolidityAbi},
        contracts::{
            ContractDetail, ContractStatus, ContractSummary, ContractType, Network, VariantDetail,
        },
    },
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEPLOYED_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Deployment form as submitted. Blank strings count as absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeploymentRequest {
    pub contract_name: String,
    pub chain: Option<String>,
    pub solidity_address: Option<String>,
    pub solidity_abi: Option<String>,
    pub ink_address: Option<String>,
    pub ink_abi: Option<String>,
    pub description: Option<String>,
}

/// A submission that passed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedDeployment {
    pub contract_name: String,
    pub network: Network,
    pub contract_type: ContractType,
    pub solidity_address: Option<String>,
    pub solidity_abi: Option<String>,
    pub ink_address: Option<String>,
    pub ink_abi: Option<String>,
    pub description: Option<String>,
}

/// Outcome of an accepted submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DeploymentReceipt {
    pub contract_id: String,
    pub contract_type: ContractType,
    pub abi_compatibility: AbiCompatibility,
    /// Set when both ABIs parsed but share no function. Never blocks the submission.
    pub abi_mismatch_warning: Option<String>,
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

impl DeploymentRequest {
    pub fn validate(&self) -> Result<ValidatedDeployment, ValidationError> {
        let contract_name = self.contract_name.trim();
        if contract_name.is_empty() {
            return Err(ValidationError::MissingContractName);
        }
        let chain = non_blank(&self.chain).ok_or(ValidationError::MissingChain)?;
        let network = Network::from_chain_name(&chain)
            .ok_or_else(|| ValidationError::UnknownChain(chain.clone()))?;

        let solidity_address = non_blank(&self.solidity_address);
        let ink_address = non_blank(&self.ink_address);
        let contract_type =
            ContractType::from_variants(solidity_address.is_some(), ink_address.is_some())
                .ok_or(ValidationError::MissingAddress)?;

        Ok(ValidatedDeployment {
            contract_name: contract_name.to_string(),
            network,
            contract_type,
            solidity_address,
            solidity_abi: non_blank(&self.solidity_abi),
            ink_address,
            ink_abi: non_blank(&self.ink_abi),
            description: non_blank(&self.description),
        })
    }
}

impl ValidatedDeployment {
    pub fn abi_compatibility(&self) -> AbiCompatibility {
        check_abi_compatibility(self.solidity_abi.as_deref(), self.ink_abi.as_deref())
    }

    /// Contract record for the repository. Every present variant is stamped
    /// with `deployed_at`; the id is assigned on insert.
    pub fn into_detail(self, deployed_at: DateTime<Utc>) -> ContractDetail {
        let deployed_time = deployed_at.format(DEPLOYED_TIME_FORMAT).to_string();
        let has_solidity = self.solidity_address.is_some();
        let has_ink = self.ink_address.is_some();

        let summary = ContractSummary {
            id: String::new(),
            name: self.contract_name,
            solidity_address: self.solidity_address,
            solidity_deployed_time: has_solidity.then(|| deployed_time.clone()),
            ink_address: self.ink_address,
            ink_deployed_time: has_ink.then_some(deployed_time),
            network: self.network,
            contract_type: self.contract_type,
        };
        let solidity_abi = self
            .solidity_abi
            .as_deref()
            .and_then(|abi| SolidityAbi::from_json(abi).ok());
        let ink_abi = self
            .ink_abi
            .as_deref()
            .and_then(|abi| InkAbi::from_json(abi).ok());

        ContractDetail {
            summary,
            status: ContractStatus::Success,
            description: self.description,
            solidity: has_solidity.then(|| VariantDetail {
                abi: solidity_abi,
                ..Default::default()
            }),
            ink: has_ink.then(|| VariantDetail {
                abi: ink_abi,
                ..Default::default()
            }),
        }
    }
}

/// Performs the on-chain part of a submission before it is registered.
#[async_trait]
pub trait ContractDeployer: Send + Sync {
    async fn deploy(&self, deployment: &ValidatedDeployment) -> anyhow::Result<()>;
}

/// Accepts every submission after a fixed delay.
#[derive(Clone, Debug, Default)]
pub struct SimulatedDeployer {
    delay: Duration,
}

impl SimulatedDeployer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl ContractDeployer for SimulatedDeployer {
    async fn deploy(&self, deployment: &ValidatedDeployment) -> anyhow::Result<()> {
        tokio::time::sleep(self.delay).await;
        tracing::debug!(name = %deployment.contract_name, network = %deployment.network, "simulated deployment finished");
        Ok(())
    }
}
