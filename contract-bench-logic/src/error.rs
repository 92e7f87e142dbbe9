use crate::{
    benchmark::BenchmarkError,
    types::contracts::{ContractType, Variant},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Benchmark(#[from] BenchmarkError),
    #[error("deployment failed: {0}")]
    DeploymentFailed(String),
    #[error("operation cancelled")]
    Cancelled,
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ServiceError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn contract_not_found(id: &str) -> Self {
        Self::not_found(format!("contract {id}"))
    }

    pub fn deployment_failed(message: impl Into<String>) -> Self {
        Self::DeploymentFailed(message.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::NotFound(_))
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            ServiceError::Validation(_) | ServiceError::InvalidArgument(_)
        )
    }
}

/// Rejections of user supplied contract data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("contract name must not be empty")]
    MissingContractName,
    #[error("deployment chain must be selected")]
    MissingChain,
    #[error("unknown chain: {0}")]
    UnknownChain(String),
    #[error("at least one of solidity or ink! address must be provided")]
    MissingAddress,
    #[error("contract type '{declared}' does not match provided addresses (expected '{derived}')")]
    InconsistentContractType {
        declared: ContractType,
        derived: ContractType,
    },
    #[error("{variant} deployment time is set but {variant} address is missing")]
    DanglingDeployedTime { variant: Variant },
}
