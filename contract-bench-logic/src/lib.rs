pub mod abi_check;
pub mod analytics;
pub mod benchmark;
pub mod deployment;
pub mod directory;
pub mod error;
pub mod naming;
pub mod repository;
mod service;
mod types;

pub use error::{ServiceError, ValidationError};
pub use service::{ContractOverview, DashboardService};
pub use tokio_util::sync::CancellationToken;
pub use types::{
    abi::{AbiParam, InkAbi, InkArg, InkMessage, InkSpec, InkTypeRef, SolidityAbi, SolidityAbiEntry},
    benchmarks::{BenchmarkKey, BenchmarkRequest, FunctionBenchmark, Measurement},
    contracts::{
        ContractDetail, ContractStatus, ContractSummary, ContractType, Network, Variant,
        VariantDetail,
    },
};
