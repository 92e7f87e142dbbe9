pub mod fixtures;
mod in_memory;

pub use in_memory::InMemoryRepository;

use crate::{
    error::ServiceError,
    types::{
        benchmarks::{BenchmarkKey, FunctionBenchmark, Measurement},
        contracts::{ContractDetail, ContractSummary},
    },
};
use async_trait::async_trait;

/// Owner of every contract record.
#[async_trait]
pub trait ContractRepository: Send + Sync {
    /// Summaries in registration order.
    async fn list_contracts(&self) -> Result<Vec<ContractSummary>, ServiceError>;

    async fn get_contract_detail(&self, id: &str) -> Result<Option<ContractDetail>, ServiceError>;

    /// Registers the contract under a fresh id, ignoring the id it carries.
    async fn insert_contract(&self, detail: ContractDetail) -> Result<ContractDetail, ServiceError>;

    /// Replaces the row of `key.function` with the measurement, or appends a
    /// row when the function has none yet. Other rows are left untouched.
    async fn record_benchmark(
        &self,
        contract_id: &str,
        key: &BenchmarkKey,
        measurement: Measurement,
    ) -> Result<FunctionBenchmark, ServiceError>;
}
