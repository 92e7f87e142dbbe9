use super::{fixtures, ContractRepository};
use crate::{
    error::ServiceError,
    types::{
        benchmarks::{BenchmarkKey, FunctionBenchmark, Measurement},
        contracts::{ContractDetail, ContractSummary},
    },
};
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-local repository. Nothing survives a restart.
#[derive(Debug)]
pub struct InMemoryRepository {
    contracts: parking_lot::RwLock<Vec<ContractDetail>>,
    next_id: AtomicU64,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::with_contracts(vec![])
    }
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository holding the given records as they are. New contracts get ids
    /// above the largest numeric id present.
    pub fn with_contracts(contracts: Vec<ContractDetail>) -> Self {
        let last_id = contracts
            .iter()
            .filter_map(|contract| contract.id().parse::<u64>().ok())
            .max()
            .unwrap_or_default();
        Self {
            contracts: parking_lot::RwLock::new(contracts),
            next_id: AtomicU64::new(last_id + 1),
        }
    }

    pub fn seeded() -> Self {
        Self::with_contracts(fixtures::sample_details())
    }
}

#[async_trait]
impl ContractRepository for InMemoryRepository {
    async fn list_contracts(&self) -> Result<Vec<ContractSummary>, ServiceError> {
        let contracts = self.contracts.read();
        Ok(contracts
            .iter()
            .map(|contract| contract.summary.clone())
            .collect())
    }

    async fn get_contract_detail(&self, id: &str) -> Result<Option<ContractDetail>, ServiceError> {
        let contracts = self.contracts.read();
        Ok(contracts.iter().find(|contract| contract.id() == id).cloned())
    }

    async fn insert_contract(
        &self,
        mut detail: ContractDetail,
    ) -> Result<ContractDetail, ServiceError> {
        detail.summary.validate()?;
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        detail.summary.id = id.to_string();
        self.contracts.write().push(detail.clone());
        tracing::info!(contract_id = id, name = %detail.summary.name, "contract registered");
        Ok(detail)
    }

    async fn record_benchmark(
        &self,
        contract_id: &str,
        key: &BenchmarkKey,
        measurement: Measurement,
    ) -> Result<FunctionBenchmark, ServiceError> {
        let mut contracts = self.contracts.write();
        let contract = contracts
            .iter_mut()
            .find(|contract| contract.id() == contract_id)
            .ok_or_else(|| ServiceError::contract_not_found(contract_id))?;
        let rows = contract.functions_mut(key.variant).ok_or_else(|| {
            ServiceError::not_found(format!(
                "{} variant of contract {contract_id}",
                key.variant
            ))
        })?;

        match rows.iter_mut().find(|row| row.name == key.function) {
            Some(row) => {
                row.apply(measurement);
                Ok(row.clone())
            }
            None => {
                let row = FunctionBenchmark::from_measurement(key.function.clone(), measurement);
                rows.push(row.clone());
                Ok(row)
            }
        }
    }
}
