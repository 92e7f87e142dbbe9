use crate::{
    analytics::ContractAnalytics,
    benchmark::{BenchmarkDispatcher, BenchmarkError, BenchmarkRunner, Notice, NoticeBoard},
    deployment::{ContractDeployer, DeploymentReceipt, DeploymentRequest},
    directory::{ContractListView, ContractQuery},
    error::ServiceError,
    repository::ContractRepository,
    types::{
        benchmarks::{BenchmarkKey, BenchmarkRequest, FunctionBenchmark},
        contracts::ContractDetail,
    },
};
use chrono::Utc;
use serde::Serialize;
use std::{sync::Arc, time::Duration};
use tokio_util::sync::CancellationToken;
use tracing::instrument;

/// Contract detail page: the stored record plus derived fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContractOverview {
    #[serde(flatten)]
    pub detail: ContractDetail,
    /// Earliest deployment among the variants.
    pub deployed_time: Option<String>,
    pub analytics: ContractAnalytics,
}

const ABI_MISMATCH_WARNING: &str =
    "solidity and ink! ABIs have no function names in common, check that both describe the same contract";

pub struct DashboardService {
    repository: Arc<dyn ContractRepository>,
    dispatcher: BenchmarkDispatcher,
    deployer: Arc<dyn ContractDeployer>,
    notices: NoticeBoard,
}

impl DashboardService {
    pub fn new(
        repository: Arc<dyn ContractRepository>,
        runner: Arc<dyn BenchmarkRunner>,
        deployer: Arc<dyn ContractDeployer>,
        run_timeout: Duration,
    ) -> Self {
        Self {
            repository,
            dispatcher: BenchmarkDispatcher::new(runner, run_timeout),
            deployer,
            notices: NoticeBoard::new(),
        }
    }

    #[instrument(skip_all, level = "debug", fields(query = ?query))]
    pub async fn list_contracts(
        &self,
        query: &ContractQuery,
    ) -> Result<ContractListView, ServiceError> {
        let contracts = self.repository.list_contracts().await?;
        Ok(query.run(&contracts))
    }

    #[instrument(skip(self), level = "debug")]
    pub async fn get_contract_detail(&self, id: &str) -> Result<ContractOverview, ServiceError> {
        let detail = self
            .repository
            .get_contract_detail(id)
            .await?
            .ok_or_else(|| ServiceError::contract_not_found(id))?;
        Ok(ContractOverview {
            deployed_time: detail.deployed_time().map(str::to_string),
            analytics: ContractAnalytics::from_detail(&detail),
            detail,
        })
    }

    /// Measures one function and stores the result in its row. A failed run
    /// leaves the row as it was and raises a notice; a run cancelled through
    /// `session` stores nothing.
    #[instrument(skip(self, key, input, session), level = "info", fields(key = %key))]
    pub async fn run_benchmark(
        &self,
        contract_id: &str,
        key: BenchmarkKey,
        input: String,
        session: &CancellationToken,
    ) -> Result<FunctionBenchmark, ServiceError> {
        if key.function.trim().is_empty() {
            return Err(ServiceError::invalid_argument("function name must not be empty"));
        }
        let detail = self
            .repository
            .get_contract_detail(contract_id)
            .await?
            .ok_or_else(|| ServiceError::contract_not_found(contract_id))?;
        let rows = detail.functions(key.variant).ok_or_else(|| {
            ServiceError::not_found(format!("{} variant of contract {contract_id}", key.variant))
        })?;
        if !detail.knows_function(key.variant, &key.function) {
            return Err(ServiceError::not_found(format!(
                "function {key} of contract {contract_id}"
            )));
        }
        let baseline = rows.iter().find(|row| row.name == key.function).cloned();

        let request = BenchmarkRequest {
            contract_id: contract_id.to_string(),
            key: key.clone(),
            input,
            baseline,
        };
        match self.dispatcher.dispatch(request, session).await {
            Ok(measurement) => {
                self.repository
                    .record_benchmark(contract_id, &key, measurement)
                    .await
            }
            Err(BenchmarkError::Cancelled { .. }) => Err(ServiceError::Cancelled),
            Err(err) => {
                if err.is_run_failure() {
                    self.notices.raise(contract_id, key, err.to_string());
                }
                Err(err.into())
            }
        }
    }

    /// Cancels an in-flight run. Returns whether one was running.
    pub fn cancel_benchmark(&self, contract_id: &str, key: &BenchmarkKey) -> bool {
        self.dispatcher.cancel(contract_id, key)
    }

    #[instrument(skip_all, level = "info", fields(name = %request.contract_name))]
    pub async fn submit_deployment(
        &self,
        request: DeploymentRequest,
        session: &CancellationToken,
    ) -> Result<DeploymentReceipt, ServiceError> {
        let deployment = request.validate()?;
        let abi_compatibility = deployment.abi_compatibility();
        let abi_mismatch_warning = abi_compatibility.is_mismatch().then(|| {
            tracing::warn!("{ABI_MISMATCH_WARNING}");
            ABI_MISMATCH_WARNING.to_string()
        });

        tokio::select! {
            biased;
            _ = session.cancelled() => return Err(ServiceError::Cancelled),
            result = self.deployer.deploy(&deployment) => {
                result.map_err(|err| ServiceError::deployment_failed(format!("{err:#}")))?
            }
        }
        if session.is_cancelled() {
            return Err(ServiceError::Cancelled);
        }

        let detail = self
            .repository
            .insert_contract(deployment.into_detail(Utc::now()))
            .await?;
        tracing::info!(contract_id = %detail.id(), "deployment registered");
        Ok(DeploymentReceipt {
            contract_id: detail.id().to_string(),
            contract_type: detail.summary.contract_type,
            abi_compatibility,
            abi_mismatch_warning,
        })
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.list()
    }

    pub fn dismiss_notice(&self, id: u64) -> Result<(), ServiceError> {
        if self.notices.dismiss(id) {
            Ok(())
        } else {
            Err(ServiceError::not_found(format!("notice {id}")))
        }
    }
}
