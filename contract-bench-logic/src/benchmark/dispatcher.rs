use super::{BenchmarkError, BenchmarkRunner};
use crate::types::benchmarks::{BenchmarkKey, BenchmarkRequest, Measurement};
use std::{collections::HashMap, sync::Arc, time::Duration};
use tokio_util::sync::CancellationToken;

type RunId = (String, BenchmarkKey);

/// Runs benchmarks through a [`BenchmarkRunner`], allowing at most one run per
/// `(contract, variant, function)` at a time. Every run gets a child token of
/// the caller's session token; a cancelled run never yields a measurement.
pub struct BenchmarkDispatcher {
    runner: Arc<dyn BenchmarkRunner>,
    run_timeout: Duration,
    in_flight: parking_lot::Mutex<HashMap<RunId, CancellationToken>>,
}

/// Frees the run slot however the run future ends, including being dropped.
struct InFlightGuard<'a> {
    in_flight: &'a parking_lot::Mutex<HashMap<RunId, CancellationToken>>,
    id: RunId,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.in_flight.lock().remove(&self.id);
    }
}

impl BenchmarkDispatcher {
    pub fn new(runner: Arc<dyn BenchmarkRunner>, run_timeout: Duration) -> Self {
        Self {
            runner,
            run_timeout,
            in_flight: parking_lot::Mutex::new(HashMap::new()),
        }
    }

    pub async fn dispatch(
        &self,
        request: BenchmarkRequest,
        session: &CancellationToken,
    ) -> Result<Measurement, BenchmarkError> {
        let key = request.key.clone();
        let (token, _guard) = self.acquire(&request.contract_id, &key, session)?;

        tracing::info!(contract_id = %request.contract_id, %key, "benchmark started");
        let outcome = tokio::select! {
            biased;
            _ = token.cancelled() => Err(BenchmarkError::Cancelled { key: key.clone() }),
            result = tokio::time::timeout(self.run_timeout, self.runner.run(&request)) => {
                match result {
                    Ok(Ok(measurement)) => Ok(measurement),
                    Ok(Err(err)) => Err(BenchmarkError::Failed {
                        key: key.clone(),
                        message: format!("{err:#}"),
                    }),
                    Err(_) => Err(BenchmarkError::TimedOut {
                        key: key.clone(),
                        timeout: self.run_timeout,
                    }),
                }
            }
        };

        if token.is_cancelled() {
            tracing::info!(contract_id = %request.contract_id, %key, "benchmark cancelled, result discarded");
            return Err(BenchmarkError::Cancelled { key });
        }
        match &outcome {
            Ok(measurement) => tracing::info!(
                contract_id = %request.contract_id,
                %key,
                gas_used = %measurement.gas_used,
                runtime = %measurement.runtime,
                "benchmark finished"
            ),
            Err(err) => tracing::warn!(contract_id = %request.contract_id, %key, "{err}"),
        }
        outcome
    }

    /// Cancels the run of `key` for the contract, if one is in flight.
    pub fn cancel(&self, contract_id: &str, key: &BenchmarkKey) -> bool {
        let in_flight = self.in_flight.lock();
        match in_flight.get(&(contract_id.to_string(), key.clone())) {
            Some(token) => {
                token.cancel();
                true
            }
            None => false,
        }
    }

    pub fn is_running(&self, contract_id: &str, key: &BenchmarkKey) -> bool {
        self.in_flight
            .lock()
            .contains_key(&(contract_id.to_string(), key.clone()))
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.lock().len()
    }

    fn acquire(
        &self,
        contract_id: &str,
        key: &BenchmarkKey,
        session: &CancellationToken,
    ) -> Result<(CancellationToken, InFlightGuard<'_>), BenchmarkError> {
        let id = (contract_id.to_string(), key.clone());
        let mut in_flight = self.in_flight.lock();
        if in_flight.contains_key(&id) {
            return Err(BenchmarkError::AlreadyRunning { key: key.clone() });
        }
        let token = session.child_token();
        in_flight.insert(id.clone(), token.clone());
        Ok((
            token,
            InFlightGuard {
                in_flight: &self.in_flight,
                id,
            },
        ))
    }
}
