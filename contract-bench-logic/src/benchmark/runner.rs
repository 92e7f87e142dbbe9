use crate::types::benchmarks::{BenchmarkRequest, Measurement};
use async_trait::async_trait;
use chrono::Utc;
use std::time::{Duration, Instant};

/// Executes a single benchmark of a contract function.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BenchmarkRunner: Send + Sync {
    async fn run(&self, request: &BenchmarkRequest) -> anyhow::Result<Measurement>;
}

/// Stand-in runner that waits for a fixed delay and reports the elapsed time.
/// Gas is carried over from the row being re-measured since nothing is
/// actually executed on chain.
#[derive(Clone, Debug, Default)]
pub struct SimulatedRunner {
    delay: Duration,
}

impl SimulatedRunner {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl BenchmarkRunner for SimulatedRunner {
    async fn run(&self, request: &BenchmarkRequest) -> anyhow::Result<Measurement> {
        let started = Instant::now();
        tokio::time::sleep(self.delay).await;
        let gas_used = request
            .baseline
            .as_ref()
            .map(|row| row.gas_used.clone())
            .unwrap_or_else(|| "N/A".to_string());
        tracing::debug!(key = %request.key, input = %request.input, "simulated benchmark finished");
        Ok(Measurement {
            gas_used,
            runtime: format!("{}ms", started.elapsed().as_millis()),
            last_tested: Utc::now().format("%Y-%m-%d").to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        benchmarks::{BenchmarkKey, FunctionBenchmark},
        contracts::Variant,
    };
    use pretty_assertions::assert_eq;

    fn request(baseline: Option<FunctionBenchmark>) -> BenchmarkRequest {
        BenchmarkRequest {
            contract_id: "1".into(),
            key: BenchmarkKey::new(Variant::Solidity, "swap"),
            input: "100".into(),
            baseline,
        }
    }

    #[tokio::test]
    async fn simulated_run_keeps_baseline_gas() {
        let runner = SimulatedRunner::new(Duration::from_millis(5));
        let baseline = FunctionBenchmark::new("swap", "45,000", "12ms", "2024-01-15");
        let measurement = runner
            .run(&request(Some(baseline)))
            .await
            .expect("simulated run never fails");

        assert_eq!(measurement.gas_used, "45,000");
        assert!(measurement.runtime.ends_with("ms"));
        let runtime: u128 = measurement
            .runtime
            .trim_end_matches("ms")
            .parse()
            .expect("runtime is a number of milliseconds");
        assert!(runtime >= 5);
        chrono::NaiveDate::parse_from_str(&measurement.last_tested, "%Y-%m-%d")
            .expect("last tested is a calendar date");
    }

    #[tokio::test]
    async fn simulated_run_without_baseline() {
        let measurement = SimulatedRunner::default()
            .run(&request(None))
            .await
            .expect("simulated run never fails");
        assert_eq!(measurement.gas_used, "N/A");
    }
}
