//! Per-function benchmark runs: staged inputs, the runner abstraction and a
//! dispatcher that de-duplicates and cancels in-flight runs.

mod dispatcher;
mod inputs;
mod notices;
mod runner;

pub use dispatcher::BenchmarkDispatcher;
pub use inputs::{BenchmarkBinding, BenchmarkInputs};
pub use notices::{Notice, NoticeBoard};
pub use runner::{BenchmarkRunner, SimulatedRunner};

#[cfg(test)]
pub use runner::MockBenchmarkRunner;

use crate::types::benchmarks::BenchmarkKey;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BenchmarkError {
    #[error("benchmark {key} is already running")]
    AlreadyRunning { key: BenchmarkKey },
    #[error("benchmark {key} was cancelled")]
    Cancelled { key: BenchmarkKey },
    #[error("benchmark {key} timed out after {timeout:?}")]
    TimedOut { key: BenchmarkKey, timeout: Duration },
    #[error("benchmark {key} failed: {message}")]
    Failed { key: BenchmarkKey, message: String },
}

impl BenchmarkError {
    pub fn key(&self) -> &BenchmarkKey {
        match self {
            BenchmarkError::AlreadyRunning { key }
            | BenchmarkError::Cancelled { key }
            | BenchmarkError::TimedOut { key, .. }
            | BenchmarkError::Failed { key, .. } => key,
        }
    }

    /// Failures the user is notified about. Cancellations are silent and a
    /// duplicate request leaves the running one untouched.
    pub fn is_run_failure(&self) -> bool {
        matches!(
            self,
            BenchmarkError::TimedOut { .. } | BenchmarkError::Failed { .. }
        )
    }
}
