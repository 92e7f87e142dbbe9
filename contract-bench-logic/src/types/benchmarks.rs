use super::contracts::Variant;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Recorded gas and runtime measurement of a single contract function.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionBenchmark {
    pub name: String,
    pub gas_used: String,
    pub runtime: String,
    pub last_tested: String,
}

impl FunctionBenchmark {
    pub fn new(
        name: impl Into<String>,
        gas_used: impl Into<String>,
        runtime: impl Into<String>,
        last_tested: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            gas_used: gas_used.into(),
            runtime: runtime.into(),
            last_tested: last_tested.into(),
        }
    }

    pub fn from_measurement(name: impl Into<String>, measurement: Measurement) -> Self {
        Self {
            name: name.into(),
            gas_used: measurement.gas_used,
            runtime: measurement.runtime,
            last_tested: measurement.last_tested,
        }
    }

    pub fn apply(&mut self, measurement: Measurement) {
        self.gas_used = measurement.gas_used;
        self.runtime = measurement.runtime;
        self.last_tested = measurement.last_tested;
    }
}

/// Identifies the benchmark row of a function within one contract.
/// Solidity and ink! functions with the same name get distinct keys.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BenchmarkKey {
    pub variant: Variant,
    pub function: String,
}

impl BenchmarkKey {
    pub fn new(variant: Variant, function: impl Into<String>) -> Self {
        Self {
            variant,
            function: function.into(),
        }
    }
}

impl fmt::Display for BenchmarkKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.variant, self.function)
    }
}

/// A single "run" action: which function to measure and the free-text
/// parameter staged for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchmarkRequest {
    pub contract_id: String,
    pub key: BenchmarkKey,
    pub input: String,
    /// Row currently shown for the function, if any.
    pub baseline: Option<FunctionBenchmark>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measurement {
    pub gas_used: String,
    pub runtime: String,
    pub last_tested: String,
}
