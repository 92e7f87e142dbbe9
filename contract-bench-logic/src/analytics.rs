//! Side-by-side comparison of the two variants of a contract.

use crate::{
    naming::find_counterpart,
    types::{
        benchmarks::FunctionBenchmark,
        contracts::{ContractDetail, Variant},
    },
};
use serde::Serialize;

/// A Solidity function row and the ink! row paired with it by name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FunctionComparison {
    pub name: String,
    pub solidity: FunctionBenchmark,
    pub ink: Option<FunctionBenchmark>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContractAnalytics {
    pub functions: Vec<FunctionComparison>,
    pub solidity_bytecode_size: Option<String>,
    pub ink_bytecode_size: Option<String>,
    pub solidity_last_tested: Option<String>,
    pub ink_last_tested: Option<String>,
}

impl ContractAnalytics {
    pub fn from_detail(detail: &ContractDetail) -> Self {
        let solidity = detail.functions(Variant::Solidity).unwrap_or_default();
        let ink = detail.functions(Variant::Ink).unwrap_or_default();

        let functions = solidity
            .iter()
            .map(|row| FunctionComparison {
                name: row.name.clone(),
                solidity: row.clone(),
                ink: find_counterpart(&row.name, ink).cloned(),
            })
            .collect();

        Self {
            functions,
            solidity_bytecode_size: detail.bytecode_size(Variant::Solidity).map(str::to_string),
            ink_bytecode_size: detail.bytecode_size(Variant::Ink).map(str::to_string),
            solidity_last_tested: solidity.first().map(|row| row.last_tested.clone()),
            ink_last_tested: ink.first().map(|row| row.last_tested.clone()),
        }
    }

    pub fn paired(&self) -> impl Iterator<Item = &FunctionComparison> {
        self.functions.iter().filter(|function| function.ink.is_some())
    }
}
