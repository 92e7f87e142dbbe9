//! The contract directory: filtering and ordering of contract summaries.

mod filter;
mod sort;

pub use filter::{ContractFilter, Selection, ALL};
pub use sort::{locale_compare, parse_timestamp, SortField, SortOrder, SortSpec};

use crate::types::contracts::ContractSummary;
use serde::{Deserialize, Serialize};

/// View state of the directory page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractQuery {
    #[serde(default)]
    pub filter: ContractFilter,
    #[serde(default)]
    pub sort: SortSpec,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractListView {
    pub contracts: Vec<ContractSummary>,
    /// Number of contracts before filtering.
    pub total: usize,
}

impl ContractListView {
    pub fn shown(&self) -> usize {
        self.contracts.len()
    }
}

impl ContractQuery {
    pub fn new(filter: ContractFilter, sort: SortSpec) -> Self {
        Self { filter, sort }
    }

    /// Filters and orders `contracts` without touching the input.
    pub fn run(&self, contracts: &[ContractSummary]) -> ContractListView {
        let mut filtered = self.filter.apply(contracts);
        self.sort.sort(&mut filtered);
        ContractListView {
            contracts: filtered,
            total: contracts.len(),
        }
    }
}
