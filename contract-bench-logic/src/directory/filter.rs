use crate::types::contracts::{ContractSummary, ContractType, Network};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};

/// Sentinel filter value that admits every record.
pub const ALL: &str = "all";

/// A filter over a closed set of values: either everything or exactly one value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Selection<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Selection<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(expected) => expected == value,
        }
    }
}

impl<T: FromStr> FromStr for Selection<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL {
            Ok(Selection::All)
        } else {
            s.parse().map(Selection::Only)
        }
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str(ALL),
            Selection::Only(value) => value.fmt(f),
        }
    }
}

impl<T: fmt::Display> Serialize for Selection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, T> Deserialize<'de> for Selection<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// User controlled predicates of the contract directory. All of them must hold
/// for a contract to stay in the view.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractFilter {
    pub search: String,
    pub network: Selection<Network>,
    pub contract_type: Selection<ContractType>,
}

impl ContractFilter {
    pub fn matches(&self, contract: &ContractSummary) -> bool {
        self.matches_search(contract)
            && self.network.admits(&contract.network)
            && self.contract_type.admits(&contract.contract_type)
    }

    /// Case-insensitive substring match against the name and both addresses.
    /// Absent addresses never match; an empty term matches everything.
    pub fn matches_search(&self, contract: &ContractSummary) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let term = self.search.to_lowercase();
        [
            Some(contract.name.as_str()),
            contract.solidity_address.as_deref(),
            contract.ink_address.as_deref(),
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&term))
    }

    pub fn apply(&self, contracts: &[ContractSummary]) -> Vec<ContractSummary> {
        contracts
            .iter()
            .filter(|contract| self.matches(contract))
            .cloned()
            .collect()
    }
}
