use super::{
    abi::{InkAbi, SolidityAbi},
    benchmarks::FunctionBenchmark,
};
use crate::{directory::parse_timestamp, error::ValidationError};
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Networks a contract can be registered on. [`FromStr`](std::str::FromStr)
/// accepts only the canonical names; the deploy form goes through
/// [`Network::from_chain_name`].
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    SerializeDisplay,
    DeserializeFromStr,
)]
pub enum Network {
    Passethub,
    AssetHub,
    Moonbeam,
    Astar,
    Acala,
    Parallel,
    Centrifuge,
}

impl Network {
    /// Chain selected on the deploy form, matched ignoring ASCII case.
    pub fn from_chain_name(name: &str) -> Option<Self> {
        Self::iter().find(|network| network.to_string().eq_ignore_ascii_case(name))
    }
}

/// One of the two implementations of the same logical contract.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Variant {
    Solidity,
    Ink,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ContractType {
    Solidity,
    Ink,
    Both,
}

impl ContractType {
    /// Contract type implied by which variants have an address.
    pub fn from_variants(has_solidity: bool, has_ink: bool) -> Option<Self> {
        match (has_solidity, has_ink) {
            (true, true) => Some(Self::Both),
            (true, false) => Some(Self::Solidity),
            (false, true) => Some(Self::Ink),
            (false, false) => None,
        }
    }

    pub fn includes(&self, variant: Variant) -> bool {
        matches!(
            (self, variant),
            (Self::Both, _) | (Self::Solidity, Variant::Solidity) | (Self::Ink, Variant::Ink)
        )
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ContractStatus {
    #[default]
    Success,
}

/// Row of the contract directory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractSummary {
    pub id: String,
    pub name: String,
    pub solidity_address: Option<String>,
    pub solidity_deployed_time: Option<String>,
    pub ink_address: Option<String>,
    pub ink_deployed_time: Option<String>,
    pub network: Network,
    pub contract_type: ContractType,
}

impl ContractSummary {
    pub fn address(&self, variant: Variant) -> Option<&str> {
        match variant {
            Variant::Solidity => self.solidity_address.as_deref(),
            Variant::Ink => self.ink_address.as_deref(),
        }
    }

    pub fn deployed_time(&self, variant: Variant) -> Option<&str> {
        match variant {
            Variant::Solidity => self.solidity_deployed_time.as_deref(),
            Variant::Ink => self.ink_deployed_time.as_deref(),
        }
    }

    /// Checks that `contract_type` agrees with the populated address fields
    /// and that no deployment time is recorded for an absent variant.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let derived = ContractType::from_variants(
            self.solidity_address.is_some(),
            self.ink_address.is_some(),
        )
        .ok_or(ValidationError::MissingAddress)?;
        if derived != self.contract_type {
            return Err(ValidationError::InconsistentContractType {
                declared: self.contract_type,
                derived,
            });
        }
        for variant in [Variant::Solidity, Variant::Ink] {
            if self.address(variant).is_none() && self.deployed_time(variant).is_some() {
                return Err(ValidationError::DanglingDeployedTime { variant });
            }
        }
        Ok(())
    }
}

/// Build and benchmark data of one deployed variant.
/// Fields unknown for a freshly registered contract are `None`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantDetail<Abi> {
    pub gas_consumption: Option<String>,
    pub bytecode: Option<String>,
    pub bytecode_size: Option<String>,
    pub abi: Option<Abi>,
    #[serde(default)]
    pub functions: Vec<FunctionBenchmark>,
}

impl<Abi> Default for VariantDetail<Abi> {
    fn default() -> Self {
        Self {
            gas_consumption: None,
            bytecode: None,
            bytecode_size: None,
            abi: None,
            functions: vec![],
        }
    }
}

impl<Abi> VariantDetail<Abi> {
    pub fn function(&self, name: &str) -> Option<&FunctionBenchmark> {
        self.functions.iter().find(|function| function.name == name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractDetail {
    #[serde(flatten)]
    pub summary: ContractSummary,
    #[serde(default)]
    pub status: ContractStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub solidity: Option<VariantDetail<SolidityAbi>>,
    pub ink: Option<VariantDetail<InkAbi>>,
}

impl ContractDetail {
    /// Detail without build or benchmark data. Each deployed variant gets an
    /// empty record.
    pub fn from_summary(summary: ContractSummary) -> Self {
        let solidity = summary.solidity_address.is_some().then(VariantDetail::default);
        let ink = summary.ink_address.is_some().then(VariantDetail::default);
        Self {
            summary,
            status: ContractStatus::default(),
            description: None,
            solidity,
            ink,
        }
    }

    pub fn id(&self) -> &str {
        &self.summary.id
    }

    /// Earliest deployment time among the deployed variants.
    pub fn deployed_time(&self) -> Option<&str> {
        [Variant::Solidity, Variant::Ink]
            .into_iter()
            .filter_map(|variant| self.summary.deployed_time(variant))
            .min_by_key(|time| parse_timestamp(Some(*time)))
    }

    pub fn functions(&self, variant: Variant) -> Option<&[FunctionBenchmark]> {
        match variant {
            Variant::Solidity => self.solidity.as_ref().map(|d| d.functions.as_slice()),
            Variant::Ink => self.ink.as_ref().map(|d| d.functions.as_slice()),
        }
    }

    pub fn functions_mut(&mut self, variant: Variant) -> Option<&mut Vec<FunctionBenchmark>> {
        match variant {
            Variant::Solidity => self.solidity.as_mut().map(|d| &mut d.functions),
            Variant::Ink => self.ink.as_mut().map(|d| &mut d.functions),
        }
    }

    /// Names the variant's ABI declares as callable.
    pub fn declared_functions(&self, variant: Variant) -> Vec<&str> {
        match variant {
            Variant::Solidity => self
                .solidity
                .as_ref()
                .and_then(|d| d.abi.as_ref())
                .map(|abi| abi.function_names().collect())
                .unwrap_or_default(),
            Variant::Ink => self
                .ink
                .as_ref()
                .and_then(|d| d.abi.as_ref())
                .map(|abi| abi.message_names().collect())
                .unwrap_or_default(),
        }
    }

    /// Whether the variant has a benchmark row or an ABI entry for `function`.
    pub fn knows_function(&self, variant: Variant, function: &str) -> bool {
        let has_row = self
            .functions(variant)
            .is_some_and(|rows| rows.iter().any(|row| row.name == function));
        has_row || self.declared_functions(variant).contains(&function)
    }

    pub fn bytecode_size(&self, variant: Variant) -> Option<&str> {
        match variant {
            Variant::Solidity => self.solidity.as_ref()?.bytecode_size.as_deref(),
            Variant::Ink => self.ink.as_ref()?.bytecode_size.as_deref(),
        }
    }
}
