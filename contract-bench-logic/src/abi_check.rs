//! Deploy-time compatibility check between the Solidity ABI and the ink!
//! metadata of a submitted contract.
//!
//! The check never fails a submission: malformed JSON only skips it, and a
//! missing ABI on either side makes it inapplicable.

use crate::{
    naming::common_names,
    types::abi::{InkAbi, SolidityAbi},
};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AbiCompatibility {
    /// At most one of the ABIs was supplied.
    NotApplicable,
    /// An ABI could not be parsed.
    Skipped { reason: String },
    Compatible { common_functions: Vec<String> },
    /// Both ABIs parsed but share no function names.
    Mismatch,
}

impl AbiCompatibility {
    pub fn is_mismatch(&self) -> bool {
        matches!(self, AbiCompatibility::Mismatch)
    }
}

pub fn check_abi_compatibility(
    solidity_abi: Option<&str>,
    ink_abi: Option<&str>,
) -> AbiCompatibility {
    let (Some(solidity_abi), Some(ink_abi)) = (non_blank(solidity_abi), non_blank(ink_abi)) else {
        return AbiCompatibility::NotApplicable;
    };

    let solidity = match SolidityAbi::from_json(solidity_abi) {
        Ok(abi) => abi,
        Err(err) => return skipped("solidity", err),
    };
    let ink = match InkAbi::from_json(ink_abi) {
        Ok(abi) => abi,
        Err(err) => return skipped("ink!", err),
    };

    let common_functions = common_names(solidity.function_names(), ink.message_names());
    if common_functions.is_empty() {
        AbiCompatibility::Mismatch
    } else {
        AbiCompatibility::Compatible { common_functions }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.trim().is_empty())
}

fn skipped(variant: &str, err: serde_json::Error) -> AbiCompatibility {
    tracing::warn!(variant, error = %err, "abi parsing error, skipping compatibility check");
    AbiCompatibility::Skipped {
        reason: format!("invalid {variant} abi: {err}"),
    }
}
