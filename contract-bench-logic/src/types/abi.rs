//! ABI descriptions of the two contract variants.
//!
//! Solidity ABIs are a JSON array of entries; only entries explicitly tagged
//! `"type": "function"` count as callable functions. ink! metadata is a JSON
//! object whose callable messages live under `spec.messages`. Newer ink!
//! metadata names messages with `label` instead of `name`; both are accepted.
//!
//! Only the function and message names are required to be meaningful, so
//! parameter details missing from hand-written ABIs default to empty values.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SolidityAbi(pub Vec<SolidityAbiEntry>);

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolidityAbiEntry {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub inputs: Vec<AbiParam>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<AbiParam>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiParam {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

impl SolidityAbi {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn function_names(&self) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .filter(|entry| entry.kind.as_deref() == Some("function"))
            .filter_map(|entry| entry.name.as_deref())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InkAbi {
    #[serde(default)]
    pub spec: InkSpec,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InkSpec {
    #[serde(default)]
    pub constructors: Vec<InkMessage>,
    #[serde(default)]
    pub messages: Vec<InkMessage>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InkMessage {
    #[serde(alias = "label")]
    pub name: String,
    #[serde(default)]
    pub args: Vec<InkArg>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<InkTypeRef>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InkArg {
    #[serde(alias = "label", default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub type_ref: InkTypeRef,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InkTypeRef {
    #[serde(default)]
    pub display_name: Vec<String>,
    #[serde(rename = "type", default)]
    pub type_id: u32,
}

impl InkAbi {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn message_names(&self) -> impl Iterator<Item = &str> {
        self.spec.messages.iter().map(|message| message.name.as_str())
    }
}
