//! Contract-interface descriptors handed to the ABI encoder.
//!
//! Only read-only (`constant`) functions are described; encoding and
//! decoding live with the caller.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AbiItemType {
    Function,
}

/// Marker for the `tuple[]` parameter type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TupleArray {
    #[serde(rename = "tuple[]")]
    TupleArray,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiIo {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiTupleIo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub ty: TupleArray,
    pub components: Vec<AbiIo>,
}

/// One function input or output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AbiParam {
    TupleArray(AbiTupleIo),
    Io(AbiIo),
}

impl AbiParam {
    pub fn io(name: impl Into<String>, ty: impl Into<String>) -> Self {
        AbiParam::Io(AbiIo {
            name: name.into(),
            ty: ty.into(),
        })
    }

    pub fn tuple_array(components: Vec<AbiIo>) -> Self {
        AbiParam::TupleArray(AbiTupleIo {
            name: None,
            ty: TupleArray::TupleArray,
            components,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiFunction {
    /// Always `true`: only view functions are described.
    pub constant: bool,
    pub inputs: Vec<AbiParam>,
    pub name: String,
    pub outputs: Vec<AbiParam>,
    #[serde(rename = "type")]
    pub item_type: AbiItemType,
}

impl AbiFunction {
    pub fn view(name: impl Into<String>, inputs: Vec<AbiParam>, outputs: Vec<AbiParam>) -> Self {
        Self {
            constant: true,
            inputs,
            name: name.into(),
            outputs,
            item_type: AbiItemType::Function,
        }
    }
}
