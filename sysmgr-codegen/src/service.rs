//! Serde model of the JSON service description.
//!
//! The description is a small JSON document:
//!
//! ```json
//! {
//!   "metadata": { "serviceId": "SSM", "targetPrefix": "AmazonSSM", "apiVersion": "2014-11-06" },
//!   "operations": { "DeleteParameter": {
//!     "input": "DeleteParameterRequest",
//!     "output": "DeleteParameterResult",
//!     "errors": ["ParameterNotFound"]
//!   } },
//!   "shapes": {
//!     "DeleteParameterRequest": { "type": "structure", "members": [
//!       { "name": "Name", "shape": "PSParameterName", "required": true }
//!     ] },
//!     "DeleteParameterResult": { "type": "structure" },
//!     "ParameterNotFound": { "type": "structure", "exception": true },
//!     "PSParameterName": { "type": "string", "min": 1, "max": 2048 }
//!   }
//! }
//! ```
//!
//! Structure members are an array so that their declared order, which
//! drives hashing and rendering, survives parsing. A structure marked
//! `exception` names an error code; operations list the codes they document
//! under `errors`.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CodegenError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDescription {
    pub metadata: ServiceMetadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    pub operations: BTreeMap<String, OperationDef>,
    pub shapes: BTreeMap<String, Shape>,
}

impl ServiceDescription {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|err| CodegenError::io(path, err))?;
        Self::from_json(&text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceMetadata {
    /// Short identifier, e.g. `SSM`. The client type is named after it.
    pub service_id: String,
    /// Prefix of every operation target, e.g. `AmazonSSM`.
    pub target_prefix: String,
    pub api_version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_full_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationDef {
    pub input: String,
    pub output: String,
    /// Exception shapes, in the order the service documents them.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    pub shape: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

/// One entry of the shape table, tagged by `"type"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    /// An entity, or with `exception` set, an error the service answers with.
    Structure {
        #[serde(default)]
        members: Vec<Member>,
        #[serde(default, skip_serializing_if = "std::ops::Not::not")]
        exception: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        documentation: Option<String>,
    },
    /// A string, or an enumeration when `enum` lists the allowed values.
    String {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<usize>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<usize>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pattern: Option<String>,
        #[serde(default, rename = "enum", skip_serializing_if = "Option::is_none")]
        values: Option<Vec<String>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        documentation: Option<String>,
    },
    Integer {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<i64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<i64>,
    },
    Long {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<i64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<i64>,
    },
    Boolean {},
    Timestamp {},
    List {
        member: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<usize>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<usize>,
    },
    /// Keys must name a plain string shape.
    Map {
        key: String,
        value: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<usize>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<usize>,
    },
}

impl Shape {
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Structure {
                exception: true, ..
            } => "exception",
            Shape::Structure { .. } => "structure",
            Shape::String { values: Some(_), .. } => "enum",
            Shape::String { .. } => "string",
            Shape::Integer { .. } => "integer",
            Shape::Long { .. } => "long",
            Shape::Boolean {} => "boolean",
            Shape::Timestamp {} => "timestamp",
            Shape::List { .. } => "list",
            Shape::Map { .. } => "map",
        }
    }
}
