// Code generated by sysmgr-codegen from ssm.json. DO NOT EDIT.

use serde::{Deserialize, Serialize};
use sysmgr_model::Entity;

/// A key-value pair attached to a resource.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(
        required,
        min_len = 1,
        max_len = 128,
        pattern = "^([\\p{L}\\p{Z}\\p{N}_.:/=+\\-@]*)$"
    )]
    key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(
        required,
        min_len = 0,
        max_len = 256,
        pattern = "^([\\p{L}\\p{Z}\\p{N}_.:/=+\\-@]*)$"
    )]
    value: Option<String>,
}
