// Code generated by sysmgr-codegen from ssm.json. DO NOT EDIT.

use serde::{Deserialize, Serialize};
use sysmgr_model::Entity;

use crate::types::CommandFilterKey;

/// Narrows the results of ListCommands.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
#[serde(rename_all = "PascalCase")]
pub struct CommandFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(required)]
    key: Option<CommandFilterKey>,
    /// Value to filter on; its format depends on the key.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(required, min_len = 1, max_len = 256)]
    value: Option<String>,
}
