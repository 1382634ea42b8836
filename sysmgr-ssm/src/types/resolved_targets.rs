// Code generated by sysmgr-codegen from ssm.json. DO NOT EDIT.

use serde::{Deserialize, Serialize};
use sysmgr_model::Entity;

/// Targets an Automation execution resolved to.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
#[serde(rename_all = "PascalCase")]
pub struct ResolvedTargets {
    #[serde(skip_serializing_if = "Option::is_none")]
    parameter_values: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    truncated: Option<bool>,
}
