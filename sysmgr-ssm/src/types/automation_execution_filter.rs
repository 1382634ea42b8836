// Code generated by sysmgr-codegen from ssm.json. DO NOT EDIT.

use serde::{Deserialize, Serialize};
use sysmgr_model::Entity;

use crate::types::AutomationExecutionFilterKey;

/// Narrows the results of DescribeAutomationExecutions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
#[serde(rename_all = "PascalCase")]
pub struct AutomationExecutionFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(required)]
    key: Option<AutomationExecutionFilterKey>,
    /// Values to match; their format depends on the key.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(required, min_len = 1, max_len = 10)]
    values: Option<Vec<String>>,
}
