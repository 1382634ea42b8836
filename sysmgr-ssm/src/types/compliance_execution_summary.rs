// Code generated by sysmgr-codegen from ssm.json. DO NOT EDIT.

use serde::{Deserialize, Serialize};
use sysmgr_model::{Entity, Timestamp};

/// When and how a compliance scan ran.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
#[serde(rename_all = "PascalCase")]
pub struct ComplianceExecutionSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(required)]
    execution_time: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 0, max_len = 100)]
    execution_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 0, max_len = 50)]
    execution_type: Option<String>,
}
