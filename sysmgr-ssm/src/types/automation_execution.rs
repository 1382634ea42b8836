// Code generated by sysmgr-codegen from ssm.json. DO NOT EDIT.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sysmgr_model::{Entity, Timestamp};

use crate::types::{AutomationExecutionStatus, ExecutionMode, ResolvedTargets, Target};

/// Detailed information about the current state of an Automation execution.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
#[serde(rename_all = "PascalCase")]
pub struct AutomationExecution {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 36, max_len = 36)]
    automation_execution_id: Option<String>,
    /// Name of the Automation document used during the execution.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(pattern = "^[a-zA-Z0-9_\\-.]{3,128}$")]
    document_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(pattern = "([$]LATEST|[$]DEFAULT|^[1-9][0-9]*$)")]
    document_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    execution_start_time: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    execution_end_time: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    automation_execution_status: Option<AutomationExecutionStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    step_executions_truncated: Option<bool>,
    /// Key-value map of execution parameters supplied when the execution started.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 1, max_len = 200)]
    parameters: Option<BTreeMap<String, Vec<String>>>,
    /// Values produced by the execution.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 1, max_len = 200)]
    outputs: Option<BTreeMap<String, Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    failure_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mode: Option<ExecutionMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 36, max_len = 36)]
    parent_automation_execution_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    executed_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    current_step_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(pattern = "^aws:[a-zA-Z]{3,25}$")]
    current_action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 1, max_len = 50)]
    target_parameter_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 0, max_len = 5)]
    targets: Option<Vec<Target>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 0, max_len = 300)]
    target_maps: Option<Vec<BTreeMap<String, Vec<String>>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    resolved_targets: Option<ResolvedTargets>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(
        min_len = 1,
        max_len = 7,
        pattern = "^([1-9][0-9]*|[1-9][0-9]%|[1-9]%|100%)$"
    )]
    max_concurrency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(
        min_len = 1,
        max_len = 7,
        pattern = "^([1-9][0-9]*|[0]|[1-9][0-9]%|[0-9]%|100%)$"
    )]
    max_errors: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<String>,
}
