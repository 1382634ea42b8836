// Code generated by sysmgr-codegen from ssm.json. DO NOT EDIT.

use serde::{Deserialize, Serialize};
use sysmgr_model::{Entity, Operation};

use crate::types::AutomationExecution;

/// Gets detailed information about an Automation execution.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetAutomationExecution;

impl Operation for GetAutomationExecution {
    const NAME: &'static str = "GetAutomationExecution";
    type Input = GetAutomationExecutionRequest;
    type Output = GetAutomationExecutionResult;
    type Error = GetAutomationExecutionError;
}

sysmgr_model::wire_enum! {
    /// Error codes GetAutomationExecution is documented to return.
    pub enum GetAutomationExecutionError {
        /// No Automation execution has the given id.
        AutomationExecutionNotFound = "AutomationExecutionNotFound",
        /// The service failed while handling the request.
        InternalServerError = "InternalServerError",
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
#[serde(rename_all = "PascalCase")]
pub struct GetAutomationExecutionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(required, min_len = 36, max_len = 36)]
    automation_execution_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
#[serde(rename_all = "PascalCase")]
pub struct GetAutomationExecutionResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    automation_execution: Option<AutomationExecution>,
}
