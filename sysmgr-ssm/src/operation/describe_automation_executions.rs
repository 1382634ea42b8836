// Code generated by sysmgr-codegen from ssm.json. DO NOT EDIT.

use serde::{Deserialize, Serialize};
use sysmgr_model::{Entity, Operation};

use crate::types::{AutomationExecutionFilter, AutomationExecutionMetadata};

/// Lists active and finished Automation executions.
#[derive(Debug, Clone, Copy, Default)]
pub struct DescribeAutomationExecutions;

impl Operation for DescribeAutomationExecutions {
    const NAME: &'static str = "DescribeAutomationExecutions";
    type Input = DescribeAutomationExecutionsRequest;
    type Output = DescribeAutomationExecutionsResult;
    type Error = DescribeAutomationExecutionsError;
}

sysmgr_model::wire_enum! {
    /// Error codes DescribeAutomationExecutions is documented to return.
    pub enum DescribeAutomationExecutionsError {
        InvalidFilterKey = "InvalidFilterKey",
        InvalidFilterValue = "InvalidFilterValue",
        /// The pagination token is not valid.
        InvalidNextToken = "InvalidNextToken",
        /// The service failed while handling the request.
        InternalServerError = "InternalServerError",
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeAutomationExecutionsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 1, max_len = 10)]
    filters: Option<Vec<AutomationExecutionFilter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min = 1, max = 50)]
    max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeAutomationExecutionsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    automation_execution_metadata_list: Option<Vec<AutomationExecutionMetadata>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
}
