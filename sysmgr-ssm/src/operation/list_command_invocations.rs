// Code generated by sysmgr-codegen from ssm.json. DO NOT EDIT.

use serde::{Deserialize, Serialize};
use sysmgr_model::{Entity, Operation};

use crate::types::{CommandFilter, CommandInvocation};

/// Lists the per-instance invocations of commands.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListCommandInvocations;

impl Operation for ListCommandInvocations {
    const NAME: &'static str = "ListCommandInvocations";
    type Input = ListCommandInvocationsRequest;
    type Output = ListCommandInvocationsResult;
    type Error = ListCommandInvocationsError;
}

sysmgr_model::wire_enum! {
    /// Error codes ListCommandInvocations is documented to return.
    pub enum ListCommandInvocationsError {
        /// The service failed while handling the request.
        InternalServerError = "InternalServerError",
        InvalidCommandId = "InvalidCommandId",
        /// The instance is not valid, not running, or not registered with the service.
        InvalidInstanceId = "InvalidInstanceId",
        InvalidFilterKey = "InvalidFilterKey",
        /// The pagination token is not valid.
        InvalidNextToken = "InvalidNextToken",
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
#[serde(rename_all = "PascalCase")]
pub struct ListCommandInvocationsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 36, max_len = 36)]
    command_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(pattern = "(^i-(\\w{8}|\\w{17})$)|(^mi-\\w{17}$)")]
    instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min = 1, max = 50)]
    max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 1, max_len = 5)]
    filters: Option<Vec<CommandFilter>>,
    /// Include the plugin results of every invocation.
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
#[serde(rename_all = "PascalCase")]
pub struct ListCommandInvocationsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    command_invocations: Option<Vec<CommandInvocation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
}
