// Code generated by sysmgr-codegen from ssm.json. DO NOT EDIT.

use serde::{Deserialize, Serialize};
use sysmgr_model::{Entity, Operation};

use crate::types::{Command, CommandFilter};

/// Lists the commands requested by users of the account.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListCommands;

impl Operation for ListCommands {
    const NAME: &'static str = "ListCommands";
    type Input = ListCommandsRequest;
    type Output = ListCommandsResult;
    type Error = ListCommandsError;
}

sysmgr_model::wire_enum! {
    /// Error codes ListCommands is documented to return.
    pub enum ListCommandsError {
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
pub struct ListCommandsRequest {
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
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
#[serde(rename_all = "PascalCase")]
pub struct ListCommandsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    commands: Option<Vec<Command>>,
    /// Token for the next page; absent on the last page.
    #[serde(skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
}
