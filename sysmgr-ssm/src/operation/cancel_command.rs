// Code generated by sysmgr-codegen from ssm.json. DO NOT EDIT.

use serde::{Deserialize, Serialize};
use sysmgr_model::{Entity, Operation};

/// Attempts to cancel a command.
#[derive(Debug, Clone, Copy, Default)]
pub struct CancelCommand;

impl Operation for CancelCommand {
    const NAME: &'static str = "CancelCommand";
    type Input = CancelCommandRequest;
    type Output = CancelCommandResult;
    type Error = CancelCommandError;
}

sysmgr_model::wire_enum! {
    /// Error codes CancelCommand is documented to return.
    pub enum CancelCommandError {
        /// The service failed while handling the request.
        InternalServerError = "InternalServerError",
        InvalidCommandId = "InvalidCommandId",
        /// The instance is not valid, not running, or not registered with the service.
        InvalidInstanceId = "InvalidInstanceId",
        /// The same instance id was given more than once.
        DuplicateInstanceId = "DuplicateInstanceId",
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
#[serde(rename_all = "PascalCase")]
pub struct CancelCommandRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(required, min_len = 36, max_len = 36)]
    command_id: Option<String>,
    /// Instances to cancel on. Leave absent to cancel everywhere.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 0, max_len = 50)]
    instance_ids: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
#[serde(rename_all = "PascalCase")]
pub struct CancelCommandResult {}
