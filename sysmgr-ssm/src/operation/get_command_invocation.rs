// Code generated by sysmgr-codegen from ssm.json. DO NOT EDIT.

use serde::{Deserialize, Serialize};
use sysmgr_model::{Entity, Operation};

use crate::types::{CloudWatchOutputConfig, CommandInvocationStatus};

/// Returns the result of a command on one instance, for one plugin.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetCommandInvocation;

impl Operation for GetCommandInvocation {
    const NAME: &'static str = "GetCommandInvocation";
    type Input = GetCommandInvocationRequest;
    type Output = GetCommandInvocationResult;
    type Error = GetCommandInvocationError;
}

sysmgr_model::wire_enum! {
    /// Error codes GetCommandInvocation is documented to return.
    pub enum GetCommandInvocationError {
        /// The service failed while handling the request.
        InternalServerError = "InternalServerError",
        InvalidCommandId = "InvalidCommandId",
        /// The instance is not valid, not running, or not registered with the service.
        InvalidInstanceId = "InvalidInstanceId",
        InvalidPluginName = "InvalidPluginName",
        InvocationDoesNotExist = "InvocationDoesNotExist",
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
#[serde(rename_all = "PascalCase")]
pub struct GetCommandInvocationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(required, min_len = 36, max_len = 36)]
    command_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(required, pattern = "(^i-(\\w{8}|\\w{17})$)|(^mi-\\w{17}$)")]
    instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 4)]
    plugin_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
#[serde(rename_all = "PascalCase")]
pub struct GetCommandInvocationResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 36, max_len = 36)]
    command_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(pattern = "(^i-(\\w{8}|\\w{17})$)|(^mi-\\w{17}$)")]
    instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 0, max_len = 100)]
    comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(pattern = "^[a-zA-Z0-9_\\-.]{3,128}$")]
    document_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(pattern = "([$]LATEST|[$]DEFAULT|^[1-9][0-9]*$)")]
    document_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 4)]
    plugin_name: Option<String>,
    /// Exit code of the plugin, or -1 when it has not run.
    #[serde(skip_serializing_if = "Option::is_none")]
    response_code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(
        pattern = "^([\\-]?\\d{4}(?!\\d{2}\\b))((-?)((0[1-9]|1[0-2])(\\3([12]\\d|0[1-9]|3[01]))?|W([0-4]\\d|5[0-2])(-?[1-7])?|(00[1-9]|0[1-9]\\d|[12]\\d{2}|3([0-5]\\d|6[1-6])))([T\\s]((([01]\\d|2[0-3])((:?)[0-5]\\d)?|24\\:?00)([\\.,]\\d(?!:))?)?(\\17[0-5]\\d([\\.,]\\d)?)?([zZ]|([\\+\\-])([01]\\d|2[0-3]):?([0-5]\\d)?)?)?)?$"
    )]
    execution_start_date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(
        pattern = "^([\\-]?\\d{4}(?!\\d{2}\\b))((-?)((0[1-9]|1[0-2])(\\3([12]\\d|0[1-9]|3[01]))?|W([0-4]\\d|5[0-2])(-?[1-7])?|(00[1-9]|0[1-9]\\d|[12]\\d{2}|3([0-5]\\d|6[1-6])))([T\\s]((([01]\\d|2[0-3])((:?)[0-5]\\d)?|24\\:?00)([\\.,]\\d(?!:))?)?(\\17[0-5]\\d([\\.,]\\d)?)?([zZ]|([\\+\\-])([01]\\d|2[0-3]):?([0-5]\\d)?)?)?)?$"
    )]
    execution_elapsed_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(
        pattern = "^([\\-]?\\d{4}(?!\\d{2}\\b))((-?)((0[1-9]|1[0-2])(\\3([12]\\d|0[1-9]|3[01]))?|W([0-4]\\d|5[0-2])(-?[1-7])?|(00[1-9]|0[1-9]\\d|[12]\\d{2}|3([0-5]\\d|6[1-6])))([T\\s]((([01]\\d|2[0-3])((:?)[0-5]\\d)?|24\\:?00)([\\.,]\\d(?!:))?)?(\\17[0-5]\\d([\\.,]\\d)?)?([zZ]|([\\+\\-])([01]\\d|2[0-3]):?([0-5]\\d)?)?)?)?$"
    )]
    execution_end_date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<CommandInvocationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 0, max_len = 100)]
    status_details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 0, max_len = 24000)]
    standard_output_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    standard_output_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 0, max_len = 8000)]
    standard_error_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    standard_error_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cloud_watch_output_config: Option<CloudWatchOutputConfig>,
}
